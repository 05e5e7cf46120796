use crate::domain::notification::ports::Dispatcher;
use futures::future::BoxFuture;

/// Fire-and-forget execution on the tokio runtime. The spawned task outlives
/// the request that submitted it and nothing awaits its handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDispatcher;

impl Dispatcher for TokioDispatcher {
    fn dispatch(&self, job: BoxFuture<'static, ()>) {
        tokio::spawn(job);
    }
}
