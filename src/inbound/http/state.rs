use crate::domain::notification::ports::NotificationService;
use std::sync::Arc;

#[derive(Debug)]
pub struct RelayState<NS: NotificationService> {
    notification_service: NS,
}

#[derive(Debug)]
pub struct SharedRelayState<NS: NotificationService>(Arc<RelayState<NS>>);

impl<NS: NotificationService> SharedRelayState<NS> {
    pub fn new(notification_service: NS) -> Self {
        Self(Arc::new(RelayState {
            notification_service,
        }))
    }

    pub fn notification_service(&self) -> &NS {
        &self.0.notification_service
    }
}

impl<NS: NotificationService> Clone for SharedRelayState<NS> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
