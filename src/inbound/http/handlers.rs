pub mod health_check;
pub mod home;
pub mod send_email;
pub mod slack;

pub use health_check::health_check;
pub use home::home;
pub use send_email::send_email;
pub use slack::slack;
