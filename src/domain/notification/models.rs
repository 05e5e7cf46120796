pub mod email;
pub mod slack;
