pub mod ai;
pub mod booking;
pub mod message;
pub mod messaging;
pub mod pricing;
