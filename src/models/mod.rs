pub mod booking;
pub mod recommendation;
pub mod service;

pub use booking::{BookingDraft, ContactDetails, GuestSelection};
pub use recommendation::{ChatReply, RecommendationBooking, ServiceRecommendation};
pub use service::{Category, ServiceOption, ServiceRecord};
