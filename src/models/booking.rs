use serde::{Deserialize, Serialize};

use super::ServiceOption;

/// One guest's line item in a booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestSelection {
    pub service_id: String,
    pub service_name: String,
    pub duration: String,
    pub price: String,
    pub numeric_price: u64,
}

impl GuestSelection {
    pub fn from_option(service_id: &str, service_name: &str, option: Option<&ServiceOption>) -> Self {
        Self {
            service_id: service_id.to_string(),
            service_name: service_name.to_string(),
            duration: option.map(|o| o.duration.clone()).unwrap_or_default(),
            price: option.map(|o| o.price.clone()).unwrap_or_default(),
            numeric_price: option.map(|o| o.numeric_price).unwrap_or(0),
        }
    }

    /// A selection with no service chosen.
    pub fn is_empty(&self) -> bool {
        self.service_name.is_empty()
    }
}

/// The in-progress set of guest selections for one booking attempt.
///
/// Order is significant: position `i` is rendered as "Guest {i + 1}".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct BookingDraft {
    pub guests: Vec<GuestSelection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
}
