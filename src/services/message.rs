use std::fmt::Write;

use crate::catalog::Catalog;
use crate::models::{BookingDraft, ContactDetails, RecommendationBooking};
use crate::services::pricing::{format_price, parse_options, total_price, PRICE_ON_REQUEST};

/// Booking request for a multi-guest draft. Contact values are passed through verbatim.
pub fn format_booking_message(
    business_name: &str,
    contact: &ContactDetails,
    draft: &BookingDraft,
) -> String {
    let mut details = String::new();
    for (i, guest) in draft.guests.iter().enumerate() {
        let _ = write!(
            details,
            "\nGuest {}: {} ({})",
            i + 1,
            guest.service_name,
            guest.duration
        );
    }

    let total = format_price(total_price(&draft.guests));

    format!(
        "Hello {business_name}, I would like to make a booking.\n\n\
         *Booking Details:*{details}\n\n\
         *Total Estimate:* {total}\n\n\
         *Contact Info:*\n\
         Name: {}\n\
         Date: {}\n\
         Time: {}\n\
         Location: {}",
        contact.name, contact.date, contact.time, contact.location
    )
}

/// Blank booking template, optionally naming a treatment.
pub fn format_inquiry_message(business_name: &str, service_name: Option<&str>) -> String {
    match service_name.filter(|s| !s.trim().is_empty()) {
        Some(service) => format!(
            "Hello {business_name}, I would like to book *{service}*.\n\n\
             Please find my details below:\n\
             Name: \n\
             Date: \n\
             Time: \n\
             Villa/Hotel Location: "
        ),
        None => format!(
            "Hello {business_name}, I would like to book a spa treatment.\n\n\
             Please find my details below:\n\
             Name: \n\
             Treatment: \n\
             Date: \n\
             Time: \n\
             Villa/Hotel Location: "
        ),
    }
}

/// Estimate for booking one treatment for several guests. Reads
/// [`PRICE_ON_REQUEST`] when `duration` is not an option of the service.
pub fn recommendation_estimate(catalog: &Catalog, service_id: &str, duration: &str, guests: u32) -> String {
    let guests = guests.max(1);
    catalog
        .get(service_id)
        .and_then(|record| {
            parse_options(record)
                .into_iter()
                .find(|o| o.duration == duration)
        })
        .map(|o| format_price(o.numeric_price.saturating_mul(u64::from(guests))))
        .unwrap_or_else(|| PRICE_ON_REQUEST.to_string())
}

/// Booking request sent after accepting the concierge's recommendation.
pub fn format_recommendation_message(
    business_name: &str,
    catalog: &Catalog,
    booking: &RecommendationBooking,
) -> String {
    let service_name = catalog
        .get(&booking.service_id)
        .map(|r| r.name.as_str())
        .unwrap_or(booking.service_id.as_str());
    let guests = booking.guests.max(1);
    let total = recommendation_estimate(catalog, &booking.service_id, &booking.duration, guests);

    format!(
        "Hello {business_name}, regarding your AI recommendation for *{service_name}*.\n\n\
         My Booking Request:\n\
         Name: {}\n\
         Guests: {guests}\n\
         Duration: {}\n\
         Total Estimate: {total}\n\
         Date: {}\n\
         Time: {}\n\
         Location: {}",
        booking.name, booking.duration, booking.date, booking.time, booking.location
    )
}
