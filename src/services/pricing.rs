use crate::models::{GuestSelection, ServiceOption, ServiceRecord};

pub const CURRENCY_PREFIX: &str = "IDR";
pub const PRICE_ON_REQUEST: &str = "On Request";

/// Menu prices are written in thousands ("250k").
const PRICE_SCALE: u64 = 1000;

/// Expands a record's `/`-separated duration and price text into bookable options.
///
/// Never fails: a missing price tier becomes [`PRICE_ON_REQUEST`] priced at 0,
/// and a price without digits is also priced at 0.
pub fn parse_options(record: &ServiceRecord) -> Vec<ServiceOption> {
    if record.duration.trim().is_empty() {
        return Vec::new();
    }

    let prices: Vec<&str> = record.price.split('/').collect();
    let first_has_currency = prices
        .first()
        .is_some_and(|p| p.trim().starts_with(CURRENCY_PREFIX));

    record
        .duration
        .split('/')
        .enumerate()
        .map(|(idx, raw_duration)| {
            let duration = normalize_duration(raw_duration.trim());

            let price = match prices.get(idx).filter(|p| !p.is_empty()) {
                Some(p) => {
                    let p = p.trim();
                    if idx > 0 && first_has_currency && !p.starts_with(CURRENCY_PREFIX) {
                        format!("{CURRENCY_PREFIX} {p}")
                    } else {
                        p.to_string()
                    }
                }
                None => {
                    tracing::debug!(service = %record.id, tier = idx, "no price for duration tier");
                    PRICE_ON_REQUEST.to_string()
                }
            };

            let numeric_price = numeric_price(&price);
            let label = format!("{duration} - {price}");

            ServiceOption {
                duration,
                price,
                numeric_price,
                label,
            }
        })
        .collect()
}

fn normalize_duration(raw: &str) -> String {
    let lower = raw.to_lowercase();
    if lower.contains("min") || lower.contains("hr") {
        raw.to_string()
    } else {
        format!("{raw} mins")
    }
}

/// Digits of the price text, read as thousands of rupiah.
pub fn numeric_price(price: &str) -> u64 {
    let digits: String = price.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    match digits.parse::<u64>() {
        Ok(n) => n.saturating_mul(PRICE_SCALE),
        Err(e) => {
            tracing::warn!(price, error = %e, "price digits out of range, treating as 0");
            0
        }
    }
}

pub fn total_price(selections: &[GuestSelection]) -> u64 {
    selections
        .iter()
        .fold(0u64, |sum, s| sum.saturating_add(s.numeric_price))
}

/// Renders an amount as `IDR 1,250,000`.
pub fn format_price(amount: u64) -> String {
    format!("{CURRENCY_PREFIX} {}", group_thousands(amount))
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn service(duration: &str, price: &str) -> ServiceRecord {
        ServiceRecord {
            id: "test".to_string(),
            name: "Test Treatment".to_string(),
            description: String::new(),
            duration: duration.to_string(),
            price: price.to_string(),
            category: Category::Massage,
            image: String::new(),
        }
    }

    fn guest(numeric_price: u64) -> GuestSelection {
        GuestSelection {
            numeric_price,
            ..Default::default()
        }
    }

    #[test]
    fn test_three_tier_menu_entry() {
        let options = parse_options(&service("60 / 90 / 120 mins", "IDR 250k / 375k / 500k"));
        assert_eq!(options.len(), 3);

        assert_eq!(options[0].duration, "60 mins");
        assert_eq!(options[0].price, "IDR 250k");
        assert_eq!(options[0].numeric_price, 250_000);
        assert_eq!(options[0].label, "60 mins - IDR 250k");

        assert_eq!(options[1].duration, "90 mins");
        assert_eq!(options[1].price, "IDR 375k");
        assert_eq!(options[1].numeric_price, 375_000);

        assert_eq!(options[2].duration, "120 mins");
        assert_eq!(options[2].price, "IDR 500k");
        assert_eq!(options[2].numeric_price, 500_000);
    }

    #[test]
    fn test_two_tier_reparse_is_stable() {
        let record = service("30 / 60 mins", "IDR 200k / 250k");
        let first = parse_options(&record);
        let second = parse_options(&record);
        assert_eq!(first, second);
        let prices: Vec<u64> = first.iter().map(|o| o.numeric_price).collect();
        assert_eq!(prices, vec![200_000, 250_000]);
    }

    #[test]
    fn test_missing_price_tier_is_on_request() {
        let options = parse_options(&service("60 / 90 / 120 mins", "IDR 250k / 375k"));
        assert_eq!(options.len(), 3);
        assert_eq!(options[2].price, PRICE_ON_REQUEST);
        assert_eq!(options[2].numeric_price, 0);
        assert_eq!(options[2].label, "120 mins - On Request");
    }

    #[test]
    fn test_shorthand_price_inherits_currency() {
        let options = parse_options(&service("60 / 90", "IDR 250k /375k"));
        assert_eq!(options[1].price, "IDR 375k");
        assert_eq!(options[1].numeric_price, 375_000);
    }

    #[test]
    fn test_every_duration_gets_a_unit() {
        let options = parse_options(&service("30 / 1 hr / 45 Min / 2 HRS", "IDR 1k / 2k / 3k / 4k"));
        let durations: Vec<&str> = options.iter().map(|o| o.duration.as_str()).collect();
        assert_eq!(durations, vec!["30 mins", "1 hr", "45 Min", "2 HRS"]);
    }

    #[test]
    fn test_currency_not_propagated_when_first_lacks_it() {
        let options = parse_options(&service("60 / 90", "USD 20 / 30"));
        assert_eq!(options[1].price, "30");
        assert_eq!(options[1].numeric_price, 30_000);
    }

    #[test]
    fn test_grouped_thousands_in_price_text() {
        let options = parse_options(&service("60 / 90 / 120 mins", "IDR 500k / 750k / 1,000k"));
        assert_eq!(options[2].price, "IDR 1,000k");
        assert_eq!(options[2].numeric_price, 1_000_000);
    }

    #[test]
    fn test_price_without_digits_is_zero() {
        let options = parse_options(&service("60", "Free"));
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].numeric_price, 0);
    }

    #[test]
    fn test_empty_duration_yields_no_options() {
        assert!(parse_options(&service("", "IDR 250k")).is_empty());
        assert!(parse_options(&service("   ", "IDR 250k")).is_empty());
    }

    #[test]
    fn test_total_price() {
        assert_eq!(total_price(&[]), 0);
        assert_eq!(total_price(&[guest(250_000), guest(375_000)]), 625_000);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "IDR 0");
        assert_eq!(format_price(999), "IDR 999");
        assert_eq!(format_price(1_000), "IDR 1,000");
        assert_eq!(format_price(625_000), "IDR 625,000");
        assert_eq!(format_price(1_250_000), "IDR 1,250,000");
    }
}
