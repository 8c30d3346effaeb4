use crate::catalog::Catalog;
use crate::models::{BookingDraft, GuestSelection, ServiceRecord};
use crate::services::pricing::{parse_options, total_price};

fn first_option_selection(record: &ServiceRecord) -> GuestSelection {
    let options = parse_options(record);
    GuestSelection::from_option(&record.id, &record.name, options.first())
}

impl BookingDraft {
    /// A draft holding one guest booked for `record`'s first option.
    pub fn seeded(record: &ServiceRecord) -> Self {
        Self {
            guests: vec![first_option_selection(record)],
        }
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    pub fn total(&self) -> u64 {
        total_price(&self.guests)
    }

    /// Appends a guest booked for the catalog's first service and first option.
    /// No-op on an empty catalog.
    pub fn add_guest(&mut self, catalog: &Catalog) -> bool {
        let Some(record) = catalog.first() else {
            tracing::warn!("cannot add guest: catalog is empty");
            return false;
        };
        self.guests.push(first_option_selection(record));
        true
    }

    /// Removes the guest at `index`. The last remaining guest is never removed.
    pub fn remove_guest(&mut self, index: usize) -> bool {
        if self.guests.len() <= 1 || index >= self.guests.len() {
            return false;
        }
        self.guests.remove(index);
        true
    }

    /// Points the guest at `index` to another service, resetting duration and
    /// price to that service's first option. An unknown id clears the selection.
    pub fn set_service(&mut self, catalog: &Catalog, index: usize, service_id: &str) -> bool {
        let Some(guest) = self.guests.get_mut(index) else {
            return false;
        };
        *guest = match catalog.get(service_id) {
            Some(record) => first_option_selection(record),
            None => {
                tracing::debug!(service_id, index, "unknown service, clearing guest selection");
                GuestSelection::default()
            }
        };
        true
    }

    /// Changes the duration of the guest at `index`; price follows the chosen
    /// option. Durations that are not options of the guest's service are ignored.
    pub fn set_duration(&mut self, catalog: &Catalog, index: usize, duration: &str) -> bool {
        let Some(guest) = self.guests.get_mut(index) else {
            return false;
        };
        let Some(record) = catalog.get(&guest.service_id) else {
            return false;
        };
        let Some(option) = parse_options(record)
            .into_iter()
            .find(|o| o.duration == duration)
        else {
            tracing::debug!(service_id = %record.id, duration, "duration is not an option of service");
            return false;
        };

        guest.duration = option.duration;
        guest.price = option.price;
        guest.numeric_price = option.numeric_price;
        true
    }

    /// Rebuilds every guest from the catalog so that names and prices match
    /// the current menu. A duration that is no longer offered falls back to
    /// the service's first option; an unknown service is cleared.
    pub fn repriced(&self, catalog: &Catalog) -> Self {
        let mut draft = Self {
            guests: vec![GuestSelection::default(); self.guests.len()],
        };
        for (idx, guest) in self.guests.iter().enumerate() {
            draft.set_service(catalog, idx, &guest.service_id);
            if !draft.set_duration(catalog, idx, &guest.duration) && !draft.guests[idx].is_empty() {
                tracing::debug!(
                    service_id = %guest.service_id,
                    requested = %guest.duration,
                    used = %draft.guests[idx].duration,
                    "duration not offered, using first option"
                );
            }
        }
        draft
    }

    /// Positions whose duration differs from the one in `posted`.
    pub fn adjusted_from(&self, posted: &BookingDraft) -> Vec<usize> {
        self.guests
            .iter()
            .zip(&posted.guests)
            .enumerate()
            .filter(|(_, (now, before))| now.duration != before.duration)
            .map(|(idx, _)| idx)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_for(catalog: &Catalog, id: &str) -> BookingDraft {
        BookingDraft::seeded(catalog.get(id).unwrap())
    }

    #[test]
    fn test_seeded_draft_uses_first_option() {
        let catalog = Catalog::builtin();
        let draft = draft_for(&catalog, "hot-stone-massage");
        assert_eq!(draft.len(), 1);
        let guest = &draft.guests[0];
        assert_eq!(guest.service_name, "Hot Stone Massage");
        assert_eq!(guest.duration, "60 mins");
        assert_eq!(guest.price, "IDR 350k");
        assert_eq!(guest.numeric_price, 350_000);
    }

    #[test]
    fn test_add_guest_defaults_to_first_catalog_service() {
        let catalog = Catalog::builtin();
        let mut draft = draft_for(&catalog, "thai-massage");
        assert!(draft.add_guest(&catalog));
        assert_eq!(draft.len(), 2);
        assert_eq!(draft.guests[1].service_id, "balinese-massage");
        assert_eq!(draft.guests[1].duration, "60 mins");
        assert_eq!(draft.total(), 300_000 + 250_000);
    }

    #[test]
    fn test_add_guest_to_empty_draft() {
        let catalog = Catalog::builtin();
        let mut draft = BookingDraft::default();
        assert!(draft.is_empty());
        draft.add_guest(&catalog);
        assert_eq!(draft.len(), 1);
    }

    #[test]
    fn test_add_guest_with_empty_catalog_is_noop() {
        let catalog = Catalog::new(vec![]).unwrap();
        let mut draft = BookingDraft::default();
        assert!(!draft.add_guest(&catalog));
        assert!(draft.is_empty());
    }

    #[test]
    fn test_remove_last_guest_is_noop() {
        let catalog = Catalog::builtin();
        let mut draft = draft_for(&catalog, "balinese-massage");
        let before = draft.clone();
        assert!(!draft.remove_guest(0));
        assert_eq!(draft, before);
    }

    #[test]
    fn test_remove_guest() {
        let catalog = Catalog::builtin();
        let mut draft = draft_for(&catalog, "thai-massage");
        draft.add_guest(&catalog);
        assert!(draft.remove_guest(0));
        assert_eq!(draft.len(), 1);
        assert_eq!(draft.guests[0].service_id, "balinese-massage");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let catalog = Catalog::builtin();
        let mut draft = draft_for(&catalog, "thai-massage");
        draft.add_guest(&catalog);
        assert!(!draft.remove_guest(5));
        assert_eq!(draft.len(), 2);
    }

    #[test]
    fn test_set_service_resets_to_first_option() {
        let catalog = Catalog::builtin();
        let mut draft = draft_for(&catalog, "balinese-massage");
        draft.set_duration(&catalog, 0, "120 mins");
        assert!(draft.set_service(&catalog, 0, "face-acupressure-massage"));
        let guest = &draft.guests[0];
        assert_eq!(guest.service_id, "face-acupressure-massage");
        assert_eq!(guest.service_name, "Face Acupressure Massage");
        assert_eq!(guest.duration, "30 mins");
        assert_eq!(guest.numeric_price, 200_000);
    }

    #[test]
    fn test_set_unknown_service_clears_selection() {
        let catalog = Catalog::builtin();
        let mut draft = draft_for(&catalog, "balinese-massage");
        assert!(draft.set_service(&catalog, 0, "does-not-exist"));
        let guest = &draft.guests[0];
        assert!(guest.is_empty());
        assert_eq!(guest.duration, "");
        assert_eq!(guest.price, "");
        assert_eq!(guest.numeric_price, 0);
    }

    #[test]
    fn test_set_duration_updates_price() {
        let catalog = Catalog::builtin();
        let mut draft = draft_for(&catalog, "balinese-massage");
        assert!(draft.set_duration(&catalog, 0, "90 mins"));
        assert_eq!(draft.guests[0].duration, "90 mins");
        assert_eq!(draft.guests[0].price, "IDR 375k");
        assert_eq!(draft.guests[0].numeric_price, 375_000);
    }

    #[test]
    fn test_set_unknown_duration_is_ignored() {
        let catalog = Catalog::builtin();
        let mut draft = draft_for(&catalog, "balinese-massage");
        let before = draft.clone();
        assert!(!draft.set_duration(&catalog, 0, "45 mins"));
        assert_eq!(draft, before);
    }

    #[test]
    fn test_set_duration_on_cleared_selection_is_ignored() {
        let catalog = Catalog::builtin();
        let mut draft = draft_for(&catalog, "balinese-massage");
        draft.set_service(&catalog, 0, "nope");
        assert!(!draft.set_duration(&catalog, 0, "60 mins"));
        assert!(draft.guests[0].is_empty());
    }

    #[test]
    fn test_repriced_ignores_client_prices() {
        let catalog = Catalog::builtin();
        let posted = BookingDraft {
            guests: vec![
                GuestSelection {
                    service_id: "balinese-massage".to_string(),
                    service_name: "Cheap Massage".to_string(),
                    duration: "90 mins".to_string(),
                    price: "IDR 1k".to_string(),
                    numeric_price: 1_000,
                },
                GuestSelection {
                    service_id: "thai-massage".to_string(),
                    duration: "15 mins".to_string(),
                    ..Default::default()
                },
                GuestSelection {
                    service_id: "gone".to_string(),
                    service_name: "Retired Treatment".to_string(),
                    ..Default::default()
                },
            ],
        };
        let draft = posted.repriced(&catalog);
        assert_eq!(draft.guests[0].service_name, "Balinese Massage");
        assert_eq!(draft.guests[0].numeric_price, 375_000);
        assert_eq!(draft.guests[1].duration, "60 mins");
        assert_eq!(draft.guests[1].numeric_price, 300_000);
        assert!(draft.guests[2].is_empty());
        assert_eq!(draft.total(), 675_000);
    }

    #[test]
    fn test_adjusted_from_reports_changed_durations() {
        let catalog = Catalog::builtin();
        let posted = BookingDraft {
            guests: vec![
                GuestSelection {
                    service_id: "balinese-massage".to_string(),
                    duration: "90 mins".to_string(),
                    ..Default::default()
                },
                GuestSelection {
                    service_id: "thai-massage".to_string(),
                    duration: "15 mins".to_string(),
                    ..Default::default()
                },
            ],
        };
        let draft = posted.repriced(&catalog);
        assert_eq!(draft.adjusted_from(&posted), vec![1]);
        assert_eq!(draft.guests[1].duration, "60 mins");
    }
}
