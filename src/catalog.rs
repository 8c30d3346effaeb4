use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

use crate::errors::AppError;
use crate::models::{Category, ServiceRecord};

pub const SERVICE_AREAS: &[&str] = &[
    "Seminyak",
    "Canggu",
    "Ubud",
    "Kuta",
    "Legian",
    "Jimbaran",
    "Nusa Dua",
    "Uluwatu",
    "Sanur",
    "All Bali Areas",
];

/// The treatment menu. Loaded once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ServiceRecord>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(records: Vec<ServiceRecord>) -> Result<Self, AppError> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if by_id.insert(record.id.clone(), idx).is_some() {
                return Err(AppError::Config(format!(
                    "duplicate service id in catalog: {}",
                    record.id
                )));
            }
        }
        Ok(Self { records, by_id })
    }

    pub fn from_json(s: &str) -> anyhow::Result<Self> {
        let records: Vec<ServiceRecord> =
            serde_json::from_str(s).context("failed to parse catalog JSON")?;
        Ok(Self::new(records)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn builtin() -> Self {
        let records = builtin_records();
        let by_id = records
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.id.clone(), idx))
            .collect();
        Self { records, by_id }
    }

    pub fn get(&self, id: &str) -> Option<&ServiceRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    pub fn find_by_name(&self, name: &str) -> Option<&ServiceRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn first(&self) -> Option<&ServiceRecord> {
        self.records.first()
    }

    pub fn all(&self) -> &[ServiceRecord] {
        &self.records
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &ServiceRecord> {
        self.records.iter().filter(move |r| r.category == category)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn record(
    id: &str,
    name: &str,
    description: &str,
    duration: &str,
    price: &str,
    category: Category,
    image: &str,
) -> ServiceRecord {
    ServiceRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
        price: price.to_string(),
        category,
        image: image.to_string(),
    }
}

fn builtin_records() -> Vec<ServiceRecord> {
    vec![
        record(
            "balinese-massage",
            "Balinese Massage",
            "A traditional full-body massage that utilizes long, rhythmic strokes and gentle kneading to release tension and improve circulation. Benefits: Reduces stress, improves blood flow, and enhances relaxation.",
            "60 / 90 / 120 mins",
            "IDR 250k / 375k / 500k",
            Category::Massage,
            "https://images.unsplash.com/photo-1544161515-4ab6ce6db874?q=80&w=800&auto=format&fit=crop",
        ),
        record(
            "aromatherapy-massage",
            "Aromatherapy Massage",
            "A gentle massage using essential oils selected to suit your mood and body condition. Benefits: Emotional balance, deep relaxation, and detoxification.",
            "60 / 90 / 120 mins",
            "IDR 300k / 450k / 600k",
            Category::Massage,
            "https://images.unsplash.com/photo-1512290923902-8a9f81dc236c?q=80&w=800&auto=format&fit=crop",
        ),
        record(
            "deep-tissue-massage",
            "Deep Tissue Massage",
            "Focused pressure targeting deep layers of muscle and fascia to alleviate chronic pain and tightness. Benefits: Relieves muscle stiffness, reduces inflammation, and improves mobility.",
            "60 / 90 / 120 mins",
            "IDR 300k / 450k / 600k",
            Category::Massage,
            "https://images.unsplash.com/photo-1600334089648-b0d9d3028eb2?q=80&w=800&auto=format&fit=crop",
        ),
        record(
            "hot-stone-massage",
            "Hot Stone Massage",
            "Heated basalt stones are used to penetrate warmth into tired muscles while gently massaging the body. Benefits: Deep muscle relaxation, improved sleep, and emotional calming.",
            "60 / 90 / 120 mins",
            "IDR 350k / 525k / 700k",
            Category::Massage,
            "https://images.unsplash.com/photo-1532453288672-3a27e9be9efd?q=80&w=800&auto=format&fit=crop",
        ),
        record(
            "reflexology-foot-massage",
            "Reflexology Foot Massage",
            "A therapeutic foot massage focusing on pressure points connected to different organs. Benefits: Enhances organ function, promotes balance, and relieves foot pain.",
            "60 / 90 / 120 mins",
            "IDR 250k / 375k / 500k",
            Category::Massage,
            "https://images.unsplash.com/photo-1519415387722-a1c3bbef716c?q=80&w=800&auto=format&fit=crop",
        ),
        record(
            "thai-massage",
            "Thai Massage",
            "A traditional dry massage using stretching, pressure, and yoga-like movements. Benefits: Improves flexibility, energy flow, and posture.",
            "60 / 90 / 120 mins",
            "IDR 300k / 450k / 600k",
            Category::Massage,
            "https://images.unsplash.com/photo-1596178065849-d7547146e271?q=80&w=800&auto=format&fit=crop",
        ),
        record(
            "lomi-lomi-massage",
            "Lomi-Lomi (Hawaiian Massage)",
            "Experience fluid, wave-like strokes using forearms for a deeply nurturing experience. Benefits: Emotional healing, lymphatic drainage, and spiritual balance.",
            "60 / 90 / 120 mins",
            "IDR 300k / 450k / 600k",
            Category::Massage,
            "https://images.unsplash.com/photo-1591343395082-e21b106203d3?q=80&w=800&auto=format&fit=crop",
        ),
        record(
            "four-hands-massage",
            "Four Hands Massage",
            "Two therapists working in perfect harmony to double the relaxation and luxury. Benefits: Full sensory overload, deepened muscle relief, pure indulgence.",
            "60 / 90 / 120 mins",
            "IDR 500k / 750k / 950k",
            Category::Massage,
            "https://images.unsplash.com/photo-1570172619644-dfd03ed5d881?q=80&w=800&auto=format&fit=crop",
        ),
        record(
            "face-acupressure-massage",
            "Face Acupressure Massage",
            "Stimulates acupressure points on the face to promote skin rejuvenation and energy flow. Benefits: Lifts facial muscles, improves glow, and relieves sinus/headache tension.",
            "30 / 60 mins",
            "IDR 200k / 250k",
            Category::Beauty,
            "https://images.unsplash.com/photo-1515377905703-c4788e51af15?q=80&w=800&auto=format&fit=crop",
        ),
        record(
            "head-neck-shoulder-massage",
            "Head, Neck & Shoulder Massage",
            "A targeted massage focusing on tension areas around the head, neck, and shoulders. Ideal for desk workers or those with migraines. Benefits: Relieves headaches, reduces upper-body tension, boosts mental clarity, improves sleep.",
            "30 / 60 mins",
            "IDR 200k / 300k",
            Category::Massage,
            "https://images.unsplash.com/photo-1531303435785-3853fb035e05?q=80&w=800&auto=format&fit=crop",
        ),
        record(
            "couple-massage",
            "Couple Massage - Home Service",
            "A relaxing side-by-side Balinese Massage for two people in your villa or home. Price includes 2 therapists, travel, oils, and equipment. Benefits: Shared relaxation, emotional connection, muscle relief, and total convenience.",
            "60 / 90 / 120 mins",
            "IDR 500k / 750k / 1,000k",
            Category::Packages,
            "https://images.unsplash.com/photo-1583416750470-965b2707b355?q=80&w=800&auto=format&fit=crop",
        ),
        record(
            "customised-spa-package",
            "Customised Spa Package",
            "Design your own spa journey tailored to your needs by choosing any combination of treatments (min 2 services). Examples: Balinese Massage + Face Massage. Benefits: Pricing is per person.",
            "90 / 120 mins",
            "IDR 450k / 625k",
            Category::Packages,
            "https://images.unsplash.com/photo-1552693673-1bf958298935?q=80&w=800&auto=format&fit=crop",
        ),
    ]
}
