use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Massage,
    Body,
    Beauty,
    Packages,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Massage => "massage",
            Category::Body => "body",
            Category::Beauty => "beauty",
            Category::Packages => "packages",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "massage" => Some(Category::Massage),
            "body" => Some(Category::Body),
            "beauty" => Some(Category::Beauty),
            "packages" => Some(Category::Packages),
            _ => None,
        }
    }
}

/// One treatment on the menu, exactly as authored.
///
/// `duration` and `price` are free text holding `/`-separated tiers, e.g.
/// `"60 / 90 / 120 mins"` and `"IDR 250k / 375k / 500k"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration: String,
    pub price: String,
    pub category: Category,
    #[serde(default)]
    pub image: String,
}

/// A bookable (duration, price) tier derived from a [`ServiceRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceOption {
    pub duration: String,
    pub price: String,
    /// Price in whole rupiah.
    pub numeric_price: u64,
    pub label: String,
}
