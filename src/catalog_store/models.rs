//! Catalog data models

use serde::{Deserialize, Serialize};

/// Dosage form of a medicine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicineType {
    Tablet,
    Capsule,
    Syrup,
    Injection,
    Cream,
    Drops,
}

/// A medicine as listed in the catalog. Reference data, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: String,
    pub name: String,
    /// Active ingredients, e.g. "Paracetamol 650mg".
    pub composition: String,
    /// Currency-agnostic unit price.
    pub price: f64,
    pub availability: String,
    pub medicine_type: MedicineType,
    pub description: Option<String>,
    pub usage: Option<String>,
    pub side_effects: Vec<String>,
    pub manufacturer: Option<String>,
    /// Higher means more frequently bought. Missing scores rank as 0.
    pub popularity_score: Option<u32>,
}

impl Medicine {
    pub fn popularity(&self) -> u32 {
        self.popularity_score.unwrap_or(0)
    }

    /// First word of the composition, lowercased. Used to group medicines
    /// that share the same active ingredient.
    pub fn active_ingredient(&self) -> Option<String> {
        self.composition
            .split(|c: char| c.is_whitespace() || c == ',')
            .find(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PharmacyType {
    Generic,
    Chain,
    Government,
}

impl std::str::FromStr for PharmacyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "generic" => Ok(PharmacyType::Generic),
            "chain" => Ok(PharmacyType::Chain),
            "government" => Ok(PharmacyType::Government),
            other => Err(format!("Unknown pharmacy type: {}", other)),
        }
    }
}

/// Filter applied to the pharmacy directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PharmacyFilter {
    #[default]
    All,
    Only(PharmacyType),
}

impl PharmacyFilter {
    pub fn matches(&self, pharmacy_type: PharmacyType) -> bool {
        match self {
            PharmacyFilter::All => true,
            PharmacyFilter::Only(t) => *t == pharmacy_type,
        }
    }
}

impl std::str::FromStr for PharmacyFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(PharmacyFilter::All);
        }
        s.parse::<PharmacyType>().map(PharmacyFilter::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pharmacy {
    pub id: String,
    pub name: String,
    pub location: String,
    pub distance_km: f64,
    /// Reference price of a standard basket, used for comparison cards.
    pub price: f64,
    pub pharmacy_type: PharmacyType,
    pub opening_hours: String,
    pub phone: String,
    /// Ids of the medicines this pharmacy lists.
    pub stock: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Physician {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub experience_years: u32,
    pub availability: String,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFeature {
    pub included: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub name: String,
    pub monthly_price: u32,
    pub description: String,
    pub features: Vec<PlanFeature>,
    pub recommended: bool,
}
