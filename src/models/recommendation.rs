use serde::{Deserialize, Serialize};

use crate::models::property::Property;
use crate::models::query::BudgetTier;

/// Estimated cost of a hotel stay, all amounts in whole PKR.
/// Food scales with the party size; the hotel bill and the (shared
/// vehicle) transport cost do not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StayCost {
    pub hotel: u64,
    pub food: u64,
    pub transport: u64,
    pub total: u64,
    pub per_person: u64,
}

/// One ranked recommendation. Scores are rounded to three decimals; the
/// similarity and suitability components are kept alongside the combined
/// score so callers can explain the ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelRecommendation {
    pub hotel: Property,
    pub score: f64,
    pub similarity_score: f64,
    pub suitability_score: f64,
    pub budget_category: BudgetTier,
    pub cost_estimate: StayCost,
    pub match_reasons: Vec<String>,
}
