use serde::{Deserialize, Serialize};

use crate::models::places::{BestTime, PlaceCategory};
use crate::models::query::BudgetFilter;
use crate::models::recommendation::HotelRecommendation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaySlot {
    Morning,
    Afternoon,
}

/// Coarse label for how packed a single day is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayPace {
    Moderate,
    Busy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedActivity {
    pub time: DaySlot,
    pub activity: String,
    pub duration_hours: u32,
    pub cost: u64,
    pub category: PlaceCategory,
    pub best_time: BestTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub activities: Vec<PlannedActivity>,
    pub total_hours: u32,
    pub total_cost: u64,
    pub pace: DayPace,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingSuggestions {
    pub essentials: Vec<String>,
    pub electronics: Vec<String>,
    pub documents: Vec<String>,
}

/// Full multi-day plan: the packed days plus the auxiliary hotel
/// shortlist and packing advice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlan {
    pub duration_days: u32,
    pub budget_level: BudgetFilter,
    pub total_estimated_cost: u64,
    pub daily_itinerary: Vec<ItineraryDay>,
    pub hotel_recommendations: Vec<HotelRecommendation>,
    pub packing_suggestions: PackingSuggestions,
}
