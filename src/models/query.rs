use serde::{Deserialize, Serialize};

/// Coarse price classification derived from a property's capacity and
/// facilities. The classifier itself lives in `services::features`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

impl BudgetTier {
    pub fn as_str(self) -> &'static str {
        match self {
            BudgetTier::Low => "low",
            BudgetTier::Medium => "medium",
            BudgetTier::High => "high",
        }
    }
}

/// Budget constraint on a recommendation request. `Any` accepts every
/// tier; the concrete variants require an exact tier match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetFilter {
    Any,
    Low,
    Medium,
    High,
}

impl Default for BudgetFilter {
    fn default() -> Self {
        BudgetFilter::Medium
    }
}

impl BudgetFilter {
    pub fn accepts(self, tier: BudgetTier) -> bool {
        match self.tier() {
            Some(wanted) => wanted == tier,
            None => true,
        }
    }

    pub fn tier(self) -> Option<BudgetTier> {
        match self {
            BudgetFilter::Any => None,
            BudgetFilter::Low => Some(BudgetTier::Low),
            BudgetFilter::Medium => Some(BudgetTier::Medium),
            BudgetFilter::High => Some(BudgetTier::High),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BudgetFilter::Any => "any",
            BudgetFilter::Low => "low",
            BudgetFilter::Medium => "medium",
            BudgetFilter::High => "high",
        }
    }
}

/// Requested trip pace. Unrecognised values fall back to `Moderate`, the
/// 8-hour day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TripPace {
    Relaxed,
    Moderate,
    Busy,
}

impl Default for TripPace {
    fn default() -> Self {
        TripPace::Moderate
    }
}

impl From<String> for TripPace {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "relaxed" => TripPace::Relaxed,
            "busy" => TripPace::Busy,
            _ => TripPace::Moderate,
        }
    }
}

impl TripPace {
    /// Activity hours available per itinerary day.
    pub fn daily_hours_budget(self) -> u32 {
        match self {
            TripPace::Relaxed => 6,
            TripPace::Moderate => 8,
            TripPace::Busy => 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendHotelsRequest {
    pub budget: BudgetFilter,
    pub interests: Vec<String>,
    pub facilities: Vec<String>,
    pub group_size: u32,
    pub duration: u32,
}

impl Default for RecommendHotelsRequest {
    fn default() -> Self {
        Self {
            budget: BudgetFilter::Medium,
            interests: Vec::new(),
            facilities: Vec::new(),
            group_size: 2,
            duration: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ItineraryRequest {
    pub duration: u32,
    pub budget: BudgetFilter,
    pub interests: Vec<String>,
    pub pace: TripPace,
}

impl Default for ItineraryRequest {
    fn default() -> Self {
        Self {
            duration: 5,
            budget: BudgetFilter::Medium,
            interests: Vec::new(),
            pace: TripPace::Moderate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseRequest {
    pub duration: u32,
    pub budget: BudgetTier,
    pub group_size: u32,
    pub activities: Vec<String>,
}

impl Default for ExpenseRequest {
    fn default() -> Self {
        Self {
            duration: 5,
            budget: BudgetTier::Medium,
            group_size: 2,
            activities: Vec::new(),
        }
    }
}
