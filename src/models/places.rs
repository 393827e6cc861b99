use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceCategory {
    Nature,
    Lake,
    Waterfall,
    Historical,
    Valley,
    Desert,
    Museum,
}

impl PlaceCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceCategory::Nature => "nature",
            PlaceCategory::Lake => "lake",
            PlaceCategory::Waterfall => "waterfall",
            PlaceCategory::Historical => "historical",
            PlaceCategory::Valley => "valley",
            PlaceCategory::Desert => "desert",
            PlaceCategory::Museum => "museum",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BestTime {
    Day,
    Sunset,
}

/// A hand-curated attraction around Skardu. The catalog is fixed for the
/// process lifetime and shared by the itinerary planner and the expense
/// estimator.
#[derive(Debug, Clone, Serialize)]
pub struct PointOfInterest {
    pub id: &'static str,
    pub name: &'static str,
    pub category: PlaceCategory,
    pub duration_hours: u32,
    /// Flat visit cost in PKR.
    pub cost: u64,
    pub best_time: BestTime,
}

pub const POPULAR_PLACES: [PointOfInterest; 10] = [
    PointOfInterest {
        id: "deosai_plains",
        name: "Deosai Plains",
        category: PlaceCategory::Nature,
        duration_hours: 6,
        cost: 2000,
        best_time: BestTime::Day,
    },
    PointOfInterest {
        id: "kachura_lake",
        name: "Kachura Lake",
        category: PlaceCategory::Lake,
        duration_hours: 4,
        cost: 1500,
        best_time: BestTime::Day,
    },
    PointOfInterest {
        id: "shangrila_lake",
        name: "Shangrila Lake",
        category: PlaceCategory::Lake,
        duration_hours: 3,
        cost: 1000,
        best_time: BestTime::Day,
    },
    PointOfInterest {
        id: "manthoka_waterfall",
        name: "Manthoka Waterfall",
        category: PlaceCategory::Waterfall,
        duration_hours: 5,
        cost: 1200,
        best_time: BestTime::Day,
    },
    PointOfInterest {
        id: "kharpocho_fort",
        name: "Kharpocho Fort",
        category: PlaceCategory::Historical,
        duration_hours: 2,
        cost: 500,
        best_time: BestTime::Day,
    },
    PointOfInterest {
        id: "basho_valley",
        name: "Basho Valley",
        category: PlaceCategory::Valley,
        duration_hours: 5,
        cost: 1800,
        best_time: BestTime::Day,
    },
    PointOfInterest {
        id: "shigar_valley",
        name: "Shigar Valley",
        category: PlaceCategory::Valley,
        duration_hours: 6,
        cost: 2200,
        best_time: BestTime::Day,
    },
    PointOfInterest {
        id: "khaplu_valley",
        name: "Khaplu Valley",
        category: PlaceCategory::Valley,
        duration_hours: 8,
        cost: 2500,
        best_time: BestTime::Day,
    },
    PointOfInterest {
        id: "katpana_desert",
        name: "Katpana Desert",
        category: PlaceCategory::Desert,
        duration_hours: 3,
        cost: 800,
        best_time: BestTime::Sunset,
    },
    PointOfInterest {
        id: "italian_k2_museum",
        name: "Italian K2 Museum",
        category: PlaceCategory::Museum,
        duration_hours: 2,
        cost: 300,
        best_time: BestTime::Day,
    },
];

/// Look up a point of interest by its id. Unknown ids are simply absent;
/// callers treat them as zero-cost rather than an error.
pub fn find_place(id: &str) -> Option<&'static PointOfInterest> {
    POPULAR_PLACES.iter().find(|place| place.id == id)
}
