use serde::{Deserialize, Serialize};

use crate::models::property::Property;
use crate::models::query::BudgetTier;

const MAX_RATING: f64 = 10.0;

/// Structured summary of a property, computed once per catalog entry at
/// engine construction and cached for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyFeatures {
    pub budget_category: BudgetTier,
    pub facilities: Vec<String>,
    pub interests: Vec<String>,
    pub location: (f64, f64),
    pub rating_score: f64,
}

pub fn features_for(property: &Property) -> PropertyFeatures {
    PropertyFeatures {
        budget_category: budget_tier_for(property),
        facilities: facility_names_for(property),
        interests: interest_names_for(property),
        location: (property.location.latitude, property.location.longitude),
        rating_score: rating_score_for(property),
    }
}

/// Bag-of-tokens text representation of a property, used to fit the
/// similarity index. Token order is fixed (attribute group order, then
/// encounter order within a group) so vectorization is reproducible.
pub fn tokens_for(property: &Property) -> Vec<String> {
    let mut tokens = Vec::new();

    if property.kind.hotel {
        tokens.push("hotel".to_string());
    }
    if property.kind.guest_house {
        tokens.push("guesthouse".to_string());
    }

    let facilities = &property.facilities;
    if facilities.wifi_internet {
        tokens.push("wifi".to_string());
    }
    if facilities.guide_services {
        tokens.push("guide".to_string());
    }
    if facilities.transport_arrangement {
        tokens.push("transport".to_string());
    }
    if facilities.restaurant_dining {
        tokens.push("restaurant".to_string());
    }
    if facilities.laundry_services {
        tokens.push("laundry".to_string());
    }
    if property.has_own_transport {
        tokens.push("own_transport".to_string());
    }

    if property.construction_materials.organic {
        tokens.push("organic".to_string());
    }
    if property.construction_materials.wood {
        tokens.push("wooden".to_string());
    }

    for (interest, liked) in &property.mostly_tourist_interests {
        if *liked {
            tokens.push(interest.clone());
        }
    }

    for place in &property.most_popular_places {
        tokens.push(place.to_lowercase().replace(' ', "_"));
    }

    // "true" shows up as a placeholder in the source survey data, not a meal.
    for meal in &property.interesting_meals {
        if !meal.eq_ignore_ascii_case("true") {
            tokens.push(meal.to_lowercase());
        }
    }

    tokens
}

/// Rule-based budget classifier. These thresholds are the single budget
/// classifier used across scoring, filtering and cost estimation, so the
/// exact point values matter.
pub fn budget_tier_for(property: &Property) -> BudgetTier {
    let mut score = 0u32;

    let rooms = property.facilities.rooms.number_of_rooms;
    if rooms > 20 {
        score += 2;
    } else if rooms > 10 {
        score += 1;
    }

    if property.facilities.wifi_internet {
        score += 1;
    }
    if property.facilities.restaurant_dining {
        score += 1;
    }
    if property.facilities.laundry_services {
        score += 1;
    }
    if property.has_own_transport {
        score += 2;
    }

    if score >= 5 {
        BudgetTier::High
    } else if score >= 3 {
        BudgetTier::Medium
    } else {
        BudgetTier::Low
    }
}

/// Additive rating score in [0, 10]: facility bonuses on a 5.0 base plus
/// a popularity bump from recorded tourist volume.
pub fn rating_score_for(property: &Property) -> f64 {
    let mut score: f64 = 5.0;

    if property.facilities.wifi_internet {
        score += 0.5;
    }
    if property.facilities.guide_services {
        score += 0.3;
    }
    if property.facilities.restaurant_dining {
        score += 0.4;
    }
    if property.has_own_transport {
        score += 0.6;
    }

    let tourists = property.tourist_demographics.total_tourists_recorded;
    if tourists > 5000 {
        score += 1.0;
    } else if tourists > 2000 {
        score += 0.5;
    }

    score.min(MAX_RATING)
}

pub fn facility_names_for(property: &Property) -> Vec<String> {
    let mut facilities = Vec::new();

    if property.facilities.wifi_internet {
        facilities.push("wifi".to_string());
    }
    if property.facilities.guide_services {
        facilities.push("guide".to_string());
    }
    if property.facilities.transport_arrangement {
        facilities.push("transport".to_string());
    }
    if property.facilities.restaurant_dining {
        facilities.push("restaurant".to_string());
    }
    if property.facilities.laundry_services {
        facilities.push("laundry".to_string());
    }
    if property.has_own_transport {
        facilities.push("own_transport".to_string());
    }

    facilities
}

pub fn interest_names_for(property: &Property) -> Vec<String> {
    property
        .mostly_tourist_interests
        .iter()
        .filter(|(_, liked)| **liked)
        .map(|(interest, _)| interest.clone())
        .collect()
}
