use serde::{Deserialize, Serialize};

use crate::models::property::{Catalog, Property};
use crate::models::query::RecommendHotelsRequest;
use crate::models::recommendation::HotelRecommendation;
use crate::services::expenses::stay_cost;
use crate::services::features::{features_for, tokens_for, PropertyFeatures};
use crate::services::similarity::SimilarityIndex;

/// How many neighbours to pull from the index before filtering.
const NEIGHBOR_COUNT: usize = 10;
/// Result cap after ranking.
const MAX_RECOMMENDATIONS: usize = 8;

/// Blend and suitability weights. The defaults are empirical constants
/// carried over from the production tuning; they can be overridden per
/// deployment but should not be re-derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationWeights {
    /// Weight of the vector-similarity component in the combined score
    pub similarity_weight: f64,
    /// Weight of the rule-based suitability component
    pub suitability_weight: f64,
    /// Suitability floor before any matching credit
    pub suitability_base: f64,
    /// Credit for the fraction of requested interests matched
    pub interest_weight: f64,
    /// Credit for the fraction of requested facilities matched
    pub facility_weight: f64,
    /// Bonus when the property can room the whole party
    pub capacity_bonus: f64,
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            similarity_weight: 0.6,
            suitability_weight: 0.4,
            suitability_base: 0.5,
            interest_weight: 0.3,
            facility_weight: 0.2,
            capacity_bonus: 0.1,
        }
    }
}

impl RecommendationWeights {
    /// Create weights from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            similarity_weight: std::env::var("RECOMMEND_SIMILARITY_WEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.similarity_weight),
            suitability_weight: std::env::var("RECOMMEND_SUITABILITY_WEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.suitability_weight),
            suitability_base: std::env::var("RECOMMEND_SUITABILITY_BASE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.suitability_base),
            interest_weight: std::env::var("RECOMMEND_INTEREST_WEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.interest_weight),
            facility_weight: std::env::var("RECOMMEND_FACILITY_WEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.facility_weight),
            capacity_bonus: std::env::var("RECOMMEND_CAPACITY_BONUS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.capacity_bonus),
        }
    }
}

/// Hotel recommendation engine: the fitted similarity index plus the
/// cached per-property feature summaries. Everything is computed at
/// construction; `recommend` is a pure read.
pub struct Recommender {
    catalog: Catalog,
    features: Vec<PropertyFeatures>,
    index: SimilarityIndex,
    weights: RecommendationWeights,
}

impl Recommender {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_weights(catalog, RecommendationWeights::from_env())
    }

    pub fn with_weights(catalog: Catalog, weights: RecommendationWeights) -> Self {
        let documents: Vec<Vec<String>> = catalog.iter().map(tokens_for).collect();
        let features: Vec<PropertyFeatures> = catalog.iter().map(features_for).collect();
        let index = SimilarityIndex::fit(&documents);

        log::info!(
            "recommender fitted: {} properties, {} vocabulary terms",
            catalog.len(),
            index.vocabulary_size()
        );

        Self {
            catalog,
            features,
            index,
            weights,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn features(&self) -> &[PropertyFeatures] {
        &self.features
    }

    /// Ranked, cost-annotated recommendations for the request, at most
    /// eight. An empty result is a valid outcome, not a failure: it means
    /// no neighbour survived the budget filter (or the catalog is empty).
    pub fn recommend(&self, request: &RecommendHotelsRequest) -> Vec<HotelRecommendation> {
        let mut query_tokens: Vec<String> = request
            .interests
            .iter()
            .chain(request.facilities.iter())
            .cloned()
            .collect();
        query_tokens.push(request.budget.as_str().to_string());

        let mut recommendations = Vec::new();
        for (index, distance) in self.index.nearest(&query_tokens, NEIGHBOR_COUNT) {
            let (property, features) = match (self.catalog.get(index), self.features.get(index)) {
                (Some(property), Some(features)) => (property, features),
                _ => continue,
            };

            if !request.budget.accepts(features.budget_category) {
                continue;
            }

            // Cosine distance over non-negative TF-IDF vectors never
            // exceeds 1, but clamp anyway so the combined score stays in
            // range whatever the metric does.
            let similarity = (1.0 - distance).clamp(0.0, 1.0);
            let suitability = self.suitability_score(property, features, request);
            let combined = similarity * self.weights.similarity_weight
                + suitability * self.weights.suitability_weight;

            recommendations.push(HotelRecommendation {
                hotel: property.clone(),
                score: round3(combined),
                similarity_score: round3(similarity),
                suitability_score: round3(suitability),
                budget_category: features.budget_category,
                cost_estimate: stay_cost(
                    features.budget_category,
                    request.duration,
                    request.group_size,
                ),
                match_reasons: match_reasons(property, features, request),
            });
        }

        // Stable sort keeps neighbour order for equal scores.
        recommendations.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        recommendations.truncate(MAX_RECOMMENDATIONS);
        recommendations
    }

    /// Rule-based match quality in [base, 1.0]: fraction of requested
    /// interests and facilities the property covers, plus a capacity
    /// bonus. Empty request lists contribute nothing.
    fn suitability_score(
        &self,
        property: &Property,
        features: &PropertyFeatures,
        request: &RecommendHotelsRequest,
    ) -> f64 {
        let mut score = self.weights.suitability_base;

        if !request.interests.is_empty() {
            let matched = request
                .interests
                .iter()
                .filter(|interest| {
                    property
                        .mostly_tourist_interests
                        .get(*interest)
                        .copied()
                        .unwrap_or(false)
                })
                .count();
            score += matched as f64 / request.interests.len() as f64 * self.weights.interest_weight;
        }

        if !request.facilities.is_empty() {
            let matched = request
                .facilities
                .iter()
                .filter(|facility| features.facilities.contains(*facility))
                .count();
            score += matched as f64 / request.facilities.len() as f64 * self.weights.facility_weight;
        }

        if property.facilities.rooms.number_of_rooms >= request.group_size {
            score += self.weights.capacity_bonus;
        }

        score.min(1.0)
    }
}

/// Human-readable reasons why a property matched the request.
fn match_reasons(
    property: &Property,
    features: &PropertyFeatures,
    request: &RecommendHotelsRequest,
) -> Vec<String> {
    let mut reasons = Vec::new();

    let matched_interests: Vec<&str> = request
        .interests
        .iter()
        .filter(|interest| {
            property
                .mostly_tourist_interests
                .get(*interest)
                .copied()
                .unwrap_or(false)
        })
        .map(String::as_str)
        .collect();
    if !matched_interests.is_empty() {
        reasons.push(format!(
            "Matches your interests: {}",
            matched_interests.join(", ")
        ));
    }

    let matched_facilities: Vec<&str> = request
        .facilities
        .iter()
        .filter(|facility| features.facilities.contains(*facility))
        .map(String::as_str)
        .collect();
    if !matched_facilities.is_empty() {
        reasons.push(format!(
            "Offers facilities: {}",
            matched_facilities.join(", ")
        ));
    }

    if !property.most_popular_places.is_empty() {
        let nearby: Vec<&str> = property
            .most_popular_places
            .iter()
            .take(2)
            .map(String::as_str)
            .collect();
        reasons.push(format!("Near popular places: {}", nearby.join(", ")));
    }

    reasons
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::query::{BudgetFilter, BudgetTier};

    fn sample_catalog() -> Catalog {
        let mut properties = Vec::new();

        // High tier: 25 rooms, wifi, restaurant, laundry, own transport
        let mut grand = Property::default();
        grand.hotel_guest_house_name = "Grand Mountain Hotel".to_string();
        grand.kind.hotel = true;
        grand.facilities.rooms.number_of_rooms = 25;
        grand.facilities.wifi_internet = true;
        grand.facilities.restaurant_dining = true;
        grand.facilities.laundry_services = true;
        grand.has_own_transport = true;
        grand
            .mostly_tourist_interests
            .extend([("lake".to_string(), true), ("trekking".to_string(), true)]);
        grand
            .most_popular_places
            .extend(["Shangrila Lake".to_string(), "Kachura Lake".to_string()]);
        properties.push(grand);

        // Medium tier: 15 rooms, wifi, restaurant
        let mut riverside = Property::default();
        riverside.hotel_guest_house_name = "Riverside Guest House".to_string();
        riverside.kind.guest_house = true;
        riverside.facilities.rooms.number_of_rooms = 15;
        riverside.facilities.wifi_internet = true;
        riverside.facilities.restaurant_dining = true;
        riverside
            .mostly_tourist_interests
            .insert("lake".to_string(), true);
        properties.push(riverside);

        // Low tier: 6 rooms, nothing else
        let mut basic = Property::default();
        basic.hotel_guest_house_name = "Basic Inn".to_string();
        basic.kind.guest_house = true;
        basic.facilities.rooms.number_of_rooms = 6;
        basic
            .mostly_tourist_interests
            .insert("historical".to_string(), true);
        properties.push(basic);

        Catalog::new(properties)
    }

    fn recommender() -> Recommender {
        Recommender::with_weights(sample_catalog(), RecommendationWeights::default())
    }

    #[test]
    fn scores_stay_in_range_and_sorted() {
        let results = recommender().recommend(&RecommendHotelsRequest {
            budget: BudgetFilter::Any,
            interests: vec!["lake".to_string()],
            facilities: vec!["wifi".to_string()],
            group_size: 2,
            duration: 3,
        });

        assert!(!results.is_empty());
        assert!(results.len() <= 8);
        for result in &results {
            assert!(result.score >= 0.0 && result.score <= 1.0);
        }
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn budget_filter_is_strict() {
        let results = recommender().recommend(&RecommendHotelsRequest {
            budget: BudgetFilter::High,
            interests: vec!["lake".to_string()],
            facilities: Vec::new(),
            group_size: 2,
            duration: 3,
        });

        for result in &results {
            assert_eq!(result.budget_category, BudgetTier::High);
        }
    }

    #[test]
    fn filtered_out_tier_gives_empty_result() {
        // The only property is low tier; asking for a tier nobody has
        // must come back empty, not error.
        let mut properties = Vec::new();
        let mut lone = Property::default();
        lone.kind.hotel = true;
        lone.facilities.rooms.number_of_rooms = 4;
        properties.push(lone);

        let engine =
            Recommender::with_weights(Catalog::new(properties), RecommendationWeights::default());
        let results = engine.recommend(&RecommendHotelsRequest {
            budget: BudgetFilter::High,
            ..Default::default()
        });
        assert!(results.is_empty());
    }

    #[test]
    fn empty_catalog_recommends_nothing() {
        let engine =
            Recommender::with_weights(Catalog::new(Vec::new()), RecommendationWeights::default());
        let results = engine.recommend(&RecommendHotelsRequest::default());
        assert!(results.is_empty());
    }

    #[test]
    fn identical_requests_give_identical_results() {
        let engine = recommender();
        let request = RecommendHotelsRequest {
            budget: BudgetFilter::Any,
            interests: vec!["lake".to_string(), "trekking".to_string()],
            facilities: vec!["wifi".to_string(), "restaurant".to_string()],
            group_size: 4,
            duration: 5,
        };

        let first = engine.recommend(&request);
        let second = engine.recommend(&request);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.hotel.hotel_guest_house_name, b.hotel.hotel_guest_house_name);
            assert_eq!(a.score, b.score);
        }
    }

    #[test]
    fn suitability_handles_empty_preference_lists() {
        // No interests or facilities requested: only the base and the
        // capacity bonus can contribute, and nothing divides by zero.
        let results = recommender().recommend(&RecommendHotelsRequest {
            budget: BudgetFilter::Any,
            interests: Vec::new(),
            facilities: Vec::new(),
            group_size: 2,
            duration: 3,
        });

        for result in &results {
            assert!((result.suitability_score - 0.6).abs() < 1e-9);
        }
    }

    #[test]
    fn match_reasons_name_the_overlap() {
        let results = recommender().recommend(&RecommendHotelsRequest {
            budget: BudgetFilter::Any,
            interests: vec!["lake".to_string()],
            facilities: vec!["wifi".to_string()],
            group_size: 2,
            duration: 3,
        });

        let top = &results[0];
        assert!(top
            .match_reasons
            .iter()
            .any(|reason| reason.contains("lake")));
        assert!(top
            .match_reasons
            .iter()
            .any(|reason| reason.contains("wifi")));
    }

    #[test]
    fn cost_estimate_uses_the_property_tier() {
        let results = recommender().recommend(&RecommendHotelsRequest {
            budget: BudgetFilter::Medium,
            interests: vec!["lake".to_string()],
            facilities: Vec::new(),
            group_size: 2,
            duration: 5,
        });

        // Medium tier, 5 nights, 2 people: same arithmetic as the
        // expense estimator's stay components.
        let medium = results
            .iter()
            .find(|r| r.budget_category == BudgetTier::Medium)
            .expect("medium-tier property should survive the filter");
        assert_eq!(medium.cost_estimate.hotel, 25_000);
        assert_eq!(medium.cost_estimate.food, 22_500);
        assert_eq!(medium.cost_estimate.transport, 11_250);
    }
}
