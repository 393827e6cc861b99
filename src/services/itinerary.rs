use std::collections::VecDeque;
use std::sync::Arc;

use crate::models::itinerary::{
    DayPace, DaySlot, ItineraryDay, PackingSuggestions, PlannedActivity, TripPlan,
};
use crate::models::places::{PointOfInterest, POPULAR_PLACES};
use crate::models::query::{ItineraryRequest, RecommendHotelsRequest};
use crate::services::recommender::Recommender;

/// How many hotels to attach to a plan.
const HOTEL_SUGGESTION_COUNT: usize = 3;
/// The afternoon slot is only attempted when at least this many hours of
/// the day budget are still free after the morning activity.
const AFTERNOON_RESERVE_HOURS: u32 = 2;
/// A day that runs past this many hours is labelled busy.
const MODERATE_DAY_HOURS: u32 = 6;

/// Greedy day-by-day packer over the static point-of-interest catalog.
///
/// Deliberately simple: candidates are taken cheapest-first and a point
/// that does not fit the current day is discarded, never revisited. The
/// bias is breadth over optimality and the output is fully deterministic.
#[derive(Clone)]
pub struct ItineraryPlanner {
    recommender: Arc<Recommender>,
}

impl ItineraryPlanner {
    pub fn new(recommender: Arc<Recommender>) -> Self {
        Self { recommender }
    }

    pub fn plan(&self, request: &ItineraryRequest) -> TripPlan {
        let mut candidates: Vec<&'static PointOfInterest> = POPULAR_PLACES
            .iter()
            .filter(|place| {
                request.interests.is_empty()
                    || request
                        .interests
                        .iter()
                        .any(|interest| interest == place.category.as_str())
            })
            .collect();
        candidates.sort_by_key(|place| place.cost);
        let mut queue: VecDeque<&'static PointOfInterest> = candidates.into();

        let daily_budget = request.pace.daily_hours_budget();
        let mut days = Vec::new();
        let mut day = 1;

        while day <= request.duration && !queue.is_empty() {
            let mut activities = Vec::new();
            let mut hours_used = 0;
            let mut day_cost = 0;

            if let Some(place) = queue.pop_front() {
                if hours_used + place.duration_hours <= daily_budget {
                    activities.push(planned(DaySlot::Morning, place));
                    hours_used += place.duration_hours;
                    day_cost += place.cost;
                }
            }

            if hours_used + AFTERNOON_RESERVE_HOURS < daily_budget {
                if let Some(place) = queue.pop_front() {
                    if hours_used + place.duration_hours <= daily_budget {
                        activities.push(planned(DaySlot::Afternoon, place));
                        hours_used += place.duration_hours;
                        day_cost += place.cost;
                    }
                }
            }

            // A day without a single placed activity is not emitted and
            // does not advance the day counter; the popped points are
            // already consumed, so the loop still terminates.
            if !activities.is_empty() {
                days.push(ItineraryDay {
                    day,
                    activities,
                    total_hours: hours_used,
                    total_cost: day_cost,
                    pace: if hours_used <= MODERATE_DAY_HOURS {
                        DayPace::Moderate
                    } else {
                        DayPace::Busy
                    },
                });
                day += 1;
            }
        }

        let total_estimated_cost = days.iter().map(|entry| entry.total_cost).sum();

        let mut hotel_recommendations = self.recommender.recommend(&RecommendHotelsRequest {
            budget: request.budget,
            interests: request.interests.clone(),
            duration: request.duration,
            ..Default::default()
        });
        hotel_recommendations.truncate(HOTEL_SUGGESTION_COUNT);

        TripPlan {
            duration_days: request.duration,
            budget_level: request.budget,
            total_estimated_cost,
            daily_itinerary: days,
            hotel_recommendations,
            packing_suggestions: packing_suggestions(&request.interests, request.duration),
        }
    }
}

fn planned(time: DaySlot, place: &PointOfInterest) -> PlannedActivity {
    PlannedActivity {
        time,
        activity: place.name.to_string(),
        duration_hours: place.duration_hours,
        cost: place.cost,
        category: place.category,
        best_time: place.best_time,
    }
}

/// Rule-based packing checklist keyed off the requested interest
/// categories and the trip length.
fn packing_suggestions(interests: &[String], duration: u32) -> PackingSuggestions {
    let mut essentials: Vec<String> = [
        "Warm clothes",
        "Comfortable shoes",
        "Sunglasses",
        "Sunscreen",
        "Water bottle",
    ]
    .map(String::from)
    .to_vec();
    let electronics = ["Power bank", "Camera", "Phone charger"]
        .map(String::from)
        .to_vec();
    let documents = ["ID card/Passport", "Cash (PKR)", "Hotel bookings"]
        .map(String::from)
        .to_vec();

    let wants = |name: &str| interests.iter().any(|interest| interest == name);

    if wants("lake") || wants("waterfall") {
        essentials.extend(["Swimwear".to_string(), "Quick-dry towel".to_string()]);
    }
    if wants("trekking") || wants("hiking") {
        essentials.extend([
            "Hiking boots".to_string(),
            "Backpack".to_string(),
            "Walking sticks".to_string(),
        ]);
    }
    if wants("historical") {
        essentials.push("Guide book".to_string());
    }

    if duration > 7 {
        essentials.extend(["Extra clothing".to_string(), "Toiletries".to_string()]);
    }

    PackingSuggestions {
        essentials,
        electronics,
        documents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::property::{Catalog, Property};
    use crate::models::query::{BudgetFilter, TripPace};
    use crate::services::recommender::{RecommendationWeights, Recommender};

    fn planner() -> ItineraryPlanner {
        let mut property = Property::default();
        property.hotel_guest_house_name = "Lakeview Hotel".to_string();
        property.kind.hotel = true;
        property.facilities.rooms.number_of_rooms = 15;
        property.facilities.wifi_internet = true;
        property.facilities.restaurant_dining = true;
        property
            .mostly_tourist_interests
            .insert("lake".to_string(), true);

        let recommender = Recommender::with_weights(
            Catalog::new(vec![property]),
            RecommendationWeights::default(),
        );
        ItineraryPlanner::new(Arc::new(recommender))
    }

    fn plan(duration: u32, interests: &[&str], pace: TripPace) -> TripPlan {
        planner().plan(&ItineraryRequest {
            duration,
            budget: BudgetFilter::Medium,
            interests: interests.iter().map(|s| s.to_string()).collect(),
            pace,
        })
    }

    #[test]
    fn days_never_exceed_the_hours_budget() {
        let plan = plan(3, &[], TripPace::Moderate);
        assert!(!plan.daily_itinerary.is_empty());
        for day in &plan.daily_itinerary {
            assert!(day.total_hours <= 8);
            assert!(!day.activities.is_empty());
            assert!(day.activities.len() <= 2);
        }
    }

    #[test]
    fn empty_interest_filter_admits_every_place() {
        // 10 places, 2 slots a day: a long enough trip schedules most of
        // the catalog; the cheapest place always goes first.
        let plan = plan(10, &[], TripPace::Busy);
        let first = &plan.daily_itinerary[0].activities[0];
        assert_eq!(first.activity, "Italian K2 Museum");
    }

    #[test]
    fn interest_filter_limits_categories() {
        let plan = plan(5, &["lake"], TripPace::Moderate);
        for day in &plan.daily_itinerary {
            for activity in &day.activities {
                assert_eq!(activity.category.as_str(), "lake");
            }
        }
    }

    #[test]
    fn planner_stops_early_when_places_run_out() {
        // Only two lake entries exist, so a 7-day request packs one day.
        let plan = plan(7, &["lake"], TripPace::Moderate);
        assert_eq!(plan.duration_days, 7);
        assert!(plan.daily_itinerary.len() < 7);
    }

    #[test]
    fn relaxed_pace_tightens_the_day() {
        let plan = plan(4, &[], TripPace::Relaxed);
        for day in &plan.daily_itinerary {
            assert!(day.total_hours <= 6);
            assert_eq!(day.pace, DayPace::Moderate);
        }
    }

    #[test]
    fn day_totals_match_their_activities() {
        let plan = plan(4, &[], TripPace::Moderate);
        for day in &plan.daily_itinerary {
            let hours: u32 = day.activities.iter().map(|a| a.duration_hours).sum();
            let cost: u64 = day.activities.iter().map(|a| a.cost).sum();
            assert_eq!(day.total_hours, hours);
            assert_eq!(day.total_cost, cost);
        }
        let total: u64 = plan.daily_itinerary.iter().map(|d| d.total_cost).sum();
        assert_eq!(plan.total_estimated_cost, total);
    }

    #[test]
    fn plan_attaches_at_most_three_hotels() {
        let plan = plan(3, &["lake"], TripPace::Moderate);
        assert!(plan.hotel_recommendations.len() <= 3);
    }

    #[test]
    fn packing_follows_interests_and_duration() {
        let short = packing_suggestions(&["lake".to_string()], 3);
        assert!(short.essentials.contains(&"Swimwear".to_string()));
        assert!(!short.essentials.contains(&"Extra clothing".to_string()));

        let long = packing_suggestions(&["trekking".to_string()], 9);
        assert!(long.essentials.contains(&"Hiking boots".to_string()));
        assert!(long.essentials.contains(&"Extra clothing".to_string()));
        assert_eq!(long.electronics.len(), 3);
        assert_eq!(long.documents.len(), 3);
    }
}
