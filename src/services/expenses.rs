use crate::models::expense::{ExpenseBreakdown, ExpenseEstimate};
use crate::models::places::find_place;
use crate::models::query::{BudgetTier, ExpenseRequest};
use crate::models::recommendation::StayCost;

/// Flat surcharge applied on top of the itemised components.
const MISCELLANEOUS_RATE: f64 = 0.2;

/// Per-tier (low, high) PKR ranges. Component costs use the midpoint of
/// the range. The same table backs both the expense estimator and the
/// stay costs attached to hotel recommendations.
#[derive(Debug, Clone, Copy)]
pub struct BudgetRates {
    pub hotel_per_night: (u64, u64),
    pub food_per_day: (u64, u64),
    pub transport_per_day: (u64, u64),
}

const LOW_RATES: BudgetRates = BudgetRates {
    hotel_per_night: (1000, 3000),
    food_per_day: (500, 1500),
    transport_per_day: (500, 1500),
};

const MEDIUM_RATES: BudgetRates = BudgetRates {
    hotel_per_night: (3000, 7000),
    food_per_day: (1500, 3000),
    transport_per_day: (1500, 3000),
};

const HIGH_RATES: BudgetRates = BudgetRates {
    hotel_per_night: (7000, 20000),
    food_per_day: (3000, 8000),
    transport_per_day: (3000, 8000),
};

impl BudgetTier {
    pub fn rates(self) -> &'static BudgetRates {
        match self {
            BudgetTier::Low => &LOW_RATES,
            BudgetTier::Medium => &MEDIUM_RATES,
            BudgetTier::High => &HIGH_RATES,
        }
    }
}

fn midpoint(range: (u64, u64)) -> f64 {
    (range.0 + range.1) as f64 / 2.0
}

/// Cost of a hotel stay for the recommendation annotations: nightly rate,
/// food (scaled by party size) and a shared vehicle, no activities.
pub fn stay_cost(tier: BudgetTier, duration: u32, group_size: u32) -> StayCost {
    let rates = tier.rates();
    let duration = duration as f64;

    let hotel = midpoint(rates.hotel_per_night) * duration;
    let food = midpoint(rates.food_per_day) * duration * group_size as f64;
    let transport = midpoint(rates.transport_per_day) * duration;
    let total = hotel + food + transport;
    let per_person = if group_size > 0 {
        total / group_size as f64
    } else {
        0.0
    };

    StayCost {
        hotel: hotel.round() as u64,
        food: food.round() as u64,
        transport: transport.round() as u64,
        total: total.round() as u64,
        per_person: per_person.round() as u64,
    }
}

/// Deterministic multi-component trip cost model. Stateless; every call
/// is a pure function of the request.
pub struct ExpenseEstimator;

impl ExpenseEstimator {
    pub fn estimate(request: &ExpenseRequest) -> ExpenseEstimate {
        let rates = request.budget.rates();
        let duration = request.duration as f64;
        let group_size = request.group_size as f64;

        let accommodation = midpoint(rates.hotel_per_night) * duration;
        let food = midpoint(rates.food_per_day) * duration * group_size;
        let transportation = midpoint(rates.transport_per_day) * duration;

        // Unknown activity ids are ignored rather than rejected.
        let activities: u64 = request
            .activities
            .iter()
            .filter_map(|id| find_place(id))
            .map(|place| place.cost)
            .sum();

        let base_total = accommodation + food + transportation + activities as f64;
        let miscellaneous = base_total * MISCELLANEOUS_RATE;
        let total = base_total + miscellaneous;

        let per_person = if request.group_size > 0 {
            total / group_size
        } else {
            0.0
        };
        let per_day = if request.duration > 0 {
            total / duration
        } else {
            0.0
        };

        ExpenseEstimate {
            breakdown: ExpenseBreakdown {
                accommodation: accommodation.round() as u64,
                food: food.round() as u64,
                transportation: transportation.round() as u64,
                activities,
                miscellaneous: miscellaneous.round() as u64,
            },
            total: total.round() as u64,
            per_person: per_person.round() as u64,
            per_day: per_day.round() as u64,
            budget_level: request.budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_trip_for_two() {
        let estimate = ExpenseEstimator::estimate(&ExpenseRequest {
            duration: 5,
            budget: BudgetTier::Medium,
            group_size: 2,
            activities: Vec::new(),
        });

        assert_eq!(estimate.breakdown.accommodation, 25_000);
        assert_eq!(estimate.breakdown.food, 22_500);
        assert_eq!(estimate.breakdown.transportation, 11_250);
        assert_eq!(estimate.breakdown.activities, 0);
        assert_eq!(estimate.breakdown.miscellaneous, 11_750);
        assert_eq!(estimate.total, 70_500);
        assert_eq!(estimate.per_person, 35_250);
        assert_eq!(estimate.per_day, 14_100);
    }

    #[test]
    fn zero_group_size_never_divides() {
        let estimate = ExpenseEstimator::estimate(&ExpenseRequest {
            duration: 5,
            budget: BudgetTier::Medium,
            group_size: 0,
            activities: Vec::new(),
        });

        assert_eq!(estimate.per_person, 0);
        // Food scales with group size, so it drops out entirely.
        assert_eq!(estimate.breakdown.food, 0);
        assert_eq!(
            estimate.total,
            (1.2_f64 * (25_000.0 + 11_250.0)).round() as u64
        );
    }

    #[test]
    fn zero_duration_never_divides() {
        let estimate = ExpenseEstimator::estimate(&ExpenseRequest {
            duration: 0,
            budget: BudgetTier::Low,
            group_size: 2,
            activities: Vec::new(),
        });

        assert_eq!(estimate.per_day, 0);
        assert_eq!(estimate.total, 0);
    }

    #[test]
    fn known_activities_add_flat_costs() {
        let estimate = ExpenseEstimator::estimate(&ExpenseRequest {
            duration: 1,
            budget: BudgetTier::Low,
            group_size: 1,
            activities: vec![
                "kharpocho_fort".to_string(),
                "italian_k2_museum".to_string(),
                "no_such_place".to_string(),
            ],
        });

        // 500 + 300, the unknown id contributes nothing
        assert_eq!(estimate.breakdown.activities, 800);
    }

    #[test]
    fn stay_cost_matches_expense_components() {
        let cost = stay_cost(BudgetTier::Medium, 5, 2);
        assert_eq!(cost.hotel, 25_000);
        assert_eq!(cost.food, 22_500);
        assert_eq!(cost.transport, 11_250);
        assert_eq!(cost.total, 58_750);
        assert_eq!(cost.per_person, 29_375);
    }

    #[test]
    fn stay_cost_zero_group_size() {
        let cost = stay_cost(BudgetTier::High, 3, 0);
        assert_eq!(cost.per_person, 0);
        assert_eq!(cost.food, 0);
    }
}
