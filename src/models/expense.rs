use serde::{Deserialize, Serialize};

use crate::models::query::BudgetTier;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    pub accommodation: u64,
    pub food: u64,
    pub transportation: u64,
    pub activities: u64,
    pub miscellaneous: u64,
}

/// Complete trip expense estimate in whole PKR. `per_person` and
/// `per_day` are zero whenever the respective divisor is zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseEstimate {
    pub breakdown: ExpenseBreakdown,
    pub total: u64,
    pub per_person: u64,
    pub per_day: u64,
    pub budget_level: BudgetTier,
}
