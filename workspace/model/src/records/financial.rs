use serde::{Deserialize, Serialize};

/// One signed financial contribution in a profit/cost breakdown.
///
/// Steps are order-significant: the waterfall renders them in list order,
/// each floating at the running total left by its predecessors. Values are
/// expressed in base currency units; display scaling happens later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialStep {
    pub name: String,
    pub value: f64,
}

impl FinancialStep {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
