use serde::{Deserialize, Serialize};

/// One weekly observation in a sparse demand series.
///
/// Weeks without an observation simply have no entry, so a list of points
/// may skip periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodValue {
    /// 1-based week number within the planning horizon.
    pub period: u32,
    /// Demand in raw units for that week.
    pub value: f64,
}

impl PeriodValue {
    pub fn new(period: u32, value: f64) -> Self {
        Self { period, value }
    }
}

/// Per-item demand history and forecast as delivered by the scenario source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandRecord {
    /// Item identifier (SKU).
    pub item: String,
    /// Observed demand, by week.
    pub actual: Vec<PeriodValue>,
    /// Forecast demand, by week. May overlap the tail of `actual`.
    pub forecast: Vec<PeriodValue>,
}

impl DemandRecord {
    pub fn new(
        item: impl Into<String>,
        actual: Vec<PeriodValue>,
        forecast: Vec<PeriodValue>,
    ) -> Self {
        Self {
            item: item.into(),
            actual,
            forecast,
        }
    }
}
