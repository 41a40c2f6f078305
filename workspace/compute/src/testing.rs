//! Fixture constructors shared by the unit tests in this crate and the
//! end-to-end tests in the root crate.

use model::records::demand::{DemandRecord, PeriodValue};
use model::records::financial::FinancialStep;

use crate::allocation::EntityQuantity;
use crate::timeseries::SparseSeries;

/// Builds an ordered step list from `(name, value)` pairs.
pub fn steps(entries: &[(&str, f64)]) -> Vec<FinancialStep> {
    entries
        .iter()
        .map(|(name, value)| FinancialStep::new(*name, *value))
        .collect()
}

/// Builds a sparse series from `(period, value)` pairs.
pub fn series(entries: &[(u32, f64)]) -> SparseSeries {
    let mut series = SparseSeries::new();
    for &(period, value) in entries {
        series.insert(period, value);
    }
    series
}

/// Builds entity quantities from `(name, quantity)` pairs.
pub fn quantities(entries: &[(&str, f64)]) -> Vec<EntityQuantity> {
    entries
        .iter()
        .map(|(name, quantity)| EntityQuantity::new(*name, *quantity))
        .collect()
}

/// Builds a demand record from sparse actual and forecast points.
pub fn demand_record(
    item: &str,
    actual: &[(u32, f64)],
    forecast: &[(u32, f64)],
) -> DemandRecord {
    let to_points = |entries: &[(u32, f64)]| {
        entries
            .iter()
            .map(|&(period, value)| PeriodValue::new(period, value))
            .collect()
    };
    DemandRecord::new(item, to_points(actual), to_points(forecast))
}
