//! Sparse weekly series and the actual→forecast join.
//!
//! Demand arrives as sparse period-keyed points. The joiner lays both the
//! actual and the forecast series over the union of their weeks and bridges
//! them at a single index so the two chart lines meet without a gap or an
//! overlap.

use std::collections::BTreeMap;

use common::JoinedSeries;
use model::records::demand::PeriodValue;
use tracing::debug;

use crate::format::{coerce, round1};

/// A sparse period-keyed series. Weeks without an observation are absent,
/// and the backing map keeps periods in ascending order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseSeries {
    values: BTreeMap<u32, f64>,
}

impl SparseSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a series from raw scenario points. Non-finite values coerce
    /// to zero; a repeated period keeps the last value.
    pub fn from_points(points: &[PeriodValue]) -> Self {
        let mut series = Self::new();
        for point in points {
            series.insert(point.period, point.value);
        }
        series
    }

    pub fn insert(&mut self, period: u32, value: f64) {
        self.values.insert(period, coerce(value));
    }

    pub fn get(&self, period: u32) -> Option<f64> {
        self.values.get(&period).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Ascending periods carrying an observation.
    pub fn periods(&self) -> impl Iterator<Item = u32> + '_ {
        self.values.keys().copied()
    }

    /// A copy with every value multiplied by `factor` — used to split an
    /// aggregate series across locations by allocation weight.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            values: self
                .values
                .iter()
                .map(|(&period, &value)| (period, coerce(value * factor)))
                .collect(),
        }
    }
}

/// The standard display transform: scale down and round to one decimal.
pub fn scaled_transform(scale: f64) -> impl Fn(f64) -> f64 {
    move |x| round1(x / scale)
}

/// Merges an actual and a forecast series into plot-ready arrays.
///
/// Categories are the ascending union of both series' weeks, labelled by
/// week number. The secondary series stays empty up to the primary's last
/// observation, carries the primary's value at that single bridge index so
/// the two lines meet, and continues with its own values afterwards. With
/// no primary observations the secondary series is emitted in full.
///
/// `transform` is applied to every plotted value (typically a unit scale
/// plus one-decimal rounding); the joiner itself stays unit-agnostic.
pub fn join_series<F>(primary: &SparseSeries, secondary: &SparseSeries, transform: F) -> JoinedSeries
where
    F: Fn(f64) -> f64,
{
    let mut periods: Vec<u32> = primary.periods().collect();
    periods.extend(secondary.periods());
    periods.sort_unstable();
    periods.dedup();

    let categories: Vec<String> = periods.iter().map(|p| format!("Week {p}")).collect();

    let primary_series: Vec<Option<f64>> = periods
        .iter()
        .map(|&p| primary.get(p).map(&transform))
        .collect();

    let last_primary = primary_series.iter().rposition(|v| v.is_some());

    let secondary_series: Vec<Option<f64>> = periods
        .iter()
        .enumerate()
        .map(|(i, &p)| match last_primary {
            Some(bridge) if i < bridge => None,
            Some(bridge) if i == bridge => {
                // Bridge point: prefer the actual value so the forecast
                // line attaches to the end of the actual line.
                primary_series[bridge].or(secondary.get(p).map(&transform))
            }
            _ => secondary.get(p).map(&transform),
        })
        .collect();

    debug!(
        points = periods.len(),
        bridge = ?last_primary,
        "joined sparse series"
    );

    JoinedSeries {
        categories,
        primary: primary_series,
        secondary: secondary_series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::series;

    #[test]
    fn test_join_bridges_actual_into_forecast() {
        let primary = series(&[(1, 100.0), (2, 200.0)]);
        let secondary = series(&[(2, 210.0), (3, 300.0), (4, 400.0)]);

        let joined = join_series(&primary, &secondary, scaled_transform(1_000.0));

        assert_eq!(
            joined.categories,
            vec!["Week 1", "Week 2", "Week 3", "Week 4"]
        );
        assert_eq!(joined.primary, vec![Some(0.1), Some(0.2), None, None]);
        // Index 1 bridges to the actual value 0.2, not the forecast's 0.21.
        assert_eq!(joined.secondary, vec![None, Some(0.2), Some(0.3), Some(0.4)]);
        assert_eq!(joined.bridge_index(), Some(1));
    }

    #[test]
    fn test_bridge_is_the_only_overlap() {
        let primary = series(&[(1, 10.0), (3, 30.0)]);
        let secondary = series(&[(1, 11.0), (2, 22.0), (3, 33.0), (5, 55.0)]);

        let joined = join_series(&primary, &secondary, |x| x);

        let overlaps: Vec<usize> = (0..joined.len())
            .filter(|&i| joined.primary[i].is_some() && joined.secondary[i].is_some())
            .collect();
        assert_eq!(overlaps, vec![joined.bridge_index().unwrap()]);
    }

    #[test]
    fn test_empty_primary_emits_full_secondary() {
        let primary = SparseSeries::new();
        let secondary = series(&[(1, 10.0), (2, 20.0)]);

        let joined = join_series(&primary, &secondary, |x| x);

        assert_eq!(joined.primary, vec![None, None]);
        assert_eq!(joined.secondary, vec![Some(10.0), Some(20.0)]);
        assert_eq!(joined.bridge_index(), None);
    }

    #[test]
    fn test_empty_inputs_produce_empty_series() {
        let joined = join_series(&SparseSeries::new(), &SparseSeries::new(), |x| x);
        assert!(joined.is_empty());
        assert!(joined.primary.is_empty());
        assert!(joined.secondary.is_empty());
    }

    #[test]
    fn test_gap_in_secondary_after_bridge_stays_a_gap() {
        let primary = series(&[(1, 10.0)]);
        let secondary = series(&[(3, 30.0)]);

        let joined = join_series(&primary, &secondary, |x| x);

        assert_eq!(joined.categories, vec!["Week 1", "Week 3"]);
        // Bridge carries the actual value even though the forecast has no
        // observation at that week.
        assert_eq!(joined.secondary, vec![Some(10.0), Some(30.0)]);
    }

    #[test]
    fn test_from_points_keeps_last_duplicate_and_coerces() {
        let points = vec![
            PeriodValue::new(2, 5.0),
            PeriodValue::new(2, 7.0),
            PeriodValue::new(4, f64::NAN),
        ];
        let s = SparseSeries::from_points(&points);
        assert_eq!(s.get(2), Some(7.0));
        assert_eq!(s.get(4), Some(0.0));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_scaled_multiplies_every_value() {
        let s = series(&[(1, 100.0), (2, 50.0)]).scaled(0.5);
        assert_eq!(s.get(1), Some(50.0));
        assert_eq!(s.get(2), Some(25.0));
    }

    #[test]
    fn test_non_contiguous_periods_keep_their_labels() {
        let primary = series(&[(5, 1.0)]);
        let secondary = series(&[(9, 2.0)]);
        let joined = join_series(&primary, &secondary, |x| x);
        assert_eq!(joined.categories, vec!["Week 5", "Week 9"]);
    }
}
