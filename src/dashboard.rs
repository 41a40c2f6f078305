//! Scenario → chart payload orchestration.
//!
//! The single entry point the dashboard calls whenever the scenario, the
//! selected item or the location mix changes. Derivation is pure and
//! synchronous, so recomputing on every change is the intended usage.

use common::{ColorTable, JoinedSeries, MoneyUnit, StackedWaterfall, WaterfallRow};
use compute::allocation::{EntityQuantity, allocation_weights};
use compute::error::{ComputeError, Result};
use compute::format::{coerce, round1};
use compute::timeseries::{SparseSeries, join_series, scaled_transform};
use compute::waterfall::build_waterfall;
use compute::waterfall::stacked::build_stacked_waterfall;
use model::records::financial::FinancialStep;
use model::records::location::LocationOption;
use model::records::scenario::Scenario;
use serde::Serialize;
use tracing::{debug, instrument};

/// Demand series are charted in thousands of units.
const DEMAND_SCALE: f64 = 1_000.0;

/// Label of the terminal waterfall bar.
const TOTAL_LABEL: &str = "Net impact";

/// Everything the dashboard renders for one selected item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    /// Item-level actual vs forecast demand.
    pub demand: JoinedSeries,
    /// The same demand split per candidate location.
    pub location_demand: Vec<LocationSeries>,
    /// Scenario profit breakdown, in display units.
    pub profit: Vec<WaterfallRow>,
    /// Profit breakdown stacked across candidate locations.
    pub location_profit: StackedWaterfall,
    /// Unit convention shared by every money-valued chart.
    pub unit: MoneyUnit,
}

/// One location's share of the demand chart with its stable series color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationSeries {
    pub location: String,
    pub color: String,
    pub series: JoinedSeries,
}

/// Lifts the scenario's configured location colors into a validated table.
pub fn scenario_color_table(scenario: &Scenario, default_color: &str) -> Result<ColorTable> {
    ColorTable::from_entries(scenario.location_colors.clone(), default_color)
        .map_err(ComputeError::Config)
}

/// Derives every chart payload for `item` from the scenario records.
///
/// Location demand series reuse the aggregate series' bridge rule: both
/// inputs are weighted first, so the forecast line of every location picks
/// up at the same week as the aggregate chart.
#[instrument(skip(scenario, colors), fields(scenario_name = %scenario.name))]
pub fn build_dashboard(
    scenario: &Scenario,
    item: &str,
    colors: &ColorTable,
) -> Result<DashboardCharts> {
    let record = scenario
        .items
        .iter()
        .find(|r| r.item == item)
        .ok_or_else(|| ComputeError::ItemNotFound(item.to_string()))?;

    let unit = MoneyUnit::for_symbol(&scenario.currency_symbol);

    let actual = SparseSeries::from_points(&record.actual);
    let forecast = SparseSeries::from_points(&record.forecast);
    let demand = join_series(&actual, &forecast, scaled_transform(DEMAND_SCALE));

    let quantities = location_quantities(&scenario.locations);
    let reference = active_reference(&quantities);
    let weights = allocation_weights(&quantities, reference);

    let location_demand: Vec<LocationSeries> = weights
        .iter()
        .map(|(name, weight)| LocationSeries {
            location: name.to_string(),
            color: colors.color_of(name).to_string(),
            series: join_series(
                &actual.scaled(weight),
                &forecast.scaled(weight),
                scaled_transform(DEMAND_SCALE),
            ),
        })
        .collect();

    let scaled_steps = scale_steps(&scenario.profit_steps, unit.scale);
    let profit = build_waterfall(&scaled_steps, true, TOTAL_LABEL);
    let location_profit =
        build_stacked_waterfall(&scaled_steps, &quantities, reference, true, TOTAL_LABEL);

    debug!(
        locations = location_demand.len(),
        profit_rows = profit.len(),
        "derived dashboard charts"
    );

    Ok(DashboardCharts {
        demand,
        location_demand,
        profit,
        location_profit,
        unit,
    })
}

/// Next-week shipping quantity per location — the allocation driver for
/// both the demand split and the stacked profit chart.
fn location_quantities(locations: &[LocationOption]) -> Vec<EntityQuantity> {
    locations
        .iter()
        .map(|l| EntityQuantity::new(l.name.clone(), l.demand_next_week))
        .collect()
}

/// Total quantity over the active locations, so proportional weights sum
/// to one.
fn active_reference(quantities: &[EntityQuantity]) -> f64 {
    quantities
        .iter()
        .map(|q| coerce(q.quantity))
        .filter(|q| *q > 0.0)
        .sum()
}

/// Expresses raw currency steps in the display unit before row building;
/// the builders stay unit-agnostic the same way the joiner does.
fn scale_steps(steps: &[FinancialStep], scale: f64) -> Vec<FinancialStep> {
    steps
        .iter()
        .map(|s| FinancialStep::new(s.name.clone(), round1(coerce(s.value) / scale)))
        .collect()
}
