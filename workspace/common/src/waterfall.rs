use serde::{Deserialize, Serialize};

/// Render class of a waterfall bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    /// First bar, drawn from zero.
    Base,
    /// A gain, drawn upward from the prior running total.
    Positive,
    /// A loss, drawn downward from the prior running total.
    Negative,
    /// Terminal bar carrying the grand total, drawn from zero.
    Total,
}

/// One renderable waterfall bar.
///
/// `base` is the offset the bar floats at and `delta` its drawn height;
/// together they place the bar without the renderer redoing any arithmetic.
/// `raw` keeps the signed step value for tooltips and `cumulative` the
/// running total after applying this step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterfallRow {
    pub name: String,
    pub base: f64,
    pub delta: f64,
    pub raw: f64,
    pub kind: RowKind,
    pub cumulative: f64,
}

/// A waterfall bar decomposed across the active entities.
///
/// `entity_values` is index-aligned with [`StackedWaterfall::active_entities`];
/// `stack_abs` is the absolute height of the stacked column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedWaterfallRow {
    pub name: String,
    pub base: f64,
    pub delta: f64,
    pub raw: f64,
    pub kind: RowKind,
    pub cumulative: f64,
    pub entity_values: Vec<f64>,
    pub stack_abs: f64,
}

/// Row set for a stacked waterfall chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedWaterfall {
    pub rows: Vec<StackedWaterfallRow>,
    /// Entities with a positive allocation quantity, in first-appearance order.
    pub active_entities: Vec<String>,
}

impl StackedWaterfall {
    /// Column of values for one entity across all rows — the shape a
    /// renderer needs for a single stacked series. `None` for an entity
    /// that is not active.
    pub fn entity_series(&self, name: &str) -> Option<Vec<f64>> {
        let index = self.active_entities.iter().position(|e| e == name)?;
        Some(self.rows.iter().map(|row| row.entity_values[index]).collect())
    }
}
