//! Transport-layer shapes consumed by the chart rendering layer.
//! The compute crate produces these structs; the renderer only reads them,
//! so they stay free of any derivation logic beyond small lookups.

mod color;
mod money;
mod timeseries;
mod waterfall;

pub use color::ColorTable;
pub use money::MoneyUnit;
pub use timeseries::JoinedSeries;
pub use waterfall::{RowKind, StackedWaterfall, StackedWaterfallRow, WaterfallRow};
