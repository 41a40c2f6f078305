//! chainview — deterministic chart-data derivation for supply-chain
//! what-if scenario dashboards.
//!
//! The workspace splits along the same lines as the dashboards it feeds:
//! `model` holds the raw scenario records, `compute` derives chart rows and
//! series from them, `common` carries the transport shapes the rendering
//! layer consumes. This crate is the facade wiring the three together: one
//! call turns a scenario plus an item selection into every payload the
//! dashboard draws.

pub mod dashboard;

pub use common;
pub use compute;
pub use model;

pub use dashboard::{DashboardCharts, LocationSeries, build_dashboard, scenario_color_table};
