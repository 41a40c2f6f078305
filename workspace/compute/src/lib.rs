//! Derivation layer turning raw scenario records into chart payloads.
//!
//! Everything here is pure and synchronous: the same inputs always produce
//! the same outputs, so callers are free to memoize results keyed on their
//! arguments and recompute whenever upstream selections change.

pub mod allocation;
pub mod error;
pub mod format;
pub mod testing;
pub mod timeseries;
pub mod waterfall;
