use serde::{Deserialize, Serialize};

/// One candidate fulfillment location evaluated by a what-if scenario.
///
/// Quantities are in raw units; `demand_next_week` drives the proportional
/// allocation of aggregate demand and financials across locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationOption {
    pub name: String,
    /// Units this location is expected to ship next week.
    pub demand_next_week: f64,
    /// Distance from the demand point.
    pub distance_km: f64,
    /// Stock currently on hand.
    pub available_qty: f64,
    /// Stock that must stay untouched.
    pub safety_stock: f64,
    /// Stock above the local demand plan.
    pub excess_qty: f64,
    /// Days until a shipment from here arrives.
    pub eta_days: f64,
    /// Whether the planning engine recommends this location.
    pub recommended: bool,
}
