use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::demand::DemandRecord;
use super::financial::FinancialStep;
use super::location::LocationOption;

/// A supply-chain what-if scenario as delivered by the data source.
/// Users create scenarios like "Expedite from the Pune hub" or "Split
/// across coastal DCs" and compare the resulting demand and profit charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    /// Currency symbol selecting the unit/scale convention, e.g. "₹" or "$".
    pub currency_symbol: String,
    /// Demand records, one per item covered by the scenario.
    pub items: Vec<DemandRecord>,
    /// Candidate fulfillment locations.
    pub locations: Vec<LocationOption>,
    /// Ordered profit/cost breakdown for the scenario as a whole.
    pub profit_steps: Vec<FinancialStep>,
    /// Configured location→color assignments for chart series.
    #[serde(default)]
    pub location_colors: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_deserializes_without_colors() {
        let json = r#"{
            "name": "Expedite",
            "description": null,
            "currency_symbol": "₹",
            "items": [],
            "locations": [],
            "profit_steps": [{"name": "Revenue", "value": 120000.0}]
        }"#;

        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.currency_symbol, "₹");
        assert!(scenario.location_colors.is_empty());
        assert_eq!(scenario.profit_steps.len(), 1);
    }
}
