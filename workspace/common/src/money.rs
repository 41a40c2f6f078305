use serde::{Deserialize, Serialize};

/// Display convention for large currency amounts: the divisor applied to
/// raw values, the axis caption naming the unit, and the compact suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyUnit {
    /// Divisor applied to raw amounts before display.
    pub scale: f64,
    /// Axis caption, e.g. "₹ in Lakhs".
    pub axis_label: String,
    /// Compact magnitude suffix, e.g. "L".
    pub suffix: String,
}

impl MoneyUnit {
    /// Resolves the unit convention for a currency symbol.
    ///
    /// The rupee renders in lakhs; every other symbol in thousands.
    pub fn for_symbol(symbol: &str) -> Self {
        match symbol {
            "₹" => Self {
                scale: 100_000.0,
                axis_label: "₹ in Lakhs".to_string(),
                suffix: "L".to_string(),
            },
            _ => Self {
                scale: 1_000.0,
                axis_label: format!("{symbol} in Thousands"),
                suffix: "K".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupee_resolves_to_lakhs() {
        let unit = MoneyUnit::for_symbol("₹");
        assert_eq!(unit.scale, 100_000.0);
        assert_eq!(unit.axis_label, "₹ in Lakhs");
        assert_eq!(unit.suffix, "L");
    }

    #[test]
    fn test_other_symbols_resolve_to_thousands() {
        let unit = MoneyUnit::for_symbol("$");
        assert_eq!(unit.scale, 1_000.0);
        assert_eq!(unit.axis_label, "$ in Thousands");
        assert_eq!(unit.suffix, "K");

        let euro = MoneyUnit::for_symbol("€");
        assert_eq!(euro.axis_label, "€ in Thousands");
    }
}
