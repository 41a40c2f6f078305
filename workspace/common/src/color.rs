use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Immutable entity→color lookup keeping chart series visually stable.
///
/// Keys are stored normalized (trimmed, lowercased) so lookups are
/// insensitive to caller spelling; an unrecognized entity resolves to the
/// single default color. The table is supplied as configuration by the
/// caller — nothing here is global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTable {
    colors: BTreeMap<String, String>,
    default_color: String,
}

impl ColorTable {
    /// Creates an empty table where every lookup yields `default_color`.
    pub fn new(default_color: impl Into<String>) -> Self {
        Self {
            colors: BTreeMap::new(),
            default_color: default_color.into(),
        }
    }

    /// Adds an entity color. The name is normalized before storage.
    pub fn with_color(mut self, name: &str, color: impl Into<String>) -> Self {
        self.colors.insert(normalize(name), color.into());
        self
    }

    /// Builds a table from caller configuration, validating every color.
    /// Entries with a `#` prefix must be well-formed 3- or 6-digit hex.
    pub fn from_entries<I>(entries: I, default_color: &str) -> Result<Self, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        validate_color("default", default_color)?;
        let mut table = Self::new(default_color);
        for (name, color) in entries {
            validate_color(&name, &color)?;
            table.colors.insert(normalize(&name), color);
        }
        Ok(table)
    }

    /// The color assigned to `name`, or the default for unknown entities.
    /// Identical names always yield identical colors within one table.
    pub fn color_of(&self, name: &str) -> &str {
        match self.colors.get(&normalize(name)) {
            Some(color) => color,
            None => {
                trace!(entity = name, "no configured color, using default");
                &self.default_color
            }
        }
    }

    pub fn default_color(&self) -> &str {
        &self.default_color
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn validate_color(name: &str, color: &str) -> Result<(), String> {
    let color = color.trim();
    if color.is_empty() {
        return Err(format!("empty color for '{name}'"));
    }
    if let Some(hex) = color.strip_prefix('#') {
        let well_formed =
            (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
        if !well_formed {
            return Err(format!("malformed hex color '{color}' for '{name}'"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ColorTable {
        ColorTable::new("#999999")
            .with_color("Mumbai", "#1f77b4")
            .with_color("Chennai", "#ff7f0e")
    }

    #[test]
    fn test_lookup_normalizes_name() {
        let table = table();
        assert_eq!(table.color_of("Mumbai"), "#1f77b4");
        assert_eq!(table.color_of("  mumbai  "), "#1f77b4");
        assert_eq!(table.color_of("MUMBAI"), "#1f77b4");
    }

    #[test]
    fn test_unknown_entity_falls_back_to_default() {
        assert_eq!(table().color_of("Kolkata"), "#999999");
    }

    #[test]
    fn test_lookup_is_deterministic_across_calls() {
        let table = table();
        let first = table.color_of("Chennai").to_string();
        table.color_of("Kolkata");
        table.color_of("Mumbai");
        assert_eq!(table.color_of("Chennai"), first);
    }

    #[test]
    fn test_from_entries_validates_colors() {
        let ok = ColorTable::from_entries(
            vec![("Pune".to_string(), "#abc".to_string())],
            "#999999",
        )
        .unwrap();
        assert_eq!(ok.color_of("pune"), "#abc");

        let bad_hex = ColorTable::from_entries(
            vec![("Pune".to_string(), "#12".to_string())],
            "#999999",
        );
        assert!(bad_hex.is_err());

        let blank = ColorTable::from_entries(
            vec![("Pune".to_string(), "  ".to_string())],
            "#999999",
        );
        assert!(blank.is_err());
    }

    #[test]
    fn test_named_css_colors_are_accepted() {
        let table = ColorTable::from_entries(
            vec![("Pune".to_string(), "steelblue".to_string())],
            "gray",
        )
        .unwrap();
        assert_eq!(table.color_of("Pune"), "steelblue");
    }
}
