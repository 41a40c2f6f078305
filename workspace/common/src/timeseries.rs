use serde::{Deserialize, Serialize};

/// Plot-ready join of an actual and a forecast demand series.
///
/// All three vectors are index-aligned. A `None` entry renders as a gap, so
/// the actual line stops at its last observation and the forecast line picks
/// up at exactly that index (the bridge point), sharing its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedSeries {
    /// Week labels over the union of both series' periods, ascending.
    pub categories: Vec<String>,
    pub primary: Vec<Option<f64>>,
    pub secondary: Vec<Option<f64>>,
}

impl JoinedSeries {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Index of the bridge point: the last position with a primary value.
    pub fn bridge_index(&self) -> Option<usize> {
        self.primary.iter().rposition(|v| v.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_index_is_last_primary_value() {
        let series = JoinedSeries {
            categories: vec!["Week 1".into(), "Week 2".into(), "Week 3".into()],
            primary: vec![Some(1.0), Some(2.0), None],
            secondary: vec![None, Some(2.0), Some(3.0)],
        };
        assert_eq!(series.bridge_index(), Some(1));
    }

    #[test]
    fn test_bridge_index_none_without_primary_values() {
        let series = JoinedSeries {
            categories: vec!["Week 1".into()],
            primary: vec![None],
            secondary: vec![Some(4.0)],
        };
        assert_eq!(series.bridge_index(), None);
    }
}
