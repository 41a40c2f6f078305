//! Proportional entity weighting shared by the stacked waterfall and the
//! per-location demand split.

use tracing::debug;

use crate::format::coerce;

/// A named entity with its allocation quantity. A quantity above zero
/// marks the entity active.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityQuantity {
    pub name: String,
    pub quantity: f64,
}

impl EntityQuantity {
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            quantity: coerce(quantity),
        }
    }
}

/// Proportional weights over the active entities, preserving the order of
/// first appearance in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationWeights {
    entities: Vec<String>,
    weights: Vec<f64>,
}

impl AllocationWeights {
    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entities
            .iter()
            .map(String::as_str)
            .zip(self.weights.iter().copied())
    }

    pub fn weight_of(&self, name: &str) -> Option<f64> {
        self.entities
            .iter()
            .position(|e| e == name)
            .map(|i| self.weights[i])
    }
}

/// Computes each active entity's share of the reference quantity.
///
/// Weights are proportional to quantity when the reference total is
/// positive. A non-positive reference falls back to an equal split across
/// the active entities — an explicit policy choice, not a fact derived
/// from the data. No active entities yields no weights.
pub fn allocation_weights(quantities: &[EntityQuantity], reference: f64) -> AllocationWeights {
    let active: Vec<&EntityQuantity> = quantities
        .iter()
        .filter(|q| coerce(q.quantity) > 0.0)
        .collect();

    if active.is_empty() {
        return AllocationWeights {
            entities: Vec::new(),
            weights: Vec::new(),
        };
    }

    let reference = coerce(reference);
    let weights: Vec<f64> = if reference > 0.0 {
        active.iter().map(|q| coerce(q.quantity) / reference).collect()
    } else {
        // Equal-split fallback: the reference total carries no information.
        let share = 1.0 / active.len() as f64;
        vec![share; active.len()]
    };

    debug!(
        active = active.len(),
        reference, "computed allocation weights"
    );

    AllocationWeights {
        entities: active.iter().map(|q| q.name.clone()).collect(),
        weights,
    }
}
