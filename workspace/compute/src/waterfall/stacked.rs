//! Stacked waterfall: every bar decomposed proportionally across the
//! active entities.

use common::{RowKind, StackedWaterfall, StackedWaterfallRow};
use model::records::financial::FinancialStep;
use tracing::instrument;

use crate::allocation::{EntityQuantity, allocation_weights};
use crate::format::{coerce, round1};

/// Builds waterfall rows where each bar is split across the active
/// entities in proportion to their quantities.
///
/// An entity's share of a step is rounded on the magnitude and then
/// re-signed, which avoids sign flips when a near-zero share rounds. The
/// running total advances over the sum of the rounded shares rather than
/// the raw step value, so the stacked chart agrees with its own
/// arithmetic.
///
/// The total row re-signs each entity's accumulated share to match the
/// grand total's sign. When entity signs diverge step to step the stack
/// can therefore drift from the scalar total by rounding; callers compare
/// with a tolerance instead of expecting exact reconciliation.
#[instrument(skip(steps, quantities), fields(num_steps = steps.len(), num_entities = quantities.len()))]
pub fn build_stacked_waterfall(
    steps: &[FinancialStep],
    quantities: &[EntityQuantity],
    reference_quantity: f64,
    include_total: bool,
    total_label: &str,
) -> StackedWaterfall {
    let allocation = allocation_weights(quantities, reference_quantity);

    let mut rows = Vec::with_capacity(steps.len() + usize::from(include_total));
    let mut running = 0.0_f64;
    let mut entity_totals = vec![0.0_f64; allocation.len()];

    for (i, step) in steps.iter().enumerate() {
        let value = coerce(step.value);
        let sign = if value < 0.0 { -1.0 } else { 1.0 };

        let entity_values: Vec<f64> = allocation
            .weights()
            .iter()
            .map(|weight| round1(value.abs() * weight) * sign)
            .collect();
        let step_total: f64 = entity_values.iter().sum();
        for (total, share) in entity_totals.iter_mut().zip(&entity_values) {
            *total += share;
        }
        let stack_abs = step_total.abs();

        if i == 0 {
            rows.push(StackedWaterfallRow {
                name: step.name.clone(),
                base: 0.0,
                delta: step_total.abs(),
                raw: step_total,
                kind: RowKind::Base,
                cumulative: step_total,
                entity_values,
                stack_abs,
            });
            running = step_total;
        } else {
            let next = round1(running + step_total);
            rows.push(StackedWaterfallRow {
                name: step.name.clone(),
                base: running.min(next),
                delta: step_total.abs(),
                raw: step_total,
                kind: if step_total >= 0.0 {
                    RowKind::Positive
                } else {
                    RowKind::Negative
                },
                cumulative: next,
                entity_values,
                stack_abs,
            });
            running = next;
        }
    }

    if include_total {
        let sign = if running < 0.0 { -1.0 } else { 1.0 };
        // Display reconciliation: the stacked total points the same way as
        // the scalar total even for entities whose net share ran opposite.
        let entity_values: Vec<f64> = entity_totals.iter().map(|t| t.abs() * sign).collect();
        let stack_abs = entity_values.iter().sum::<f64>().abs();
        rows.push(StackedWaterfallRow {
            name: total_label.to_string(),
            base: 0.0,
            delta: running.abs(),
            raw: running,
            kind: RowKind::Total,
            cumulative: running,
            entity_values,
            stack_abs,
        });
    }

    StackedWaterfall {
        rows,
        active_entities: allocation.entities().to_vec(),
    }
}
