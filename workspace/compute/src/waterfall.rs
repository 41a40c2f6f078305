//! Waterfall row construction: an ordered list of signed financial deltas
//! becomes bars floating at the prior running total.

pub mod stacked;

use common::{RowKind, WaterfallRow};
use model::records::financial::FinancialStep;
use tracing::instrument;

use crate::format::{coerce, round1};

/// Converts ordered signed steps into renderable waterfall rows.
///
/// The first step anchors the chart as the base bar drawn from zero. Each
/// later step floats at the smaller of the running totals before and after
/// it, so gains rise and losses hang. Running totals are rounded to one
/// decimal as they advance. With `include_total` a terminal bar carries the
/// grand total under `total_label`; an empty step list then yields that
/// single all-zero total row.
///
/// Total over all inputs: non-finite step values are treated as zero.
#[instrument(skip(steps), fields(num_steps = steps.len()))]
pub fn build_waterfall(
    steps: &[FinancialStep],
    include_total: bool,
    total_label: &str,
) -> Vec<WaterfallRow> {
    let mut rows = Vec::with_capacity(steps.len() + usize::from(include_total));
    let mut running = 0.0_f64;

    for (i, step) in steps.iter().enumerate() {
        let value = coerce(step.value);
        if i == 0 {
            rows.push(WaterfallRow {
                name: step.name.clone(),
                base: 0.0,
                delta: value.abs(),
                raw: value,
                kind: RowKind::Base,
                cumulative: value,
            });
            running = value;
        } else {
            let next = round1(running + value);
            rows.push(WaterfallRow {
                name: step.name.clone(),
                base: running.min(next),
                delta: value.abs(),
                raw: value,
                kind: if value >= 0.0 {
                    RowKind::Positive
                } else {
                    RowKind::Negative
                },
                cumulative: next,
            });
            running = next;
        }
    }

    if include_total {
        rows.push(WaterfallRow {
            name: total_label.to_string(),
            base: 0.0,
            delta: running.abs(),
            raw: running,
            kind: RowKind::Total,
            cumulative: running,
        });
    }

    rows
}
