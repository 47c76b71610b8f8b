//! Placeholder differential-expression ranker.
//!
//! Deltas are `sample_a[gene] - sample_b[gene]` for every gene of `sample_b`,
//! with absent `sample_a` genes read as 0. Genes that only appear in
//! `sample_a` are never ranked: the keyspace is `sample_b`'s. Changing that
//! is a new method tag, not a fix.

use std::collections::HashMap;

use crate::scoring::round_to;
use crate::scoring::types::{ExpressionResult, GeneDelta, GeneExpressionInput};

/// Method tag reported with every placeholder ranking.
pub const DEMO_DIFF_METHOD: &str = "demo_diff";

/// Maximum number of genes returned.
pub const TOP_GENES: usize = 5;

/// Rank `sample_b`'s genes by absolute expression delta.
pub fn rank(input: &GeneExpressionInput) -> ExpressionResult {
    let baseline: HashMap<&str, f64> = input.sample_a.iter().collect();

    let mut deltas: Vec<(&str, f64)> = input
        .sample_b
        .iter()
        .map(|(gene, b)| {
            let a = baseline.get(gene).copied().unwrap_or(0.0);
            // Saturate instead of overflowing to infinity.
            (gene, (a - b).clamp(f64::MIN, f64::MAX))
        })
        .collect();

    // Stable sort: equal magnitudes keep sample_b order.
    deltas.sort_by(|x, y| y.1.abs().total_cmp(&x.1.abs()));
    deltas.truncate(TOP_GENES);

    ExpressionResult {
        top_genes: deltas
            .into_iter()
            .map(|(gene, delta)| GeneDelta {
                gene: gene.to_string(),
                delta: round_to(delta, 4),
            })
            .collect(),
        method: DEMO_DIFF_METHOD.to_string(),
    }
}
