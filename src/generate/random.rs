use rand::Rng;
use tracing::debug;

use crate::types::{ GenerationSummary, Graph };

/// Places `target_edges` directed edges at uniformly random empty off-diagonal
/// cells, each with an integer weight drawn from `lower_bound..=upper_bound`.
///
/// Rows and columns are drawn independently; self-loops and occupied cells are
/// rejected and redrawn. The caller guarantees `target_edges` does not exceed
/// the number of empty off-diagonal cells and that `0 < lower_bound <= upper_bound`
/// with both bounds exactly representable as `f32`.
pub fn place_random_edges<R: Rng + ?Sized>(
    graph: &mut Graph,
    target_edges: usize,
    lower_bound: i32,
    upper_bound: i32,
    rng: &mut R,
) -> GenerationSummary {
    let mut summary = GenerationSummary {
        target_edges,
        ..Default::default()
    };
    let size = graph.size();

    let mut placed = 0;
    while placed < target_edges {
        let row = rng.gen_range(0..size);
        let col = rng.gen_range(0..size);
        summary.samples_drawn += 1;

        if row == col {
            summary.rejected_self_loops += 1;
            continue;
        }
        if graph.has_edge(row, col) {
            summary.rejected_occupied += 1;
            continue;
        }

        let weight = rng.gen_range(lower_bound..=upper_bound);
        graph.set_weight(row, col, weight as f32);
        placed += 1;
    }

    debug!(
        target_edges,
        samples_drawn = summary.samples_drawn,
        rejected_self_loops = summary.rejected_self_loops,
        rejected_occupied = summary.rejected_occupied,
        "random edge placement finished"
    );

    return summary;
}
