//! Welsh-Powell coloring: greedy over a static largest-degree-first order.

use crate::graph::ConflictGraph;
use crate::{log_changes, log_checks, log_debug};

use super::{smallest_free_color, Coloring};

/// Vertices sorted by degree descending.
///
/// Equal degrees visit the larger index first: the order is the reverse of
/// an ascending sort on (degree, vertex).
pub fn visiting_order(graph: &ConflictGraph) -> Vec<usize> {
    let mut keyed: Vec<(usize, usize)> = (0..graph.vertex_count())
        .map(|v| (graph.degree(v), v))
        .collect();
    keyed.sort_unstable_by(|a, b| b.cmp(a));
    keyed.into_iter().map(|(_, v)| v).collect()
}

/// Color `graph` with Welsh-Powell, visiting at most `max_iterations` vertices.
pub fn welsh_powell(graph: &ConflictGraph, max_iterations: usize, verbosity: u8) -> Coloring {
    let order = visiting_order(graph);
    log_debug!(verbosity, "  Welsh-Powell order: {:?}", order);

    let mut colors: Vec<Option<u32>> = vec![None; graph.vertex_count()];
    let mut iterations = 0;

    for &vertex in order.iter().take(max_iterations) {
        log_checks!(
            verbosity,
            "  Welsh-Powell visits event {} (degree={})",
            vertex,
            graph.degree(vertex)
        );
        let color = smallest_free_color(graph, vertex, &colors);
        colors[vertex] = Some(color);
        iterations += 1;
        log_changes!(verbosity, "  Event {} -> slot {}", vertex, color);
    }

    Coloring { colors, iterations }
}
