//! DSatur (degree of saturation) coloring.
//!
//! Brélaz (1979), "New methods to color the vertices of a graph".

use rustc_hash::FxHashSet;

use crate::graph::ConflictGraph;
use crate::{log_changes, log_checks};

use super::{smallest_free_color, Coloring};

/// Number of distinct colors among the colored neighbors of `vertex`.
fn saturation(graph: &ConflictGraph, vertex: usize, colors: &[Option<u32>]) -> usize {
    graph
        .neighbors(vertex)
        .filter_map(|n| colors.get(n).copied().flatten())
        .collect::<FxHashSet<u32>>()
        .len()
}

/// Pick the uncolored vertex with the highest (saturation, degree).
///
/// Ties keep the lowest index since only a strictly greater key replaces
/// the current best.
fn select_vertex(graph: &ConflictGraph, colors: &[Option<u32>]) -> Option<(usize, usize, usize)> {
    let mut best: Option<(usize, usize, usize)> = None;
    for (vertex, color) in colors.iter().enumerate() {
        if color.is_some() {
            continue;
        }
        let sat = saturation(graph, vertex, colors);
        let deg = graph.degree(vertex);
        match best {
            Some((_, best_sat, best_deg)) if (sat, deg) <= (best_sat, best_deg) => {}
            _ => best = Some((vertex, sat, deg)),
        }
    }
    best
}

/// Color `graph` with DSatur, spending at most `max_iterations` iterations.
///
/// Each iteration colors exactly one vertex. The loop ends early once every
/// vertex is colored.
pub fn dsatur(graph: &ConflictGraph, max_iterations: usize, verbosity: u8) -> Coloring {
    let n = graph.vertex_count();
    let mut colors: Vec<Option<u32>> = vec![None; n];
    let mut iterations = 0;

    while iterations < max_iterations {
        let Some((vertex, sat, deg)) = select_vertex(graph, &colors) else {
            break;
        };
        log_checks!(
            verbosity,
            "  DSatur picks event {} (saturation={}, degree={})",
            vertex,
            sat,
            deg
        );

        let color = smallest_free_color(graph, vertex, &colors);
        colors[vertex] = Some(color);
        iterations += 1;
        log_changes!(verbosity, "  Event {} -> slot {}", vertex, color);
    }

    Coloring { colors, iterations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::tests::assert_proper;

    #[test]
    fn test_saturation_counts_distinct_colors() {
        let mut graph = ConflictGraph::new(4);
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        graph.add_edge(0, 3);
        let colors = vec![None, Some(1), Some(1), Some(4)];
        assert_eq!(saturation(&graph, 0, &colors), 2);
    }

    #[test]
    fn test_first_pick_is_max_degree() {
        // 2 is the hub
        let mut graph = ConflictGraph::new(4);
        graph.add_edge(2, 0);
        graph.add_edge(2, 1);
        graph.add_edge(2, 3);
        let colors = vec![None; 4];
        assert_eq!(select_vertex(&graph, &colors), Some((2, 0, 3)));
    }

    #[test]
    fn test_tie_keeps_lowest_index() {
        let graph = ConflictGraph::new(3);
        let colors = vec![None; 3];
        assert_eq!(select_vertex(&graph, &colors).map(|b| b.0), Some(0));
    }

    #[test]
    fn test_saturation_beats_degree() {
        // 0-1, 1-2, 3-4, 3-5, 3-6; color 1 first
        let mut graph = ConflictGraph::new(7);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(3, 4);
        graph.add_edge(3, 5);
        graph.add_edge(3, 6);
        let mut colors = vec![None; 7];
        colors[3] = Some(0);
        // 4,5,6 have saturation 1 but degree 1; 1 has degree 2 but saturation 0
        assert_eq!(select_vertex(&graph, &colors).map(|b| b.0), Some(4));
    }

    #[test]
    fn test_odd_cycle_needs_three_colors() {
        let mut graph = ConflictGraph::new(5);
        for v in 0..5 {
            graph.add_edge(v, (v + 1) % 5);
        }
        let coloring = dsatur(&graph, 1000, 0);
        assert!(coloring.is_complete());
        assert_eq!(coloring.iterations, 5);
        assert_eq!(coloring.colors_used(), 3);
        assert_proper(&graph, &coloring);
    }

    #[test]
    fn test_bipartite_uses_two_colors() {
        // K(2,3)
        let mut graph = ConflictGraph::new(5);
        for u in 0..2 {
            for v in 2..5 {
                graph.add_edge(u, v);
            }
        }
        let coloring = dsatur(&graph, 1000, 0);
        assert_eq!(coloring.colors_used(), 2);
        assert_proper(&graph, &coloring);
    }

    #[test]
    fn test_budget_exhaustion_leaves_vertices_uncolored() {
        let mut graph = ConflictGraph::new(4);
        graph.add_edge(0, 1);
        let coloring = dsatur(&graph, 2, 0);
        assert_eq!(coloring.iterations, 2);
        assert_eq!(coloring.uncolored_count(), 2);
        // 0 and 1 have degree 1 and go first
        assert!(coloring.colors[0].is_some());
        assert!(coloring.colors[1].is_some());
        assert_eq!(coloring.colors[2], None);
    }

    #[test]
    fn test_greedy_minimal_colors() {
        let mut graph = ConflictGraph::new(3);
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        let coloring = dsatur(&graph, 1000, 0);
        // 0 first (degree 2), then 1 and 2 both take color 1
        assert_eq!(coloring.colors, vec![Some(0), Some(1), Some(1)]);
    }
}
