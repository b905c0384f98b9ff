//! Undirected conflict graph over event indices.
//!
//! Vertices are dense indices `0..n`. Out-of-range queries are tolerated:
//! they yield `false`, `0`, or an empty neighbor iterator instead of failing,
//! since indices may come from a stale external mapping.

use std::collections::BTreeSet;
use std::fmt;

/// Conflict graph stored as ordered adjacency sets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConflictGraph {
    adjacency: Vec<BTreeSet<usize>>,
}

impl ConflictGraph {
    /// Create a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); vertex_count],
        }
    }

    /// Insert the undirected edge `u`–`v`.
    ///
    /// No-op for self-loops or out-of-range endpoints. Idempotent.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        let n = self.adjacency.len();
        if u >= n || v >= n || u == v {
            return;
        }
        self.adjacency[u].insert(v);
        self.adjacency[v].insert(u);
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|neighbors| neighbors.contains(&v))
    }

    /// Neighbors of `vertex` in ascending order; empty when out of range.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.get(vertex).into_iter().flatten().copied()
    }

    pub fn degree(&self, vertex: usize) -> usize {
        self.adjacency.get(vertex).map_or(0, BTreeSet::len)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).max().unwrap_or(0)
    }

    /// Mean vertex degree, 0.0 for the empty graph.
    pub fn average_degree(&self) -> f64 {
        if self.adjacency.is_empty() {
            return 0.0;
        }
        let total: usize = self.adjacency.iter().map(BTreeSet::len).sum();
        total as f64 / self.adjacency.len() as f64
    }

    /// Dense n×n 0/1 matrix, for export and debugging.
    pub fn to_adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let n = self.adjacency.len();
        let mut matrix = vec![vec![0u8; n]; n];
        for (i, neighbors) in self.adjacency.iter().enumerate() {
            for &j in neighbors {
                matrix[i][j] = 1;
            }
        }
        matrix
    }
}

impl fmt::Display for ConflictGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, neighbors) in self.adjacency.iter().enumerate() {
            write!(f, "Event {} ->", vertex)?;
            for neighbor in neighbors {
                write!(f, " {}", neighbor)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
