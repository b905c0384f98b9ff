//! Greedy graph coloring strategies.
//!
//! Implements two interchangeable heuristics over a `ConflictGraph`:
//! - `DSatur`: dynamic order by saturation, then degree
//! - `Welsh-Powell`: static order by degree
//!
//! Both give each visited vertex the smallest color not already used by its
//! colored neighbors, and both stop once the iteration budget is spent.
//! Vertices not reached stay uncolored (`None`).

mod dsatur;
mod welsh_powell;

use rustc_hash::FxHashSet;
use std::str::FromStr;

use crate::graph::ConflictGraph;

pub use dsatur::dsatur;
pub use welsh_powell::welsh_powell;

/// Available coloring heuristics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColoringStrategy {
    #[default]
    DSatur,
    WelshPowell,
}

impl ColoringStrategy {
    /// Name accepted by `FromStr` and shown in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DSatur => "DSatur",
            Self::WelshPowell => "Welsh-Powell",
        }
    }

    /// Color `graph` with this strategy.
    pub fn color(&self, graph: &ConflictGraph, max_iterations: usize, verbosity: u8) -> Coloring {
        match self {
            Self::DSatur => dsatur(graph, max_iterations, verbosity),
            Self::WelshPowell => welsh_powell(graph, max_iterations, verbosity),
        }
    }
}

/// Error parsing a strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    UnknownStrategy(String),
}

impl std::fmt::Display for StrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStrategy(s) => write!(
                f,
                "Unknown coloring strategy: {} (expected \"DSatur\" or \"Welsh-Powell\")",
                s
            ),
        }
    }
}

impl std::error::Error for StrategyError {}

impl FromStr for ColoringStrategy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DSatur" => Ok(Self::DSatur),
            "Welsh-Powell" => Ok(Self::WelshPowell),
            other => Err(StrategyError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Result of a coloring pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coloring {
    /// Color per vertex; `None` when the budget ran out first.
    pub colors: Vec<Option<u32>>,
    /// Iterations consumed (one per colored vertex).
    pub iterations: usize,
}

impl Coloring {
    /// Number of distinct colors in use.
    pub fn colors_used(&self) -> usize {
        self.colors
            .iter()
            .flatten()
            .collect::<FxHashSet<_>>()
            .len()
    }

    pub fn uncolored_count(&self) -> usize {
        self.colors.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.uncolored_count() == 0
    }
}

/// Smallest color not held by any colored neighbor of `vertex`.
fn smallest_free_color(graph: &ConflictGraph, vertex: usize, colors: &[Option<u32>]) -> u32 {
    let taken: FxHashSet<u32> = graph
        .neighbors(vertex)
        .filter_map(|n| colors.get(n).copied().flatten())
        .collect();
    (0..).find(|c| !taken.contains(c)).unwrap_or(0)
}
