//! Configuration types for the timetabling engine.

use pyo3::prelude::*;

/// Configuration for strategy selection and run parameters.
#[pyclass]
#[derive(Clone, Debug)]
pub struct SchedulingConfig {
    /// Coloring strategy: "DSatur" or "Welsh-Powell"
    #[pyo3(get, set)]
    pub strategy: String,
    /// Upper bound on coloring iterations; vertices left over stay unassigned
    #[pyo3(get, set)]
    pub max_iterations: usize,
    /// Penalty per empty slot between two classes of the same group
    #[pyo3(get, set)]
    pub continuity_weight: u32,
    /// Logging verbosity (0 = silent .. 3 = debug)
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            strategy: "DSatur".to_string(),
            max_iterations: 1000,
            continuity_weight: 10,
            verbosity: 0,
        }
    }
}

#[pymethods]
impl SchedulingConfig {
    #[new]
    #[pyo3(signature = (
        strategy=None,
        max_iterations=None,
        continuity_weight=None,
        verbosity=None
    ))]
    fn new(
        strategy: Option<String>,
        max_iterations: Option<usize>,
        continuity_weight: Option<u32>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            strategy: strategy.unwrap_or(defaults.strategy),
            max_iterations: max_iterations.unwrap_or(defaults.max_iterations),
            continuity_weight: continuity_weight.unwrap_or(defaults.continuity_weight),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SchedulingConfig(strategy={:?}, max_iterations={}, continuity_weight={})",
            self.strategy, self.max_iterations, self.continuity_weight
        )
    }
}
