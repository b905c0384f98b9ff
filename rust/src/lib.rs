//! Rust implementation of the timetable engine: conflict graph, coloring, and metrics.
//!
//! Events (subject, teacher, group) become vertices of a conflict graph; two
//! events sharing a teacher or a group are joined by an edge. A greedy
//! coloring (DSatur or Welsh-Powell) assigns each vertex a timeslot, and the
//! result is scored by the empty slots it leaves in each group's day.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

pub mod coloring;
mod config;
pub mod evaluation;
pub mod graph;
pub mod logging;
mod models;
pub mod scheduler;
pub mod timeslot;

pub use coloring::{Coloring, ColoringStrategy, StrategyError};
pub use config::SchedulingConfig;
pub use graph::ConflictGraph;
pub use models::{Assignment, Conflict, Event, GraphInfo, Metrics};
pub use scheduler::{Scheduler, SchedulerError, SchedulerState};
pub use timeslot::{timeslot_to_day, timeslot_to_time, TimeslotLayout};

impl From<SchedulerError> for PyErr {
    fn from(err: SchedulerError) -> PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

/// Scheduler handle for the Python front-end.
#[pyclass(name = "Scheduler")]
pub struct PyScheduler {
    inner: Scheduler,
}

#[pymethods]
impl PyScheduler {
    /// Create a scheduler.
    ///
    /// # Raises
    /// * ValueError if the strategy is unknown or max_iterations is 0
    #[new]
    #[pyo3(signature = (continuity_weight=10, max_iterations=1000, strategy="DSatur".to_string(), verbosity=0))]
    fn new(
        continuity_weight: u32,
        max_iterations: usize,
        strategy: String,
        verbosity: u8,
    ) -> PyResult<Self> {
        let config = SchedulingConfig {
            strategy,
            max_iterations,
            continuity_weight,
            verbosity,
        };
        Ok(Self {
            inner: Scheduler::new(config)?,
        })
    }

    /// Create a scheduler from a `SchedulingConfig`.
    #[staticmethod]
    fn from_config(config: SchedulingConfig) -> PyResult<Self> {
        Ok(Self {
            inner: Scheduler::new(config)?,
        })
    }

    #[pyo3(signature = (id, subject, teacher, group, hours_needed=0))]
    fn add_event(&mut self, id: u32, subject: String, teacher: String, group: String, hours_needed: u32) {
        self.inner.add_event(id, subject, teacher, group, hours_needed);
    }

    /// Run the pipeline. Returns True on completion, including partial colorings.
    ///
    /// Passing any of `strategy`, `max_iterations`, `continuity_weight`
    /// overrides the stored configuration for this and later runs.
    #[pyo3(signature = (strategy=None, max_iterations=None, continuity_weight=None))]
    fn execute(
        &mut self,
        strategy: Option<String>,
        max_iterations: Option<usize>,
        continuity_weight: Option<u32>,
    ) -> PyResult<bool> {
        if strategy.is_none() && max_iterations.is_none() && continuity_weight.is_none() {
            return Ok(self.inner.execute());
        }
        let current = self.inner.config();
        let strategy = match strategy {
            Some(name) => name.parse::<ColoringStrategy>().map_err(SchedulerError::from)?,
            None => self.inner.strategy(),
        };
        let max_iterations = max_iterations.unwrap_or(current.max_iterations);
        let continuity_weight = continuity_weight.unwrap_or(current.continuity_weight);
        Ok(self
            .inner
            .execute_with(strategy, max_iterations, continuity_weight)?)
    }

    fn get_events(&self) -> Vec<Event> {
        self.inner.events().to_vec()
    }

    fn get_assignments(&self) -> Vec<Assignment> {
        self.inner.assignments().to_vec()
    }

    fn get_conflicts(&self) -> Vec<Conflict> {
        self.inner.conflicts().to_vec()
    }

    fn get_metrics(&self) -> Metrics {
        self.inner.metrics().clone()
    }

    fn get_graph_info(&self) -> GraphInfo {
        self.inner.graph_info()
    }

    fn get_adjacency_matrix(&self) -> Vec<Vec<u8>> {
        self.inner.graph().to_adjacency_matrix()
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn __repr__(&self) -> String {
        format!(
            "Scheduler(strategy={:?}, events={}, state={:?})",
            self.inner.strategy().name(),
            self.inner.events().len(),
            self.inner.state()
        )
    }
}

/// Day label ("L", "M", "Mi", "J", "V" or "?") of a timeslot.
#[pyfunction]
#[pyo3(name = "timeslot_to_day")]
fn py_timeslot_to_day(slot: u32) -> String {
    timeslot_to_day(slot)
}

/// Start time "HH:MM" of a timeslot.
#[pyfunction]
#[pyo3(name = "timeslot_to_time", signature = (slot, block_minutes=timeslot::DEFAULT_BLOCK_MINUTES))]
fn py_timeslot_to_time(slot: u32, block_minutes: u32) -> String {
    timeslot_to_time(slot, block_minutes)
}

/// The horarium.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Event>()?;
    m.add_class::<Conflict>()?;
    m.add_class::<Assignment>()?;
    m.add_class::<Metrics>()?;
    m.add_class::<GraphInfo>()?;

    // Config and engine
    m.add_class::<SchedulingConfig>()?;
    m.add_class::<PyScheduler>()?;

    // Timeslot mapping
    m.add_function(wrap_pyfunction!(py_timeslot_to_day, m)?)?;
    m.add_function(wrap_pyfunction!(py_timeslot_to_time, m)?)?;
    m.add("TOTAL_TIMESLOTS", TimeslotLayout::default().total_timeslots())?;

    Ok(())
}
