//! Core data types for the timetabling engine.

use pyo3::prelude::*;

/// A teaching request: one subject taught by one teacher to one group.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    #[pyo3(get, set)]
    pub id: u32,
    #[pyo3(get, set)]
    pub subject: String,
    #[pyo3(get, set)]
    pub teacher: String,
    #[pyo3(get, set)]
    pub group: String,
    /// Informational only; the coloring does not consume it.
    #[pyo3(get, set)]
    pub hours_needed: u32,
    /// Timeslot written back by the last run, `None` when unassigned.
    #[pyo3(get)]
    pub color: Option<u32>,
}

impl Event {
    pub fn new(
        id: u32,
        subject: impl Into<String>,
        teacher: impl Into<String>,
        group: impl Into<String>,
        hours_needed: u32,
    ) -> Self {
        Self {
            id,
            subject: subject.into(),
            teacher: teacher.into(),
            group: group.into(),
            hours_needed,
            color: None,
        }
    }
}

#[pymethods]
impl Event {
    #[new]
    #[pyo3(signature = (id, subject, teacher, group, hours_needed=0))]
    fn py_new(id: u32, subject: String, teacher: String, group: String, hours_needed: u32) -> Self {
        Self::new(id, subject, teacher, group, hours_needed)
    }

    fn __repr__(&self) -> String {
        format!(
            "Event(id={}, subject={:?}, teacher={:?}, group={:?}, color={:?})",
            self.id, self.subject, self.teacher, self.group, self.color
        )
    }
}

/// Two events that must not share a timeslot.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conflict {
    #[pyo3(get)]
    pub event1_id: usize,
    #[pyo3(get)]
    pub event2_id: usize,
    /// "same teacher: X" or "same group: Y"
    #[pyo3(get)]
    pub reason: String,
}

#[pymethods]
impl Conflict {
    fn __repr__(&self) -> String {
        format!(
            "Conflict({}, {}, reason={:?})",
            self.event1_id, self.event2_id, self.reason
        )
    }
}

/// Timeslot placement of one event.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    #[pyo3(get)]
    pub event_id: usize,
    #[pyo3(get)]
    pub timeslot: u32,
    #[pyo3(get)]
    pub day: String,
    #[pyo3(get)]
    pub time: String,
}

#[pymethods]
impl Assignment {
    fn __repr__(&self) -> String {
        format!(
            "Assignment(event_id={}, timeslot={}, day={:?}, time={:?})",
            self.event_id, self.timeslot, self.day, self.time
        )
    }
}

/// Outcome measures of one `execute` run.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metrics {
    #[pyo3(get)]
    pub execution_time_ms: f64,
    /// Iterations consumed by the coloring pass.
    #[pyo3(get)]
    pub iterations: usize,
    /// Distinct timeslots used.
    #[pyo3(get)]
    pub colors_used: usize,
    #[pyo3(get)]
    pub total_conflicts: usize,
    #[pyo3(get)]
    pub gap_penalty: u64,
    /// 0..=100, lowered by gap penalty.
    #[pyo3(get)]
    pub quality: f64,
}

#[pymethods]
impl Metrics {
    fn __repr__(&self) -> String {
        format!(
            "Metrics(iterations={}, colors_used={}, conflicts={}, gap_penalty={}, quality={:.2})",
            self.iterations, self.colors_used, self.total_conflicts, self.gap_penalty, self.quality
        )
    }
}

/// Summary statistics of the conflict graph.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphInfo {
    #[pyo3(get)]
    pub nodes: usize,
    #[pyo3(get)]
    pub edges: usize,
    #[pyo3(get)]
    pub max_degree: usize,
    #[pyo3(get)]
    pub average_degree: f64,
}

#[pymethods]
impl GraphInfo {
    fn __repr__(&self) -> String {
        format!(
            "GraphInfo(nodes={}, edges={}, max_degree={}, average_degree={:.2})",
            self.nodes, self.edges, self.max_degree, self.average_degree
        )
    }
}
