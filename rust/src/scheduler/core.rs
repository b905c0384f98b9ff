//! Scheduler orchestrating conflict detection, coloring, and evaluation.

use std::time::Instant;
use thiserror::Error;

use crate::coloring::{ColoringStrategy, StrategyError};
use crate::config::SchedulingConfig;
use crate::evaluation::{gap_penalty, quality_score};
use crate::graph::ConflictGraph;
use crate::models::{Assignment, Conflict, Event, GraphInfo, Metrics};
use crate::timeslot::TimeslotLayout;
use crate::{log_changes, log_checks};

use super::conflicts::build_conflict_graph;
use super::state::SchedulerState;

/// Errors that can occur while configuring the scheduler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("Unknown coloring strategy: {0}")]
    UnknownStrategy(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<StrategyError> for SchedulerError {
    fn from(err: StrategyError) -> Self {
        match err {
            StrategyError::UnknownStrategy(s) => SchedulerError::UnknownStrategy(s),
        }
    }
}

/// Timetabling scheduler: owns the event catalog and the results of the last run.
#[derive(Debug)]
pub struct Scheduler {
    // Input data
    events: Vec<Event>,
    config: SchedulingConfig,
    strategy: ColoringStrategy,
    layout: TimeslotLayout,

    // Rebuilt on every execute
    graph: ConflictGraph,
    conflicts: Vec<Conflict>,
    assignments: Vec<Assignment>,
    metrics: Metrics,

    state: SchedulerState,
}

impl Scheduler {
    /// Create a scheduler, validating the configuration upfront.
    pub fn new(config: SchedulingConfig) -> Result<Self, SchedulerError> {
        let strategy = validate_config(&config)?;
        Ok(Self {
            events: Vec::new(),
            config,
            strategy,
            layout: TimeslotLayout::default(),
            graph: ConflictGraph::default(),
            conflicts: Vec::new(),
            assignments: Vec::new(),
            metrics: Metrics::default(),
            state: SchedulerState::Empty,
        })
    }

    /// Replace the calendar layout used to label assignments.
    pub fn with_layout(mut self, layout: TimeslotLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Add an event to the catalog. Duplicate ids are accepted as distinct entries.
    pub fn add_event(
        &mut self,
        id: u32,
        subject: impl Into<String>,
        teacher: impl Into<String>,
        group: impl Into<String>,
        hours_needed: u32,
    ) {
        self.push_event(Event::new(id, subject, teacher, group, hours_needed));
    }

    /// Add a caller-built event; any color it carries is cleared.
    pub fn push_event(&mut self, mut event: Event) {
        event.color = None;
        self.events.push(event);
        self.state = self.state.on_event_added();
    }

    /// Run the pipeline with the configured strategy and parameters.
    ///
    /// Always returns `true`; events that could not be colored within the
    /// iteration budget are reported through the metrics, not as a failure.
    pub fn execute(&mut self) -> bool {
        let start = Instant::now();
        let verbosity = self.config.verbosity;
        log_changes!(
            verbosity,
            "Executing {} on {} events (max_iterations={}, continuity_weight={})",
            self.strategy.name(),
            self.events.len(),
            self.config.max_iterations,
            self.config.continuity_weight
        );

        // Phase 1: conflict graph (previous graph is dropped)
        let (graph, conflicts) = build_conflict_graph(&self.events, verbosity);
        self.graph = graph;
        self.conflicts = conflicts;
        log_checks!(
            verbosity,
            "Conflict graph: {} nodes, {} edges",
            self.graph.vertex_count(),
            self.graph.edge_count()
        );

        // Phase 2: coloring
        let coloring = self
            .strategy
            .color(&self.graph, self.config.max_iterations, verbosity);

        // Phase 3: assignments
        self.assignments.clear();
        for (index, (event, color)) in self.events.iter_mut().zip(&coloring.colors).enumerate() {
            event.color = *color;
            if let Some(slot) = *color {
                self.assignments.push(Assignment {
                    event_id: index,
                    timeslot: slot,
                    day: self.layout.day_label(slot).to_string(),
                    time: self.layout.start_time(slot),
                });
            }
        }

        // Phase 4: metrics
        let penalty = gap_penalty(
            &self.events,
            &coloring.colors,
            self.config.continuity_weight,
        );
        self.metrics = Metrics {
            execution_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            iterations: coloring.iterations,
            colors_used: coloring.colors_used(),
            total_conflicts: self.conflicts.len(),
            gap_penalty: penalty,
            quality: quality_score(penalty),
        };
        self.state = SchedulerState::Executed;

        log_changes!(
            verbosity,
            "Done: {} assigned, {} unassigned, {} slots, gap penalty {}, quality {:.2}",
            self.assignments.len(),
            coloring.uncolored_count(),
            self.metrics.colors_used,
            self.metrics.gap_penalty,
            self.metrics.quality
        );
        true
    }

    /// Run the pipeline with explicit parameters, keeping them for later runs.
    pub fn execute_with(
        &mut self,
        strategy: ColoringStrategy,
        max_iterations: usize,
        continuity_weight: u32,
    ) -> Result<bool, SchedulerError> {
        let config = SchedulingConfig {
            strategy: strategy.name().to_string(),
            max_iterations,
            continuity_weight,
            verbosity: self.config.verbosity,
        };
        self.strategy = validate_config(&config)?;
        self.config = config;
        Ok(self.execute())
    }

    /// Discard catalog, graph, and results.
    pub fn reset(&mut self) {
        self.events.clear();
        self.graph = ConflictGraph::default();
        self.conflicts.clear();
        self.assignments.clear();
        self.metrics = Metrics::default();
        self.state = SchedulerState::Empty;
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn graph(&self) -> &ConflictGraph {
        &self.graph
    }

    /// Size and degree statistics of the current conflict graph.
    pub fn graph_info(&self) -> GraphInfo {
        GraphInfo {
            nodes: self.graph.vertex_count(),
            edges: self.graph.edge_count(),
            max_degree: self.graph.max_degree(),
            average_degree: self.graph.average_degree(),
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn config(&self) -> &SchedulingConfig {
        &self.config
    }

    pub fn strategy(&self) -> ColoringStrategy {
        self.strategy
    }

    pub fn layout(&self) -> &TimeslotLayout {
        &self.layout
    }
}

fn validate_config(config: &SchedulingConfig) -> Result<ColoringStrategy, SchedulerError> {
    if config.max_iterations == 0 {
        return Err(SchedulerError::InvalidConfig(
            "max_iterations must be positive".to_string(),
        ));
    }
    Ok(config.strategy.parse::<ColoringStrategy>()?)
}
