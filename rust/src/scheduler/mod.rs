//! Scheduler module: conflict detection and the execute pipeline.
//!
//! The pipeline is `catalog -> conflict graph -> coloring -> assignments -> metrics`,
//! rebuilt from scratch on every `execute`.

mod conflicts;
mod core;
mod state;

pub use conflicts::{build_conflict_graph, events_conflict};
pub use core::{Scheduler, SchedulerError};
pub use state::SchedulerState;
