//! Lifecycle of a scheduler instance.

/// Where a `Scheduler` is in its `Empty -> EventsLoaded -> Executed` cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SchedulerState {
    /// No events; initial state and the state after `reset`.
    #[default]
    Empty,
    /// At least one event added since the last reset.
    EventsLoaded,
    /// Results of the last `execute` are available.
    Executed,
}

impl SchedulerState {
    /// State after adding an event.
    pub fn on_event_added(self) -> Self {
        Self::EventsLoaded
    }

    /// Results are readable.
    pub fn has_results(self) -> bool {
        self == Self::Executed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let state = SchedulerState::default();
        assert_eq!(state, SchedulerState::Empty);
        assert!(!state.has_results());

        let loaded = state.on_event_added();
        assert_eq!(loaded, SchedulerState::EventsLoaded);
        // a new event makes the last results stale
        assert_eq!(
            SchedulerState::Executed.on_event_added(),
            SchedulerState::EventsLoaded
        );
        assert!(SchedulerState::Executed.has_results());
    }
}
