//! Conflict detection and conflict-graph construction.

use rustc_hash::FxHashMap;

use crate::graph::ConflictGraph;
use crate::log_debug;
use crate::models::{Conflict, Event};

/// Dense id per event for one name column (teachers or groups).
///
/// Ids follow first-seen order. Returns the ids and the number of distinct names.
fn name_ids<'a>(names: impl Iterator<Item = &'a str>) -> (Vec<u32>, usize) {
    let mut seen: FxHashMap<&'a str, u32> = FxHashMap::default();
    let ids = names
        .map(|name| {
            let next = seen.len() as u32;
            *seen.entry(name).or_insert(next)
        })
        .collect();
    (ids, seen.len())
}

/// Whether two events may not share a timeslot.
pub fn events_conflict(a: &Event, b: &Event) -> bool {
    a.teacher == b.teacher || a.group == b.group
}

/// Human-readable reason; the teacher explanation wins when both apply.
fn conflict_reason(a: &Event, b: &Event) -> String {
    if a.teacher == b.teacher {
        format!("same teacher: {}", a.teacher)
    } else {
        format!("same group: {}", a.group)
    }
}

/// Build the conflict graph and conflict list for `events`.
///
/// Compares every unordered pair once (O(n²)); conflicts are listed in
/// (i, j) lexicographic order with `i < j`.
pub fn build_conflict_graph(events: &[Event], verbosity: u8) -> (ConflictGraph, Vec<Conflict>) {
    // integer comparisons in the pair scan
    let (teachers, teacher_count) = name_ids(events.iter().map(|e| e.teacher.as_str()));
    let (groups, group_count) = name_ids(events.iter().map(|e| e.group.as_str()));

    let mut graph = ConflictGraph::new(events.len());
    let mut conflicts = Vec::new();

    for i in 0..events.len() {
        for j in (i + 1)..events.len() {
            if teachers[i] != teachers[j] && groups[i] != groups[j] {
                continue;
            }
            graph.add_edge(i, j);
            let reason = conflict_reason(&events[i], &events[j]);
            log_debug!(verbosity, "  Conflict {}-{}: {}", i, j, reason);
            conflicts.push(Conflict {
                event1_id: i,
                event2_id: j,
                reason,
            });
        }
    }

    log_debug!(
        verbosity,
        "  {} teachers, {} groups, {} conflicts",
        teacher_count,
        group_count,
        conflicts.len()
    );

    (graph, conflicts)
}
