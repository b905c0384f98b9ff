//! Schedule quality: gap penalty per group and the derived quality score.
//!
//! For each group the assigned slots are sorted and every empty slot
//! between two consecutive classes costs `continuity_weight`. Day
//! boundaries are not treated specially: slot 14 followed by slot 15 is
//! gap-free, slot 14 followed by slot 16 has one gap.

use rustc_hash::FxHashMap;

use crate::models::Event;

/// Quality of a gap-free schedule.
pub const MAX_QUALITY: f64 = 100.0;
/// Quality lost per unit of gap penalty.
pub const QUALITY_PER_PENALTY: f64 = 0.1;

/// Sorted assigned slots per group. Unassigned events are skipped.
pub fn group_slots<'a>(events: &'a [Event], colors: &[Option<u32>]) -> FxHashMap<&'a str, Vec<u32>> {
    let mut slots: FxHashMap<&str, Vec<u32>> = FxHashMap::default();
    for (event, color) in events.iter().zip(colors) {
        if let Some(slot) = color {
            slots.entry(event.group.as_str()).or_default().push(*slot);
        }
    }
    for list in slots.values_mut() {
        list.sort_unstable();
    }
    slots
}

/// Penalty of one group's sorted slot list.
pub fn slot_gaps_penalty(sorted_slots: &[u32], continuity_weight: u32) -> u64 {
    sorted_slots
        .windows(2)
        .map(|pair| u64::from(pair[1].saturating_sub(pair[0]).saturating_sub(1)))
        .map(|gap| gap * u64::from(continuity_weight))
        .sum()
}

/// Total gap penalty over all groups.
pub fn gap_penalty(events: &[Event], colors: &[Option<u32>], continuity_weight: u32) -> u64 {
    group_slots(events, colors)
        .values()
        .map(|slots| slot_gaps_penalty(slots, continuity_weight))
        .sum()
}

/// `max(0, 100 - penalty * 0.1)`.
pub fn quality_score(gap_penalty: u64) -> f64 {
    (MAX_QUALITY - gap_penalty as f64 * QUALITY_PER_PENALTY).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(id: u32, teacher: &str, group: &str) -> Event {
        Event::new(id, format!("subject {id}"), teacher, group, 4)
    }

    #[test]
    fn test_gap_between_non_adjacent_slots() {
        // [2, 3, 7]: only 3 -> 7 leaves 3 empty slots
        assert_eq!(slot_gaps_penalty(&[2, 3, 7], 10), 30);
        assert_eq!(slot_gaps_penalty(&[2, 3, 7], 1), 3);
    }

    #[test]
    fn test_short_lists_have_no_penalty() {
        assert_eq!(slot_gaps_penalty(&[], 10), 0);
        assert_eq!(slot_gaps_penalty(&[40], 10), 0);
    }

    #[test]
    fn test_duplicate_slots_are_not_gaps() {
        assert_eq!(slot_gaps_penalty(&[5, 5, 6], 10), 0);
    }

    #[test]
    fn test_day_boundary_is_numeric() {
        assert_eq!(slot_gaps_penalty(&[14, 15], 10), 0);
        assert_eq!(slot_gaps_penalty(&[14, 16], 10), 10);
    }

    #[test]
    fn test_penalty_per_group_ignores_unassigned() {
        let events = vec![
            make_event(0, "T1", "G1"),
            make_event(1, "T2", "G1"),
            make_event(2, "T3", "G1"),
            make_event(3, "T4", "G2"),
            make_event(4, "T5", "G2"),
        ];
        // G1: [7, 2] unsorted + one unassigned; G2: [0, 1]
        let colors = vec![Some(7), None, Some(2), Some(0), Some(1)];

        let slots = group_slots(&events, &colors);
        assert_eq!(slots["G1"], vec![2, 7]);
        assert_eq!(slots["G2"], vec![0, 1]);

        assert_eq!(gap_penalty(&events, &colors, 10), 40);
        assert_eq!(gap_penalty(&events, &colors, 0), 0);
    }

    #[test]
    fn test_quality_score() {
        assert!((quality_score(0) - 100.0).abs() < 1e-10);
        assert!((quality_score(40) - 96.0).abs() < 1e-10);
        assert!(quality_score(1000).abs() < 1e-10);
        assert_eq!(quality_score(5000), 0.0);
    }
}
