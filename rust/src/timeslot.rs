//! Mapping from timeslot colors to weekday labels and clock times.
//!
//! A color `c` is read as slot `c % slots_per_day` of day `c / slots_per_day`.
//! With the defaults the week has 5 days of 15 blocks of 55 minutes starting
//! at 07:00, i.e. 75 timeslots from "L 07:00" to "V 19:50".

use chrono::{NaiveTime, TimeDelta};

/// Weekday labels, Monday to Friday.
pub const DAY_LABELS: [&str; 5] = ["L", "M", "Mi", "J", "V"];
pub const SLOTS_PER_DAY: u32 = 15;
pub const DEFAULT_BLOCK_MINUTES: u32 = 55;
pub const DAY_START_HOUR: i64 = 7;

/// Label returned for colors past the last configured day.
pub const UNKNOWN_DAY: &str = "?";

const MINUTES_PER_DAY: u64 = 24 * 60;

/// Calendar layout used to render timeslots.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeslotLayout {
    pub slots_per_day: u32,
    pub block_minutes: u32,
    pub day_start: NaiveTime,
    pub day_labels: Vec<String>,
}

impl Default for TimeslotLayout {
    fn default() -> Self {
        Self {
            slots_per_day: SLOTS_PER_DAY,
            block_minutes: DEFAULT_BLOCK_MINUTES,
            day_start: NaiveTime::MIN + TimeDelta::hours(DAY_START_HOUR),
            day_labels: DAY_LABELS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl TimeslotLayout {
    /// Day label for `slot`, or `"?"` beyond the last day.
    pub fn day_label(&self, slot: u32) -> &str {
        if self.slots_per_day == 0 {
            return UNKNOWN_DAY;
        }
        let day = (slot / self.slots_per_day) as usize;
        self.day_labels
            .get(day)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_DAY)
    }

    /// Start time of `slot` as zero-padded "HH:MM" using the layout's block length.
    pub fn start_time(&self, slot: u32) -> String {
        self.start_time_with_block(slot, self.block_minutes)
    }

    /// Start time of `slot` for an explicit block length.
    ///
    /// Times past midnight wrap around the clock.
    pub fn start_time_with_block(&self, slot: u32, block_minutes: u32) -> String {
        let slot_in_day = if self.slots_per_day == 0 {
            0
        } else {
            slot % self.slots_per_day
        };
        // u32 * u32 always fits in u64; only the time of day matters
        let minutes = u64::from(slot_in_day) * u64::from(block_minutes) % MINUTES_PER_DAY;
        let offset = i64::try_from(minutes)
            .ok()
            .and_then(TimeDelta::try_minutes)
            .unwrap_or(TimeDelta::zero());
        (self.day_start + offset).format("%H:%M").to_string()
    }

    /// Number of distinct timeslots in one week, saturating at `u32::MAX`.
    pub fn total_timeslots(&self) -> u32 {
        let days = u32::try_from(self.day_labels.len()).unwrap_or(u32::MAX);
        self.slots_per_day.saturating_mul(days)
    }

    /// Start times of every block of a day, in order.
    pub fn start_times(&self) -> Vec<String> {
        (0..self.slots_per_day).map(|s| self.start_time(s)).collect()
    }
}

/// Day label of `slot` under the default layout.
pub fn timeslot_to_day(slot: u32) -> String {
    TimeslotLayout::default().day_label(slot).to_string()
}

/// Start time of `slot` under the default layout with `block_minutes` blocks.
pub fn timeslot_to_time(slot: u32, block_minutes: u32) -> String {
    TimeslotLayout::default().start_time_with_block(slot, block_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_slot() {
        assert_eq!(timeslot_to_day(0), "L");
        assert_eq!(timeslot_to_time(0, DEFAULT_BLOCK_MINUTES), "07:00");
    }

    #[test]
    fn test_last_slot_of_day() {
        // 07:00 + 14 * 55 min = 19:50
        assert_eq!(timeslot_to_day(14), "L");
        assert_eq!(timeslot_to_time(14, DEFAULT_BLOCK_MINUTES), "19:50");
    }

    #[test]
    fn test_day_rollover() {
        assert_eq!(timeslot_to_day(15), "M");
        assert_eq!(timeslot_to_time(15, DEFAULT_BLOCK_MINUTES), "07:00");
        assert_eq!(timeslot_to_day(31), "Mi");
        assert_eq!(timeslot_to_time(31, DEFAULT_BLOCK_MINUTES), "07:55");
        assert_eq!(timeslot_to_day(74), "V");
    }

    #[test]
    fn test_beyond_week_is_unknown_day() {
        assert_eq!(timeslot_to_day(75), UNKNOWN_DAY);
        assert_eq!(timeslot_to_day(u32::MAX), UNKNOWN_DAY);
        // time still defined
        assert_eq!(timeslot_to_time(75, DEFAULT_BLOCK_MINUTES), "07:00");
    }

    #[test]
    fn test_custom_block_length() {
        assert_eq!(timeslot_to_time(2, 60), "09:00");
        assert_eq!(timeslot_to_time(1, 50), "07:50");
    }

    #[test]
    fn test_start_times_match_week_grid() {
        let layout = TimeslotLayout::default();
        let times = layout.start_times();
        assert_eq!(times.len(), 15);
        assert_eq!(times[0], "07:00");
        assert_eq!(times[6], "12:30");
        assert_eq!(times[14], "19:50");
        assert_eq!(layout.total_timeslots(), 75);
    }

    #[test]
    fn test_zero_slots_per_day_is_tolerated() {
        let layout = TimeslotLayout {
            slots_per_day: 0,
            ..TimeslotLayout::default()
        };
        assert_eq!(layout.day_label(3), UNKNOWN_DAY);
        assert_eq!(layout.start_time(3), "07:00");
    }

    #[test]
    fn test_huge_layout_values_stay_on_the_clock() {
        let layout = TimeslotLayout {
            slots_per_day: u32::MAX,
            block_minutes: u32::MAX,
            ..TimeslotLayout::default()
        };
        for slot in [0, 1, 1_000_000, u32::MAX - 1, u32::MAX] {
            let time = layout.start_time(slot);
            assert_eq!(time.len(), 5, "slot {} rendered as {:?}", slot, time);
            assert_eq!(&time[2..3], ":");
        }
        assert_eq!(layout.start_time(0), "07:00");
        // 1440 minutes is a full turn of the clock
        assert_eq!(timeslot_to_time(1, 1440), "07:00");
        assert_eq!(timeslot_to_time(2, 1450), "07:20");
        assert_eq!(timeslot_to_time(14, u32::MAX), layout.start_time_with_block(14, u32::MAX));
    }

    #[test]
    fn test_total_timeslots_saturates() {
        let layout = TimeslotLayout {
            slots_per_day: u32::MAX,
            ..TimeslotLayout::default()
        };
        assert_eq!(layout.total_timeslots(), u32::MAX);

        let no_days = TimeslotLayout {
            day_labels: Vec::new(),
            ..TimeslotLayout::default()
        };
        assert_eq!(no_days.total_timeslots(), 0);
    }
}
