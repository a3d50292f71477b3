use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Allowed range for the work phase length (minutes)
pub const WORK_MINUTES_RANGE: RangeInclusive<u32> = 1..=60;
/// Allowed range for the short break length (minutes)
pub const SHORT_BREAK_MINUTES_RANGE: RangeInclusive<u32> = 1..=30;
/// Allowed range for the long break length (minutes)
pub const LONG_BREAK_MINUTES_RANGE: RangeInclusive<u32> = 1..=60;
/// Allowed range for the long-break cadence (work intervals per long break)
pub const CADENCE_RANGE: RangeInclusive<u32> = 2..=8;

/// Timer configuration: four bounded fields, persisted as a flat record
/// in settings.json
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
    #[serde(default = "default_cadence")]
    pub intervals_until_long_break: u32,
}

fn default_work_minutes() -> u32 {
    25
}

fn default_short_break_minutes() -> u32 {
    5
}

fn default_long_break_minutes() -> u32 {
    15
}

fn default_cadence() -> u32 {
    4
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
            intervals_until_long_break: default_cadence(),
        }
    }
}

impl TimerConfig {
    /// Apply `update` field by field. Each out-of-range field is rejected
    /// and keeps its previous value; in-range fields are applied.
    ///
    /// This is the single bounds-checking entry point — both the settings
    /// form and the persisted-settings loader go through it, so the
    /// validation rules cannot diverge.
    ///
    /// Returns true if any field changed.
    pub fn apply_update(&mut self, update: TimerConfig) -> bool {
        let mut changed = false;

        if WORK_MINUTES_RANGE.contains(&update.work_minutes) && update.work_minutes != self.work_minutes {
            self.work_minutes = update.work_minutes;
            changed = true;
        }
        if SHORT_BREAK_MINUTES_RANGE.contains(&update.short_break_minutes)
            && update.short_break_minutes != self.short_break_minutes
        {
            self.short_break_minutes = update.short_break_minutes;
            changed = true;
        }
        if LONG_BREAK_MINUTES_RANGE.contains(&update.long_break_minutes)
            && update.long_break_minutes != self.long_break_minutes
        {
            self.long_break_minutes = update.long_break_minutes;
            changed = true;
        }
        if CADENCE_RANGE.contains(&update.intervals_until_long_break)
            && update.intervals_until_long_break != self.intervals_until_long_break
        {
            self.intervals_until_long_break = update.intervals_until_long_break;
            changed = true;
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = TimerConfig::default();
        assert_eq!(config.work_minutes, 25);
        assert_eq!(config.short_break_minutes, 5);
        assert_eq!(config.long_break_minutes, 15);
        assert_eq!(config.intervals_until_long_break, 4);
    }

    #[test]
    fn test_apply_update_in_range() {
        let mut config = TimerConfig::default();
        let changed = config.apply_update(TimerConfig {
            work_minutes: 50,
            short_break_minutes: 10,
            long_break_minutes: 30,
            intervals_until_long_break: 6,
        });

        assert!(changed);
        assert_eq!(config.work_minutes, 50);
        assert_eq!(config.short_break_minutes, 10);
        assert_eq!(config.long_break_minutes, 30);
        assert_eq!(config.intervals_until_long_break, 6);
    }

    #[test]
    fn test_apply_update_rejects_out_of_range_per_field() {
        let mut config = TimerConfig::default();
        // work_minutes 0 and 61 are both out of range; the other fields
        // must still be applied.
        let changed = config.apply_update(TimerConfig {
            work_minutes: 0,
            short_break_minutes: 8,
            long_break_minutes: 61,
            intervals_until_long_break: 5,
        });

        assert!(changed);
        assert_eq!(config.work_minutes, 25);
        assert_eq!(config.short_break_minutes, 8);
        assert_eq!(config.long_break_minutes, 15);
        assert_eq!(config.intervals_until_long_break, 5);
    }

    #[test]
    fn test_apply_update_no_change_returns_false() {
        let mut config = TimerConfig::default();
        assert!(!config.apply_update(TimerConfig::default()));

        // All fields out of range: nothing applied.
        assert!(!config.apply_update(TimerConfig {
            work_minutes: 61,
            short_break_minutes: 31,
            long_break_minutes: 0,
            intervals_until_long_break: 1,
        }));
        assert_eq!(config, TimerConfig::default());
    }

    #[test]
    fn test_cadence_bounds() {
        let mut config = TimerConfig::default();
        config.apply_update(TimerConfig {
            intervals_until_long_break: 2,
            ..TimerConfig::default()
        });
        assert_eq!(config.intervals_until_long_break, 2);

        config.apply_update(TimerConfig {
            intervals_until_long_break: 8,
            ..config
        });
        assert_eq!(config.intervals_until_long_break, 8);

        config.apply_update(TimerConfig {
            intervals_until_long_break: 9,
            ..config
        });
        assert_eq!(config.intervals_until_long_break, 8);
    }

    #[test]
    fn test_deserialize_fills_missing_fields_with_defaults() {
        let config: TimerConfig = serde_json::from_str(r#"{"work_minutes": 30}"#).unwrap();
        assert_eq!(config.work_minutes, 30);
        assert_eq!(config.short_break_minutes, 5);
        assert_eq!(config.long_break_minutes, 15);
        assert_eq!(config.intervals_until_long_break, 4);
    }
}
