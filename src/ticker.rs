use std::time::Duration;

/// Event-loop poll interval in milliseconds. The timer's nominal cadence is
/// one second; polling faster only affects input latency and display
/// freshness, since remaining time is derived from an absolute deadline.
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
        // Never slower than the timer's nominal 1s cadence.
        assert!(duration <= Duration::from_secs(1));
    }
}
