pub mod clock;
pub mod config;
pub mod machine;

pub use clock::{Clock, SystemClock};
pub use config::{
    TimerConfig, CADENCE_RANGE, LONG_BREAK_MINUTES_RANGE, SHORT_BREAK_MINUTES_RANGE,
    WORK_MINUTES_RANGE,
};
pub use machine::{IntervalTimer, Phase, Subscription, TimerEvent};
