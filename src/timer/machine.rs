use crate::timer::clock::{Clock, SystemClock};
use crate::timer::config::TimerConfig;
use chrono::{DateTime, Duration, Local};
use std::rc::Rc;
use uuid::Uuid;

/// Timer phase. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Working,
    ShortBreak,
    LongBreak,
    Paused,
}

impl Phase {
    /// Display label for the timer pane
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Ready => "Ready",
            Phase::Working => "Working",
            Phase::ShortBreak => "Short break",
            Phase::LongBreak => "Long break",
            Phase::Paused => "Paused",
        }
    }

    /// Check if this phase counts down against a deadline
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Working | Phase::ShortBreak | Phase::LongBreak)
    }
}

/// Notification delivered synchronously to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Emitted on every tick of an active phase and after each
    /// state-changing command, so observers refresh displayed time
    Tick,
    /// A work interval finished. Carries the new completion count and the
    /// linked task (if any) whose interval tally should be bumped in lockstep
    WorkIntervalCompleted {
        completed: u32,
        linked_task: Option<Uuid>,
    },
    /// A short or long break finished
    BreakCompleted,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Observer = Box<dyn FnMut(&TimerEvent)>;

/// The interval timer state machine.
///
/// Remaining time is always derived from an absolute wall-clock deadline,
/// never decremented per tick, so delayed or coalesced ticks (e.g. the host
/// was suspended) do not accumulate drift: the next tick recomputes the
/// correct remaining time from the deadline.
///
/// All commands are total over the state space. Commands that do not apply
/// in the current phase (start while already working, resume while not
/// paused, pause while ready) are silently ignored — the callers are UI
/// triggers that may race with state.
pub struct IntervalTimer {
    phase: Phase,
    /// Phase that was interrupted by `pause`, restored on resume
    paused_phase: Option<Phase>,
    deadline: Option<DateTime<Local>>,
    /// Derived from `deadline` on every tick; frozen while paused
    remaining_seconds: i64,
    /// Full length of the current phase in seconds, for progress display
    phase_seconds: i64,
    completed_intervals: u32,
    linked_task: Option<Uuid>,
    config: TimerConfig,
    clock: Rc<dyn Clock>,
    observers: Vec<(Subscription, Observer)>,
    next_subscription: u64,
}

impl IntervalTimer {
    pub fn new(config: TimerConfig) -> Self {
        Self::with_clock(config, Rc::new(SystemClock))
    }

    pub fn with_clock(config: TimerConfig, clock: Rc<dyn Clock>) -> Self {
        Self {
            phase: Phase::Ready,
            paused_phase: None,
            deadline: None,
            remaining_seconds: 0,
            phase_seconds: 0,
            completed_intervals: 0,
            linked_task: None,
            config,
            clock,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    pub fn completed_intervals(&self) -> u32 {
        self.completed_intervals
    }

    pub fn linked_task(&self) -> Option<Uuid> {
        self.linked_task
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Register an observer. Observers are called synchronously and in
    /// registration order; they must not block.
    pub fn subscribe<F>(&mut self, handler: F) -> Subscription
    where
        F: FnMut(&TimerEvent) + 'static,
    {
        let id = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(handler)));
        id
    }

    /// Remove a previously registered observer. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.observers.retain(|(id, _)| *id != subscription);
    }

    fn notify(&mut self, event: TimerEvent) {
        for (_, handler) in self.observers.iter_mut() {
            handler(&event);
        }
    }

    /// Start the timer: from `Ready` begins a work interval; from `Paused`
    /// resumes the interrupted phase. Ignored while already counting down.
    pub fn start(&mut self) {
        match self.phase {
            Phase::Ready => self.enter(Phase::Working),
            Phase::Paused => self.resume(),
            _ => {}
        }
    }

    /// Pause the countdown, freezing the remaining time. Ignored unless a
    /// phase is actively counting down.
    ///
    /// Freezing truncates fractional seconds, so repeated pause/resume
    /// cycles can lose up to ~1s per cycle.
    pub fn pause(&mut self) {
        if !self.phase.is_active() {
            return;
        }
        self.remaining_seconds = self.remaining_from_deadline();
        self.paused_phase = Some(self.phase);
        self.phase = Phase::Paused;
        self.deadline = None;
        self.notify(TimerEvent::Tick);
    }

    /// Resume a paused countdown, recomputing the deadline from the frozen
    /// remaining time. Ignored unless paused.
    pub fn resume(&mut self) {
        if self.phase != Phase::Paused {
            return;
        }
        self.phase = self.paused_phase.take().unwrap_or(Phase::Working);
        self.deadline = Some(self.clock.now() + Duration::seconds(self.remaining_seconds));
        self.notify(TimerEvent::Tick);
    }

    /// Stop the countdown and return to `Ready` from any phase. The
    /// completed-interval count is kept.
    pub fn reset(&mut self) {
        self.phase = Phase::Ready;
        self.paused_phase = None;
        self.deadline = None;
        self.remaining_seconds = 0;
        self.phase_seconds = 0;
        self.notify(TimerEvent::Tick);
    }

    /// Link a task to the timer, or unlink with `None`. The id travels with
    /// `WorkIntervalCompleted` events so the task's own interval tally is
    /// bumped in lockstep with the timer's counter.
    pub fn set_linked_task(&mut self, task: Option<Uuid>) {
        self.linked_task = task;
    }

    /// Apply new configuration, validating each field against its bounds.
    /// Out-of-range fields keep their previous value. An in-progress
    /// deadline is never rescaled; new durations take effect on the next
    /// phase start. Returns true if anything changed.
    pub fn update_settings(&mut self, update: TimerConfig) -> bool {
        self.config.apply_update(update)
    }

    /// Advance the countdown. Invoked at a nominal 1-second cadence by the
    /// event loop; extra or delayed invocations are harmless because the
    /// remaining time is recomputed from the absolute deadline. No-op while
    /// `Ready` or `Paused`.
    pub fn tick(&mut self) {
        if !self.phase.is_active() {
            return;
        }

        self.remaining_seconds = self.remaining_from_deadline();

        if self.remaining_seconds <= 0 {
            self.remaining_seconds = 0;

            match self.phase {
                Phase::Working => {
                    self.completed_intervals += 1;
                    let event = TimerEvent::WorkIntervalCompleted {
                        completed: self.completed_intervals,
                        linked_task: self.linked_task,
                    };
                    self.notify(event);

                    // Long break exactly when the count hits a multiple of
                    // the cadence, short break otherwise.
                    if self.completed_intervals % self.config.intervals_until_long_break == 0 {
                        self.enter(Phase::LongBreak);
                    } else {
                        self.enter(Phase::ShortBreak);
                    }
                }
                Phase::ShortBreak | Phase::LongBreak => {
                    self.notify(TimerEvent::BreakCompleted);
                    self.phase = Phase::Ready;
                    self.deadline = None;
                    self.phase_seconds = 0;
                }
                _ => {}
            }
        }

        self.notify(TimerEvent::Tick);
    }

    /// Start a phase: single place where deadlines are computed, so the
    /// derive-remaining-from-deadline invariant is enforced in one spot.
    fn enter(&mut self, phase: Phase) {
        let minutes = match phase {
            Phase::Working => self.config.work_minutes,
            Phase::ShortBreak => self.config.short_break_minutes,
            Phase::LongBreak => self.config.long_break_minutes,
            Phase::Ready | Phase::Paused => return,
        };

        self.phase = phase;
        self.paused_phase = None;
        self.phase_seconds = i64::from(minutes) * 60;
        self.remaining_seconds = self.phase_seconds;
        self.deadline = Some(self.clock.now() + Duration::minutes(i64::from(minutes)));
        self.notify(TimerEvent::Tick);
    }

    fn remaining_from_deadline(&self) -> i64 {
        match self.deadline {
            Some(deadline) => (deadline - self.clock.now()).num_seconds().max(0),
            None => 0,
        }
    }

    /// Remaining time formatted as MM:SS
    pub fn remaining_display(&self) -> String {
        let minutes = self.remaining_seconds / 60;
        let seconds = self.remaining_seconds % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }

    /// Fraction of the current phase already elapsed (0.0..=1.0), for the
    /// progress gauge. Zero while `Ready`.
    pub fn progress_ratio(&self) -> f64 {
        if self.phase_seconds == 0 {
            return 0.0;
        }
        let elapsed = (self.phase_seconds - self.remaining_seconds) as f64;
        (elapsed / self.phase_seconds as f64).clamp(0.0, 1.0)
    }
}
