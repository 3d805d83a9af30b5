//! Delayed interval score counter.
//!
//! ```text
//!            start()              delay fires           value == target
//!   Idle ───────────────▶ Pending ───────────▶ Counting ───────────────▶ Done
//!    ▲                       │                    │                        │
//!    └──────── reset() ──────┴────────────────────┴────────────────────────┘
//! ```
//!
//! Timer handles live inside the phase they belong to, so leaving a phase
//! (by transition, `reset()` or drop) cancels its timer.

use crate::scheduler::{CancelHandle, Scheduler};
use crate::score::Score;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Timing and range of the count-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterConfig {
    /// Final value; the counter stops exactly here.
    pub target: Score,
    /// Added on every tick. Must be non-zero.
    pub increment: Score,
    /// Wait between `start()` and the first tick period.
    pub initial_delay: Duration,
    /// Time between ticks. Must be non-zero.
    pub tick_period: Duration,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            target: Score::from_tenths(85),
            increment: Score::from_tenths(1),
            initial_delay: Duration::from_millis(300),
            tick_period: Duration::from_millis(20),
        }
    }
}

/// Observable phase of a [`ScoreCounter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterPhase {
    /// At zero, no timers.
    Idle,
    /// Waiting for the initial delay.
    Pending,
    /// Ticking.
    Counting,
    /// Reached the target; no timers.
    Done,
}

enum Phase {
    Idle,
    Pending { _timer: CancelHandle },
    Counting { _timer: CancelHandle },
    Done,
}

impl Phase {
    fn public(&self) -> CounterPhase {
        match self {
            Phase::Idle => CounterPhase::Idle,
            Phase::Pending { .. } => CounterPhase::Pending,
            Phase::Counting { .. } => CounterPhase::Counting,
            Phase::Done => CounterPhase::Done,
        }
    }
}

struct CounterState {
    config: CounterConfig,
    value: Cell<Score>,
    phase: RefCell<Phase>,
    listener: RefCell<Option<Rc<dyn Fn(Score)>>>,
}

impl CounterState {
    /// Swap the phase; the old phase (and its timer) is dropped after the borrow ends.
    fn enter(&self, next: Phase) {
        tracing::debug!(from = ?self.phase.borrow().public(), to = ?next.public(), "score counter");
        let previous = std::mem::replace(&mut *self.phase.borrow_mut(), next);
        drop(previous);
    }

    fn set_value(&self, value: Score) {
        if self.value.replace(value) == value {
            return;
        }
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(value);
        }
    }

    fn tick(&self) {
        if !matches!(*self.phase.borrow(), Phase::Counting { .. }) {
            return;
        }
        let next = self.value.get().saturating_add(self.config.increment);
        tracing::trace!(value = %next, "score tick");
        if next >= self.config.target {
            self.enter(Phase::Done);
            self.set_value(self.config.target);
        } else {
            self.set_value(next);
        }
    }
}

/// Animates a score from 0 to a fixed target: wait, then step on an interval.
pub struct ScoreCounter<S: Scheduler> {
    scheduler: S,
    state: Rc<CounterState>,
}

impl<S: Scheduler> ScoreCounter<S> {
    /// Idle counter at zero.
    pub fn new(config: CounterConfig, scheduler: S) -> Self {
        Self {
            scheduler,
            state: Rc::new(CounterState {
                config,
                value: Cell::new(Score::ZERO),
                phase: RefCell::new(Phase::Idle),
                listener: RefCell::new(None),
            }),
        }
    }

    /// Reset to zero and schedule the initial delay. Restarts if already running.
    pub fn start(&self) {
        self.state.enter(Phase::Idle);
        self.state.set_value(Score::ZERO);

        let weak = Rc::downgrade(&self.state);
        let scheduler = self.scheduler.clone();
        let delay = self.scheduler.set_timeout(
            self.state.config.initial_delay,
            Box::new(move || begin_counting(&weak, &scheduler)),
        );
        self.state.enter(Phase::Pending { _timer: delay });
    }

    /// Cancel any timer and return to zero.
    pub fn reset(&self) {
        self.state.enter(Phase::Idle);
        self.state.set_value(Score::ZERO);
    }

    /// Current value.
    pub fn value(&self) -> Score {
        self.state.value.get()
    }

    /// Current phase.
    pub fn phase(&self) -> CounterPhase {
        self.state.phase.borrow().public()
    }

    /// Configuration in use.
    pub fn config(&self) -> CounterConfig {
        self.state.config
    }

    /// Receives every value change, after internal state is updated.
    pub fn on_change(&self, listener: impl Fn(Score) + 'static) {
        *self.state.listener.borrow_mut() = Some(Rc::new(listener));
    }
}

fn begin_counting<S: Scheduler>(weak: &Weak<CounterState>, scheduler: &S) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    if !matches!(*state.phase.borrow(), Phase::Pending { .. }) {
        return;
    }
    let tick_target = Rc::downgrade(&state);
    let interval = scheduler.set_interval(
        state.config.tick_period,
        Box::new(move || {
            if let Some(state) = tick_target.upgrade() {
                state.tick();
            }
        }),
    );
    state.enter(Phase::Counting { _timer: interval });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualClock;
    use pretty_assertions::assert_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn recording(counter: &ScoreCounter<ManualClock>) -> Rc<RefCell<Vec<Score>>> {
        let seen: Rc<RefCell<Vec<Score>>> = Rc::default();
        let sink = seen.clone();
        counter.on_change(move |score| sink.borrow_mut().push(score));
        seen
    }

    #[test]
    fn nothing_changes_before_initial_delay() {
        let clock = ManualClock::new();
        let counter = ScoreCounter::new(CounterConfig::default(), clock.clone());
        counter.start();

        clock.advance(ms(300));
        assert_eq!(counter.phase(), CounterPhase::Counting);
        assert_eq!(counter.value(), Score::ZERO);

        clock.advance(ms(19));
        assert_eq!(counter.value(), Score::ZERO);
        clock.advance(ms(1));
        assert_eq!(counter.value(), Score::from_tenths(1));
    }

    #[test]
    fn steps_by_increment_every_period() {
        let clock = ManualClock::new();
        let counter = ScoreCounter::new(CounterConfig::default(), clock.clone());
        counter.start();
        clock.advance(ms(300));

        for expected in 1..=10 {
            clock.advance(ms(20));
            assert_eq!(counter.value(), Score::from_tenths(expected));
        }
        assert_eq!(counter.value().to_string(), "1.0");
    }

    #[test]
    fn stops_exactly_at_target() {
        let clock = ManualClock::new();
        let counter = ScoreCounter::new(CounterConfig::default(), clock.clone());
        let seen = recording(&counter);
        counter.start();

        clock.advance(ms(300 + 85 * 20));
        assert_eq!(counter.phase(), CounterPhase::Done);
        assert_eq!(counter.value(), Score::from_tenths(85));
        assert_eq!(clock.active_timers(), 0);

        clock.advance(ms(1000));
        let seen = seen.borrow();
        let tail: Vec<String> = seen.iter().rev().take(2).rev().map(|s| s.to_string()).collect();
        assert_eq!(tail, vec!["8.4", "8.5"]);
        assert!(seen.iter().all(|s| *s <= Score::from_tenths(85)));
    }

    #[test]
    fn overshooting_step_clamps_to_target() {
        let clock = ManualClock::new();
        let config = CounterConfig {
            target: Score::from_tenths(10),
            increment: Score::from_tenths(3),
            ..CounterConfig::default()
        };
        let counter = ScoreCounter::new(config, clock.clone());
        let seen = recording(&counter);
        counter.start();
        clock.advance(ms(1000));

        let values: Vec<u32> = seen.borrow().iter().map(|s| s.tenths()).collect();
        assert_eq!(values, vec![3, 6, 9, 10]);
    }

    #[test]
    fn reset_cancels_pending_delay() {
        let clock = ManualClock::new();
        let counter = ScoreCounter::new(CounterConfig::default(), clock.clone());
        counter.start();
        clock.advance(ms(150));
        counter.reset();

        assert_eq!(clock.active_timers(), 0);
        clock.advance(ms(5000));
        assert_eq!(counter.phase(), CounterPhase::Idle);
        assert_eq!(counter.value(), Score::ZERO);
    }

    #[test]
    fn reset_cancels_running_interval() {
        let clock = ManualClock::new();
        let counter = ScoreCounter::new(CounterConfig::default(), clock.clone());
        counter.start();
        clock.advance(ms(400));
        assert_eq!(counter.value(), Score::from_tenths(5));

        counter.reset();
        assert_eq!(counter.value(), Score::ZERO);
        clock.advance(ms(5000));
        assert_eq!(counter.value(), Score::ZERO);
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn restart_begins_again_from_delay() {
        let clock = ManualClock::new();
        let counter = ScoreCounter::new(CounterConfig::default(), clock.clone());
        counter.start();
        clock.advance(ms(3000));
        assert_eq!(counter.phase(), CounterPhase::Done);

        counter.reset();
        counter.start();
        assert_eq!(counter.value(), Score::ZERO);
        clock.advance(ms(300));
        assert_eq!(counter.value(), Score::ZERO);
        clock.advance(ms(20));
        assert_eq!(counter.value(), Score::from_tenths(1));
        assert_eq!(clock.active_timers(), 1);
    }

    #[test]
    fn dropping_counter_cancels_timers() {
        let clock = ManualClock::new();
        let counter = ScoreCounter::new(CounterConfig::default(), clock.clone());
        counter.start();
        clock.advance(ms(350));
        assert_eq!(clock.active_timers(), 1);

        drop(counter);
        assert_eq!(clock.active_timers(), 0);
        clock.advance(ms(5000));
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let clock = ManualClock::new();
        let config = CounterConfig {
            target: Score::ZERO,
            ..CounterConfig::default()
        };
        let counter = ScoreCounter::new(config, clock.clone());
        counter.start();
        clock.advance(ms(320));
        assert_eq!(counter.phase(), CounterPhase::Done);
        assert_eq!(counter.value(), Score::ZERO);
    }
}
