//! In-memory hosts for driving the interaction model without a browser.
//!
//! [`ManualClock`] advances virtual time explicitly; [`ManualViewport`] lets a
//! test script how much of a region is on screen.

use crate::scheduler::{CancelHandle, Scheduler};
use crate::visibility::{Threshold, VisibilityObserver};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;
use std::time::Duration;

enum TimerKind {
    Once(Box<dyn FnOnce()>),
    Repeat {
        period: Duration,
        callback: Box<dyn FnMut()>,
    },
}

struct Timer {
    deadline: Duration,
    kind: TimerKind,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<u64, Timer>,
    // A timer stays live while it is registered or currently running.
    live: HashSet<u64>,
}

impl ClockState {
    fn cancel(&mut self, id: u64) {
        self.live.remove(&id);
        self.timers.remove(&id);
    }

    /// Earliest due timer; ties go to the one registered first.
    fn next_due(&self, until: Duration) -> Option<u64> {
        self.timers
            .iter()
            .filter(|(_, timer)| timer.deadline <= until)
            .min_by_key(|(id, timer)| (timer.deadline, **id))
            .map(|(id, _)| *id)
    }
}

/// Virtual single-threaded clock implementing [`Scheduler`].
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

impl ManualClock {
    /// A clock at `t = 0` with no timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Timers registered and not yet cancelled or finished.
    pub fn active_timers(&self) -> usize {
        self.state.borrow().live.len()
    }

    /// Move time forward by `by`, firing every timer that falls due.
    ///
    /// Callbacks run with no clock borrow held, so they may register or
    /// cancel timers (including their own).
    pub fn advance(&self, by: Duration) {
        let until = self.now() + by;
        loop {
            let fired = {
                let mut state = self.state.borrow_mut();
                let Some(id) = state.next_due(until) else {
                    break;
                };
                let Some(timer) = state.timers.remove(&id) else {
                    break;
                };
                state.now = timer.deadline;
                (id, timer)
            };

            let (id, timer) = fired;
            match timer.kind {
                TimerKind::Once(callback) => {
                    self.state.borrow_mut().live.remove(&id);
                    callback();
                }
                TimerKind::Repeat {
                    period,
                    mut callback,
                } => {
                    callback();
                    let mut state = self.state.borrow_mut();
                    if state.live.contains(&id) {
                        state.timers.insert(
                            id,
                            Timer {
                                deadline: timer.deadline + period,
                                kind: TimerKind::Repeat { period, callback },
                            },
                        );
                    }
                }
            }
        }
        self.state.borrow_mut().now = until;
    }

    fn register(&self, delay: Duration, kind: TimerKind) -> CancelHandle {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let deadline = state.now + delay;
            state.timers.insert(id, Timer { deadline, kind });
            state.live.insert(id);
            id
        };
        let weak = Rc::downgrade(&self.state);
        CancelHandle::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().cancel(id);
            }
        })
    }
}

impl Scheduler for ManualClock {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> CancelHandle {
        self.register(delay, TimerKind::Once(callback))
    }

    fn set_interval(&self, period: Duration, callback: Box<dyn FnMut()>) -> CancelHandle {
        debug_assert!(!period.is_zero(), "interval period must be non-zero");
        let period = period.max(Duration::from_nanos(1));
        self.register(period, TimerKind::Repeat { period, callback })
    }
}

struct Watcher {
    region: String,
    threshold: Threshold,
    callback: Option<Box<dyn FnMut(f64)>>,
}

#[derive(Default)]
struct ViewportState {
    next_id: u64,
    watchers: BTreeMap<u64, Watcher>,
}

/// Scripted viewport implementing [`VisibilityObserver`] over named regions.
#[derive(Clone, Default)]
pub struct ManualViewport {
    state: Rc<RefCell<ViewportState>>,
}

impl ManualViewport {
    /// An empty viewport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Watchers still registered.
    pub fn active_watchers(&self) -> usize {
        self.state.borrow().watchers.len()
    }

    /// Threshold the most recent watcher on `region` asked for.
    pub fn threshold_for(&self, region: &str) -> Option<Threshold> {
        self.state
            .borrow()
            .watchers
            .values()
            .rev()
            .find(|w| w.region == region)
            .map(|w| w.threshold)
    }

    /// Report that `fraction` of `region` is now visible.
    pub fn set_visible_fraction(&self, region: &str, fraction: f64) {
        let ids: Vec<u64> = self
            .state
            .borrow()
            .watchers
            .iter()
            .filter(|(_, w)| w.region == region)
            .map(|(id, _)| *id)
            .collect();

        for id in ids {
            let callback = self
                .state
                .borrow_mut()
                .watchers
                .get_mut(&id)
                .and_then(|w| w.callback.take());
            let Some(mut callback) = callback else {
                continue;
            };
            callback(fraction);
            // Put it back unless the watcher was cancelled meanwhile.
            if let Some(watcher) = self.state.borrow_mut().watchers.get_mut(&id) {
                watcher.callback = Some(callback);
            }
        }
    }
}

impl VisibilityObserver for ManualViewport {
    type Region = String;

    fn observe(
        &self,
        region: &String,
        threshold: Threshold,
        on_sample: Box<dyn FnMut(f64)>,
    ) -> CancelHandle {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.watchers.insert(
                id,
                Watcher {
                    region: region.clone(),
                    threshold,
                    callback: Some(on_sample),
                },
            );
            id
        };
        let weak = Rc::downgrade(&self.state);
        CancelHandle::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().watchers.remove(&id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn timeout_fires_once_at_deadline() {
        let clock = ManualClock::new();
        let fired = Rc::new(Cell::new(0));
        let hits = fired.clone();
        let _handle = clock.set_timeout(ms(300), Box::new(move || hits.set(hits.get() + 1)));

        clock.advance(ms(299));
        assert_eq!(fired.get(), 0);
        clock.advance(ms(1));
        assert_eq!(fired.get(), 1);
        clock.advance(ms(1000));
        assert_eq!(fired.get(), 1);
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn interval_rearms_until_dropped() {
        let clock = ManualClock::new();
        let fired = Rc::new(Cell::new(0));
        let hits = fired.clone();
        let handle = clock.set_interval(ms(20), Box::new(move || hits.set(hits.get() + 1)));

        clock.advance(ms(100));
        assert_eq!(fired.get(), 5);
        drop(handle);
        clock.advance(ms(100));
        assert_eq!(fired.get(), 5);
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn interval_may_cancel_itself() {
        let clock = ManualClock::new();
        let slot: Rc<RefCell<Option<CancelHandle>>> = Rc::default();
        let fired = Rc::new(Cell::new(0));

        let hits = fired.clone();
        let own = slot.clone();
        let handle = clock.set_interval(
            ms(10),
            Box::new(move || {
                hits.set(hits.get() + 1);
                if hits.get() == 3 {
                    own.borrow_mut().take();
                }
            }),
        );
        *slot.borrow_mut() = Some(handle);

        clock.advance(ms(1000));
        assert_eq!(fired.get(), 3);
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn timers_fire_in_deadline_order() {
        let clock = ManualClock::new();
        let log: Rc<RefCell<Vec<&'static str>>> = Rc::default();

        let late = log.clone();
        let _a = clock.set_timeout(ms(50), Box::new(move || late.borrow_mut().push("late")));
        let early = log.clone();
        let _b = clock.set_timeout(ms(10), Box::new(move || early.borrow_mut().push("early")));

        clock.advance(ms(60));
        assert_eq!(*log.borrow(), vec!["early", "late"]);
        assert_eq!(clock.now(), ms(60));
    }

    #[test]
    fn viewport_stops_delivering_after_cancel() {
        let viewport = ManualViewport::new();
        let samples: Rc<RefCell<Vec<f64>>> = Rc::default();
        let sink = samples.clone();
        let handle = viewport.observe(
            &"bars".to_string(),
            Threshold::default(),
            Box::new(move |f| sink.borrow_mut().push(f)),
        );

        viewport.set_visible_fraction("bars", 0.1);
        viewport.set_visible_fraction("other", 0.9);
        drop(handle);
        viewport.set_visible_fraction("bars", 0.5);

        assert_eq!(*samples.borrow(), vec![0.1]);
        assert_eq!(viewport.active_watchers(), 0);
    }
}
