//! One-shot reveal driven by how much of a region is on screen.

use crate::error::ConfigError;
use crate::scheduler::CancelHandle;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Fraction of a region that must be visible, in `(0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// Validates the range.
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidThreshold(value))
        }
    }

    /// Raw fraction.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Whether a visible fraction satisfies this threshold.
    pub fn is_reached_by(self, fraction: f64) -> bool {
        fraction >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(0.2)
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> f64 {
        threshold.0
    }
}

/// Host capability that reports visibility of a region.
///
/// The host calls `on_sample` with the visible fraction whenever it changes
/// (at least whenever it crosses `threshold`) until the handle is dropped.
pub trait VisibilityObserver {
    /// Host-specific region reference (a DOM element, a name, ...).
    type Region;

    /// Start watching `region`.
    fn observe(
        &self,
        region: &Self::Region,
        threshold: Threshold,
        on_sample: Box<dyn FnMut(f64)>,
    ) -> CancelHandle;
}

struct RevealState {
    threshold: Threshold,
    triggered: Cell<bool>,
    watch: RefCell<Option<CancelHandle>>,
    listener: RefCell<Option<Rc<dyn Fn()>>>,
}

impl RevealState {
    fn sample(&self, fraction: f64) {
        if self.triggered.get() || !self.threshold.is_reached_by(fraction) {
            return;
        }
        self.triggered.set(true);
        tracing::debug!(fraction, threshold = self.threshold.get(), "reveal triggered");

        // Stop observing; bind first so the RefCell borrow ends before cancel runs.
        let watch = self.watch.borrow_mut().take();
        drop(watch);

        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }
}

/// Latch that flips once, the first time the watched region is visible enough.
///
/// Dropping the trigger drops its watcher, so nothing fires after teardown.
pub struct RevealTrigger {
    state: Rc<RevealState>,
}

impl RevealTrigger {
    /// Unattached trigger.
    pub fn new(threshold: Threshold) -> Self {
        Self {
            state: Rc::new(RevealState {
                threshold,
                triggered: Cell::new(false),
                watch: RefCell::new(None),
                listener: RefCell::new(None),
            }),
        }
    }

    /// Start watching `region`. Replaces any earlier watcher; no-op once triggered.
    pub fn attach<O: VisibilityObserver>(&self, observer: &O, region: &O::Region) {
        if self.state.triggered.get() {
            return;
        }
        let weak = Rc::downgrade(&self.state);
        let handle = observer.observe(
            region,
            self.state.threshold,
            Box::new(move |fraction| {
                if let Some(state) = weak.upgrade() {
                    state.sample(fraction);
                }
            }),
        );
        // A host may report synchronously from `observe`.
        if self.state.triggered.get() {
            drop(handle);
            return;
        }
        let previous = self.state.watch.borrow_mut().replace(handle);
        drop(previous);
    }

    /// Called once, right after the latch flips.
    pub fn on_reveal(&self, listener: impl Fn() + 'static) {
        *self.state.listener.borrow_mut() = Some(Rc::new(listener));
    }

    /// Whether the threshold has ever been reached.
    pub fn has_triggered(&self) -> bool {
        self.state.triggered.get()
    }

    /// Whether a watcher is still registered.
    pub fn is_observing(&self) -> bool {
        self.state.watch.borrow().is_some()
    }

    /// Threshold in use.
    pub fn threshold(&self) -> Threshold {
        self.state.threshold
    }
}

/// Bar width for a share, depending on whether the reveal has fired.
pub fn revealed_width(percent: u8, revealed: bool) -> String {
    if revealed {
        format!("{percent}%")
    } else {
        "0%".to_string()
    }
}
