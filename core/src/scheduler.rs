//! Timer capability and RAII cancellation.
//!
//! Everything here is single-threaded: callbacks re-enter the owning context
//! one at a time, so handles and callbacks are `!Send` on purpose.

use std::fmt;
use std::time::Duration;

/// Owns a registered timer or watcher. Dropping it cancels the registration.
///
/// Cancellation runs at most once, whether triggered by [`CancelHandle::cancel`]
/// or by drop.
#[must_use = "dropping a CancelHandle cancels the timer immediately"]
pub struct CancelHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl CancelHandle {
    /// Wrap a host-specific cancel action.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to cancel (registration failed or was skipped).
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Cancel now instead of on drop.
    pub fn cancel(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for CancelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// Host timer facility (browser `setTimeout`/`setInterval`, a virtual clock, ...).
///
/// Callbacks for one timer never overlap. Across timers, ordering follows
/// deadlines, not registration order.
pub trait Scheduler: Clone + 'static {
    /// Run `callback` once after `delay`.
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> CancelHandle;

    /// Run `callback` every `period` until the returned handle is dropped.
    /// `period` must be non-zero.
    fn set_interval(&self, period: Duration, callback: Box<dyn FnMut()>) -> CancelHandle;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn drop_cancels_exactly_once() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let handle = CancelHandle::new(move || counter.set(counter.get() + 1));
        drop(handle);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn explicit_cancel_does_not_rerun_on_drop() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        CancelHandle::new(move || counter.set(counter.get() + 1)).cancel();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn noop_handle_is_unarmed() {
        let handle = CancelHandle::noop();
        assert_eq!(format!("{handle:?}"), "CancelHandle { armed: false }");
    }
}
