//! Browser timers behind the core `Scheduler` capability.

use diebra_core::{CancelHandle, Scheduler};
use leptos::prelude::{set_interval_with_handle, set_timeout_with_handle};
use std::cell::RefCell;
use std::time::Duration;
use wasm_bindgen::JsValue;

/// `setTimeout` / `setInterval` on the page's window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> CancelHandle {
        match set_timeout_with_handle(callback, delay) {
            Ok(handle) => CancelHandle::new(move || handle.clear()),
            Err(err) => {
                report("setTimeout failed", &err);
                CancelHandle::noop()
            }
        }
    }

    fn set_interval(&self, period: Duration, callback: Box<dyn FnMut()>) -> CancelHandle {
        // The browser never overlaps ticks of one interval, so the borrow
        // is always free when a tick starts.
        let callback = RefCell::new(callback);
        let tick = move || {
            if let Ok(mut callback) = callback.try_borrow_mut() {
                callback();
            }
        };
        match set_interval_with_handle(tick, period) {
            Ok(handle) => CancelHandle::new(move || handle.clear()),
            Err(err) => {
                report("setInterval failed", &err);
                CancelHandle::noop()
            }
        }
    }
}

pub(crate) fn report(context: &str, err: &JsValue) {
    web_sys::console::error_2(&JsValue::from_str(context), err);
}
