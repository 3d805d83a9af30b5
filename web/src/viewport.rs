//! `IntersectionObserver` behind the core `VisibilityObserver` capability.

use crate::scheduler::report;
use diebra_core::{CancelHandle, Threshold, VisibilityObserver};
use leptos::prelude::set_timeout;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Reports the visible fraction of a DOM element.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl VisibilityObserver for BrowserViewport {
    type Region = Element;

    fn observe(
        &self,
        region: &Element,
        threshold: Threshold,
        mut on_sample: Box<dyn FnMut(f64)>,
    ) -> CancelHandle {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let fraction = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                on_sample(fraction);
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.get()));
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => observer,
                Err(err) => {
                    report("IntersectionObserver unavailable", &err);
                    return CancelHandle::noop();
                }
            };
        observer.observe(region);

        CancelHandle::new(move || {
            observer.disconnect();
            // Cancellation usually happens from inside `callback`; free it
            // once that call has returned.
            set_timeout(move || drop(callback), Duration::ZERO);
        })
    }
}
