//! Intersection observer subscriptions
//!
//! One observer per block. The `Reveal` handle belongs to whoever owns the
//! block; dropping it disconnects the observer so no callback can arrive
//! after the block is gone.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;
use crate::reveal::{RevealOptions, RevealState};

/// Class applied to every watched block (hidden/offset start state)
const REVEAL_CLASS: &str = "reveal";
/// Class applied once revealed
const VISIBLE_CLASS: &str = "visible";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct Reveal {
    element: HtmlElement,
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Reveal {
    /// Start watching `element`; it reveals after `delay_ms` once visible
    pub fn observe(element: &HtmlElement, delay_ms: u32, options: &RevealOptions) -> Result<Self> {
        element.class_list().add_1(REVEAL_CLASS)?;

        let mut state = RevealState::new(delay_ms);

        let callback: ObserverCallback = {
            let element = element.clone();
            Closure::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if state.on_intersection(entry.is_intersecting()) {
                        apply(&element, &state);
                        // One-shot: nothing left to watch for
                        observer.unobserve(&element);
                    }
                }
            })
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin_css());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Self {
            element: element.clone(),
            observer,
            _callback: callback,
        })
    }
}

fn apply(element: &HtmlElement, state: &RevealState) {
    let delay = format!("{}ms", state.transition_delay_ms());
    let _ = element.style().set_property("transition-delay", &delay);
    let _ = element.class_list().add_1(VISIBLE_CLASS);
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.unobserve(&self.element);
        self.observer.disconnect();
    }
}
