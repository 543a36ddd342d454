use leptos::prelude::{document, window};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollIntoViewOptions,
};

use crate::errors::{Error, Result};
use crate::host::{Notifier, RegionObserver, Scroller};
use crate::state::visibility::VISIBILITY_THRESHOLD;

#[derive(Copy, Clone, Debug, Default)]
pub struct DomScroller;

impl Scroller for DomScroller {
    fn scroll_to(&self, id: &str) -> bool {
        let Some(element) = document().get_element_by_id(id) else {
            log::debug!("Nothing to scroll to, `#{id}' is not on the page");
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Notifies with a blocking `alert()`.
#[derive(Copy, Clone, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(error) = window().alert_with_message(message) {
            log::warn!("{}", Error::host("show an alert", error));
        }
    }
}

/// A [`RegionObserver`] on top of the browser's `IntersectionObserver`.
pub struct IntersectionRegionObserver {
    observer: IntersectionObserver,
    // Must outlive the observer, the browser calls into it.
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl IntersectionRegionObserver {
    /// `on_change` is called with the id of a region and whether it now
    /// intersects the viewport.
    pub fn new(on_change: impl Fn(&str, bool) + 'static) -> Result<Self> {
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |entries: JsValue| {
            for entry in js_sys::Array::from(&entries).iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(&entry.target().id(), entry.is_intersecting());
            }
        });
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|error| Error::host("create an intersection observer", error))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl RegionObserver for IntersectionRegionObserver {
    fn observe(&self, id: &str) -> bool {
        match document().get_element_by_id(id) {
            Some(element) => {
                self.observer.observe(&element);
                true
            }
            None => false,
        }
    }

    fn disconnect(&self) {
        self.observer.disconnect();
    }
}
