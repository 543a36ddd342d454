//! Browser-driven updates of the page state.
//!
//! Listeners and timers are registered from an [`Effect`], so they only
//! start once hydrated, and are released with [`on_cleanup`] when the page
//! is torn down.

use leptos::ev;
use leptos::prelude::*;

use crate::content::Section;
use crate::errors::{Error, Result};
use crate::host::RegionObserver;
use crate::state::{Cursor, GlowPosition, Typewriter, VisibilityTracker};

/// Keeps `glow` centered under the pointer.
pub fn track_pointer(glow: RwSignal<GlowPosition>) {
    Effect::new(move |_| {
        let handle = window_event_listener(ev::mousemove, move |event| {
            glow.set(GlowPosition::from_pointer(event.client_x(), event.client_y()));
        });
        on_cleanup(move || handle.remove());
    });
}

/// Types the next character, or cycles the phrase, whenever the typewriter's
/// delay elapses.
pub fn run_typewriter(typewriter: RwSignal<Typewriter>) {
    // Re-runs on every step: the previous timeout has fired by then, and the
    // cleanup of the last one clears it if the page goes away first.
    Effect::new(move |_| {
        let delay = typewriter.with(Typewriter::next_delay);
        match set_timeout_with_handle(move || typewriter.update(Typewriter::advance), delay) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(error) => log::warn!("{}", Error::host("schedule the typewriter", error)),
        }
    });
}

pub fn blink_cursor(cursor: RwSignal<Cursor>) {
    Effect::new(move |_| {
        let blink = move || cursor.update(Cursor::blink);
        match set_interval_with_handle(blink, crate::state::cursor::BLINK_INTERVAL) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(error) => log::warn!("{}", Error::host("schedule the cursor", error)),
        }
    });
}

/// Reports a region's id and whether it now intersects the viewport.
pub type OnVisibilityChange = Box<dyn Fn(&str, bool)>;

/// Watches every section with the observer built by `make`, recording changes
/// into `visibility`, and disconnects it when the current owner is cleaned up.
///
/// Returns how many sections were found on the page.
pub fn observe_regions<O, F>(visibility: RwSignal<VisibilityTracker>, make: F) -> Result<usize>
where
    O: RegionObserver + 'static,
    F: FnOnce(OnVisibilityChange) -> Result<O>,
{
    let observer = make(Box::new(move |id, intersecting| {
        visibility.update(|tracker| tracker.record(id, intersecting));
    }))?;
    let watched = VisibilityTracker::watch(&observer, Section::ALL.map(Section::id));
    let observer = StoredValue::new_local(observer);
    on_cleanup(move || {
        observer.try_with_value(|observer| observer.disconnect());
    });
    Ok(watched)
}

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        /// Records which sections intersect the viewport into `visibility`.
        pub fn observe_sections(visibility: RwSignal<VisibilityTracker>) {
            use crate::host::dom::IntersectionRegionObserver;

            Effect::new(move |_| {
                let make = |on_change: OnVisibilityChange| IntersectionRegionObserver::new(on_change);
                match observe_regions(visibility, make) {
                    Ok(watched) => log::debug!("Watching {watched} sections"),
                    Err(error) => log::warn!("{error}"),
                }
            });
        }
    } else {
        /// Records which sections intersect the viewport into `visibility`.
        pub fn observe_sections(_visibility: RwSignal<VisibilityTracker>) {}
    }
}
