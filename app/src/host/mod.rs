//! What the page needs from the environment it is rendered in.
//!
//! The state machines in [`crate::state`] only talk to these traits, the
//! browser implementations live in [`dom`] and tests bring their own.

#[cfg(feature = "hydrate")]
pub mod dom;

/// Brings a region of the page into view.
pub trait Scroller {
    /// Smoothly scrolls to the element with the given id.
    ///
    /// Returns `false`, without scrolling, when no such element exists.
    fn scroll_to(&self, id: &str) -> bool;
}

/// Shows a message the reader has to acknowledge.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Watches regions of the page and reports when they enter or leave the
/// viewport. How changes are reported is up to the implementation.
pub trait RegionObserver {
    /// Starts watching the element with the given id.
    ///
    /// Returns `false` when no such element exists.
    fn observe(&self, id: &str) -> bool;

    /// Stops watching every region.
    fn disconnect(&self);
}

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        pub type PageScroller = dom::DomScroller;
        pub type PageNotifier = dom::AlertNotifier;
    } else {
        /// Used when the page is not running in a browser, e.g. during server
        /// side rendering where event handlers never fire.
        #[derive(Copy, Clone, Debug, Default)]
        pub struct Detached;

        impl Scroller for Detached {
            fn scroll_to(&self, _id: &str) -> bool {
                false
            }
        }

        impl Notifier for Detached {
            fn notify(&self, message: &str) {
                log::info!("{message}");
            }
        }

        pub type PageScroller = Detached;
        pub type PageNotifier = Detached;
    }
}
