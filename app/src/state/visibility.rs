use std::collections::HashMap;

use crate::host::RegionObserver;

/// Share of a section that must be on screen for it to count as visible.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Which sections currently intersect the viewport, by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityTracker {
    sections: HashMap<String, bool>,
}

impl VisibilityTracker {
    /// Asks `observer` to watch every id, returns how many were found.
    pub fn watch<'a>(
        observer: &impl RegionObserver,
        ids: impl IntoIterator<Item = &'a str>,
    ) -> usize {
        ids.into_iter()
            .filter(|id| {
                let found = observer.observe(id);
                if !found {
                    log::warn!("Cannot watch `#{id}', it is not on the page");
                }
                found
            })
            .count()
    }

    pub fn record(&mut self, id: &str, intersecting: bool) {
        let previous = self.sections.insert(String::from(id), intersecting);
        if previous != Some(intersecting) {
            log::debug!("Section `{id}' visible: {intersecting}");
        }
    }

    /// Sections never reported are not visible.
    pub fn is_visible(&self, id: &str) -> bool {
        self.sections.get(id).copied().unwrap_or(false)
    }
}
