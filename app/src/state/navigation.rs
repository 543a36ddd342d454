use crate::content::Section;
use crate::host::Scroller;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    /// The section last navigated to, highlighted in the navigation bar.
    pub active: Section,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            menu_open: false,
            active: Section::Home,
        }
    }
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Scrolls to the element with the given id and closes the mobile menu.
    ///
    /// An id that is not on the page scrolls nowhere, the menu is closed
    /// anyway. Returns whether anything was scrolled to.
    pub fn navigate(&mut self, id: &str, scroller: &impl Scroller) -> bool {
        self.menu_open = false;
        if !scroller.scroll_to(id) {
            return false;
        }
        if let Ok(section) = id.parse::<Section>() {
            log::debug!("Navigated to {section}");
            self.active = section;
        }
        true
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }
}
