use std::time::Duration;

pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// The caret drawn after the typewriter text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    visible: bool,
}

impl Cursor {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn blink(&mut self) {
        self.visible = !self.visible;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self { visible: true }
    }
}
