/// Half the size of the glow element, so that it is centered on the pointer.
pub const GLOW_OFFSET_PX: i32 = 192;

/// Top-left corner of the glow that follows the pointer, in viewport pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlowPosition {
    pub top: i32,
    pub left: i32,
}

impl GlowPosition {
    pub fn from_pointer(x: i32, y: i32) -> Self {
        Self {
            top: y - GLOW_OFFSET_PX,
            left: x - GLOW_OFFSET_PX,
        }
    }
}

impl Default for GlowPosition {
    fn default() -> Self {
        Self::from_pointer(0, 0)
    }
}
