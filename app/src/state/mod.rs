//! The page's UI state, one type per concern.
//!
//! Each type only changes through its methods; the page keeps them in
//! signals and [`crate::effects`] feeds them browser events.

pub mod contact;
pub mod cursor;
pub mod glow;
pub mod navigation;
pub mod typewriter;
pub mod visibility;

pub use contact::{ContactForm, Field, Submission};
pub use cursor::Cursor;
pub use glow::GlowPosition;
pub use navigation::NavState;
pub use typewriter::Typewriter;
pub use visibility::VisibilityTracker;
