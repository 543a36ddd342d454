use std::time::Duration;

use crate::errors::{Error, Result};

/// Delay between two typed characters.
pub const TYPE_INTERVAL: Duration = Duration::from_millis(100);
/// How long a fully typed phrase stays on screen.
pub const HOLD_DURATION: Duration = Duration::from_millis(2000);

/// Types phrases one character at a time, cycling through them forever.
///
/// The typewriter does not own a timer: whoever drives it waits
/// [`Typewriter::next_delay`] then calls [`Typewriter::advance`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    // In characters, not bytes.
    typed: usize,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Result<Self> {
        if phrases.is_empty() {
            return Err(Error::NoPhrases);
        }
        Ok(Self {
            phrases,
            index: 0,
            typed: 0,
        })
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn phrase(&self) -> &'static str {
        self.phrases[self.index]
    }

    /// What is currently displayed.
    pub fn text(&self) -> &'static str {
        let phrase = self.phrase();
        match phrase.char_indices().nth(self.typed) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.typed >= self.phrase().chars().count()
    }

    pub fn next_delay(&self) -> Duration {
        if self.is_complete() {
            HOLD_DURATION
        } else {
            TYPE_INTERVAL
        }
    }

    /// Types the next character, or once the phrase is complete, erases it
    /// and moves on to the next phrase.
    pub fn advance(&mut self) {
        if self.is_complete() {
            self.typed = 0;
            self.index = (self.index + 1) % self.phrases.len();
        } else {
            self.typed += 1;
        }
    }
}
