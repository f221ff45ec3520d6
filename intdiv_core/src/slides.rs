//! # Slide Navigation
//!
//! Arrow-key paging through a deck of slides whose position lives in a
//! location fragment of the form `#slide-<N>`. Independent of the division
//! engine; nothing here knows about numbers being divided.
//!
//! - `Up` / `Left`: previous slide, never below 0
//! - `Down` / `Right`: next slide, no upper clamp
//! - the move only happens when the target slide exists; the new fragment
//!   is then pushed onto the history
//!
//! ## Example
//!
//! ```rust
//! use intdiv_core::slides::{NavKey, SlideNavigator};
//!
//! let mut nav = SlideNavigator::new(3);
//! assert_eq!(nav.handle_key(NavKey::Right), Some(1));
//! assert_eq!(nav.location(), "#slide-1");
//! assert_eq!(nav.handle_key(NavKey::Up), Some(0));
//! ```

use log::debug;

const FRAGMENT_PREFIX: &str = "#slide-";

/// The keys the navigator reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideNavigator {
    slide_count: u64,
    location: String,
    history: Vec<String>,
}

impl SlideNavigator {
    /// A deck of `slide_count` slides (`slide-0` .. `slide-{count-1}`), no fragment yet.
    pub fn new(slide_count: u64) -> Self {
        SlideNavigator {
            slide_count,
            location: String::new(),
            history: Vec::new(),
        }
    }

    /// Start from an existing location fragment (e.g. restored from a URL).
    pub fn with_location(slide_count: u64, location: impl Into<String>) -> Self {
        SlideNavigator {
            location: location.into(),
            ..SlideNavigator::new(slide_count)
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Fragments pushed so far, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Slide the current fragment points at; 0 when it is missing or malformed.
    pub fn current_slide(&self) -> u64 {
        parse_fragment(&self.location).unwrap_or(0)
    }

    /// Whether `slide-<index>` exists in the deck
    pub fn has_slide(&self, index: u64) -> bool {
        index < self.slide_count
    }

    /// Apply one key press. Returns the slide moved to, or `None` when the
    /// target does not exist and the location is left alone.
    pub fn handle_key(&mut self, key: NavKey) -> Option<u64> {
        let current = self.current_slide();
        let next = match key {
            NavKey::Up | NavKey::Left => current.saturating_sub(1),
            NavKey::Down | NavKey::Right => current.saturating_add(1),
        };

        if !self.has_slide(next) {
            debug!("no slide {} (from {})", next, current);
            return None;
        }

        self.location = fragment_for(next);
        self.history.push(self.location.clone());
        Some(next)
    }
}

/// `#slide-<N>` for slide `N`
pub fn fragment_for(index: u64) -> String {
    format!("{}{}", FRAGMENT_PREFIX, index)
}

/// The slide index of a `#slide-<N>` fragment, `N` being ASCII digits only.
pub fn parse_fragment(fragment: &str) -> Option<u64> {
    let digits = fragment.strip_prefix(FRAGMENT_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
