//! Section pager — maps discrete wheel gestures to full-viewport sections.
//!
//! The pager is the only owner of the current section index. Every wheel
//! event is either ignored (mid-cooldown), bounced (at a boundary), or
//! moves the index by exactly one. Both accepted moves and boundary
//! bounces arm the same fixed cooldown window, so a user scrolling past
//! the last section keeps getting throttled — that matches the shipped
//! navigation feel and is intentional.
//!
//! Time is injected (`now: Instant`) rather than read internally, which
//! keeps the state machine deterministic under test and removes any need
//! for a scheduled "cooldown over" callback: cooling is a deadline
//! comparison.

use std::time::{Duration, Instant};

use thiserror::Error;

/// Window after any evaluated wheel event during which further input is
/// ignored.
pub const COOLDOWN: Duration = Duration::from_millis(1000);

#[derive(Debug, Error)]
pub enum PagerError {
    #[error("a pager needs at least one section")]
    NoSections,
}

/// Direction extracted from a vertical wheel delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollIntent {
    /// Scroll toward the next section (wheel down on the web page).
    Advance,
    /// Scroll toward the previous section.
    Retreat,
}

/// What a wheel event did to the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Arrived mid-cooldown; nothing changed, no new cooldown armed.
    Ignored,
    /// Evaluated at a boundary; no section change, cooldown armed anyway.
    Bounced,
    /// Moved to the contained section index. The caller should play the
    /// feedback cue exactly when it sees this variant.
    Moved(usize),
}

/// Finite-state controller for wheel-driven section navigation.
#[derive(Debug)]
pub struct SectionPager {
    section_count: usize,
    current: usize,
    cooldown_until: Option<Instant>,
}

impl SectionPager {
    /// Create a pager over `section_count` sections, starting at section 0.
    pub fn new(section_count: usize) -> Result<Self, PagerError> {
        if section_count == 0 {
            return Err(PagerError::NoSections);
        }
        Ok(Self {
            section_count,
            current: 0,
            cooldown_until: None,
        })
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    /// The active section, always in `[0, section_count)`.
    pub fn current(&self) -> usize {
        self.current
    }

    /// True while an earlier event's cooldown window is still open.
    pub fn is_cooling(&self, now: Instant) -> bool {
        matches!(self.cooldown_until, Some(deadline) if now < deadline)
    }

    /// Vertical translation for the hosting view, in viewport heights.
    /// Section `i` maps to `-i` (the content column slides up).
    pub fn offset_sections(&self) -> f32 {
        -(self.current as f32)
    }

    /// Feed one wheel gesture into the state machine.
    pub fn handle_wheel(&mut self, intent: ScrollIntent, now: Instant) -> WheelOutcome {
        if self.is_cooling(now) {
            return WheelOutcome::Ignored;
        }

        let outcome = match intent {
            ScrollIntent::Advance if self.current + 1 < self.section_count => {
                self.current += 1;
                WheelOutcome::Moved(self.current)
            }
            ScrollIntent::Retreat if self.current > 0 => {
                self.current -= 1;
                WheelOutcome::Moved(self.current)
            }
            _ => WheelOutcome::Bounced,
        };

        // Bounces consume the window too — see the module docs.
        self.cooldown_until = Some(now + COOLDOWN);

        if let WheelOutcome::Moved(section) = outcome {
            tracing::debug!(section, "pager moved");
        }

        outcome
    }
}
