//! Layout computations.
//!
//! Pure pixel arithmetic for the section panel stacks; no GPU types so
//! everything here is unit-testable.

use std::time::Duration;

/// Number of full-viewport sections.
pub const SECTION_COUNT: usize = 3;

/// Achievement cards in the carousel strip.
pub const CARD_COUNT: usize = 5;

pub const CARD_W: f32 = 320.0;
pub const CARD_H: f32 = 192.0;
pub const CARD_GAP: f32 = 32.0;

/// Horizontal distance the carousel covers per loop, pixels.
pub const CAROUSEL_SPAN: f32 = 1200.0;

/// Time per carousel loop.
pub const CAROUSEL_PERIOD: Duration = Duration::from_secs(30);

/// A pixel-space rectangle, y-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// A `w` × `h` rect horizontally centered in the viewport at `y`.
pub fn centered(viewport_w: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect {
        x: (viewport_w - w) / 2.0,
        y,
        w,
        h,
    }
}

/// Card rects for the carousel row. The strip is laid out twice so the
/// wrapping drift never opens a gap on the right; the caller culls
/// whatever falls outside the viewport.
pub fn carousel_cards(row_y: f32, drift: f32) -> Vec<Rect> {
    let pitch = CARD_W + CARD_GAP;
    (0..CARD_COUNT * 2)
        .map(|i| Rect {
            x: drift + i as f32 * pitch,
            y: row_y,
            w: CARD_W,
            h: CARD_H,
        })
        .collect()
}

/// Top edge of `section` in pixels given the eased pager offset
/// (in viewport heights).
pub fn section_top(section: usize, offset_sections: f32, viewport_h: f32) -> f32 {
    (section as f32 + offset_sections) * viewport_h
}

/// Whether any part of a section starting at `top` is on screen.
pub fn section_visible(top: f32, viewport_h: f32) -> bool {
    top < viewport_h && top + viewport_h > 0.0
}
