//! Per-section panel drawing.
//!
//! Sections are abstract color-block compositions in the site palette —
//! saffron, white, green on black. `top` is the section's current top
//! edge in pixels; every rect inside a section is laid out relative to
//! it so the whole column slides as one.

use vitrine_core::Rgba;

use crate::gfx::{PanelInstance, PanelPipeline};
use crate::shell::layout::{carousel_cards, centered, Rect};

pub const SAFFRON: Rgba = Rgba::from_hex(0xff9933);
pub const WHITE: Rgba = Rgba::from_hex(0xffffff);
pub const GREEN: Rgba = Rgba::from_hex(0x138808);

/// Translucent card/body fill.
const PANEL_FILL: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.05);

fn push(panels: &mut PanelPipeline, rect: Rect, color: Rgba) {
    panels.push(PanelInstance {
        x: rect.x,
        y: rect.y,
        w: rect.w,
        h: rect.h,
        color,
    });
}

/// Hero: three stacked title bars in the flag gradient, a subtitle bar,
/// and a small scroll hint near the bottom edge.
pub fn draw_hero(panels: &mut PanelPipeline, w: f32, h: f32, top: f32) {
    let title_w = (w * 0.5).min(640.0);
    let bar_h = h * 0.09;
    let gap = bar_h * 0.25;
    let stack_h = 3.0 * bar_h + 2.0 * gap;
    let y0 = top + (h - stack_h) / 2.0 - h * 0.08;

    push(panels, centered(w, y0, title_w, bar_h), SAFFRON);
    push(panels, centered(w, y0 + bar_h + gap, title_w * 0.45, bar_h), WHITE);
    push(panels, centered(w, y0 + 2.0 * (bar_h + gap), title_w, bar_h), GREEN);

    // Subtitle.
    push(
        panels,
        centered(w, y0 + stack_h + h * 0.06, title_w * 1.1, h * 0.025),
        WHITE.with_alpha(0.35),
    );

    // Scroll hint.
    push(
        panels,
        centered(w, top + h - 60.0, 24.0, 24.0),
        WHITE.with_alpha(0.6),
    );
}

/// Achievements: a header bar over the drifting card strip.
pub fn draw_achievements(
    panels: &mut PanelPipeline,
    w: f32,
    h: f32,
    top: f32,
    carousel_offset: f32,
) {
    push(
        panels,
        centered(w, top + h * 0.18, (w * 0.35).min(480.0), h * 0.05),
        WHITE,
    );

    let row_y = top + h * 0.38;
    for card in carousel_cards(row_y, carousel_offset) {
        if card.x + card.w <= 0.0 || card.x >= w {
            continue;
        }
        push(panels, card, PANEL_FILL);
        // Card image area and caption strip.
        push(
            panels,
            Rect {
                x: card.x,
                y: card.y,
                w: card.w,
                h: card.h * 0.6,
            },
            WHITE.with_alpha(0.12),
        );
        push(
            panels,
            Rect {
                x: card.x + 16.0,
                y: card.y + card.h * 0.7,
                w: card.w * 0.6,
                h: 12.0,
            },
            SAFFRON.with_alpha(0.8),
        );
    }
}

/// Vision & mission: two centered text-block stacks.
pub fn draw_mission(panels: &mut PanelPipeline, w: f32, h: f32, top: f32) {
    let block_w = (w * 0.55).min(760.0);

    for (i, accent) in [SAFFRON, GREEN].iter().enumerate() {
        let block_top = top + h * (0.16 + 0.42 * i as f32);

        // Heading.
        push(panels, centered(w, block_top, block_w * 0.4, h * 0.045), *accent);

        // Body lines.
        for line in 0..3 {
            let width = if line == 2 { block_w * 0.7 } else { block_w };
            push(
                panels,
                centered(w, block_top + h * 0.085 + line as f32 * h * 0.045, width, h * 0.02),
                WHITE.with_alpha(0.25),
            );
        }
    }
}
