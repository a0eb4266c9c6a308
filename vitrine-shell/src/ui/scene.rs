//! Frame composition: position the section column and draw what shows.

use crate::gfx::PanelPipeline;
use crate::shell::layout::{section_top, section_visible, SECTION_COUNT};

/// Everything the compositor needs for one frame.
pub struct FrameData {
    pub viewport: [u32; 2],
    /// Eased vertical offset in viewport heights: 0 shows section 0,
    /// -1 shows section 1, and so on.
    pub offset_sections: f32,
    /// Carousel drift, pixels, in `(-span, 0]`.
    pub carousel_offset: f32,
}

pub fn compose(panels: &mut PanelPipeline, data: &FrameData) {
    panels.clear();

    let w = data.viewport[0] as f32;
    let h = data.viewport[1] as f32;

    for section in 0..SECTION_COUNT {
        let top = section_top(section, data.offset_sections, h);
        if !section_visible(top, h) {
            continue;
        }
        match section {
            0 => super::sections::draw_hero(panels, w, h, top),
            1 => super::sections::draw_achievements(panels, w, h, top, data.carousel_offset),
            _ => super::sections::draw_mission(panels, w, h, top),
        }
    }
}
