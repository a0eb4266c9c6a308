//! Grid plane line geometry.
//!
//! Generates the line list for one square grid plane in its local space
//! (in the XZ plane, centered on the origin). All three backdrop planes
//! share the same geometry and differ only in their model transform.

use bytemuck::{Pod, Zeroable};

use crate::color::Rgba;

/// One line-list vertex, laid out for direct GPU upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: [f32; 3], color: Rgba) -> Self {
        Self {
            position,
            color: color.to_array(),
        }
    }
}

/// Build the vertices for a `size` × `size` grid with `divisions` cells
/// per side: `divisions + 1` lines along each in-plane axis, two vertices
/// per line. The two lines crossing the origin take `center`, the rest
/// `grid`.
pub fn grid_lines(size: f32, divisions: u32, center: Rgba, grid: Rgba) -> Vec<LineVertex> {
    let step = size / divisions as f32;
    let half = size / 2.0;

    let mut vertices = Vec::with_capacity(4 * (divisions as usize + 1));
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        let color = if i * 2 == divisions { center } else { grid };

        // Line parallel to X at z = k.
        vertices.push(LineVertex::new([-half, 0.0, k], color));
        vertices.push(LineVertex::new([half, 0.0, k], color));

        // Line parallel to Z at x = k.
        vertices.push(LineVertex::new([k, 0.0, -half], color));
        vertices.push(LineVertex::new([k, 0.0, half], color));
    }

    vertices
}
