//! Backdrop scene model: camera, fog, and the three spinning grid planes.
//!
//! Everything here is plain data plus matrix math. The shell owns the GPU
//! resources; this module only answers "where is everything this frame".

use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

use glam::{EulerRot, Mat4, Vec3};

use crate::color::Rgba;
use crate::geometry::{grid_lines, LineVertex};

/// Per-frame angular increment applied to each plane's spin axis, radians.
pub const SPIN_STEP: f32 = 0.0005;

/// Side length of each grid plane, world units.
pub const GRID_SIZE: f32 = 80.0;

/// Cells per side of each grid plane.
pub const GRID_DIVISIONS: u32 = 80;

/// Color of the two lines crossing a plane's local origin.
pub const GRID_CENTER_COLOR: Rgba = Rgba::from_hex(0x1a1a1a);

/// Color of every other grid line.
pub const GRID_LINE_COLOR: Rgba = Rgba::from_hex(0x0f0f0f);

/// Scene background and fog color.
pub const BACKGROUND: Rgba = Rgba::from_hex(0x000000);

/// Perspective camera with a fixed tilted pose over the grids.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    /// Rotation about the camera's X axis, radians. Fixed after init.
    pub pitch: f32,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(-40.0, 8.0, 40.0),
            pitch: -FRAC_PI_6,
            fov_y: 75.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Update the aspect ratio to exactly `width / height`. Called
    /// synchronously from the resize handler.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
    }

    pub fn view(&self) -> Mat4 {
        (Mat4::from_translation(self.position) * Mat4::from_rotation_x(self.pitch)).inverse()
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

/// Which local axis a plane spins about each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinAxis {
    /// Local Y.
    Yaw,
    /// Local X.
    Pitch,
    /// Local Z.
    Roll,
}

/// One decorative grid plane: a base pose plus an accumulating spin.
#[derive(Debug, Clone)]
pub struct GridPlane {
    pub position: Vec3,
    /// XYZ Euler rotation, radians. The spin axis component accumulates.
    pub rotation: Vec3,
    pub spin: SpinAxis,
}

impl GridPlane {
    /// Advance the spin axis by [`SPIN_STEP`].
    pub fn advance(&mut self) {
        match self.spin {
            SpinAxis::Yaw => self.rotation.y += SPIN_STEP,
            SpinAxis::Pitch => self.rotation.x += SPIN_STEP,
            SpinAxis::Roll => self.rotation.z += SPIN_STEP,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
    }
}

/// Linear depth cue; geometry beyond `far` fades fully into `color`.
#[derive(Debug, Clone)]
pub struct Fog {
    pub color: Rgba,
    pub near: f32,
    pub far: f32,
}

/// The whole backdrop scene for one mount.
#[derive(Debug, Clone)]
pub struct SceneState {
    pub camera: Camera,
    pub planes: [GridPlane; 3],
    pub fog: Fog,
}

impl SceneState {
    pub fn new(aspect: f32) -> Self {
        Self {
            camera: Camera::new(aspect),
            planes: [
                // Floor grid, spinning about its vertical axis.
                GridPlane {
                    position: Vec3::ZERO,
                    rotation: Vec3::ZERO,
                    spin: SpinAxis::Yaw,
                },
                // Wall grid in the XZ → XY orientation, raised, spinning
                // about its horizontal axis.
                GridPlane {
                    position: Vec3::new(0.0, 40.0, 0.0),
                    rotation: Vec3::new(FRAC_PI_2, 0.0, 0.0),
                    spin: SpinAxis::Pitch,
                },
                // Side grid, shifted left, spinning about its depth axis.
                GridPlane {
                    position: Vec3::new(-40.0, 0.0, 0.0),
                    rotation: Vec3::new(0.0, 0.0, FRAC_PI_2),
                    spin: SpinAxis::Roll,
                },
            ],
            fog: Fog {
                color: BACKGROUND,
                near: 20.0,
                far: 40.0,
            },
        }
    }

    /// Advance every plane's rotation. Runs once per frame, before the
    /// render call that observes the transforms.
    pub fn advance_frame(&mut self) {
        for plane in &mut self.planes {
            plane.advance();
        }
    }

    /// The line list shared by all three planes.
    pub fn plane_vertices() -> Vec<LineVertex> {
        grid_lines(GRID_SIZE, GRID_DIVISIONS, GRID_CENTER_COLOR, GRID_LINE_COLOR)
    }
}
