//! GPU Rendering Subsystem.
//!
//! Manages the wgpu device, surface, and rendering pipelines.
//! Sub-modules:
//!   renderer — wgpu device/surface lifecycle, frame orchestration
//!   grid     — 3D line pipeline for the backdrop planes
//!   panel    — pixel-space colored rectangle pipeline for the sections

pub mod grid;
pub mod panel;
pub mod renderer;

pub use grid::{GridPipeline, GridUniforms};
pub use panel::{PanelInstance, PanelPipeline};
pub use renderer::GpuState;
