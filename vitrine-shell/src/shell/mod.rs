//! Application Shell — winit lifecycle, event dispatch, layout.
//!
//! The shell owns the winit event loop, the section pager, and the mount
//! state (window, GPU, backdrop, cue sink). It translates platform events
//! into pager/backdrop actions and drives the per-frame redraw chain.

pub mod app;
pub mod events;
pub mod layout;

pub use app::run;
