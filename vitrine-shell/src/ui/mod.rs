//! Section compositor.
//!
//! Each section knows how to draw itself into the panel pipeline; the
//! scene module places the three sections in the sliding column and
//! culls whatever is fully off screen.

pub mod scene;
pub mod sections;
