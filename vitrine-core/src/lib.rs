pub mod color;
pub mod geometry;
pub mod motion;
pub mod pager;
pub mod scene;

// Re-export the types the shell touches every frame.
pub use color::Rgba;
pub use pager::{ScrollIntent, SectionPager, WheelOutcome};
pub use scene::SceneState;
