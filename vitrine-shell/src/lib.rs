//! Vitrine shell library target.
//!
//! Exposes shell modules for integration tests. The binary entry point
//! is in `main.rs`; this file exists solely so `tests/*.rs` can import
//! the shell's logic.

pub mod audio;
pub mod backdrop;
pub mod gfx;
pub mod shell;
pub mod ui;
