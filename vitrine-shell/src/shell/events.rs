//! Winit event handling.
//!
//! Translates WindowEvent into application actions:
//!   MouseWheel      → pager gesture (the event goes nowhere else)
//!   Resized         → surface + camera aspect, synchronously
//!   RedrawRequested → one frame of the redraw chain
//!   CloseRequested / Escape → exit

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};

use vitrine_core::ScrollIntent;

use super::app::App;

/// Map a wheel delta to a pager intent. winit's y is positive when
/// scrolling up; advancing a section is a downward scroll (the web's
/// `deltaY > 0`). Zero-delta events carry no intent.
pub fn scroll_intent(delta: MouseScrollDelta) -> Option<ScrollIntent> {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => y as f64,
        MouseScrollDelta::PixelDelta(pos) => pos.y,
    };
    if y < 0.0 {
        Some(ScrollIntent::Advance)
    } else if y > 0.0 {
        Some(ScrollIntent::Retreat)
    } else {
        None
    }
}

pub fn handle_window_event(app: &mut App, event_loop: &ActiveEventLoop, event: WindowEvent) {
    match event {
        // ── Window lifecycle ──────────────────────────────────────
        WindowEvent::CloseRequested => {
            tracing::info!("window close requested");
            event_loop.exit();
        }

        WindowEvent::Destroyed => {
            tracing::info!("window destroyed");
        }

        // ── Resize ───────────────────────────────────────────────
        WindowEvent::Resized(new_size) => {
            app.handle_resize(new_size);
        }

        // ── Section navigation ───────────────────────────────────
        WindowEvent::MouseWheel { delta, .. } => {
            if let Some(intent) = scroll_intent(delta) {
                app.handle_scroll(intent);
            }
        }

        // ── Keyboard ─────────────────────────────────────────────
        WindowEvent::KeyboardInput { event, .. } => {
            if event.state == ElementState::Pressed
                && matches!(event.logical_key, Key::Named(NamedKey::Escape))
            {
                event_loop.exit();
            }
        }

        // ── Redraw ───────────────────────────────────────────────
        WindowEvent::RedrawRequested => {
            app.redraw();
        }

        _ => {}
    }
}
