//! Motion curves for the section column and the achievements carousel.
//!
//! The section glide reproduces a 1000 ms cubic ease-in-out transform
//! transition; the carousel is a constant-speed wrapping drift. Both take
//! an injected `Instant` so tests drive them with synthetic clocks.

use std::time::{Duration, Instant};

/// How long one section transition takes.
pub const GLIDE_DURATION: Duration = Duration::from_millis(1000);

/// Cubic ease-in-out over `t` in `[0, 1]`.
fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Eased scalar animation toward a target offset.
///
/// Retargeting mid-glide restarts the curve from the current eased value,
/// so interrupting a transition never snaps.
#[derive(Debug, Clone)]
pub struct SectionGlide {
    from: f32,
    to: f32,
    started: Option<Instant>,
}

impl SectionGlide {
    pub fn new(initial: f32) -> Self {
        Self {
            from: initial,
            to: initial,
            started: None,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Begin gliding toward `to`. A no-op when already targeted there.
    pub fn retarget(&mut self, to: f32, now: Instant) {
        if (to - self.to).abs() < f32::EPSILON {
            return;
        }
        self.from = self.value(now);
        self.to = to;
        self.started = Some(now);
    }

    /// The eased offset at `now`; clamps to the target once the window
    /// has elapsed.
    pub fn value(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return self.to;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= GLIDE_DURATION {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / GLIDE_DURATION.as_secs_f32();
        self.from + (self.to - self.from) * ease_in_out_cubic(t)
    }

    /// True once the glide has reached its target.
    pub fn settled(&self, now: Instant) -> bool {
        match self.started {
            None => true,
            Some(started) => now.saturating_duration_since(started) >= GLIDE_DURATION,
        }
    }
}

/// Constant-speed leftward drift that wraps every `period`.
#[derive(Debug, Clone)]
pub struct CarouselDrift {
    /// Distance covered per loop, pixels.
    span: f32,
    period: Duration,
}

impl CarouselDrift {
    pub fn new(span: f32, period: Duration) -> Self {
        Self { span, period }
    }

    /// Horizontal offset after `elapsed` time since mount. Always in
    /// `(-span, 0]`.
    pub fn offset(&self, elapsed: Duration) -> f32 {
        let loops = elapsed.as_secs_f32() / self.period.as_secs_f32();
        -loops.fract() * self.span
    }
}
