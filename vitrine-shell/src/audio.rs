//! Fire-and-forget feedback cue.
//!
//! A short synthesized blip acknowledges each accepted section change.
//! Audio is strictly best-effort: a missing output device disables the
//! sink, a failed playback is logged and swallowed, and navigation never
//! sees either case.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};

const CUE_FREQ_HZ: f32 = 880.0;
const CUE_LENGTH: Duration = Duration::from_millis(120);
const CUE_VOLUME: f32 = 0.2;

pub struct CueSink {
    // Keeps the OutputStream alive; dropping it silences the device.
    stream: Option<(OutputStream, OutputStreamHandle)>,
}

impl CueSink {
    pub fn new() -> Self {
        match OutputStream::try_default() {
            Ok(pair) => Self { stream: Some(pair) },
            Err(e) => {
                tracing::warn!("audio output unavailable, cues disabled: {e}");
                Self { stream: None }
            }
        }
    }

    /// Play the section-change blip and detach. Any failure is logged
    /// and swallowed.
    pub fn page_cue(&self) {
        let Some((_, handle)) = &self.stream else {
            return;
        };
        match Sink::try_new(handle) {
            Ok(sink) => {
                let blip = SineWave::new(CUE_FREQ_HZ)
                    .take_duration(CUE_LENGTH)
                    .fade_in(Duration::from_millis(5))
                    .amplify(CUE_VOLUME);
                sink.append(blip);
                sink.detach();
            }
            Err(e) => tracing::warn!("feedback cue failed: {e}"),
        }
    }
}

impl Default for CueSink {
    fn default() -> Self {
        Self::new()
    }
}
