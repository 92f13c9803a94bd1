use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};

pub struct AudioPlayer {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
}

impl AudioPlayer {
    /// Returns `None` when no audio device is available; callers degrade
    /// to silence.
    pub fn new() -> Option<Self> {
        let (stream, stream_handle) = OutputStream::try_default().ok()?;
        Some(Self {
            _stream: stream,
            stream_handle,
        })
    }

    /// Short ascending arpeggio for success feedback.
    pub fn success_chime(&self) {
        if let Ok(sink) = Sink::try_new(&self.stream_handle) {
            for (frequency, millis) in [(1047.0, 80), (1319.0, 80), (1568.0, 140)] {
                let tone = SineWave::new(frequency)
                    .take_duration(Duration::from_millis(millis))
                    .amplify(0.25);
                sink.append(tone);
            }

            // Detach so it plays without blocking
            sink.detach();
        }
    }
}
