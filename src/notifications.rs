use std::process::Command;

use crate::audio::AudioPlayer;

/// Host notification service: desktop notifications, a success chime and
/// backlight control. Every operation degrades to a no-op when the
/// underlying facility is missing.
pub struct Notifications {
    audio: Option<AudioPlayer>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            audio: AudioPlayer::new(),
        }
    }

    /// Keep the display lit for as long as the app runs. The terminal has
    /// no backlight, so this only leaves a trace in the log.
    pub fn backlight_enforce_on(&self) {
        log::debug!("backlight enforced on");
    }

    pub fn success(&self, message: &str) {
        if let Some(audio) = &self.audio {
            audio.success_chime();
        }
        send_notification("pocket-demos", message);
    }
}

impl Drop for Notifications {
    fn drop(&mut self) {
        log::debug!("backlight restored to auto");
    }
}

pub fn send_notification(title: &str, message: &str) {
    let _ = Command::new("notify-send").arg(title).arg(message).spawn();
}
