//! Countdown cue abstraction.

use core::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackError {
    /// The output device refused the write.
    DeviceUnavailable,
    /// Playback started but could not be completed.
    Interrupted,
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceUnavailable => f.write_str("audio device unavailable"),
            Self::Interrupted => f.write_str("audio playback interrupted"),
        }
    }
}

/// Best-effort player for the final-seconds cue.
///
/// `play_cue` restarts playback from the beginning each time it is called.
/// Failures never stop the countdown; the app logs and drops them.
pub trait CuePlayer {
    fn play_cue(&mut self) -> Result<(), PlaybackError>;
    fn stop_cue(&mut self) -> Result<(), PlaybackError>;
}

/// Cue player that does nothing.
#[derive(Default, Debug, Clone, Copy)]
pub struct SilentCue;

impl SilentCue {
    pub const fn new() -> Self {
        Self
    }
}

impl CuePlayer for SilentCue {
    fn play_cue(&mut self) -> Result<(), PlaybackError> {
        Ok(())
    }

    fn stop_cue(&mut self) -> Result<(), PlaybackError> {
        Ok(())
    }
}
