use serde::{Deserialize, Serialize};

/// Canonical playback snapshot of a room's shared video.
///
/// Last write wins, the stored position is never extrapolated with
/// wall-clock time between updates.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Position in seconds from the start of the video.
    pub position: f64,
    pub is_paused: bool,
    /// Playback rate, 1.0 is normal speed.
    pub speed: f64,
}

impl PlaybackState {
    /// A state is applicable only with a finite non-negative position
    /// and a finite positive speed.
    pub fn is_valid(&self) -> bool {
        self.position.is_finite()
            && self.position >= 0.0
            && self.speed.is_finite()
            && self.speed > 0.0
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            position: 0.0,
            is_paused: true,
            speed: 1.0,
        }
    }
}
