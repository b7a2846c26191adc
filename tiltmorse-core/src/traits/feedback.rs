//! Audio and indicator traits

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single beep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tone {
    /// Pitch in Hz; 0 is a rest
    pub frequency_hz: u16,
    /// Length in milliseconds
    pub duration_ms: u16,
}

impl Tone {
    pub const fn new(frequency_hz: u16, duration_ms: u16) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    /// Check if this tone produces no sound
    pub fn is_rest(&self) -> bool {
        self.frequency_hz == 0 || self.duration_ms == 0
    }
}

/// Trait for the buzzer
pub trait AudioSink {
    /// Play (or queue) a tone
    fn play_tone(&mut self, tone: Tone);
}

/// Trait for the status LED
pub trait IndicatorSink {
    /// Turn the indicator on or off
    fn set(&mut self, on: bool);
}
