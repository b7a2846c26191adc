//! Audio and visual feedback outputs

pub mod buzzer;
pub mod led;

pub use buzzer::{tone_timing, Buzzer, ToneTiming};
pub use led::StatusLed;
