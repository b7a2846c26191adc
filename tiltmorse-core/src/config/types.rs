//! Configuration type definitions
//!
//! One struct per activity plus the tone set and tick periods. Every field
//! has a default, so a config file only needs to mention what it changes.

use heapless::String;

use crate::motion::PositionClassifier;
use crate::traits::Tone;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum primer length
pub const MAX_PRIMER_LEN: usize = 16;

/// Widest page the display can show (21 columns of 6 px on 128 px)
pub const MAX_WINDOW_WIDTH: u8 = 21;

/// Longest per-byte receive wait; the wait blocks the executor
pub const MAX_RECEIVE_TIMEOUT_MS: u32 = 5;

/// Primer seeded into an empty composition buffer
pub const DEFAULT_PRIMER: &str = "--- ... ";

/// How many pending buttons the Input Activity services per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ServicePolicy {
    /// Character-select first, then word-select
    #[default]
    BothPerTick,
    /// Character-select wins, word-select waits for the next tick
    OnePerTick,
}

/// What happens to presses made while not composing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StaleInputPolicy {
    /// Dropped on every tick outside `Composing`
    #[default]
    Discard,
    /// Left latched and serviced once composition resumes
    Keep,
}

/// Input Activity settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputConfig {
    /// Seed for an empty buffer, `None` disables seeding
    pub primer: Option<String<MAX_PRIMER_LEN>>,
    pub policy: ServicePolicy,
    pub stale_input: StaleInputPolicy,
    pub classifier: PositionClassifier,
}

impl Default for InputConfig {
    fn default() -> Self {
        let mut primer = String::new();
        // Fits MAX_PRIMER_LEN
        let _ = primer.push_str(DEFAULT_PRIMER);
        Self {
            primer: Some(primer),
            policy: ServicePolicy::default(),
            stale_input: StaleInputPolicy::default(),
            classifier: PositionClassifier::default(),
        }
    }
}

/// How the buffer leaves the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransmitMode {
    /// Whole buffer in one write
    #[default]
    Bulk,
    /// One byte per tick
    PerCharacter,
}

/// Transmit Activity settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransmitConfig {
    pub mode: TransmitMode,
    /// Messages with fewer dots and dashes are not sent
    pub min_symbols: u16,
}

impl Default for TransmitConfig {
    fn default() -> Self {
        Self {
            mode: TransmitMode::Bulk,
            min_symbols: 1,
        }
    }
}

/// Receive Activity settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReceiveConfig {
    /// Per-byte wait; 0 polls without blocking, at most
    /// [`MAX_RECEIVE_TIMEOUT_MS`]
    pub timeout_ms: u32,
    /// Upper bound on bytes drained per tick, at least 1
    pub max_bytes_per_tick: u16,
}

impl Default for ReceiveConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 0,
            max_bytes_per_tick: 64,
        }
    }
}

/// Display Activity settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Characters per page
    pub window_width: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { window_width: 10 }
    }
}

/// Audio cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ToneSet {
    /// Dot appended
    pub dot: Tone,
    /// Dash appended
    pub dash: Tone,
    /// Separator appended
    pub separator: Tone,
    /// Page starting with a dot
    pub page_dot: Tone,
    /// Page starting with a dash
    pub page_dash: Tone,
    /// Played when the last page has been shown
    pub completion: [Tone; 3],
}

impl Default for ToneSet {
    fn default() -> Self {
        Self {
            dot: Tone::new(880, 60),
            dash: Tone::new(660, 180),
            separator: Tone::new(440, 90),
            page_dot: Tone::new(988, 80),
            page_dash: Tone::new(587, 240),
            completion: [Tone::new(523, 150), Tone::new(659, 150), Tone::new(784, 300)],
        }
    }
}

/// Activity periods in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TickConfig {
    pub input_ms: u32,
    pub transmit_ms: u32,
    pub receive_ms: u32,
    pub display_ms: u32,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            input_ms: 500,
            transmit_ms: 200,
            receive_ms: 200,
            display_ms: 1000,
        }
    }
}
