//! Activity tick logic
//!
//! Each activity is a small struct with a `tick` method called periodically
//! by the firmware. A tick does nothing unless the activity owns the current
//! phase. Instead of logging, a tick returns a [`Report`] of [`Note`]s which
//! the caller forwards to whatever logger it has.

pub mod display;
pub mod input;
pub mod receive;
pub mod transmit;

pub use display::{DisplayActivity, CHECKMARK};
pub use input::InputActivity;
pub use receive::ReceiveActivity;
pub use transmit::TransmitActivity;

use heapless::Vec;

use crate::message::{AppendOutcome, RejectReason};
use crate::morse::{Symbol, Validation};
use crate::state::{Activity, Event, Messenger, OwnershipError, Phase};
use crate::traits::{DisplayError, LinkError, SensorError};

/// Notes kept per tick; extra notes are counted, not stored
pub const MAX_NOTES: usize = 8;

/// Something worth logging that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Note {
    /// Empty buffer seeded with the primer
    Primed { len: usize },
    /// Primer could not be appended; buffer left empty
    PrimerRejected(AppendOutcome),
    /// Symbol stored in the composition buffer
    Appended(Symbol),
    /// Append refused
    Rejected(RejectReason),
    /// Sample skipped
    SensorFailed(SensorError),
    /// Validator ran on the group just closed
    Validated(Validation),
    /// Presses made outside composition were dropped
    StaleInput,
    DisplayFailed(DisplayError),
    /// Write to the host failed, retried next tick
    LinkFailed(LinkError),
    /// Message sent to the host
    Transmitted { len: usize },
    /// Message had too few symbols to be worth sending
    TransmitSkipped { symbols: usize },
    /// Reply line complete
    ReceivedLine { len: usize },
    /// Page rendered
    Page { start: usize, len: usize },
    /// Completion cue played
    Completed,
    /// Phase changed
    Transition(Phase),
    Ownership(OwnershipError),
}

/// Notes collected during one tick
#[derive(Debug, Clone, Default)]
pub struct Report {
    notes: Vec<Note, MAX_NOTES>,
    dropped: usize,
}

impl Report {
    pub const fn new() -> Self {
        Self {
            notes: Vec::new(),
            dropped: 0,
        }
    }

    /// Record a note
    pub fn push(&mut self, note: Note) {
        if self.notes.push(note).is_err() {
            self.dropped += 1;
        }
    }

    /// Recorded notes in order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes that did not fit
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Check if nothing happened
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.dropped == 0
    }

    /// Phase entered during this tick, if any
    pub fn transition(&self) -> Option<Phase> {
        self.notes.iter().rev().find_map(|note| match note {
            Note::Transition(phase) => Some(*phase),
            _ => None,
        })
    }

    /// Check if a note was recorded
    pub fn contains(&self, note: &Note) -> bool {
        self.notes.contains(note)
    }
}

/// Hand off and record the outcome
pub(crate) fn hand_off<const N: usize>(
    messenger: &mut Messenger<N>,
    activity: Activity,
    event: Event,
    report: &mut Report,
) {
    match messenger.hand_off(activity, event) {
        Ok(phase) => report.push(Note::Transition(phase)),
        Err(e) => report.push(Note::Ownership(e)),
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    //! In-memory collaborators for activity tests

    use std::collections::VecDeque;
    use std::string::String;
    use std::vec::Vec;

    use crate::traits::{
        AudioSink, ByteSink, ByteSource, DisplayError, DisplaySink, IndicatorSink, LinkError,
        MotionSample, MotionSource, SensorError, Tone,
    };

    #[derive(Default)]
    pub struct FakeMotion {
        pub samples: VecDeque<Result<MotionSample, SensorError>>,
        pub reads: usize,
    }

    impl FakeMotion {
        /// Queue a gyro reading
        pub fn push_gyro(&mut self, gyro: [f32; 3]) {
            self.samples.push_back(Ok(MotionSample {
                gyro,
                ..Default::default()
            }));
        }

        pub fn push_error(&mut self, error: SensorError) {
            self.samples.push_back(Err(error));
        }
    }

    /// Flat reading, classified as a dot
    pub const FLAT: [f32; 3] = [-0.1, -0.1, 0.0];
    /// Tilted reading, classified as a dash
    pub const TILTED: [f32; 3] = [30.0, 5.0, -2.0];

    impl MotionSource for FakeMotion {
        fn read(&mut self) -> Result<MotionSample, SensorError> {
            self.reads += 1;
            self.samples
                .pop_front()
                .unwrap_or(Err(SensorError::NotInitialized))
        }
    }

    #[derive(Default)]
    pub struct FakeAudio {
        pub tones: Vec<Tone>,
    }

    impl AudioSink for FakeAudio {
        fn play_tone(&mut self, tone: Tone) {
            self.tones.push(tone);
        }
    }

    #[derive(Default)]
    pub struct FakeDisplay {
        pub texts: Vec<String>,
        pub clears: usize,
        pub lines: Vec<(i32, i32, i32, i32)>,
        pub broken: bool,
    }

    impl DisplaySink for FakeDisplay {
        fn clear(&mut self) -> Result<(), DisplayError> {
            if self.broken {
                return Err(DisplayError::Bus);
            }
            self.clears += 1;
            Ok(())
        }

        fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
            if self.broken {
                return Err(DisplayError::Bus);
            }
            self.texts.push(text.into());
            Ok(())
        }

        fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), DisplayError> {
            if self.broken {
                return Err(DisplayError::Bus);
            }
            self.lines.push((x0, y0, x1, y1));
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct FakeLed {
        pub history: Vec<bool>,
    }

    impl IndicatorSink for FakeLed {
        fn set(&mut self, on: bool) {
            self.history.push(on);
        }
    }

    #[derive(Default)]
    pub struct FakeLink {
        pub written: Vec<u8>,
        pub writes: usize,
        pub inbound: VecDeque<u8>,
        /// Number of upcoming writes that fail
        pub failures: usize,
        /// Total time spent waiting on an empty inbound queue
        pub waited_ms: u64,
    }

    impl FakeLink {
        pub fn queue(&mut self, bytes: &[u8]) {
            self.inbound.extend(bytes.iter().copied());
        }
    }

    impl ByteSink for FakeLink {
        fn write(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(LinkError::WriteFailed);
            }
            self.writes += 1;
            self.written.extend_from_slice(bytes);
            Ok(())
        }
    }

    impl ByteSource for FakeLink {
        fn try_read_with_timeout(&mut self, timeout_ms: u32) -> Option<u8> {
            let byte = self.inbound.pop_front();
            if byte.is_none() {
                self.waited_ms += u64::from(timeout_ms);
            }
            byte
        }
    }
}
