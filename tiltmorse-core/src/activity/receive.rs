//! Receive Activity (owns the buffer while `Receiving`)
//!
//! Bytes from the host are stored verbatim until the line terminator. The
//! terminator itself is not kept; a reply that overflows the buffer is cut
//! and shown as if it had been terminated.

use crate::config::ReceiveConfig;
use crate::message::{Alphabet, AppendOutcome, LINE_TERMINATOR};
use crate::state::{Activity, Event, Messenger, Phase};
use crate::traits::ByteSource;

use super::{hand_off, Note, Report};

/// Collects the host's reply
#[derive(Debug, Clone, Default)]
pub struct ReceiveActivity {
    config: ReceiveConfig,
}

impl ReceiveActivity {
    pub fn new(config: ReceiveConfig) -> Self {
        Self { config }
    }

    /// Poll the byte source and store what arrived
    pub fn tick<const N: usize, S: ByteSource>(
        &mut self,
        messenger: &mut Messenger<N>,
        source: &mut S,
    ) -> Report {
        let mut report = Report::new();
        for _ in 0..self.config.max_bytes_per_tick {
            if messenger.phase() != Phase::Receiving {
                break;
            }
            let Some(byte) = source.try_read_with_timeout(self.config.timeout_ms) else {
                break;
            };
            self.accept(messenger, byte, &mut report);
        }
        report
    }

    /// Store a single byte delivered by an async transport
    pub fn feed<const N: usize>(&mut self, messenger: &mut Messenger<N>, byte: u8) -> Report {
        let mut report = Report::new();
        if messenger.phase() == Phase::Receiving {
            self.accept(messenger, byte, &mut report);
        }
        report
    }

    fn accept<const N: usize>(&self, messenger: &mut Messenger<N>, byte: u8, report: &mut Report) {
        let buffer = match messenger.claim(Activity::Receive) {
            Ok(buffer) => buffer,
            Err(e) => {
                report.push(Note::Ownership(e));
                return;
            }
        };

        let outcome = buffer.append(byte, Alphabet::Raw);
        if byte == LINE_TERMINATOR || outcome == AppendOutcome::Full {
            let len = buffer.seal_line();
            report.push(Note::ReceivedLine { len });
            hand_off(messenger, Activity::Receive, Event::LineReceived, report);
        } else if let AppendOutcome::Rejected(reason) = outcome {
            report.push(Note::Rejected(reason));
        }
    }
}
