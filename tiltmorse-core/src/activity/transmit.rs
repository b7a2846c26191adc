//! Transmit Activity (owns the buffer while `Ready`)

use crate::config::{TransmitConfig, TransmitMode};
use crate::state::{Activity, Event, Messenger, Phase};
use crate::traits::ByteSink;

use super::{hand_off, Note, Report};

/// Sends the composed message to the host
#[derive(Debug, Clone, Default)]
pub struct TransmitActivity {
    config: TransmitConfig,
    /// Next byte to send in per-character mode
    cursor: usize,
}

impl TransmitActivity {
    pub fn new(config: TransmitConfig) -> Self {
        Self { config, cursor: 0 }
    }

    /// Run one tick
    ///
    /// A failed write keeps the phase at `Ready` so the next tick retries.
    pub fn tick<const N: usize, S: ByteSink>(
        &mut self,
        messenger: &mut Messenger<N>,
        sink: &mut S,
    ) -> Report {
        let mut report = Report::new();
        if messenger.phase() != Phase::Ready {
            return report;
        }

        let buffer = match messenger.claim(Activity::Transmit) {
            Ok(buffer) => buffer,
            Err(e) => {
                report.push(Note::Ownership(e));
                return report;
            }
        };

        let symbols = buffer.symbol_count();
        if symbols < usize::from(self.config.min_symbols) {
            buffer.clear();
            self.cursor = 0;
            report.push(Note::TransmitSkipped { symbols });
            hand_off(messenger, Activity::Transmit, Event::TransmitFinished, &mut report);
            return report;
        }

        let sent = match self.config.mode {
            TransmitMode::Bulk => sink.write(buffer.as_bytes()).map(|()| true),
            TransmitMode::PerCharacter => match buffer.as_bytes().get(self.cursor) {
                Some(&byte) => sink.write(&[byte]).map(|()| {
                    self.cursor += 1;
                    self.cursor >= buffer.len()
                }),
                None => Ok(true),
            },
        };

        match sent {
            Ok(true) => {
                let len = buffer.len();
                buffer.clear();
                self.cursor = 0;
                report.push(Note::Transmitted { len });
                hand_off(messenger, Activity::Transmit, Event::TransmitFinished, &mut report);
            }
            Ok(false) => {}
            Err(e) => report.push(Note::LinkFailed(e)),
        }

        report
    }
}
