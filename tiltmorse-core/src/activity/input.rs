//! Input Activity (owns the buffer while `Composing`)
//!
//! Services the two button latches. A character press samples the tilt and
//! appends a dot or dash; a word press appends a separator and validates
//! the group it closed.

use crate::buttons::{Button, ButtonLatches};
use crate::config::{InputConfig, ServicePolicy, StaleInputPolicy, ToneSet};
use crate::message::{Alphabet, AppendOutcome, MessageBuffer};
use crate::morse::{clear_invalid_characters, GroupVerdict, Symbol, Validation};
use crate::state::{Activity, Event, Messenger, Phase};
use crate::traits::{AudioSink, DisplaySink, MotionSource};

use super::{hand_off, Note, Report};

/// Composition from button presses and tilt
#[derive(Debug, Clone, Default)]
pub struct InputActivity {
    config: InputConfig,
    tones: ToneSet,
}

impl InputActivity {
    pub fn new(config: InputConfig, tones: ToneSet) -> Self {
        Self { config, tones }
    }

    /// Run one tick
    pub fn tick<const N: usize, M, A, D>(
        &mut self,
        messenger: &mut Messenger<N>,
        buttons: &ButtonLatches,
        sensor: &mut M,
        audio: &mut A,
        display: &mut D,
    ) -> Report
    where
        M: MotionSource,
        A: AudioSink,
        D: DisplaySink,
    {
        let mut report = Report::new();

        if messenger.phase() != Phase::Composing {
            if self.config.stale_input == StaleInputPolicy::Discard && buttons.discard_all() {
                report.push(Note::StaleInput);
            }
            return report;
        }

        self.seed_primer(messenger, &mut report);

        let mut serviced = false;
        if buttons.latch(Button::CharacterSelect).take() {
            self.select_character(messenger, sensor, audio, display, &mut report);
            serviced = true;
        }

        // A completed message ends composition for this tick
        if messenger.phase() != Phase::Composing {
            return report;
        }
        if serviced && self.config.policy == ServicePolicy::OnePerTick {
            return report;
        }

        if buttons.latch(Button::WordSelect).take() {
            self.select_word(messenger, audio, display, &mut report);
        }

        report
    }

    fn seed_primer<const N: usize>(&self, messenger: &mut Messenger<N>, report: &mut Report) {
        let Some(primer) = self.config.primer.as_deref().filter(|p| !p.is_empty()) else {
            return;
        };
        let Some(buffer) = claim(messenger, report) else {
            return;
        };
        if !buffer.is_empty() {
            return;
        }

        for &byte in primer.as_bytes() {
            let outcome = buffer.append(byte, Alphabet::Morse);
            if outcome != AppendOutcome::Accepted {
                buffer.clear();
                report.push(Note::PrimerRejected(outcome));
                return;
            }
        }
        report.push(Note::Primed { len: buffer.len() });
    }

    fn select_character<const N: usize, M, A, D>(
        &self,
        messenger: &mut Messenger<N>,
        sensor: &mut M,
        audio: &mut A,
        display: &mut D,
        report: &mut Report,
    ) where
        M: MotionSource,
        A: AudioSink,
        D: DisplaySink,
    {
        // The latch is already cleared, a failed read drops the press
        let sample = match sensor.read() {
            Ok(sample) => sample,
            Err(e) => {
                report.push(Note::SensorFailed(e));
                return;
            }
        };
        let symbol = self.config.classifier.classify(sample.gyro);

        let Some(buffer) = claim(messenger, report) else {
            return;
        };
        match buffer.append_symbol(symbol) {
            AppendOutcome::Accepted => {
                report.push(Note::Appended(symbol));
                let tone = match symbol {
                    Symbol::Dot => self.tones.dot,
                    _ => self.tones.dash,
                };
                audio.play_tone(tone);
                show(display, symbol.as_str(), report);
            }
            AppendOutcome::Full => {
                report.push(Note::Appended(symbol));
                hand_off(messenger, Activity::Input, Event::MessageComplete, report);
            }
            AppendOutcome::Rejected(reason) => report.push(Note::Rejected(reason)),
        }
    }

    fn select_word<const N: usize, A, D>(
        &self,
        messenger: &mut Messenger<N>,
        audio: &mut A,
        display: &mut D,
        report: &mut Report,
    ) where
        A: AudioSink,
        D: DisplaySink,
    {
        let Some(buffer) = claim(messenger, report) else {
            return;
        };
        match buffer.append_symbol(Symbol::Separator) {
            AppendOutcome::Accepted => {
                report.push(Note::Appended(Symbol::Separator));
                audio.play_tone(self.tones.separator);

                let validation = clear_invalid_characters(buffer);
                report.push(Note::Validated(validation));
                if let Validation::Kept(GroupVerdict::Valid(letter)) = validation {
                    let mut utf8 = [0u8; 4];
                    show(display, letter.encode_utf8(&mut utf8), report);
                }
            }
            AppendOutcome::Full => {
                report.push(Note::Appended(Symbol::Separator));
                hand_off(messenger, Activity::Input, Event::MessageComplete, report);
            }
            AppendOutcome::Rejected(reason) => report.push(Note::Rejected(reason)),
        }
    }
}

fn claim<'a, const N: usize>(
    messenger: &'a mut Messenger<N>,
    report: &mut Report,
) -> Option<&'a mut MessageBuffer<N>> {
    match messenger.claim(Activity::Input) {
        Ok(buffer) => Some(buffer),
        Err(e) => {
            report.push(Note::Ownership(e));
            None
        }
    }
}

fn show<D: DisplaySink>(display: &mut D, text: &str, report: &mut Report) {
    if let Err(e) = display.clear().and_then(|()| display.write_text(text)) {
        report.push(Note::DisplayFailed(e));
    }
}
