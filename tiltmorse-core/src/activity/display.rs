//! Display Activity (owns the buffer while `Displaying`)
//!
//! Pages the received line through a fixed-width window, one page per
//! tick. The tick after the last page plays the completion cue and hands
//! the empty buffer back to composition.

use heapless::String;

use crate::config::{DisplayConfig, ToneSet, MAX_WINDOW_WIDTH};
use crate::morse::{DASH, DOT};
use crate::state::{Activity, Event, Messenger, Phase};
use crate::traits::{AudioSink, DisplaySink, IndicatorSink};

use super::{hand_off, Note, Report};

/// Completion checkmark strokes `(x0, y0, x1, y1)` on a 128x64 panel
pub const CHECKMARK: [(i32, i32, i32, i32); 2] = [(52, 34, 60, 42), (60, 42, 76, 22)];

/// Shows the received reply page by page
#[derive(Debug, Clone, Default)]
pub struct DisplayActivity {
    config: DisplayConfig,
    tones: ToneSet,
    /// Start of the next page
    cursor: usize,
}

impl DisplayActivity {
    pub fn new(config: DisplayConfig, tones: ToneSet) -> Self {
        Self {
            config,
            tones,
            cursor: 0,
        }
    }

    fn width(&self) -> usize {
        usize::from(self.config.window_width.clamp(1, MAX_WINDOW_WIDTH))
    }

    /// Run one tick
    pub fn tick<const N: usize, D, A, L>(
        &mut self,
        messenger: &mut Messenger<N>,
        display: &mut D,
        audio: &mut A,
        led: &mut L,
    ) -> Report
    where
        D: DisplaySink,
        A: AudioSink,
        L: IndicatorSink,
    {
        let mut report = Report::new();
        if messenger.phase() != Phase::Displaying {
            return report;
        }

        let buffer = match messenger.claim(Activity::Display) {
            Ok(buffer) => buffer,
            Err(e) => {
                report.push(Note::Ownership(e));
                return report;
            }
        };

        if self.cursor < buffer.len() {
            let width = self.width();
            let window = buffer.window(self.cursor, width);

            let mut text: String<{ MAX_WINDOW_WIDTH as usize }> = String::new();
            for &byte in window {
                let shown = if byte.is_ascii_graphic() || byte == b' ' {
                    char::from(byte)
                } else {
                    '?'
                };
                // Window never exceeds the string capacity
                let _ = text.push(shown);
            }

            if let Err(e) = display.clear().and_then(|()| display.write_text(&text)) {
                report.push(Note::DisplayFailed(e));
            }
            match window.first() {
                Some(&DOT) => audio.play_tone(self.tones.page_dot),
                Some(&DASH) => audio.play_tone(self.tones.page_dash),
                _ => {}
            }

            report.push(Note::Page {
                start: self.cursor,
                len: window.len(),
            });
            self.cursor += width;
            return report;
        }

        self.cursor = 0;
        let drawn = display.clear().and_then(|()| {
            CHECKMARK
                .iter()
                .try_for_each(|&(x0, y0, x1, y1)| display.draw_line(x0, y0, x1, y1))
        });
        if let Err(e) = drawn {
            report.push(Note::DisplayFailed(e));
        }

        led.set(true);
        for tone in self.tones.completion {
            audio.play_tone(tone);
        }
        led.set(false);

        buffer.clear();
        report.push(Note::Completed);
        hand_off(messenger, Activity::Display, Event::DisplayExhausted, &mut report);
        report
    }
}
