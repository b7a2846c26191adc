//! Buzzer and LED task
//!
//! Activities queue [`Cue`]s through a [`FeedbackQueue`] while holding the
//! messenger lock; this task plays them afterwards, in order.

use defmt::*;
use embassy_time::Delay;

use tiltmorse_core::traits::{AudioSink, IndicatorSink, Tone};

use crate::board::{Beeper, Led};
use crate::channels::{Cue, FEEDBACK};

/// Non-blocking audio/indicator sink backed by the feedback channel
///
/// A full queue drops the cue; feedback is best effort.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeedbackQueue;

impl FeedbackQueue {
    fn send(&self, cue: Cue) {
        if FEEDBACK.try_send(cue).is_err() {
            warn!("Feedback queue full, dropped {:?}", cue);
        }
    }
}

impl AudioSink for FeedbackQueue {
    fn play_tone(&mut self, tone: Tone) {
        self.send(Cue::Tone(tone));
    }
}

impl IndicatorSink for FeedbackQueue {
    fn set(&mut self, on: bool) {
        self.send(Cue::Led(on));
    }
}

/// Play queued cues
#[embassy_executor::task]
pub async fn feedback_task(mut buzzer: Beeper, mut led: Led) {
    info!("Feedback task started");

    loop {
        match FEEDBACK.receive().await {
            Cue::Tone(tone) => {
                if buzzer.play(tone, &mut Delay).await.is_err() {
                    warn!("Buzzer pin failed during {:?}", tone);
                    let _ = buzzer.silence();
                }
            }
            Cue::Led(on) => led.set(on),
        }
    }
}
