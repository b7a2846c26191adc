//! Passive buzzer driven by a bit-banged square wave
//!
//! The pin is toggled every half period for the length of the tone. A rest
//! (zero frequency) just waits out its duration so melodies keep their
//! rhythm.
//!
//! ```ignore
//! let mut buzzer = Buzzer::new(pin);
//! buzzer.play(Tone::new(440, 500), &mut embassy_time::Delay).await?;
//! ```

use embedded_hal::digital::OutputPin;

use tiltmorse_core::traits::Tone;

/// Half period and number of full cycles for a tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneTiming {
    pub half_period_us: u32,
    pub cycles: u32,
}

/// Square-wave timing for a tone, `None` for a rest
pub fn tone_timing(tone: Tone) -> Option<ToneTiming> {
    if tone.is_rest() {
        return None;
    }
    let frequency = u32::from(tone.frequency_hz);
    Some(ToneTiming {
        half_period_us: 500_000 / frequency,
        cycles: u32::from(tone.duration_ms) * frequency / 1000,
    })
}

/// Square-wave buzzer on a GPIO
pub struct Buzzer<P> {
    pin: P,
}

impl<P: OutputPin> Buzzer<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Play a tone, yielding to the executor between edges
    pub async fn play<D>(&mut self, tone: Tone, delay: &mut D) -> Result<(), P::Error>
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        let Some(timing) = tone_timing(tone) else {
            delay.delay_ms(u32::from(tone.duration_ms)).await;
            return Ok(());
        };
        for _ in 0..timing.cycles {
            self.pin.set_high()?;
            delay.delay_us(timing.half_period_us).await;
            self.pin.set_low()?;
            delay.delay_us(timing.half_period_us).await;
        }
        Ok(())
    }

    /// Force the pin low
    pub fn silence(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()
    }
}
