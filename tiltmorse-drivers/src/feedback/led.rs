//! Status LED

use embedded_hal::digital::OutputPin;

use tiltmorse_core::traits::IndicatorSink;

/// Single LED on a GPIO
///
/// The pin can be configured as active-high (default) or active-low.
pub struct StatusLed<P> {
    pin: P,
    /// If true, LED ON = pin LOW
    inverted: bool,
    on: bool,
}

impl<P: OutputPin> StatusLed<P> {
    /// Create the LED, initially off
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        led.set(false);
        led
    }

    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl<P: OutputPin> IndicatorSink for StatusLed<P> {
    fn set(&mut self, on: bool) {
        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if result.is_ok() {
            self.on = on;
        }
    }
}
