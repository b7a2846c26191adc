//! Top-level device configuration and validation

use crate::morse::{Symbol, SEPARATOR};
use crate::motion::PositionClassifier;

use super::types::{
    DisplayConfig, InputConfig, ReceiveConfig, TickConfig, ToneSet, TransmitConfig,
    MAX_RECEIVE_TIMEOUT_MS, MAX_WINDOW_WIDTH,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rejected configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Window width outside 1..=21
    WindowWidth(u8),
    /// Primer contains a byte outside the Morse alphabet
    PrimerSymbol(u8),
    /// Primer would complete the message on its own
    PrimerCompletes,
    /// Primer does not leave room in the buffer
    PrimerTooLong { len: usize, capacity: usize },
    /// Classifier band is empty, inverted or not finite
    ClassifierBand,
    /// A tick period is zero
    ZeroPeriod(&'static str),
    /// Receive tick would never read a byte
    ZeroReceiveBudget,
    /// Receive wait above MAX_RECEIVE_TIMEOUT_MS
    ReceiveTimeout(u32),
}

/// Complete device configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceConfig {
    pub input: InputConfig,
    pub transmit: TransmitConfig,
    pub receive: ReceiveConfig,
    pub display: DisplayConfig,
    pub tones: ToneSet,
    pub ticks: TickConfig,
}

impl DeviceConfig {
    /// Check the configuration against a buffer of `capacity` bytes
    pub fn validate(&self, capacity: usize) -> Result<(), ConfigError> {
        let width = self.display.window_width;
        if width == 0 || width > MAX_WINDOW_WIDTH {
            return Err(ConfigError::WindowWidth(width));
        }

        if let Some(primer) = &self.input.primer {
            validate_primer(primer.as_bytes(), capacity)?;
        }

        validate_classifier(&self.input.classifier)?;
        validate_receive(&self.receive)?;

        let ticks = &self.ticks;
        for (name, period) in [
            ("input_ms", ticks.input_ms),
            ("transmit_ms", ticks.transmit_ms),
            ("receive_ms", ticks.receive_ms),
            ("display_ms", ticks.display_ms),
        ] {
            if period == 0 {
                return Err(ConfigError::ZeroPeriod(name));
            }
        }

        Ok(())
    }
}

fn validate_primer(primer: &[u8], capacity: usize) -> Result<(), ConfigError> {
    if let Some(&bad) = primer.iter().find(|&&b| Symbol::from_byte(b).is_none()) {
        return Err(ConfigError::PrimerSymbol(bad));
    }
    if primer.windows(3).any(|w| w == [SEPARATOR; 3]) {
        return Err(ConfigError::PrimerCompletes);
    }
    // An open buffer holds at most capacity - 2 bytes
    if primer.len() + 2 > capacity {
        return Err(ConfigError::PrimerTooLong {
            len: primer.len(),
            capacity,
        });
    }
    Ok(())
}

fn validate_receive(receive: &ReceiveConfig) -> Result<(), ConfigError> {
    if receive.max_bytes_per_tick == 0 {
        return Err(ConfigError::ZeroReceiveBudget);
    }
    // Only an idle link waits, so this bounds the stall per tick
    if receive.timeout_ms > MAX_RECEIVE_TIMEOUT_MS {
        return Err(ConfigError::ReceiveTimeout(receive.timeout_ms));
    }
    Ok(())
}

fn validate_classifier(classifier: &PositionClassifier) -> Result<(), ConfigError> {
    if classifier.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::ClassifierBand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String;

    fn with_primer(text: &str) -> DeviceConfig {
        let mut config = DeviceConfig::default();
        let mut primer = String::new();
        primer.push_str(text).unwrap();
        config.input.primer = Some(primer);
        config
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(DeviceConfig::default().validate(256), Ok(()));
    }

    #[test]
    fn test_window_width_bounds() {
        let mut config = DeviceConfig::default();
        config.display.window_width = 0;
        assert_eq!(config.validate(256), Err(ConfigError::WindowWidth(0)));
        config.display.window_width = 22;
        assert_eq!(config.validate(256), Err(ConfigError::WindowWidth(22)));
        config.display.window_width = 21;
        assert_eq!(config.validate(256), Ok(()));
    }

    #[test]
    fn test_primer_rules() {
        assert_eq!(
            with_primer("-x-").validate(256),
            Err(ConfigError::PrimerSymbol(b'x'))
        );
        assert_eq!(
            with_primer("-   ").validate(256),
            Err(ConfigError::PrimerCompletes)
        );
        assert_eq!(
            with_primer("--- ... ").validate(8),
            Err(ConfigError::PrimerTooLong {
                len: 8,
                capacity: 8
            })
        );
        assert_eq!(with_primer("--- ... ").validate(10), Ok(()));

        let mut none = DeviceConfig::default();
        none.input.primer = None;
        assert_eq!(none.validate(4), Ok(()));
    }

    #[test]
    fn test_classifier_and_ticks() {
        let mut config = DeviceConfig::default();
        config.input.classifier.flat_max = -1.0;
        assert_eq!(config.validate(256), Err(ConfigError::ClassifierBand));

        let mut config = DeviceConfig::default();
        config.ticks.display_ms = 0;
        assert_eq!(config.validate(256), Err(ConfigError::ZeroPeriod("display_ms")));
    }

    #[test]
    fn test_receive_limits() {
        let mut config = DeviceConfig::default();
        config.receive.max_bytes_per_tick = 0;
        assert_eq!(config.validate(256), Err(ConfigError::ZeroReceiveBudget));

        let mut config = DeviceConfig::default();
        config.receive.timeout_ms = u32::MAX;
        config.receive.max_bytes_per_tick = u16::MAX;
        assert_eq!(
            config.validate(256),
            Err(ConfigError::ReceiveTimeout(u32::MAX))
        );

        config.receive.timeout_ms = MAX_RECEIVE_TIMEOUT_MS;
        assert_eq!(config.validate(256), Ok(()));
        config.receive.timeout_ms = MAX_RECEIVE_TIMEOUT_MS + 1;
        assert_eq!(
            config.validate(256),
            Err(ConfigError::ReceiveTimeout(MAX_RECEIVE_TIMEOUT_MS + 1))
        );
    }
}
