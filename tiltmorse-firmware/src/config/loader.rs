//! Embedded configuration decoding

use defmt::*;

use tiltmorse_core::config::DeviceConfig;
use tiltmorse_core::MESSAGE_CAPACITY;

/// Validated device.toml, encoded by build.rs
static EMBEDDED_CONFIG: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/device_config.bin"));

/// Decode the embedded configuration
///
/// Falls back to the built-in defaults if the blob does not decode or does
/// not validate. Neither should happen since build.rs checked both.
pub fn load() -> DeviceConfig {
    let config = match postcard::from_bytes::<DeviceConfig>(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to decode embedded config: {:?}", Debug2Format(&e));
            error!("Using built-in defaults");
            return DeviceConfig::default();
        }
    };

    match config.validate(MESSAGE_CAPACITY) {
        Ok(()) => {
            info!("Loaded embedded configuration ({} bytes)", EMBEDDED_CONFIG.len());
            config
        }
        Err(e) => {
            error!("Embedded config rejected: {:?}", e);
            error!("Using built-in defaults");
            DeviceConfig::default()
        }
    }
}

/// Log the settings that change behaviour
pub fn log_summary(config: &DeviceConfig) {
    match config.input.primer.as_deref() {
        Some(primer) if !primer.is_empty() => info!("Primer: \"{=str}\"", primer),
        _ => info!("Primer: disabled"),
    }
    info!(
        "Input: policy={:?}, stale presses={:?}, classifier={:?}",
        config.input.policy, config.input.stale_input, config.input.classifier
    );
    info!(
        "Transmit: mode={:?}, min_symbols={}",
        config.transmit.mode, config.transmit.min_symbols
    );
    info!(
        "Receive: timeout={}ms, max {} bytes/tick",
        config.receive.timeout_ms, config.receive.max_bytes_per_tick
    );
    info!("Display: window width {}", config.display.window_width);
    info!(
        "Ticks: input={}ms transmit={}ms receive={}ms display={}ms",
        config.ticks.input_ms,
        config.ticks.transmit_ms,
        config.ticks.receive_ms,
        config.ticks.display_ms
    );
}
