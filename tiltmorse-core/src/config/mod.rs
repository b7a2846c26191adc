//! Configuration types
//!
//! Board-agnostic configuration, deserialized from TOML at build time and
//! stored in the firmware image as postcard binary data.

pub mod device;
pub mod types;

pub use device::{ConfigError, DeviceConfig};
pub use types::*;
