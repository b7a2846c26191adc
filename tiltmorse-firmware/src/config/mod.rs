//! Configuration loading
//!
//! `device.toml` is parsed and validated by the build script and embedded
//! as a postcard blob; this module decodes it at boot.

mod loader;

pub use loader::{load, log_summary};
