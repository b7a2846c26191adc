//! Motion sensors

pub mod icm42670;

pub use icm42670::{Icm42670, DEFAULT_ADDRESS};
