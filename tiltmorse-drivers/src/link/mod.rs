//! Byte links to the host

pub mod serial;

pub use serial::{SerialRx, SerialTx};
