//! Byte channel traits
//!
//! Mirrors a UART split into its two halves. Messages are framed by the
//! line terminator only.

/// Errors that can occur when writing to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Underlying transport reported a write failure
    WriteFailed,
    /// Transport accepted fewer bytes than requested
    Incomplete,
}

/// Outgoing half of the byte channel
pub trait ByteSink {
    /// Write all bytes, blocking until they are queued
    fn write(&mut self, bytes: &[u8]) -> Result<(), LinkError>;
}

/// Incoming half of the byte channel
pub trait ByteSource {
    /// Wait up to `timeout_ms` for a byte; `0` means do not wait
    fn try_read_with_timeout(&mut self, timeout_ms: u32) -> Option<u8>;
}
