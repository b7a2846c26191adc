//! Fixed-capacity message buffer
//!
//! The final slot is reserved for the line terminator, so a consumer always
//! finds a clean end-of-message marker. Once terminated the buffer refuses
//! further appends until it is cleared, which makes `Full` a one-shot
//! trigger per overflow.

use heapless::Vec;

use crate::morse::{is_mark_byte, Symbol, SEPARATOR};

/// End-of-message marker on the byte channel
pub const LINE_TERMINATOR: u8 = b'\n';

/// Which bytes an append accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alphabet {
    /// Dot, dash and separator only (composition)
    Morse,
    /// Any byte (reception)
    Raw,
}

/// Why an append was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RejectReason {
    /// Byte is outside the Morse alphabet
    InvalidSymbol(u8),
    /// Buffer already holds a terminated message
    Terminated,
}

/// Result of a single append
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppendOutcome {
    /// Byte stored, message still open
    Accepted,
    /// Byte refused, buffer unchanged
    Rejected(RejectReason),
    /// Byte stored and message terminated; the caller must change phase
    Full,
}

/// Message buffer with capacity `N` (including the terminator slot)
#[derive(Debug, Clone)]
pub struct MessageBuffer<const N: usize> {
    bytes: Vec<u8, N>,
    terminated: bool,
}

impl<const N: usize> MessageBuffer<N> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        assert!(N >= 4, "message buffer needs room for three separators and a terminator");
        Self {
            bytes: Vec::new(),
            terminated: false,
        }
    }

    /// Append one byte using the given alphabet
    pub fn append(&mut self, byte: u8, alphabet: Alphabet) -> AppendOutcome {
        if self.terminated {
            return AppendOutcome::Rejected(RejectReason::Terminated);
        }
        if alphabet == Alphabet::Morse && Symbol::from_byte(byte).is_none() {
            return AppendOutcome::Rejected(RejectReason::InvalidSymbol(byte));
        }

        let closes_message =
            alphabet == Alphabet::Morse && byte == SEPARATOR && self.bytes.ends_with(&[SEPARATOR; 2]);

        if self.bytes.push(byte).is_err() {
            // Unreachable while the reserved slot is honoured
            self.terminated = true;
            return AppendOutcome::Full;
        }

        if closes_message || self.bytes.len() >= N - 1 {
            self.terminate();
            return AppendOutcome::Full;
        }

        AppendOutcome::Accepted
    }

    /// Append a composition symbol
    pub fn append_symbol(&mut self, symbol: Symbol) -> AppendOutcome {
        self.append(symbol.as_byte(), Alphabet::Morse)
    }

    fn terminate(&mut self) {
        // A non-terminated buffer never holds more than N - 2 bytes before
        // the push above, so the terminator slot is always free here.
        let _ = self.bytes.push(LINE_TERMINATOR);
        self.terminated = true;
    }

    /// Reset to empty
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.terminated = false;
    }

    /// Truncate back to `len` bytes, returning how many were removed
    pub fn rollback_to(&mut self, len: usize) -> usize {
        let current = self.bytes.len();
        if len >= current {
            return 0;
        }
        self.bytes.truncate(len);
        self.terminated = false;
        current - len
    }

    /// Strip trailing terminators and close the buffer to further appends
    ///
    /// Returns the length of the sealed line.
    pub fn seal_line(&mut self) -> usize {
        while self.bytes.last() == Some(&LINE_TERMINATOR) {
            self.bytes.pop();
        }
        self.terminated = true;
        self.bytes.len()
    }

    /// Number of stored bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the buffer holds nothing
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Total capacity including the terminator slot
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Check if the buffer is closed to appends
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Stored bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Count of dot and dash symbols
    pub fn symbol_count(&self) -> usize {
        self.bytes
            .iter()
            .filter(|&&b| is_mark_byte(b))
            .count()
    }

    /// Slice of at most `width` bytes starting at `start`
    pub fn window(&self, start: usize, width: usize) -> &[u8] {
        let len = self.bytes.len();
        let start = start.min(len);
        let end = start.saturating_add(width).min(len);
        &self.bytes[start..end]
    }
}

impl<const N: usize> Default for MessageBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
