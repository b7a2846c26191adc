//! Composition alphabet

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Byte stored for a dot
pub const DOT: u8 = b'.';
/// Byte stored for a dash
pub const DASH: u8 = b'-';
/// Byte stored for a word/letter separator
pub const SEPARATOR: u8 = b' ';

/// One symbol of the composition alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    Dot,
    Dash,
    Separator,
}

impl Symbol {
    /// Byte representation inside the message buffer
    pub const fn as_byte(self) -> u8 {
        match self {
            Symbol::Dot => DOT,
            Symbol::Dash => DASH,
            Symbol::Separator => SEPARATOR,
        }
    }

    /// Parse a buffer byte back into a symbol
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            DOT => Some(Symbol::Dot),
            DASH => Some(Symbol::Dash),
            SEPARATOR => Some(Symbol::Separator),
            _ => None,
        }
    }

    /// Dots and dashes carry information, separators only delimit
    pub const fn is_mark(self) -> bool {
        matches!(self, Symbol::Dot | Symbol::Dash)
    }

    /// Character shown on the display for this symbol
    pub const fn as_str(self) -> &'static str {
        match self {
            Symbol::Dot => ".",
            Symbol::Dash => "-",
            Symbol::Separator => " ",
        }
    }
}

/// Check whether a byte is a dot or a dash
pub const fn is_mark_byte(byte: u8) -> bool {
    matches!(byte, DOT | DASH)
}
