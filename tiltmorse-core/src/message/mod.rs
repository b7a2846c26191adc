//! Bounded message buffer shared by all activities

pub mod buffer;

pub use buffer::{AppendOutcome, Alphabet, MessageBuffer, RejectReason, LINE_TERMINATOR};
