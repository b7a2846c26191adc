//! Board-agnostic core logic for the Tiltmorse messenger
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits for the collaborators (IMU, serial link, display,
//!   buzzer, LED)
//! - Phase state machine and the owned message buffer
//! - Morse symbol table and group validation
//! - Position classifier for tilt-to-symbol mapping
//! - Button latches shared with the edge-notification context
//! - Per-phase activity logic (input, transmit, receive, display)
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod activity;
pub mod buttons;
pub mod config;
pub mod message;
pub mod morse;
pub mod motion;
pub mod state;
pub mod traits;

/// Message buffer capacity used by the firmware
pub const MESSAGE_CAPACITY: usize = 256;
