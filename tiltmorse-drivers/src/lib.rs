//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tiltmorse-core, written against the `embedded-hal`, `embedded-io`
//! and `embedded-graphics` traits so any board crate can plug in:
//!
//! - Motion sensor (ICM-42670-P over I2C)
//! - Feedback (square-wave buzzer, status LED)
//! - Text display over any monochrome `DrawTarget`, and an in-RAM screen
//!   that records drawing for later replay
//! - Serial byte link

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod feedback;
pub mod link;
pub mod motion;
