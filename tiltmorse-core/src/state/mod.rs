//! Message lifecycle state machine
//!
//! One phase holds at any instant and decides which activity may touch the
//! shared message buffer. The cycle is fixed:
//! Composing → Ready → Receiving → Displaying → Composing.

pub mod events;
pub mod machine;
pub mod messenger;

pub use events::Event;
pub use machine::Phase;
pub use messenger::{Activity, Messenger, OwnershipError};
