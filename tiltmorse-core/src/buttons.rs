//! Button press latches
//!
//! Edge handlers only ever call `notify`; the Input Activity is the only
//! consumer and clears a latch when it takes it. This is the single
//! boundary crossed from interrupt context.

use portable_atomic::{AtomicBool, Ordering};

/// Which button was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Sample the tilt and append a dot or dash
    CharacterSelect,
    /// Append a separator and validate the closed group
    WordSelect,
}

/// One pending-press flag
#[derive(Debug)]
pub struct ButtonLatch(AtomicBool);

impl ButtonLatch {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Record a press (safe from interrupt context)
    pub fn set(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Consume a pending press, clearing the latch
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }

    /// Peek without consuming
    pub fn is_pending(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for ButtonLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Both button latches
#[derive(Debug, Default)]
pub struct ButtonLatches {
    character: ButtonLatch,
    word: ButtonLatch,
}

impl ButtonLatches {
    pub const fn new() -> Self {
        Self {
            character: ButtonLatch::new(),
            word: ButtonLatch::new(),
        }
    }

    /// Edge notification entry point
    pub fn notify(&self, button: Button) {
        self.latch(button).set();
    }

    /// Latch for a given button
    pub fn latch(&self, button: Button) -> &ButtonLatch {
        match button {
            Button::CharacterSelect => &self.character,
            Button::WordSelect => &self.word,
        }
    }

    /// Drop any pending presses, returning whether something was dropped
    pub fn discard_all(&self) -> bool {
        let character = self.character.take();
        let word = self.word.take();
        character || word
    }
}
