//! Phase plus buffer, with checked ownership
//!
//! Activities never touch the buffer directly. They `claim` it for the
//! current tick and `hand_off` to move the cycle forward; both fail when the
//! calling activity does not own the current phase.

use crate::message::MessageBuffer;

use super::events::Event;
use super::machine::Phase;

/// The four cooperating activities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    Input,
    Transmit,
    Receive,
    Display,
}

impl Activity {
    /// Activity that owns the buffer in a given phase
    pub fn owner_of(phase: Phase) -> Activity {
        match phase {
            Phase::Composing => Activity::Input,
            Phase::Ready => Activity::Transmit,
            Phase::Receiving => Activity::Receive,
            Phase::Displaying => Activity::Display,
        }
    }

    /// Check if this activity owns the buffer in `phase`
    pub fn owns(self, phase: Phase) -> bool {
        Activity::owner_of(phase) == self
    }
}

/// Misuse of the shared buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OwnershipError {
    /// Caller does not own the current phase
    NotOwner { activity: Activity, phase: Phase },
    /// Buffer must be cleared before entering this phase
    BufferNotReleased { phase: Phase },
    /// Event is not legal from the current phase
    IllegalTransition { from: Phase, event: Event },
}

/// Shared message state: one phase, one buffer
#[derive(Debug)]
pub struct Messenger<const N: usize> {
    phase: Phase,
    buffer: MessageBuffer<N>,
}

impl<const N: usize> Messenger<N> {
    /// Start composing with an empty buffer
    pub const fn new() -> Self {
        Self {
            phase: Phase::Composing,
            buffer: MessageBuffer::new(),
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read-only view of the buffer
    pub fn buffer(&self) -> &MessageBuffer<N> {
        &self.buffer
    }

    /// Mutable access for the activity owning the current phase
    pub fn claim(&mut self, activity: Activity) -> Result<&mut MessageBuffer<N>, OwnershipError> {
        if !activity.owns(self.phase) {
            return Err(OwnershipError::NotOwner {
                activity,
                phase: self.phase,
            });
        }
        Ok(&mut self.buffer)
    }

    /// Move to the next phase on behalf of the owning activity
    pub fn hand_off(&mut self, activity: Activity, event: Event) -> Result<Phase, OwnershipError> {
        if !activity.owns(self.phase) {
            return Err(OwnershipError::NotOwner {
                activity,
                phase: self.phase,
            });
        }

        let next = self.phase.transition(event);
        if next == self.phase {
            return Err(OwnershipError::IllegalTransition {
                from: self.phase,
                event,
            });
        }
        if next.requires_empty_buffer() && !self.buffer.is_empty() {
            return Err(OwnershipError::BufferNotReleased { phase: next });
        }

        self.phase = next;
        Ok(next)
    }
}

impl<const N: usize> Default for Messenger<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morse::Symbol;

    #[test]
    fn test_starts_composing() {
        let messenger = Messenger::<16>::new();
        assert_eq!(messenger.phase(), Phase::Composing);
        assert!(messenger.buffer().is_empty());
    }

    #[test]
    fn test_claim_requires_owner() {
        let mut messenger = Messenger::<16>::new();
        assert!(messenger.claim(Activity::Input).is_ok());
        assert_eq!(
            messenger.claim(Activity::Display).err(),
            Some(OwnershipError::NotOwner {
                activity: Activity::Display,
                phase: Phase::Composing
            })
        );
    }

    #[test]
    fn test_hand_off_cycle() {
        let mut messenger = Messenger::<16>::new();
        let _ = messenger.claim(Activity::Input).unwrap().append_symbol(Symbol::Dot);

        assert_eq!(
            messenger.hand_off(Activity::Input, Event::MessageComplete),
            Ok(Phase::Ready)
        );

        // Receiving needs an empty buffer
        assert_eq!(
            messenger.hand_off(Activity::Transmit, Event::TransmitFinished),
            Err(OwnershipError::BufferNotReleased {
                phase: Phase::Receiving
            })
        );
        assert_eq!(messenger.phase(), Phase::Ready);

        messenger.claim(Activity::Transmit).unwrap().clear();
        assert_eq!(
            messenger.hand_off(Activity::Transmit, Event::TransmitFinished),
            Ok(Phase::Receiving)
        );
        assert_eq!(
            messenger.hand_off(Activity::Receive, Event::LineReceived),
            Ok(Phase::Displaying)
        );
        assert_eq!(
            messenger.hand_off(Activity::Display, Event::DisplayExhausted),
            Ok(Phase::Composing)
        );
    }

    #[test]
    fn test_hand_off_rejects_wrong_activity_and_event() {
        let mut messenger = Messenger::<16>::new();
        assert!(matches!(
            messenger.hand_off(Activity::Transmit, Event::TransmitFinished),
            Err(OwnershipError::NotOwner { .. })
        ));
        assert_eq!(
            messenger.hand_off(Activity::Input, Event::LineReceived),
            Err(OwnershipError::IllegalTransition {
                from: Phase::Composing,
                event: Event::LineReceived
            })
        );
        assert_eq!(messenger.phase(), Phase::Composing);
    }

    #[test]
    fn test_each_phase_has_one_owner() {
        for phase in [
            Phase::Composing,
            Phase::Ready,
            Phase::Receiving,
            Phase::Displaying,
        ] {
            let owners = [
                Activity::Input,
                Activity::Transmit,
                Activity::Receive,
                Activity::Display,
            ]
            .iter()
            .filter(|a| a.owns(phase))
            .count();
            assert_eq!(owners, 1);
        }
    }
}
