//! Phase definition
//!
//! Buffer ownership is a function of the current phase only.

use super::events::Event;

/// Message lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// User is tilting and pressing buttons to build a message
    #[default]
    Composing,
    /// Message complete, waiting to be sent
    Ready,
    /// Accumulating the host's reply
    Receiving,
    /// Paging the reply onto the display
    Displaying,
}

impl Phase {
    /// Check if the button latches are consumed in this phase
    pub fn accepts_input(&self) -> bool {
        matches!(self, Phase::Composing)
    }

    /// Check if the buffer must be empty when this phase is entered
    pub fn requires_empty_buffer(&self) -> bool {
        matches!(self, Phase::Composing | Phase::Receiving)
    }

    /// The phase that follows this one in the cycle
    pub fn successor(&self) -> Phase {
        match self {
            Phase::Composing => Phase::Ready,
            Phase::Ready => Phase::Receiving,
            Phase::Receiving => Phase::Displaying,
            Phase::Displaying => Phase::Composing,
        }
    }

    /// Process an event and return the next phase
    ///
    /// Any pair not listed leaves the phase unchanged.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            (Composing, MessageComplete) => Ready,
            (Ready, TransmitFinished) => Receiving,
            (Receiving, LineReceived) => Displaying,
            (Displaying, DisplayExhausted) => Composing,

            // Default: stay in current phase
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHASES: [Phase; 4] = [
        Phase::Composing,
        Phase::Ready,
        Phase::Receiving,
        Phase::Displaying,
    ];

    const EVENTS: [Event; 4] = [
        Event::MessageComplete,
        Event::TransmitFinished,
        Event::LineReceived,
        Event::DisplayExhausted,
    ];

    #[test]
    fn test_full_cycle() {
        let phase = Phase::Composing;

        let ready = phase.transition(Event::MessageComplete);
        assert_eq!(ready, Phase::Ready);

        let receiving = ready.transition(Event::TransmitFinished);
        assert_eq!(receiving, Phase::Receiving);

        let displaying = receiving.transition(Event::LineReceived);
        assert_eq!(displaying, Phase::Displaying);

        let composing = displaying.transition(Event::DisplayExhausted);
        assert_eq!(composing, Phase::Composing);
    }

    #[test]
    fn test_unlisted_pairs_stay() {
        for phase in PHASES {
            for event in EVENTS {
                let next = phase.transition(event);
                if next != phase {
                    assert_eq!(next, phase.successor());
                }
            }
        }
        assert_eq!(
            Phase::Composing.transition(Event::LineReceived),
            Phase::Composing
        );
        assert_eq!(
            Phase::Ready.transition(Event::DisplayExhausted),
            Phase::Ready
        );
    }

    #[test]
    fn test_exactly_one_event_per_phase() {
        for phase in PHASES {
            let moving = EVENTS
                .iter()
                .filter(|&&e| phase.transition(e) != phase)
                .count();
            assert_eq!(moving, 1);
        }
    }

    #[test]
    fn test_buffer_rules() {
        assert!(Phase::Composing.accepts_input());
        assert!(!Phase::Displaying.accepts_input());
        assert!(Phase::Receiving.requires_empty_buffer());
        assert!(!Phase::Displaying.requires_empty_buffer());
    }
}
