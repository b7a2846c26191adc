//! Events that trigger phase transitions

/// Events that can trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Composition finished (terminator written)
    MessageComplete,
    /// Buffer sent to the host, or skipped as empty
    TransmitFinished,
    /// A full line arrived from the host
    LineReceived,
    /// Last page shown and completion cue played
    DisplayExhausted,
}
