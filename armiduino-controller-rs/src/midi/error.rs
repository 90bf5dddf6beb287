//! Error types for MIDI emission.

use core::fmt;

/// Errors that can occur when emitting MIDI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiError<E> {
    /// The transport rejected a message. Not retried; the register still
    /// holds its values and is sent again with its next change.
    Transmit(E),

    /// Register index out of valid range (must be 0–3).
    InvalidEncoder,
}

// Allow ergonomic `?` propagation from raw transport errors.
impl<E> From<E> for MidiError<E> {
    fn from(error: E) -> Self {
        MidiError::Transmit(error)
    }
}

impl<E: fmt::Debug> fmt::Display for MidiError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MidiError::Transmit(e) => write!(f, "MIDI transmit error: {:?}", e),
            MidiError::InvalidEncoder => write!(f, "Invalid encoder index (must be 0-3)"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for MidiError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            MidiError::Transmit(e) => defmt::write!(f, "MIDI transmit error: {}", e),
            MidiError::InvalidEncoder => defmt::write!(f, "Invalid encoder index"),
        }
    }
}
