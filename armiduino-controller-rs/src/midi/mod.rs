//! MIDI output: message encoding, the transport seam, and the paced
//! program change emitter.
//!
//! Physical framing (UART at 31250 baud, USB-MIDI packets) lives behind
//! [`MidiTransport`]; this module only produces complete messages and
//! decides when each one may go out.

mod emitter;
mod error;
mod message;

pub use emitter::ProgramChangeEmitter;
pub use error::MidiError;
pub use message::{program_change_sequence, MessageBytes, MidiMessage};

/// Byte sink for complete MIDI messages.
pub trait MidiTransport {
    type Error;

    /// Send one complete message.
    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl<T: MidiTransport + ?Sized> MidiTransport for &mut T {
    type Error = T::Error;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).send(bytes)
    }
}
