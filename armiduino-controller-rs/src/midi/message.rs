use heapless::Vec;

use crate::config::{LSB_CC, MSB_CC};
use crate::presets::ProgramChangeProperties;

/// Channel voice messages produced by the controller.
///
/// `channel` is the zero-based wire nibble (0–15); data bytes are 0–127.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MidiMessage {
    ControlChange {
        channel: u8,
        controller: u8,
        value: u8,
    },
    ProgramChange {
        channel: u8,
        program: u8,
    },
}

/// Encoded bytes of one message (two or three bytes).
pub type MessageBytes = Vec<u8, 3>;

impl MidiMessage {
    /// Encode to wire bytes. Every field is masked to its bit width.
    ///
    /// # Examples
    ///
    /// ```
    /// use armiduino::midi::program_change_sequence;
    /// use armiduino::presets::ProgramChangeProperties;
    ///
    /// let props = ProgramChangeProperties::new(1, 2, 6, 10);
    /// let [msb, lsb, pc] = program_change_sequence(&props);
    /// assert_eq!(msb.to_bytes().as_slice(), &[0xB9, 0, 1]);
    /// assert_eq!(lsb.to_bytes().as_slice(), &[0xB9, 32, 2]);
    /// assert_eq!(pc.to_bytes().as_slice(), &[0xC9, 5]);
    /// ```
    pub fn to_bytes(&self) -> MessageBytes {
        let mut bytes = Vec::new();
        // At most three bytes, capacity cannot be exceeded.
        match *self {
            MidiMessage::ControlChange {
                channel,
                controller,
                value,
            } => {
                let _ = bytes.extend_from_slice(&[
                    0xB0 | (channel & 0x0F),
                    controller & 0x7F,
                    value & 0x7F,
                ]);
            }
            MidiMessage::ProgramChange { channel, program } => {
                let _ = bytes.extend_from_slice(&[0xC0 | (channel & 0x0F), program & 0x7F]);
            }
        }
        bytes
    }
}

/// Build the three messages that select `properties` on a receiver:
/// `CC0 (MSB)`, `CC32 (LSB)`, `PC`, in that order.
pub fn program_change_sequence(properties: &ProgramChangeProperties) -> [MidiMessage; 3] {
    let channel = properties.wire_channel();
    [
        MidiMessage::ControlChange {
            channel,
            controller: MSB_CC,
            value: properties.msb_val(),
        },
        MidiMessage::ControlChange {
            channel,
            controller: LSB_CC,
            value: properties.lsb_val(),
        },
        MidiMessage::ProgramChange {
            channel,
            program: properties.wire_program(),
        },
    ]
}
