use super::properties::{AdjustTarget, ProgramChangeProperties};
use crate::config::{BoundPolicy, ENCODER_COUNT};

/// One encoder's register within a preset: its program change values plus
/// a change flag per consumer.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PresetRegister {
    /// Current values, always within protocol bounds.
    pub properties: ProgramChangeProperties,
    /// The display needs to redraw this register.
    pub changed_display: bool,
    /// The values need to be sent to the MIDI output.
    pub changed_midi: bool,
}

impl PresetRegister {
    /// Apply an encoder step and flag the register for both consumers.
    ///
    /// Flags are raised for every non-zero step, including one that hits a
    /// bound and leaves the value unchanged; the receiver is re-sent the
    /// current program.
    pub fn adjust_from_encoder(&mut self, target: AdjustTarget, delta: i32, policy: BoundPolicy) {
        if delta == 0 {
            return;
        }
        self.properties.adjust(target, delta, policy);
        self.mark_changed();
    }

    /// Flag the register for both consumers without touching its values.
    pub fn mark_changed(&mut self) {
        self.changed_display = true;
        self.changed_midi = true;
    }

    pub fn clear_flags(&mut self) {
        self.changed_display = false;
        self.changed_midi = false;
    }
}

/// The registers of all encoders, recalled together.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Preset {
    /// Registers indexed by encoder position (0–3).
    pub registers: [PresetRegister; ENCODER_COUNT],
}
