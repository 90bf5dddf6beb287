use core::fmt;

/// Errors that can occur when addressing presets and registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PresetError {
    /// Preset number outside `MIN_PRESET_VAL..=MAX_PRESET_VAL`.
    InvalidPresetNumber,
    /// Encoder index is out of bounds (must be < ENCODER_COUNT).
    InvalidEncoderIndex,
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PresetError::InvalidPresetNumber => write!(f, "Invalid preset number (must be 1-16)"),
            PresetError::InvalidEncoderIndex => write!(f, "Invalid encoder index (must be 0-3)"),
        }
    }
}
