//! Program change registers organised into recallable presets.
//!
//! Every physical encoder owns one register per preset. A register holds the
//! four values needed for a bank select + program change (see
//! [`ProgramChangeProperties`]) together with two change flags.
//!
//! ```text
//! Preset 1:  [Enc 0] [Enc 1] [Enc 2] [Enc 3]
//! Preset 2:  [Enc 0] [Enc 1] [Enc 2] [Enc 3]
//! ...
//! Preset 16: [Enc 0] [Enc 1] [Enc 2] [Enc 3]
//! ```
//!
//! # Change Tracking
//!
//! - **`changed_display`**: the register needs to be redrawn.
//! - **`changed_midi`**: the register needs to be sent to the MIDI output.
//!
//! Encoder steps and preset recalls set both. Consumers call
//! [`PresetBank::take_display_changes()`] or
//! [`PresetBank::take_midi_changes()`] to read and clear their own flag.
//!
//! # Bounds
//!
//! Values are bounded at the point of mutation, never validated afterwards:
//! there is no way to store an out-of-range bank, program or channel.

mod bank;
mod error;
mod preset;
mod properties;

pub use bank::{PresetBank, PresetChange, PresetChanges};
pub use error::PresetError;
pub use preset::{Preset, PresetRegister};
pub use properties::{AdjustTarget, ProgramChangeProperties};

use crate::config::MAX_PRESET_VAL;

/// Number of presets in the bank.
pub const N_PRESETS: usize = MAX_PRESET_VAL as usize;
