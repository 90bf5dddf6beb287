//! Core of the ARMIDUINO program change controller.
//!
//! Four rotary encoders with push switches select MIDI bank (CC0/CC32) and
//! program change values. Every turn is debounced, decoded into signed steps,
//! applied to the register owned by that encoder and sent to the MIDI output
//! as a paced `CC0, CC32, PC` sequence.
//!
//! ```text
//! pins ─► Debouncer ─► QuadratureDecoder ─► PresetBank ─► ProgramChangeEmitter ─► MidiTransport
//!                                                   └────► MessageIndicator
//! ```
//!
//! [`controller::Controller`] wires the pieces into a single-threaded
//! polling loop. Time, pins and the MIDI transport are injected so the whole
//! pipeline can be simulated on the host.
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging and [`defmt::Format`] implementations
//!   for embedded targets.

#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod config;
pub mod controller;
pub mod indicator;
pub mod input;
pub mod midi;
pub mod presets;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{BoundPolicy, ControllerConfig, EncoderPins, ENCODER_COUNT};
pub use controller::{Controller, ControllerState, PollReport};
pub use midi::{MidiError, MidiMessage, MidiTransport, ProgramChangeEmitter};
pub use presets::{AdjustTarget, PresetBank, ProgramChangeProperties};
