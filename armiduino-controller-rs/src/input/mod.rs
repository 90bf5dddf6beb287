//! Encoder input path: raw pin levels to debounced levels to rotation steps.
//!
//! ```text
//! PinReader ─► Debouncer (CLK, DT, SW) ─► QuadratureDecoder ─► ChannelEvent
//! ```
//!
//! Each [`EncoderChannel`] owns three [`Debouncer`]s and one
//! [`QuadratureDecoder`]. Pin access goes through the [`PinReader`] trait,
//! with [`GpioBank`] adapting any set of `embedded-hal` inputs.

mod channel;
mod debounce;
mod gpio;
mod quadrature;

pub use channel::{ChannelEvent, EncoderChannel, RawLevels};
pub use debounce::{Debouncer, Edge};
pub use gpio::{GpioBank, PinError, PinReader};
pub use quadrature::QuadratureDecoder;
