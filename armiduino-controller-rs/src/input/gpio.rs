use core::fmt;

use embedded_hal::digital::InputPin;

/// Reads digital levels by logical pin number.
///
/// The controller walks the pin numbers from its configuration, so any pin
/// set (real GPIO, a simulation, a port expander) only has to answer
/// "what level is pin N at right now".
pub trait PinReader {
    type Error;

    /// `true` for a high level.
    fn read(&mut self, pin: u8) -> Result<bool, Self::Error>;
}

impl<R: PinReader + ?Sized> PinReader for &mut R {
    type Error = R::Error;

    fn read(&mut self, pin: u8) -> Result<bool, Self::Error> {
        (**self).read(pin)
    }
}

/// Errors returned by [`GpioBank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError<E> {
    /// No input is registered under this pin number.
    UnknownPin(u8),
    /// The underlying input reported a failure.
    Gpio(E),
}

impl<E: fmt::Debug> fmt::Display for PinError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PinError::UnknownPin(pin) => write!(f, "No input registered for pin {}", pin),
            PinError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for PinError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            PinError::UnknownPin(pin) => defmt::write!(f, "No input for pin {}", pin),
            PinError::Gpio(e) => defmt::write!(f, "GPIO error: {}", e),
        }
    }
}

/// Fixed table of `embedded-hal` inputs keyed by logical pin number.
///
/// # Examples
///
/// ```ignore
/// use armiduino::input::GpioBank;
/// use embassy_rp::gpio::{Input, Pull};
///
/// let pins = GpioBank::new([
///     (2, Input::new(p.PIN_2, Pull::Up)),
///     (3, Input::new(p.PIN_3, Pull::Up)),
///     (4, Input::new(p.PIN_4, Pull::Up)),
/// ]);
/// ```
pub struct GpioBank<P, const N: usize> {
    pins: [(u8, P); N],
}

impl<P, const N: usize> GpioBank<P, N>
where
    P: InputPin,
{
    pub fn new(pins: [(u8, P); N]) -> Self {
        Self { pins }
    }
}

impl<P, const N: usize> PinReader for GpioBank<P, N>
where
    P: InputPin,
{
    type Error = PinError<P::Error>;

    fn read(&mut self, pin: u8) -> Result<bool, Self::Error> {
        let (_, input) = self
            .pins
            .iter_mut()
            .find(|(number, _)| *number == pin)
            .ok_or(PinError::UnknownPin(pin))?;
        input.is_high().map_err(PinError::Gpio)
    }
}
