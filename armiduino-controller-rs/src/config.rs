//! Controller configuration and MIDI protocol bounds.
//!
//! Hardware facts (pin numbers, timings, boundary policy) live in the
//! immutable [`ControllerConfig`] handed to the controller at startup.
//! Protocol facts that no hardware revision can change are plain constants.

use embassy_time::Duration;

/// Number of physical encoders (and registers per preset).
pub const ENCODER_COUNT: usize = 4;

/// Standard bank select MSB control change number.
pub const MSB_CC: u8 = 0;
/// Standard bank select LSB control change number.
pub const LSB_CC: u8 = 32;

/// Smallest control change value.
pub const MIN_CC_VAL: u8 = 0;
/// Largest control change value.
pub const MAX_CC_VAL: u8 = 127;

/// Smallest program change number, as displayed (wire value 0).
pub const MIN_PC_VAL: u8 = 1;
/// Largest program change number, as displayed (wire value 127).
pub const MAX_PC_VAL: u8 = 128;

/// Smallest MIDI channel, as displayed (wire nibble 0).
pub const MIN_MIDI_CH_VAL: u8 = 1;
/// Largest MIDI channel, as displayed (wire nibble 15).
pub const MAX_MIDI_CH_VAL: u8 = 16;

/// First preset number.
pub const MIN_PRESET_VAL: u8 = 1;
/// Last preset number. Arbitrary, sized for on-chip RAM.
pub const MAX_PRESET_VAL: u8 = 16;

/// Default debounce window in milliseconds.
pub const DEBOUNCE_MS: u64 = 100;
/// Default spacing between consecutive MIDI messages in milliseconds.
pub const MIDI_DELAY_MS: u64 = 300;
/// Default visibility of the "message sent" indicator in milliseconds.
pub const MESSAGE_DURATION_MS: u64 = 5000;

/// Logical pin numbers of one encoder header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderPins {
    /// Quadrature clock (A) pin.
    pub clk: u8,
    /// Quadrature data (B) pin.
    pub dt: u8,
    /// Push switch pin.
    pub sw: u8,
}

impl EncoderPins {
    pub const fn new(clk: u8, dt: u8, sw: u8) -> Self {
        Self { clk, dt, sw }
    }
}

/// Pin assignment of the first controller board revision.
pub const DEFAULT_ENCODER_PINS: [EncoderPins; ENCODER_COUNT] = [
    EncoderPins::new(39, 43, 47),
    EncoderPins::new(2, 3, 4),
    EncoderPins::new(8, 9, 10),
    EncoderPins::new(11, 12, 13),
];

/// What happens when a counter is pushed past one end of its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoundPolicy {
    /// Stop at the bound (128 + 1 stays 128).
    #[default]
    Clamp,
    /// Continue from the other end (128 + 1 becomes 1).
    Wrap,
}

impl BoundPolicy {
    /// Apply `delta` to `value` inside the inclusive range `[min, max]`.
    ///
    /// `value` itself is first brought into range, so the result is always
    /// within bounds whatever the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use armiduino::config::BoundPolicy;
    ///
    /// assert_eq!(BoundPolicy::Clamp.apply(128, 1, 1, 128), 128);
    /// assert_eq!(BoundPolicy::Wrap.apply(128, 1, 1, 128), 1);
    /// assert_eq!(BoundPolicy::Wrap.apply(1, -1, 1, 128), 128);
    /// ```
    pub fn apply(self, value: i32, delta: i32, min: i32, max: i32) -> i32 {
        let target = value.clamp(min, max).saturating_add(delta);
        match self {
            BoundPolicy::Clamp => target.clamp(min, max),
            BoundPolicy::Wrap => {
                let span = i64::from(max) - i64::from(min) + 1;
                let offset = (i64::from(target) - i64::from(min)).rem_euclid(span);
                (offset + i64::from(min)) as i32
            }
        }
    }
}

/// Immutable controller configuration.
///
/// [`ControllerConfig::default()`] reproduces the first board revision: the pin
/// table above, 100 ms debounce, 300 ms MIDI spacing, a 5 s indicator and
/// clamp-at-bound counters on pulled-up inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerConfig {
    /// Pin headers, indexed by encoder number.
    pub encoders: [EncoderPins; ENCODER_COUNT],
    /// A raw level must hold this long before it becomes the stable level.
    pub debounce: Duration,
    /// Minimum time between two transmitted MIDI messages.
    pub midi_delay: Duration,
    /// How long the "message sent" indicator stays visible.
    pub message_duration: Duration,
    /// Counter behaviour at range boundaries.
    pub bound_policy: BoundPolicy,
    /// Level read from an idle pin. `true` for pull-ups.
    pub idle_level: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            encoders: DEFAULT_ENCODER_PINS,
            debounce: Duration::from_millis(DEBOUNCE_MS),
            midi_delay: Duration::from_millis(MIDI_DELAY_MS),
            message_duration: Duration::from_millis(MESSAGE_DURATION_MS),
            bound_policy: BoundPolicy::Clamp,
            idle_level: true,
        }
    }
}
