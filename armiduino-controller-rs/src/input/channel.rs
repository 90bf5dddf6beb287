use embassy_time::Instant;

use super::debounce::{Debouncer, Edge};
use super::quadrature::QuadratureDecoder;
use crate::config::{ControllerConfig, EncoderPins};
use crate::presets::AdjustTarget;

/// Raw levels of one encoder header sampled in the same poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawLevels {
    pub clk: bool,
    pub dt: bool,
    pub sw: bool,
}

impl RawLevels {
    /// All three pins at `level`.
    pub const fn uniform(level: bool) -> Self {
        Self {
            clk: level,
            dt: level,
            sw: level,
        }
    }
}

/// Result of sampling one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelEvent {
    /// Decoded rotation, `-1`, `0` or `+1`.
    pub step: i8,
    /// Set when the switch was pressed and the target advanced.
    pub pressed: bool,
}

/// One physical encoder: its pins, debounce and quadrature state, and the
/// quantity its rotation currently adjusts.
///
/// The channel addresses the register with the same index in the active
/// preset.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderChannel {
    index: usize,
    pins: EncoderPins,
    idle_level: bool,
    clk: Debouncer,
    dt: Debouncer,
    sw: Debouncer,
    decoder: QuadratureDecoder,
    target: AdjustTarget,
}

impl EncoderChannel {
    pub fn new(index: usize, pins: EncoderPins, config: &ControllerConfig) -> Self {
        let idle = config.idle_level;
        Self {
            index,
            pins,
            idle_level: idle,
            clk: Debouncer::new(idle, config.debounce),
            dt: Debouncer::new(idle, config.debounce),
            sw: Debouncer::new(idle, config.debounce),
            decoder: QuadratureDecoder::new(idle),
            target: AdjustTarget::Program,
        }
    }

    /// Register index addressed by this channel.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn pins(&self) -> EncoderPins {
        self.pins
    }

    /// Quantity the next rotation will adjust.
    pub fn target(&self) -> AdjustTarget {
        self.target
    }

    /// Last raw levels seen, used in place of a failed pin read.
    pub fn raw_levels(&self) -> RawLevels {
        RawLevels {
            clk: self.clk.raw(),
            dt: self.dt.raw(),
            sw: self.sw.raw(),
        }
    }

    /// Seed debounce and decoder state with the levels read at startup, so a
    /// pin that is already away from idle is not taken for an edge.
    pub fn prime(&mut self, levels: RawLevels) {
        self.clk.reset(levels.clk);
        self.dt.reset(levels.dt);
        self.sw.reset(levels.sw);
        self.decoder.reset(levels.clk, levels.dt);
    }

    /// `true` while any of the three pins waits out its debounce window.
    pub fn is_settling(&self) -> bool {
        self.clk.is_settling() || self.dt.is_settling() || self.sw.is_settling()
    }

    /// Feed one raw sample of all three pins.
    pub fn sample(&mut self, levels: RawLevels, now: Instant) -> ChannelEvent {
        self.dt.update(levels.dt, now);
        self.clk.update(levels.clk, now);
        let step = self.decoder.decode(self.clk.level(), self.dt.level());

        let active_edge = if self.idle_level {
            Edge::Falling
        } else {
            Edge::Rising
        };
        let pressed = self.sw.update(levels.sw, now) == Some(active_edge);
        if pressed {
            self.target = self.target.next();
        }

        ChannelEvent { step, pressed }
    }
}
