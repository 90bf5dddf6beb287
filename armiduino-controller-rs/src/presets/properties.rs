use crate::config::{
    BoundPolicy, MAX_CC_VAL, MAX_MIDI_CH_VAL, MAX_PC_VAL, MIN_CC_VAL, MIN_MIDI_CH_VAL, MIN_PC_VAL,
};

/// Quantity an encoder rotation adjusts. A switch press advances to the
/// next target, wrapping from [`Preset`](AdjustTarget::Preset) back to
/// [`Program`](AdjustTarget::Program).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdjustTarget {
    /// Program change number (1–128).
    #[default]
    Program,
    /// Bank select MSB (CC0, 0–127).
    BankMsb,
    /// Bank select LSB (CC32, 0–127).
    BankLsb,
    /// MIDI channel (1–16).
    Channel,
    /// Active preset of the whole bank (1–16).
    Preset,
}

impl AdjustTarget {
    pub fn next(self) -> Self {
        match self {
            AdjustTarget::Program => AdjustTarget::BankMsb,
            AdjustTarget::BankMsb => AdjustTarget::BankLsb,
            AdjustTarget::BankLsb => AdjustTarget::Channel,
            AdjustTarget::Channel => AdjustTarget::Preset,
            AdjustTarget::Preset => AdjustTarget::Program,
        }
    }
}

/// The four values behind one bank select + program change: bank MSB,
/// bank LSB, program number and MIDI channel.
///
/// Fields are private so every write goes through a bounding setter;
/// a value outside its range cannot be stored.
///
/// | field      | range  | default |
/// |------------|--------|---------|
/// | `msb_val`  | 0–127  | 0       |
/// | `lsb_val`  | 0–127  | 0       |
/// | `pc_num`   | 1–128  | 1       |
/// | `chan_num` | 1–16   | 1       |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProgramChangeProperties {
    msb_val: u8,
    lsb_val: u8,
    pc_num: u8,
    chan_num: u8,
}

impl Default for ProgramChangeProperties {
    fn default() -> Self {
        Self {
            msb_val: MIN_CC_VAL,
            lsb_val: MIN_CC_VAL,
            pc_num: MIN_PC_VAL,
            chan_num: MIN_MIDI_CH_VAL,
        }
    }
}

impl ProgramChangeProperties {
    /// Build from display values, clamping each into its range.
    pub fn new(msb_val: u8, lsb_val: u8, pc_num: u8, chan_num: u8) -> Self {
        let mut properties = Self::default();
        properties.set_msb_val(i32::from(msb_val));
        properties.set_lsb_val(i32::from(lsb_val));
        properties.set_pc_num(i32::from(pc_num));
        properties.set_chan_num(i32::from(chan_num));
        properties
    }

    pub fn msb_val(&self) -> u8 {
        self.msb_val
    }

    pub fn lsb_val(&self) -> u8 {
        self.lsb_val
    }

    /// Program number as displayed (1–128).
    pub fn pc_num(&self) -> u8 {
        self.pc_num
    }

    /// Channel as displayed (1–16).
    pub fn chan_num(&self) -> u8 {
        self.chan_num
    }

    /// Program number on the wire (0–127).
    pub fn wire_program(&self) -> u8 {
        self.pc_num - MIN_PC_VAL
    }

    /// Channel nibble on the wire (0–15).
    pub fn wire_channel(&self) -> u8 {
        self.chan_num - MIN_MIDI_CH_VAL
    }

    pub fn set_msb_val(&mut self, v: i32) {
        self.msb_val = clamp_u8(v, MIN_CC_VAL, MAX_CC_VAL);
    }

    pub fn set_lsb_val(&mut self, v: i32) {
        self.lsb_val = clamp_u8(v, MIN_CC_VAL, MAX_CC_VAL);
    }

    pub fn set_pc_num(&mut self, v: i32) {
        self.pc_num = clamp_u8(v, MIN_PC_VAL, MAX_PC_VAL);
    }

    pub fn set_chan_num(&mut self, v: i32) {
        self.chan_num = clamp_u8(v, MIN_MIDI_CH_VAL, MAX_MIDI_CH_VAL);
    }

    /// Step the program number by `step` under `policy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use armiduino::config::BoundPolicy;
    /// use armiduino::presets::ProgramChangeProperties;
    ///
    /// let mut props = ProgramChangeProperties::default();
    /// props.apply_delta(5, BoundPolicy::Clamp);
    /// assert_eq!(props.pc_num(), 6);
    ///
    /// props.apply_delta(1000, BoundPolicy::Clamp);
    /// assert_eq!(props.pc_num(), 128);
    /// ```
    pub fn apply_delta(&mut self, step: i32, policy: BoundPolicy) {
        self.adjust(AdjustTarget::Program, step, policy);
    }

    /// Step the quantity selected by `target`. Returns `true` if a stored
    /// value changed.
    ///
    /// [`AdjustTarget::Preset`] is not a property of a single register and
    /// leaves it untouched.
    pub fn adjust(&mut self, target: AdjustTarget, delta: i32, policy: BoundPolicy) -> bool {
        let before = *self;
        match target {
            AdjustTarget::Program => {
                self.pc_num = bounded(self.pc_num, delta, MIN_PC_VAL, MAX_PC_VAL, policy);
            }
            AdjustTarget::BankMsb => {
                self.msb_val = bounded(self.msb_val, delta, MIN_CC_VAL, MAX_CC_VAL, policy);
            }
            AdjustTarget::BankLsb => {
                self.lsb_val = bounded(self.lsb_val, delta, MIN_CC_VAL, MAX_CC_VAL, policy);
            }
            AdjustTarget::Channel => {
                self.chan_num =
                    bounded(self.chan_num, delta, MIN_MIDI_CH_VAL, MAX_MIDI_CH_VAL, policy);
            }
            AdjustTarget::Preset => {}
        }
        *self != before
    }
}

fn clamp_u8(v: i32, min: u8, max: u8) -> u8 {
    v.clamp(i32::from(min), i32::from(max)) as u8
}

fn bounded(value: u8, delta: i32, min: u8, max: u8, policy: BoundPolicy) -> u8 {
    policy.apply(i32::from(value), delta, i32::from(min), i32::from(max)) as u8
}
