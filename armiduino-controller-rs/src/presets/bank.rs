use heapless::Vec;

use super::error::PresetError;
use super::preset::{Preset, PresetRegister};
use super::properties::{AdjustTarget, ProgramChangeProperties};
use super::N_PRESETS;
use crate::config::{BoundPolicy, ENCODER_COUNT, MAX_PRESET_VAL, MIN_PRESET_VAL};

/// Describes a single register change, returned by the change consumption methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PresetChange {
    /// Preset number (1-based).
    pub preset: u8,
    /// Encoder/register index within the preset (0-based).
    pub encoder: usize,
    /// Register values after the change.
    pub properties: ProgramChangeProperties,
}

/// Changes collected from one preset.
pub type PresetChanges = Vec<PresetChange, ENCODER_COUNT>;

/// All presets of the controller plus the index of the active one.
///
/// The encoders always edit the registers of the active preset. Each
/// register carries two change flags, consumed independently by the display
/// ([`take_display_changes`](Self::take_display_changes)) and by the MIDI
/// emitter ([`take_midi_changes`](Self::take_midi_changes)).
#[derive(Debug, Clone)]
pub struct PresetBank {
    /// All presets, indexed 0 to `N_PRESETS - 1` (preset number minus one).
    presets: [Preset; N_PRESETS],
    current: usize,
}

impl Default for PresetBank {
    fn default() -> Self {
        Self::new()
    }
}

impl PresetBank {
    /// Every register at (0, 0, 1, 1), preset 1 active, nothing pending.
    pub fn new() -> Self {
        Self {
            presets: [Preset::default(); N_PRESETS],
            current: 0,
        }
    }

    // ── Preset navigation ────────────────────────────────────────────

    /// Number (1-based) of the active preset.
    pub fn current_preset(&self) -> u8 {
        self.current as u8 + MIN_PRESET_VAL
    }

    /// Switch presets **without** marking any change flags.
    ///
    /// Returns [`PresetError::InvalidPresetNumber`] if `number` is outside
    /// `1..=16`.
    pub fn set_preset(&mut self, number: u8) -> Result<(), PresetError> {
        self.current = preset_index(number)?;
        Ok(())
    }

    /// Switch presets and mark every register of the new preset as changed
    /// for both consumers, so the whole preset is redrawn and re-sent.
    ///
    /// Pending flags of the preset being left are discarded.
    pub fn set_active_preset(&mut self, number: u8) -> Result<(), PresetError> {
        let index = preset_index(number)?;

        for register in &mut self.presets[self.current].registers {
            register.clear_flags();
        }

        self.current = index;
        for register in &mut self.presets[index].registers {
            register.mark_changed();
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Preset {} active", number);

        Ok(())
    }

    /// Move the active preset by `delta` under `policy`. Returns the new
    /// preset number. Nothing is marked when the number does not change.
    pub fn step_preset(&mut self, delta: i32, policy: BoundPolicy) -> u8 {
        let number = policy.apply(
            i32::from(self.current_preset()),
            delta,
            i32::from(MIN_PRESET_VAL),
            i32::from(MAX_PRESET_VAL),
        ) as u8;

        if number != self.current_preset() {
            // In range by construction of `apply`.
            let _ = self.set_active_preset(number);
        }
        number
    }

    pub fn active_preset(&self) -> &Preset {
        &self.presets[self.current]
    }

    pub fn active_preset_mut(&mut self) -> &mut Preset {
        &mut self.presets[self.current]
    }

    /// Any preset by number.
    pub fn preset(&self, number: u8) -> Result<&Preset, PresetError> {
        Ok(&self.presets[preset_index(number)?])
    }

    // ── Register access ──────────────────────────────────────────────

    /// Values of register `encoder_idx` in the active preset.
    pub fn properties(&self, encoder_idx: usize) -> Option<ProgramChangeProperties> {
        self.active_preset()
            .registers
            .get(encoder_idx)
            .map(|register| register.properties)
    }

    /// Replace register `encoder_idx` of the active preset and flag it for
    /// both consumers.
    pub fn set_properties(
        &mut self,
        encoder_idx: usize,
        properties: ProgramChangeProperties,
    ) -> Result<(), PresetError> {
        let register = self
            .active_preset_mut()
            .registers
            .get_mut(encoder_idx)
            .ok_or(PresetError::InvalidEncoderIndex)?;
        register.properties = properties;
        register.mark_changed();
        Ok(())
    }

    // ── Encoder-driven updates ───────────────────────────────────────

    /// Apply an encoder step to `target` of register `encoder_idx` in the
    /// active preset.
    ///
    /// [`AdjustTarget::Preset`] moves the active preset instead. An
    /// out-of-range `encoder_idx` is a silent no-op (logged via `defmt`
    /// when that feature is enabled).
    ///
    /// # Examples
    ///
    /// ```
    /// use armiduino::config::BoundPolicy;
    /// use armiduino::presets::{AdjustTarget, PresetBank};
    ///
    /// let mut bank = PresetBank::new();
    /// bank.update_from_encoder(0, AdjustTarget::Program, 5, BoundPolicy::Clamp);
    /// assert_eq!(bank.properties(0).unwrap().pc_num(), 6);
    ///
    /// bank.update_from_encoder(2, AdjustTarget::Preset, 1, BoundPolicy::Clamp);
    /// assert_eq!(bank.current_preset(), 2);
    /// ```
    pub fn update_from_encoder(
        &mut self,
        encoder_idx: usize,
        target: AdjustTarget,
        delta: i32,
        policy: BoundPolicy,
    ) {
        if encoder_idx >= ENCODER_COUNT {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "update_from_encoder: encoder_idx {} out of bounds",
                encoder_idx
            );
            return;
        }

        match target {
            AdjustTarget::Preset => {
                self.step_preset(delta, policy);
            }
            _ => {
                self.presets[self.current].registers[encoder_idx]
                    .adjust_from_encoder(target, delta, policy);
            }
        }
    }

    // ── Change consumption ───────────────────────────────────────────

    /// Collect the registers of the active preset whose MIDI flag is set,
    /// then clear those flags. The display flag is left intact.
    ///
    /// # Examples
    ///
    /// ```
    /// use armiduino::config::BoundPolicy;
    /// use armiduino::presets::{AdjustTarget, PresetBank};
    ///
    /// let mut bank = PresetBank::new();
    /// bank.update_from_encoder(1, AdjustTarget::BankMsb, 3, BoundPolicy::Clamp);
    ///
    /// let changes = bank.take_midi_changes();
    /// assert_eq!(changes.len(), 1);
    /// assert_eq!(changes[0].encoder, 1);
    /// assert_eq!(changes[0].properties.msb_val(), 3);
    ///
    /// // Flags are cleared, the second call returns nothing.
    /// assert!(bank.take_midi_changes().is_empty());
    /// ```
    pub fn take_midi_changes(&mut self) -> PresetChanges {
        self.take_changes(|register| &mut register.changed_midi)
    }

    /// Collect the registers of the active preset whose display flag is set,
    /// then clear those flags. The MIDI flag is left intact.
    pub fn take_display_changes(&mut self) -> PresetChanges {
        self.take_changes(|register| &mut register.changed_display)
    }

    fn take_changes<F>(&mut self, mut flag: F) -> PresetChanges
    where
        F: FnMut(&mut PresetRegister) -> &mut bool,
    {
        let preset = self.current_preset();
        let mut changes = Vec::new();

        for (encoder, register) in self.presets[self.current].registers.iter_mut().enumerate() {
            let properties = register.properties;
            let changed = flag(register);
            if *changed {
                *changed = false;
                // Capacity equals the register count, push cannot fail.
                let _ = changes.push(PresetChange {
                    preset,
                    encoder,
                    properties,
                });
            }
        }

        changes
    }
}

/// Convert a 1-based preset number to an array index.
fn preset_index(number: u8) -> Result<usize, PresetError> {
    if !(MIN_PRESET_VAL..=MAX_PRESET_VAL).contains(&number) {
        return Err(PresetError::InvalidPresetNumber);
    }
    Ok(usize::from(number - MIN_PRESET_VAL))
}

// ── Unit Tests ───────────────────────────────────────────────────────
