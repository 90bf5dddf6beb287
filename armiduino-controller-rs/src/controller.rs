//! Single-threaded polling loop tying inputs, presets and MIDI output
//! together.
//!
//! One call to [`Controller::poll`] is one cycle:
//!
//! 1. Sample CLK, DT and SW of every encoder through the [`PinReader`].
//! 2. Debounce, decode, and advance adjustment targets on switch presses.
//! 3. Apply non-zero steps to the addressed register of the active preset.
//! 4. Hand every register flagged for MIDI to the emitter and arm the
//!    "message sent" indicator.
//! 5. Let the emitter transmit at most one message, if its spacing allows.
//!
//! Nothing inside a cycle waits. Debounce, pacing and indicator timers are
//! all "has enough time elapsed" checks against the injected [`Clock`].

use embassy_time::Instant;

use crate::clock::Clock;
use crate::config::{ControllerConfig, ENCODER_COUNT};
use crate::indicator::{IndicatorEvent, MessageIndicator};
use crate::input::{EncoderChannel, PinReader, RawLevels};
use crate::midi::{MidiError, MidiMessage, MidiTransport, ProgramChangeEmitter};
use crate::presets::{AdjustTarget, PresetBank, PresetError};

/// Coarse state of the controller after a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerState {
    /// No pin is settling and no message is pending.
    Idle,
    /// At least one pin waits out its debounce window.
    Debouncing,
    /// MIDI messages are waiting for their transmit slot.
    Emitting,
}

/// What happened during one [`Controller::poll`] cycle.
///
/// A MIDI failure is carried in [`error`](Self::error); every other field
/// still describes the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollReport<E> {
    /// Clock reading the cycle ran at.
    pub now: Instant,
    /// Decoded step per encoder.
    pub steps: [i8; ENCODER_COUNT],
    /// New adjustment target per encoder whose switch was pressed.
    pub targets: [Option<AdjustTarget>; ENCODER_COUNT],
    /// Message transmitted in this cycle.
    pub sent: Option<MidiMessage>,
    /// Failure reported by the emitter in this cycle.
    pub error: Option<MidiError<E>>,
    /// Indicator transition in this cycle.
    pub indicator: Option<IndicatorEvent>,
    /// State after the cycle.
    pub state: ControllerState,
}

impl<E> PollReport<E> {
    fn new(now: Instant) -> Self {
        Self {
            now,
            steps: [0; ENCODER_COUNT],
            targets: [None; ENCODER_COUNT],
            sent: None,
            error: None,
            indicator: None,
            state: ControllerState::Idle,
        }
    }
}

/// The encoder-to-MIDI controller.
///
/// Generic over its three collaborators: the pin set `P`, the MIDI
/// transport `T` and the clock `C`.
pub struct Controller<P, T, C> {
    config: ControllerConfig,
    pins: P,
    clock: C,
    channels: [EncoderChannel; ENCODER_COUNT],
    bank: PresetBank,
    emitter: ProgramChangeEmitter<T>,
    indicator: MessageIndicator,
    state: ControllerState,
}

impl<P, T, C> Controller<P, T, C>
where
    P: PinReader,
    T: MidiTransport,
    C: Clock,
{
    /// Build the controller and seed every channel with the pin levels read
    /// right now.
    pub fn new(config: ControllerConfig, mut pins: P, transport: T, clock: C) -> Self {
        let mut channels: [EncoderChannel; ENCODER_COUNT] =
            core::array::from_fn(|i| EncoderChannel::new(i, config.encoders[i], &config));
        for channel in &mut channels {
            let levels = read_levels(&mut pins, channel);
            channel.prime(levels);
        }

        Self {
            config,
            pins,
            clock,
            channels,
            bank: PresetBank::new(),
            emitter: ProgramChangeEmitter::new(transport, config.midi_delay),
            indicator: MessageIndicator::new(config.message_duration),
            state: ControllerState::Idle,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// State after the last cycle.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn bank(&self) -> &PresetBank {
        &self.bank
    }

    /// Direct access to the registers. Changes flagged here are emitted on
    /// the next cycle.
    pub fn bank_mut(&mut self) -> &mut PresetBank {
        &mut self.bank
    }

    pub fn channel(&self, index: usize) -> Option<&EncoderChannel> {
        self.channels.get(index)
    }

    pub fn emitter(&self) -> &ProgramChangeEmitter<T> {
        &self.emitter
    }

    pub fn emitter_mut(&mut self) -> &mut ProgramChangeEmitter<T> {
        &mut self.emitter
    }

    pub fn indicator(&self) -> &MessageIndicator {
        &self.indicator
    }

    pub fn pins_mut(&mut self) -> &mut P {
        &mut self.pins
    }

    /// Switch to preset `number` and re-send all of its registers.
    pub fn recall_preset(&mut self, number: u8) -> Result<(), PresetError> {
        self.bank.set_active_preset(number)
    }

    /// Run one cycle.
    ///
    /// A transport failure never cuts the cycle short: it is reported in
    /// [`PollReport::error`] next to the steps and indicator events of the
    /// same cycle. The failed frame is not retried.
    pub fn poll(&mut self) -> PollReport<T::Error> {
        let now = self.clock.now();
        let mut report = PollReport::new(now);

        // ── Inputs ───────────────────────────────────────────────────
        for (index, channel) in self.channels.iter_mut().enumerate() {
            let levels = read_levels(&mut self.pins, channel);
            let event = channel.sample(levels, now);

            if event.pressed {
                report.targets[index] = Some(channel.target());
            }

            if event.step != 0 {
                report.steps[index] = event.step;
                self.bank.update_from_encoder(
                    index,
                    channel.target(),
                    i32::from(event.step),
                    self.config.bound_policy,
                );
            }
        }

        // ── Emission scheduling ──────────────────────────────────────
        let changes = self.bank.take_midi_changes();
        for change in &changes {
            if let Err(e) = self.emitter.schedule(change.encoder, &change.properties) {
                report.error = Some(e);
            }
        }

        report.indicator = if changes.is_empty() {
            self.indicator.poll(now)
        } else {
            Some(self.indicator.arm(now))
        };

        // ── Transmission ─────────────────────────────────────────────
        match self.emitter.poll(now) {
            Ok(sent) => report.sent = sent,
            Err(e) => report.error = Some(e),
        }

        self.state = self.current_state();
        report.state = self.state;
        report
    }

    fn current_state(&self) -> ControllerState {
        if self.emitter.is_busy() {
            ControllerState::Emitting
        } else if self.channels.iter().any(EncoderChannel::is_settling) {
            ControllerState::Debouncing
        } else {
            ControllerState::Idle
        }
    }
}

/// Sample the three pins of `channel`. A pin that cannot be read keeps its
/// previous raw level.
fn read_levels<P: PinReader>(pins: &mut P, channel: &EncoderChannel) -> RawLevels {
    let last = channel.raw_levels();
    let assignment = channel.pins();
    RawLevels {
        clk: read_or(pins, assignment.clk, last.clk),
        dt: read_or(pins, assignment.dt, last.dt),
        sw: read_or(pins, assignment.sw, last.sw),
    }
}

fn read_or<P: PinReader>(pins: &mut P, pin: u8, fallback: bool) -> bool {
    match pins.read(pin) {
        Ok(level) => level,
        Err(_) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("Pin {} read failed, holding last level", pin);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::BoundPolicy;
    use crate::presets::ProgramChangeProperties;
    use embassy_time::Duration;

    // ── Simulated collaborators ──────────────────────────────────────

    struct SimPins {
        levels: [bool; 64],
        broken: Option<u8>,
    }

    impl Default for SimPins {
        fn default() -> Self {
            Self {
                levels: [true; 64],
                broken: None,
            }
        }
    }

    impl SimPins {
        fn set(&mut self, pin: u8, level: bool) {
            self.levels[usize::from(pin)] = level;
        }
    }

    impl PinReader for SimPins {
        type Error = ();

        fn read(&mut self, pin: u8) -> Result<bool, ()> {
            if self.broken == Some(pin) {
                return Err(());
            }
            self.levels.get(usize::from(pin)).copied().ok_or(())
        }
    }

    /// Records every send together with the clock reading at send time.
    struct Stamped<'a> {
        clock: &'a ManualClock,
        sent: Vec<(u64, Vec<u8>)>,
        fail_next: bool,
    }

    impl MidiTransport for Stamped<'_> {
        type Error = &'static str;

        fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
            if self.fail_next {
                self.fail_next = false;
                return Err("tx fifo full");
            }
            self.sent.push((self.clock.now().as_millis(), bytes.to_vec()));
            Ok(())
        }
    }

    type Rig<'a> = Controller<SimPins, Stamped<'a>, &'a ManualClock>;

    type Report = PollReport<&'static str>;

    fn rig_with_pins(clock: &ManualClock, config: ControllerConfig, pins: SimPins) -> Rig<'_> {
        let transport = Stamped {
            clock,
            sent: Vec::new(),
            fail_next: false,
        };
        Controller::new(config, pins, transport, clock)
    }

    fn rig_with(clock: &ManualClock, config: ControllerConfig) -> Rig<'_> {
        rig_with_pins(clock, config, SimPins::default())
    }

    fn rig(clock: &ManualClock) -> Rig<'_> {
        rig_with(clock, ControllerConfig::default())
    }

    fn sent<'a>(ctrl: &'a Rig<'a>) -> &'a [(u64, Vec<u8>)] {
        &ctrl.emitter().transport().sent
    }

    // ── Input drivers ────────────────────────────────────────────────

    const CW: [(bool, bool); 4] = [(false, true), (false, false), (true, false), (true, true)];
    const CCW: [(bool, bool); 4] = [(true, false), (false, false), (false, true), (true, true)];

    /// Advance 1 ms and poll, `ms` times.
    fn run(ctrl: &mut Rig<'_>, clock: &ManualClock, ms: u64) -> Vec<Report> {
        (0..ms)
            .map(|_| {
                clock.advance(Duration::from_millis(1));
                let report = ctrl.poll();
                assert_eq!(report.error, None, "at {} ms", report.now.as_millis());
                report
            })
            .collect()
    }

    fn detent(
        ctrl: &mut Rig<'_>,
        clock: &ManualClock,
        encoder: usize,
        states: &[(bool, bool)],
        hold_ms: u64,
    ) -> Vec<Report> {
        let pins = ctrl.config().encoders[encoder];
        let mut reports = Vec::new();
        for &(clk, dt) in states {
            ctrl.pins_mut().set(pins.clk, clk);
            ctrl.pins_mut().set(pins.dt, dt);
            reports.extend(run(ctrl, clock, hold_ms));
        }
        reports
    }

    fn press(ctrl: &mut Rig<'_>, clock: &ManualClock, encoder: usize) -> Vec<Report> {
        let sw = ctrl.config().encoders[encoder].sw;
        ctrl.pins_mut().set(sw, false);
        let mut reports = run(ctrl, clock, 150);
        ctrl.pins_mut().set(sw, true);
        reports.extend(run(ctrl, clock, 150));
        reports
    }

    fn assert_spaced(sent: &[(u64, Vec<u8>)]) {
        for pair in sent.windows(2) {
            assert!(
                pair[1].0 - pair[0].0 >= 300,
                "messages at {} and {} ms",
                pair[0].0,
                pair[1].0
            );
        }
    }

    // ── Scenarios ────────────────────────────────────────────────────

    #[test]
    fn starts_idle_with_default_registers() {
        let clock = ManualClock::new();
        let mut ctrl = rig(&clock);
        assert_eq!(ctrl.state(), ControllerState::Idle);

        let reports = run(&mut ctrl, &clock, 500);
        assert!(reports.iter().all(|r| r.state == ControllerState::Idle));
        assert!(sent(&ctrl).is_empty());
        assert_eq!(
            ctrl.bank().properties(0),
            Some(ProgramChangeProperties::default())
        );
    }

    #[test]
    fn five_quick_clockwise_detents_send_one_frame_for_program_six() {
        let clock = ManualClock::new();
        let config = ControllerConfig {
            debounce: Duration::from_millis(5),
            ..ControllerConfig::default()
        };
        let mut ctrl = rig_with(&clock, config);

        let mut steps = 0;
        for _ in 0..5 {
            steps += detent(&mut ctrl, &clock, 0, &CW, 10)
                .iter()
                .map(|r| i32::from(r.steps[0]))
                .sum::<i32>();
        }
        run(&mut ctrl, &clock, 1000);

        assert_eq!(steps, 5);
        assert_eq!(ctrl.bank().properties(0).unwrap().pc_num(), 6);

        let sent = sent(&ctrl);
        let bytes: Vec<&[u8]> = sent.iter().map(|(_, b)| b.as_slice()).collect();
        assert_eq!(
            bytes,
            vec![&[0xB0, 0, 0][..], &[0xB0, 32, 0][..], &[0xC0, 5][..]]
        );
        assert_spaced(sent);
    }

    #[test]
    fn slow_turns_keep_pacing_and_end_on_latest_program() {
        let clock = ManualClock::new();
        let mut ctrl = rig(&clock);

        for _ in 0..5 {
            detent(&mut ctrl, &clock, 0, &CW, 150);
        }
        run(&mut ctrl, &clock, 2000);

        assert_eq!(ctrl.bank().properties(0).unwrap().pc_num(), 6);
        let sent = sent(&ctrl);
        assert_spaced(sent);
        assert_eq!(sent.last().unwrap().1, vec![0xC0, 5]);
        assert_eq!(ctrl.state(), ControllerState::Idle);
    }

    #[test]
    fn counter_clockwise_turn_clamps_at_one() {
        let clock = ManualClock::new();
        let mut ctrl = rig(&clock);
        detent(&mut ctrl, &clock, 1, &CCW, 150);
        run(&mut ctrl, &clock, 1000);

        assert_eq!(ctrl.bank().properties(1).unwrap().pc_num(), 1);
        assert_eq!(sent(&ctrl).last().unwrap().1, vec![0xC0, 0]);
    }

    #[test]
    fn program_128_does_not_wrap() {
        let clock = ManualClock::new();
        let mut ctrl = rig(&clock);
        ctrl.bank_mut()
            .set_properties(0, ProgramChangeProperties::new(0, 0, 128, 1))
            .unwrap();
        run(&mut ctrl, &clock, 1000);

        detent(&mut ctrl, &clock, 0, &CW, 150);
        run(&mut ctrl, &clock, 1000);

        assert_eq!(ctrl.bank().properties(0).unwrap().pc_num(), 128);
        assert_eq!(sent(&ctrl).last().unwrap().1, vec![0xC0, 127]);
    }

    #[test]
    fn program_128_wraps_under_wrap_policy() {
        let clock = ManualClock::new();
        let config = ControllerConfig {
            bound_policy: BoundPolicy::Wrap,
            ..ControllerConfig::default()
        };
        let mut ctrl = rig_with(&clock, config);
        ctrl.bank_mut()
            .set_properties(0, ProgramChangeProperties::new(0, 0, 128, 1))
            .unwrap();

        detent(&mut ctrl, &clock, 0, &CW, 150);
        assert_eq!(ctrl.bank().properties(0).unwrap().pc_num(), 1);
    }

    #[test]
    fn indicator_clears_exactly_5000_ms_after_emit() {
        let clock = ManualClock::new();
        let mut ctrl = rig(&clock);

        let mut reports = detent(&mut ctrl, &clock, 0, &CW, 150);
        reports.extend(run(&mut ctrl, &clock, 6000));

        let shown: Vec<u64> = reports
            .iter()
            .filter(|r| r.indicator == Some(IndicatorEvent::Shown))
            .map(|r| r.now.as_millis())
            .collect();
        let cleared: Vec<u64> = reports
            .iter()
            .filter(|r| r.indicator == Some(IndicatorEvent::Cleared))
            .map(|r| r.now.as_millis())
            .collect();

        assert_eq!(shown.len(), 1);
        assert_eq!(cleared, vec![shown[0] + 5000]);
        assert!(!ctrl.indicator().is_visible());
    }

    #[test]
    fn state_moves_through_debouncing_and_emitting() {
        let clock = ManualClock::new();
        let mut ctrl = rig(&clock);
        let clk = ctrl.config().encoders[0].clk;

        ctrl.pins_mut().set(clk, false);
        let reports = run(&mut ctrl, &clock, 101);
        assert!(reports[..100]
            .iter()
            .all(|r| r.state == ControllerState::Debouncing));

        // Commit poll: step applied, first message out, rest pending.
        let commit = reports[100];
        assert_eq!(commit.now.as_millis(), 101);
        assert_eq!(commit.steps[0], 1);
        assert_eq!(commit.state, ControllerState::Emitting);
        assert_eq!(
            commit.sent,
            Some(MidiMessage::ControlChange {
                channel: 0,
                controller: 0,
                value: 0,
            })
        );

        ctrl.pins_mut().set(clk, true);
        run(&mut ctrl, &clock, 1000);
        assert_eq!(ctrl.state(), ControllerState::Idle);
    }

    #[test]
    fn glitch_on_clk_sends_nothing() {
        let clock = ManualClock::new();
        let mut ctrl = rig(&clock);
        let clk = ctrl.config().encoders[2].clk;

        ctrl.pins_mut().set(clk, false);
        run(&mut ctrl, &clock, 60);
        ctrl.pins_mut().set(clk, true);
        let reports = run(&mut ctrl, &clock, 1000);

        assert!(reports.iter().all(|r| r.steps == [0; ENCODER_COUNT]));
        assert!(sent(&ctrl).is_empty());
    }

    #[test]
    fn press_switches_to_bank_msb() {
        let clock = ManualClock::new();
        let mut ctrl = rig(&clock);

        let reports = press(&mut ctrl, &clock, 3);
        assert!(reports
            .iter()
            .any(|r| r.targets[3] == Some(AdjustTarget::BankMsb)));
        assert_eq!(ctrl.channel(3).unwrap().target(), AdjustTarget::BankMsb);

        detent(&mut ctrl, &clock, 3, &CW, 150);
        detent(&mut ctrl, &clock, 3, &CW, 150);
        run(&mut ctrl, &clock, 1000);

        let props = ctrl.bank().properties(3).unwrap();
        assert_eq!(props.msb_val(), 2);
        assert_eq!(props.pc_num(), 1);
        assert_eq!(sent(&ctrl).last().unwrap().1, vec![0xC0, 0]);
        assert!(sent(&ctrl).iter().any(|(_, b)| b == &vec![0xB0, 0, 2]));
    }

    #[test]
    fn channel_target_changes_status_nibble() {
        let clock = ManualClock::new();
        let mut ctrl = rig(&clock);
        for _ in 0..3 {
            press(&mut ctrl, &clock, 1);
        }
        assert_eq!(ctrl.channel(1).unwrap().target(), AdjustTarget::Channel);

        detent(&mut ctrl, &clock, 1, &CW, 150);
        run(&mut ctrl, &clock, 1000);

        assert_eq!(ctrl.bank().properties(1).unwrap().chan_num(), 2);
        assert_eq!(sent(&ctrl).last().unwrap().1, vec![0xC1, 0]);
    }

    #[test]
    fn preset_target_recalls_whole_preset() {
        let clock = ManualClock::new();
        let mut ctrl = rig(&clock);
        for _ in 0..4 {
            press(&mut ctrl, &clock, 0);
        }
        assert_eq!(ctrl.channel(0).unwrap().target(), AdjustTarget::Preset);

        detent(&mut ctrl, &clock, 0, &CW, 150);
        run(&mut ctrl, &clock, 4000);

        assert_eq!(ctrl.bank().current_preset(), 2);
        let sent = sent(&ctrl);
        assert_eq!(sent.len(), 3 * ENCODER_COUNT);
        assert_spaced(sent);
    }

    #[test]
    fn recall_preset_emits_on_next_cycles() {
        let clock = ManualClock::new();
        let mut ctrl = rig(&clock);
        ctrl.recall_preset(5).unwrap();
        assert_eq!(ctrl.recall_preset(0), Err(PresetError::InvalidPresetNumber));

        run(&mut ctrl, &clock, 4000);
        assert_eq!(ctrl.bank().current_preset(), 5);
        assert_eq!(sent(&ctrl).len(), 3 * ENCODER_COUNT);
    }

    #[test]
    fn encoders_address_their_own_registers() {
        let clock = ManualClock::new();
        let mut ctrl = rig(&clock);
        detent(&mut ctrl, &clock, 2, &CW, 150);
        detent(&mut ctrl, &clock, 2, &CW, 150);
        run(&mut ctrl, &clock, 1000);

        assert_eq!(ctrl.bank().properties(2).unwrap().pc_num(), 3);
        for encoder in [0, 1, 3] {
            assert_eq!(ctrl.bank().properties(encoder).unwrap().pc_num(), 1);
        }
    }

    #[test]
    fn unreadable_pin_holds_last_level() {
        let clock = ManualClock::new();
        let mut ctrl = rig(&clock);
        let clk = ctrl.config().encoders[0].clk;
        ctrl.pins_mut().broken = Some(clk);

        detent(&mut ctrl, &clock, 0, &CW, 150);
        run(&mut ctrl, &clock, 500);

        assert_eq!(ctrl.bank().properties(0).unwrap().pc_num(), 1);
        assert!(sent(&ctrl).is_empty());
    }

    #[test]
    fn transmit_failure_is_reported_and_loop_continues() {
        let clock = ManualClock::new();
        let mut ctrl = rig(&clock);
        let clk = ctrl.config().encoders[0].clk;
        ctrl.emitter_mut().transport_mut().fail_next = true;

        ctrl.pins_mut().set(clk, false);
        run(&mut ctrl, &clock, 100);
        clock.advance(Duration::from_millis(1));
        let report = ctrl.poll();
        assert_eq!(report.error, Some(MidiError::Transmit("tx fifo full")));
        assert_eq!(report.sent, None);

        // The rest of the cycle is still reported.
        assert_eq!(report.steps[0], 1);
        assert_eq!(report.indicator, Some(IndicatorEvent::Shown));
        assert!(ctrl.indicator().is_visible());

        // The register kept its value and the next cycles run normally.
        assert_eq!(ctrl.bank().properties(0).unwrap().pc_num(), 2);
        ctrl.pins_mut().set(clk, true);
        run(&mut ctrl, &clock, 1000);
        assert!(sent(&ctrl).is_empty());
        assert_eq!(ctrl.state(), ControllerState::Idle);
    }

    #[test]
    fn failed_first_frame_of_recall_keeps_press_and_indicator() {
        let clock = ManualClock::new();
        let mut ctrl = rig(&clock);
        for _ in 0..4 {
            press(&mut ctrl, &clock, 0);
        }
        let clk = ctrl.config().encoders[0].clk;
        ctrl.emitter_mut().transport_mut().fail_next = true;

        ctrl.pins_mut().set(clk, false);
        run(&mut ctrl, &clock, 100);
        clock.advance(Duration::from_millis(1));
        let report = ctrl.poll();
        assert!(report.error.is_some());
        assert_eq!(report.steps[0], 1);
        assert_eq!(report.indicator, Some(IndicatorEvent::Shown));

        // Frames of the other three registers still go out.
        ctrl.pins_mut().set(clk, true);
        run(&mut ctrl, &clock, 3000);
        assert_eq!(ctrl.bank().current_preset(), 2);
        assert_eq!(sent(&ctrl).len(), 3 * (ENCODER_COUNT - 1));
    }

    #[test]
    fn clk_low_at_power_on_is_not_a_turn() {
        let clock = ManualClock::new();
        let config = ControllerConfig::default();
        let mut pins = SimPins::default();
        pins.set(config.encoders[0].clk, false);
        let mut ctrl = rig_with_pins(&clock, config, pins);

        let reports = run(&mut ctrl, &clock, 500);
        assert!(reports.iter().all(|r| r.steps == [0; ENCODER_COUNT]));
        assert_eq!(ctrl.bank().properties(0).unwrap().pc_num(), 1);
        assert!(sent(&ctrl).is_empty());
        assert_eq!(ctrl.state(), ControllerState::Idle);

        // Settling back to idle and turning one detent counts once.
        let clk = config.encoders[0].clk;
        ctrl.pins_mut().set(clk, true);
        run(&mut ctrl, &clock, 150);
        detent(&mut ctrl, &clock, 0, &CW, 150);
        assert_eq!(ctrl.bank().properties(0).unwrap().pc_num(), 2);
    }
}
