//! armiduino-hw-interface
//!
//! Program change controller firmware for the Raspberry Pi Pico 2. Wires the
//! `armiduino` core to real hardware:
//!
//! 1. Four rotary encoders (CLK, DT, SW each) are sampled every millisecond.
//! 2. Turns and presses update the registers of the active preset.
//! 3. Changed registers go out as `CC0, CC32, PC` on UART0 at MIDI baud.
//! 4. The on-board LED lights for five seconds after each change.
//!
//! Register changes are logged over RTT in place of a display.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::uart::{self, Blocking, UartTx};
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use armiduino::config::{ControllerConfig, EncoderPins};
use armiduino::indicator::IndicatorEvent;
use armiduino::input::GpioBank;
use armiduino::{Controller, MidiTransport, SystemClock};

// ---------------------------------------------------------------------------
// Boot block
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// ---------------------------------------------------------------------------
// Board wiring
// ---------------------------------------------------------------------------

/// MIDI DIN baud rate.
const MIDI_BAUD: u32 = 31_250;

/// Input sampling period.
const POLL_PERIOD: Duration = Duration::from_millis(1);

// ── Pin assignments ───────────────────────────────────────────────────────
// MIDI_TX → GP0   (UART0 TX)
// ENC0    → GP2  / GP3  / GP4   (CLK / DT / SW)
// ENC1    → GP5  / GP6  / GP7
// ENC2    → GP8  / GP9  / GP10
// ENC3    → GP11 / GP12 / GP13
// LED     → GP25
// ───────────────────────────────────────────────────────────────────────────
const ENCODER_PINS: [EncoderPins; 4] = [
    EncoderPins::new(2, 3, 4),
    EncoderPins::new(5, 6, 7),
    EncoderPins::new(8, 9, 10),
    EncoderPins::new(11, 12, 13),
];

/// UART0 transmitter as a MIDI byte sink.
struct UartMidi {
    tx: UartTx<'static, Blocking>,
}

impl MidiTransport for UartMidi {
    type Error = uart::Error;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(bytes)
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("armiduino-hw-interface starting");

    let mut uart_config = uart::Config::default();
    uart_config.baudrate = MIDI_BAUD;
    let transport = UartMidi {
        tx: UartTx::new_blocking(p.UART0, p.PIN_0, uart_config),
    };

    // Encoder commons are tied to ground: pull-ups make high the idle level.
    let pins = GpioBank::new([
        (2, Input::new(p.PIN_2, Pull::Up)),
        (3, Input::new(p.PIN_3, Pull::Up)),
        (4, Input::new(p.PIN_4, Pull::Up)),
        (5, Input::new(p.PIN_5, Pull::Up)),
        (6, Input::new(p.PIN_6, Pull::Up)),
        (7, Input::new(p.PIN_7, Pull::Up)),
        (8, Input::new(p.PIN_8, Pull::Up)),
        (9, Input::new(p.PIN_9, Pull::Up)),
        (10, Input::new(p.PIN_10, Pull::Up)),
        (11, Input::new(p.PIN_11, Pull::Up)),
        (12, Input::new(p.PIN_12, Pull::Up)),
        (13, Input::new(p.PIN_13, Pull::Up)),
    ]);

    let mut led = Output::new(p.PIN_25, Level::Low);

    let config = ControllerConfig {
        encoders: ENCODER_PINS,
        ..ControllerConfig::default()
    };
    let mut controller = Controller::new(config, pins, transport, SystemClock);

    // Announce the power-on registers.
    if controller.recall_preset(1).is_err() {
        warn!("Could not recall preset 1");
    }

    let mut ticker = Ticker::every(POLL_PERIOD);
    loop {
        let report = controller.poll();
        match report.indicator {
            Some(IndicatorEvent::Shown) => led.set_high(),
            Some(IndicatorEvent::Cleared) => led.set_low(),
            None => {}
        }
        for (encoder, target) in report.targets.iter().enumerate() {
            if let Some(target) = target {
                info!("Encoder {} now adjusts {}", encoder, target);
            }
        }
        if let Some(e) = report.error {
            error!("MIDI output failed: {}", e);
        }

        for change in controller.bank_mut().take_display_changes() {
            info!(
                "P{} E{}: MSB {} LSB {} PC {} CH {}",
                change.preset,
                change.encoder,
                change.properties.msb_val(),
                change.properties.lsb_val(),
                change.properties.pc_num(),
                change.properties.chan_num()
            );
        }

        ticker.next().await;
    }
}
