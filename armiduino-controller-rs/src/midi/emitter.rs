use embassy_time::{Duration, Instant};

use super::error::MidiError;
use super::message::{program_change_sequence, MidiMessage};
use super::MidiTransport;
use crate::config::ENCODER_COUNT;
use crate::presets::ProgramChangeProperties;

type Frame = [MidiMessage; 3];

/// Frame currently being transmitted.
#[derive(Debug, Clone, Copy)]
struct ActiveFrame {
    encoder: usize,
    messages: Frame,
    /// Index of the next message to transmit (0..3).
    next: usize,
}

/// Serialises register values into paced MIDI output.
///
/// The emitter exclusively owns the transport. Every register change becomes
/// a frame of three messages (`CC0`, `CC32`, `PC`) and consecutive messages
/// are never transmitted closer than `spacing` apart, across frames too.
/// Nothing blocks: [`poll`](Self::poll) transmits the next message only once
/// its time has come.
///
/// Scheduling rules:
///
/// - One frame is in flight at a time; at most one further frame per encoder
///   waits in the queue, the latest values replacing older ones.
/// - A new frame for the encoder in flight keeps the messages already
///   transmitted if they are identical and restarts from the first one that
///   differs, so turning the program knob while a frame is in flight does
///   not repeat the bank select.
/// - Waiting frames are activated round-robin by encoder index.
pub struct ProgramChangeEmitter<T> {
    transport: T,
    spacing: Duration,
    last_sent: Option<Instant>,
    active: Option<ActiveFrame>,
    queued: [Option<Frame>; ENCODER_COUNT],
    last_encoder: usize,
}

impl<T> ProgramChangeEmitter<T>
where
    T: MidiTransport,
{
    pub fn new(transport: T, spacing: Duration) -> Self {
        Self {
            transport,
            spacing,
            last_sent: None,
            active: None,
            queued: [None; ENCODER_COUNT],
            last_encoder: ENCODER_COUNT - 1,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// `true` while any message is waiting to be transmitted.
    pub fn is_busy(&self) -> bool {
        self.active.is_some() || self.queued.iter().any(Option::is_some)
    }

    /// Instant of the last transmission attempt.
    pub fn last_sent(&self) -> Option<Instant> {
        self.last_sent
    }

    /// Earliest instant at which [`poll`](Self::poll) will transmit, or
    /// `None` when idle.
    pub fn next_send_at(&self) -> Option<Instant> {
        if !self.is_busy() {
            return None;
        }
        Some(match self.last_sent {
            Some(last) => last + self.spacing,
            None => Instant::MIN,
        })
    }

    /// Queue the sequence for `properties` on behalf of register `encoder`.
    ///
    /// Returns [`MidiError::InvalidEncoder`] if `encoder >= ENCODER_COUNT`.
    pub fn schedule(
        &mut self,
        encoder: usize,
        properties: &ProgramChangeProperties,
    ) -> Result<(), MidiError<T::Error>> {
        if encoder >= ENCODER_COUNT {
            return Err(MidiError::InvalidEncoder);
        }

        let frame = program_change_sequence(properties);
        match self.active.as_mut() {
            Some(active) if active.encoder == encoder => {
                let kept = active.messages[..active.next]
                    .iter()
                    .zip(frame.iter())
                    .take_while(|(sent, new)| sent == new)
                    .count();
                active.messages = frame;
                active.next = kept;
            }
            _ => self.queued[encoder] = Some(frame),
        }

        if self.active.is_none() {
            self.activate_next();
        }
        Ok(())
    }

    /// Schedule `properties` and transmit immediately if the pacing allows.
    ///
    /// # Examples
    ///
    /// ```
    /// use armiduino::midi::{MidiMessage, MidiTransport, ProgramChangeEmitter};
    /// use armiduino::presets::ProgramChangeProperties;
    /// use embassy_time::{Duration, Instant};
    ///
    /// struct Sink(usize);
    ///
    /// impl MidiTransport for Sink {
    ///     type Error = ();
    ///     fn send(&mut self, bytes: &[u8]) -> Result<(), ()> {
    ///         self.0 += bytes.len();
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let mut emitter = ProgramChangeEmitter::new(Sink(0), Duration::from_millis(300));
    /// let props = ProgramChangeProperties::new(0, 0, 6, 1);
    ///
    /// // The bank MSB goes out at once, the rest waits for the spacing.
    /// let t0 = Instant::from_millis(0);
    /// assert!(emitter.emit(0, &props, t0).unwrap().is_some());
    /// assert_eq!(emitter.poll(Instant::from_millis(299)).unwrap(), None);
    /// assert!(emitter.poll(Instant::from_millis(300)).unwrap().is_some());
    /// assert_eq!(
    ///     emitter.poll(Instant::from_millis(600)).unwrap(),
    ///     Some(MidiMessage::ProgramChange { channel: 0, program: 5 })
    /// );
    /// assert!(!emitter.is_busy());
    /// assert_eq!(emitter.transport().0, 8);
    /// ```
    pub fn emit(
        &mut self,
        encoder: usize,
        properties: &ProgramChangeProperties,
        now: Instant,
    ) -> Result<Option<MidiMessage>, MidiError<T::Error>> {
        self.schedule(encoder, properties)?;
        self.poll(now)
    }

    /// Transmit at most one message, if one is pending and `spacing` has
    /// elapsed since the previous transmission.
    ///
    /// On transport failure the frame in flight is dropped (no retry) and
    /// the error is returned; frames waiting for other encoders are kept.
    pub fn poll(&mut self, now: Instant) -> Result<Option<MidiMessage>, MidiError<T::Error>> {
        if self.active.is_none() {
            self.activate_next();
        }

        if let Some(last) = self.last_sent {
            if now < last + self.spacing {
                return Ok(None);
            }
        }

        let Some(active) = self.active.as_mut() else {
            return Ok(None);
        };

        let message = active.messages[active.next];
        self.last_sent = Some(now);

        if let Err(e) = self.transport.send(&message.to_bytes()) {
            self.active = None;
            self.activate_next();
            return Err(MidiError::Transmit(e));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("MIDI out (encoder {}): {}", active.encoder, message);

        active.next += 1;
        if active.next == active.messages.len() {
            self.active = None;
            self.activate_next();
        }

        Ok(Some(message))
    }

    /// Move the next waiting frame, round-robin after the last activated
    /// encoder, into flight.
    fn activate_next(&mut self) {
        for offset in 1..=ENCODER_COUNT {
            let encoder = (self.last_encoder + offset) % ENCODER_COUNT;
            if let Some(messages) = self.queued[encoder].take() {
                self.active = Some(ActiveFrame {
                    encoder,
                    messages,
                    next: 0,
                });
                self.last_encoder = encoder;
                return;
            }
        }
    }
}
