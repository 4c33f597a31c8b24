//! Whole-channel voice settings.
//!
//! A [`Patch`] gathers everything needed to start a note on one channel so
//! it can be stored, for instance in a JSON file, and replayed with
//! [`Apu::apply`].

use crate::{
    Apu, Channel, Duty, Envelope, Pan, Polynomial, Sweep,
    bus::Bus,
    wave::WaveTable,
};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct Patch {
    pub channel: Channel,
    /// Left unchanged when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hz: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duty: Duty,
    #[cfg_attr(feature = "serde", serde(default))]
    pub length: u8,
    /// Envelope for pulse and noise channels. On the wave channel only
    /// `volume` is used, as the output level.
    #[cfg_attr(feature = "serde", serde(default))]
    pub envelope: Envelope,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pan: Pan,
    /// Channel 1 only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sweep: Option<Sweep>,
    /// Channel 4 only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub noise: Option<Polynomial>,
    /// Channel 3 only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub wave: Option<WaveTable>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub length_enable: bool,
    #[cfg_attr(feature = "serde", serde(default = "yes"))]
    pub trigger: bool,
}

#[cfg(feature = "serde")]
const fn yes() -> bool {
    true
}

impl Patch {
    /// A held note at full volume on both outputs.
    #[inline]
    #[must_use]
    pub fn note(channel: Channel, hz: i32) -> Self {
        Self {
            channel,
            hz: Some(hz),
            duty: Duty::default(),
            length: 0,
            envelope: Envelope::constant(0xF),
            pan: Pan::Both,
            sweep: None,
            noise: None,
            wave: None,
            length_enable: false,
            trigger: true,
        }
    }
}

impl<B: Bus> Apu<B> {
    /// Writes every register a patch covers, in an order that leaves the
    /// trigger for last so the channel restarts with the new settings.
    /// Settings that do not apply to the patch's channel are skipped.
    #[inline]
    pub fn apply(&mut self, patch: &Patch) {
        let ch = patch.channel;
        debug!(channel = %ch, "applying patch");

        match (ch, patch.sweep) {
            (Channel::Pulse1, Some(sweep)) => self.set_sweep(sweep),
            (_, Some(_)) => debug!(channel = %ch, "sweep only exists on pulse1, skipping"),
            (_, None) => (),
        }

        self.set_length_and_duty(ch, patch.length, patch.duty);

        if ch.is_wave() {
            match &patch.wave {
                Some(samples) => self.set_wave(samples),
                None => self.set_wave_enable(true),
            }
            self.set_volume(ch, patch.envelope.volume);
        } else {
            self.set_envelope(ch, patch.envelope);
        }

        match (ch, patch.noise) {
            (Channel::Noise, Some(poly)) => self.set_noise(poly),
            (_, Some(_)) => debug!(channel = %ch, "polynomial only exists on noise, skipping"),
            (_, None) => (),
        }

        if patch.wave.is_some() && !ch.is_wave() {
            debug!(channel = %ch, "wave table only exists on wave, skipping");
        }

        if let Some(hz) = patch.hz {
            self.set_freq(ch, hz);
        }

        self.set_pan(ch, patch.pan);

        if patch.trigger {
            self.trigger(ch, patch.length_enable);
        }
    }
}
