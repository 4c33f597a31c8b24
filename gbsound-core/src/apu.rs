use crate::{
    Channel, Duty, Envelope, Pan, Period, Polynomial, Sweep,
    bus::Bus,
    registers::{CONTROL, NR10, NR30, NR32, NR43, NR50, NR51, NR52, WAVE_RAM},
    wave::{self, WaveTable},
};
use tracing::{debug, info, trace};

/// Driver for the sound chip, writing through a [`Bus`].
///
/// Every setter is a direct translation of its arguments into register
/// bits. Setters that do not apply to the given channel do nothing, and
/// numeric arguments wider than their register field are truncated to it.
/// Nothing here fails.
#[derive(Debug, Default)]
pub struct Apu<B> {
    bus: B,
}

impl<B: Bus> Apu<B> {
    #[inline]
    pub const fn new(bus: B) -> Self {
        Self { bus }
    }

    #[inline]
    pub const fn bus(&self) -> &B {
        &self.bus
    }

    #[inline]
    pub const fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    #[inline]
    pub fn into_bus(self) -> B {
        self.bus
    }

    fn write(&mut self, addr: u16, val: u8) {
        trace!(addr, val, "register write");
        self.bus.write(addr, val);
    }

    // Replaces the bits outside `keep` with `bits`.
    fn modify(&mut self, addr: u16, keep: u8, bits: u8) {
        let val = (self.bus.read(addr) & keep) | (bits & !keep);
        self.write(addr, val);
    }

    /// Turns the whole chip on or off through NR52 bit 7.
    #[inline]
    pub fn set_enable(&mut self, on: bool) {
        self.modify(NR52, 0x7F, u8::from(on) << 7);
    }

    /// Whether NR52 reports the chip as powered.
    #[inline]
    pub fn enabled(&self) -> bool {
        self.bus.read(NR52) & 0x80 != 0
    }

    /// Channels whose NR52 status bit is set.
    #[inline]
    pub fn active_channels(&self) -> heapless::Vec<Channel, 4> {
        let status = self.bus.read(NR52);
        Channel::ALL
            .into_iter()
            .filter(|ch| status & (1 << ch.index()) != 0)
            .collect()
    }

    /// Sets the left (NR50 bits 6-4) and right (bits 2-0) master volumes,
    /// keeping the VIN enables.
    #[inline]
    pub fn set_master_volume(&mut self, left: u8, right: u8) {
        self.modify(NR50, 0b1000_1000, ((left & 7) << 4) | (right & 7));
    }

    /// Routes `channel` to the left and/or right output.
    #[inline]
    pub fn set_pan(&mut self, channel: Channel, pan: Pan) {
        let shift = channel.index();
        self.modify(NR51, !(0x11 << shift), pan.bits() << shift);
    }

    /// Tunes `channel` to `hz`, converting with the wave channel's divider
    /// where needed. Trigger and length-enable bits of NRx4 are kept.
    #[inline]
    pub fn set_freq(&mut self, channel: Channel, hz: i32) {
        self.set_period(channel, Period::from_hz(hz, channel.is_wave()));
    }

    /// Like [`Apu::set_freq`] for callers that already know the period.
    #[inline]
    pub fn set_period(&mut self, channel: Channel, period: Period) {
        let Some((lo, hi)) = channel.period_regs() else {
            debug!(%channel, "channel has no period, ignoring");
            return;
        };

        self.write(lo, period.lo());
        self.modify(hi, 0xF8, period.hi());
    }

    #[inline]
    pub fn set_envelope(&mut self, channel: Channel, envelope: Envelope) {
        let Some(addr) = channel.envelope_reg() else {
            debug!(%channel, "channel has no envelope, ignoring");
            return;
        };

        self.write(addr, envelope.bits());
    }

    /// Writes NRx1. The wave channel takes all eight bits of `length`, the
    /// others six; only the pulse channels have a duty.
    #[inline]
    pub fn set_length_and_duty(&mut self, channel: Channel, length: u8, duty: Duty) {
        let val = match channel {
            Channel::Pulse1 | Channel::Pulse2 => (duty.bits() << 6) | (length & 0x3F),
            Channel::Wave => length,
            Channel::Noise => length & 0x3F,
        };
        self.write(channel.length_reg(), val);
    }

    /// Channel 1 frequency sweep.
    #[inline]
    pub fn set_sweep(&mut self, sweep: Sweep) {
        self.write(NR10, sweep.bits());
    }

    /// Changes the initial volume without touching the envelope direction
    /// and pace.
    ///
    /// On the wave channel `volume` is the 2-bit output level instead: 0
    /// mutes, 1 plays samples as is, 2 and 3 shift them right by 1 and 2.
    #[inline]
    pub fn set_volume(&mut self, channel: Channel, volume: u8) {
        match channel.envelope_reg() {
            Some(addr) => self.modify(addr, 0x0F, (volume & 0xF) << 4),
            None => self.modify(NR32, 0x9F, (volume & 3) << 5),
        }
    }

    /// Turns the wave channel's DAC on or off.
    #[inline]
    pub fn set_wave_enable(&mut self, on: bool) {
        self.write(NR30, u8::from(on) << 7);
    }

    /// Loads a new waveform into wave RAM.
    ///
    /// The wave DAC is turned off for the duration of the copy, since the
    /// CPU cannot reliably access wave RAM while the channel plays, and
    /// turned back on afterwards.
    #[inline]
    pub fn set_wave(&mut self, samples: &WaveTable) {
        self.set_wave_enable(false);
        for (addr, byte) in (WAVE_RAM..).zip(wave::pack(samples)) {
            self.write(addr, byte);
        }
        self.set_wave_enable(true);
    }

    #[inline]
    pub fn set_noise(&mut self, polynomial: Polynomial) {
        self.write(NR43, polynomial.bits());
    }

    /// Restarts `channel`, optionally letting its length timer silence it.
    /// The period bits of NRx4 are kept.
    #[inline]
    pub fn trigger(&mut self, channel: Channel, length_enable: bool) {
        self.modify(
            channel.control_reg(),
            0x3F,
            0x80 | (u8::from(length_enable) << 6),
        );
    }

    /// Powers the chip down and zeroes every control register.
    ///
    /// Meant for recovery paths, for instance to silence the speaker before
    /// halting on a fatal error. Wave RAM is left alone.
    #[inline]
    pub fn reset(&mut self) {
        info!("silencing sound chip");
        self.write(NR52, 0);
        for addr in CONTROL {
            self.write(addr, 0);
        }
    }
}
