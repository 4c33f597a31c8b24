//! # Game Boy sound chip driver
//!
//! Register-level control of the DMG audio processing unit: two pulse
//! channels, a programmable wave channel and a noise channel, driven by
//! writes to the memory-mapped registers at `0xFF10..=0xFF3F`.
//!
//! All hardware access goes through the [`Bus`] trait. On the console use
//! [`Mmio`]; on a host, [`RegisterFile`] keeps the register image in memory
//! so it can be inspected.
//!
//! ```
//! use gbsound_core::{Apu, Channel, Duty, Envelope, Pan, RegisterFile};
//!
//! let mut apu = Apu::new(RegisterFile::new());
//! apu.set_enable(true);
//! apu.set_master_volume(7, 7);
//! apu.set_length_and_duty(Channel::Pulse1, 0, Duty::Half);
//! apu.set_envelope(Channel::Pulse1, Envelope::constant(0xF));
//! apu.set_freq(Channel::Pulse1, 440);
//! apu.set_pan(Channel::Pulse1, Pan::Both);
//! apu.trigger(Channel::Pulse1, false);
//! ```
//!
//! ## Tracing
//!
//! Register writes are reported as `trace` events, calls that do not apply
//! to the selected channel as `debug` events and resets as `info` events.
//! Install any `tracing` subscriber to see them.

#![cfg_attr(not(test), no_std)]

mod apu;
mod bus;
mod channel;
mod duty;
mod envelope;
mod error;
mod mmio;
mod noise;
mod pan;
pub mod patch;
mod period;
pub mod registers;
mod sweep;
pub mod wave;

pub use {
    apu::Apu,
    bus::{Bus, RegisterFile, Recorder, Write},
    channel::Channel,
    duty::Duty,
    envelope::{Envelope, EnvelopeDirection},
    error::Error,
    mmio::Mmio,
    noise::{LfsrWidth, Polynomial},
    pan::Pan,
    patch::Patch,
    period::{MAX as PERIOD_MAX, Period, hz_to_period},
    sweep::{Sweep, SweepDirection},
    wave::WaveTable,
};
