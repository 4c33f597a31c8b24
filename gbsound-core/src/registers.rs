//! Sound register map.
//!
//! Every register is a single byte in the `0xFF10..=0xFF3F` window of the
//! I/O page. Names follow the usual `NRxy` convention, where `x` is the
//! channel (5 for the global controls) and `y` the register within it.

/// Channel 1 sweep.
pub const NR10: u16 = 0xFF10;
/// Channel 1 duty and length.
pub const NR11: u16 = 0xFF11;
/// Channel 1 volume envelope.
pub const NR12: u16 = 0xFF12;
/// Channel 1 period low.
pub const NR13: u16 = 0xFF13;
/// Channel 1 period high and control.
pub const NR14: u16 = 0xFF14;

/// Channel 2 duty and length.
pub const NR21: u16 = 0xFF16;
/// Channel 2 volume envelope.
pub const NR22: u16 = 0xFF17;
/// Channel 2 period low.
pub const NR23: u16 = 0xFF18;
/// Channel 2 period high and control.
pub const NR24: u16 = 0xFF19;

/// Channel 3 DAC enable.
pub const NR30: u16 = 0xFF1A;
/// Channel 3 length.
pub const NR31: u16 = 0xFF1B;
/// Channel 3 output level.
pub const NR32: u16 = 0xFF1C;
/// Channel 3 period low.
pub const NR33: u16 = 0xFF1D;
/// Channel 3 period high and control.
pub const NR34: u16 = 0xFF1E;

/// Channel 4 length.
pub const NR41: u16 = 0xFF20;
/// Channel 4 volume envelope.
pub const NR42: u16 = 0xFF21;
/// Channel 4 frequency and randomness.
pub const NR43: u16 = 0xFF22;
/// Channel 4 control.
pub const NR44: u16 = 0xFF23;

/// Master volume and VIN panning.
pub const NR50: u16 = 0xFF24;
/// Sound panning.
pub const NR51: u16 = 0xFF25;
/// Sound on/off.
pub const NR52: u16 = 0xFF26;

/// First byte of wave pattern RAM.
pub const WAVE_RAM: u16 = 0xFF30;
pub const WAVE_RAM_SIZE: u16 = 0x10;

/// Lowest address owned by the sound chip.
pub const FIRST: u16 = NR10;
/// Highest address owned by the sound chip.
pub const LAST: u16 = WAVE_RAM + WAVE_RAM_SIZE - 1;

/// Control registers zeroed by [`Apu::reset`](crate::Apu::reset), in write
/// order after NR52.
pub const CONTROL: [u16; 20] = [
    NR10, NR11, NR12, NR13, NR14, NR21, NR22, NR23, NR24, NR30, NR31, NR32, NR33, NR34, NR41,
    NR42, NR43, NR44, NR50, NR51,
];

/// Human readable name of a sound register, used when dumping register
/// images.
#[inline]
#[must_use]
pub const fn name(addr: u16) -> Option<&'static str> {
    Some(match addr {
        NR10 => "NR10",
        NR11 => "NR11",
        NR12 => "NR12",
        NR13 => "NR13",
        NR14 => "NR14",
        NR21 => "NR21",
        NR22 => "NR22",
        NR23 => "NR23",
        NR24 => "NR24",
        NR30 => "NR30",
        NR31 => "NR31",
        NR32 => "NR32",
        NR33 => "NR33",
        NR34 => "NR34",
        NR41 => "NR41",
        NR42 => "NR42",
        NR43 => "NR43",
        NR44 => "NR44",
        NR50 => "NR50",
        NR51 => "NR51",
        NR52 => "NR52",
        WAVE_RAM..=LAST => "WAVE",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_covers_wave_ram() {
        assert_eq!(FIRST, 0xFF10, "window starts at NR10");
        assert_eq!(LAST, 0xFF3F, "window ends at the last wave byte");
    }

    #[test]
    fn unused_addresses_have_no_name() {
        assert_eq!(name(0xFF15), None, "0xFF15 is unmapped");
        assert_eq!(name(0xFF1F), None, "0xFF1F is unmapped");
        assert_eq!(name(0xFF27), None, "0xFF27 is unmapped");
        assert_eq!(name(NR43), Some("NR43"), "NR43 is named");
        assert_eq!(name(0xFF3A), Some("WAVE"), "wave RAM is named");
    }

    #[test]
    fn control_registers_exclude_power_and_wave_ram() {
        assert!(!CONTROL.contains(&NR52), "NR52 is written separately");
        assert!(
            CONTROL.iter().all(|&addr| addr < WAVE_RAM),
            "wave RAM is not a control register"
        );
    }
}
