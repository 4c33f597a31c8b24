/// Width of the noise channel's linear feedback shift register.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum LfsrWidth {
    /// 15 bits, white noise.
    #[default]
    Wide = 0,
    /// 7 bits, a short metallic loop.
    Narrow = 1,
}

/// Contents of NR43.
///
/// The LFSR is clocked at `262144 / (divider * 2^clock_shift)` Hz, with a
/// divider of zero counting as 0.5.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Polynomial {
    /// 4 bits. Shifts of 14 and 15 stop the LFSR.
    pub clock_shift: u8,
    pub width: LfsrWidth,
    /// 3 bits.
    pub divider: u8,
}

impl Polynomial {
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        ((self.clock_shift & 0xF) << 4) | ((self.width as u8) << 3) | (self.divider & 7)
    }

    /// LFSR clock in Hz, truncated.
    #[inline]
    #[must_use]
    pub const fn lfsr_hz(self) -> u32 {
        // The divider is doubled so that zero (0.5) stays integral.
        let div2 = match self.divider & 7 {
            0 => 1,
            d => 2 * d as u32,
        };
        (0x8_0000 / div2) >> (self.clock_shift & 0xF)
    }
}
