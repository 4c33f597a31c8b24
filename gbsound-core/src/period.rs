/// Largest value that fits the 11-bit period field.
pub const MAX: u16 = 0x7FF;

// Pulse channels step their duty position at 1048576 / 8 Hz per period
// count, so the output frequency is CLOCK / (2048 - period).
const CLOCK: i32 = 0x2_0000;
const OVERFLOW: i32 = MAX as i32 + 1;

/// The 11-bit period loaded into a channel's frequency divider.
///
/// The divider counts up from the period to 2048, so larger values give
/// higher pitches. The wave channel's divider runs twice as fast per output
/// cycle, halving its frequency for the same period.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u16", into = "u16")
)]
pub struct Period(u16);

impl Period {
    /// Returned for non-positive frequencies.
    pub const SILENT: Self = Self(MAX);

    /// Wraps a raw period, dropping bits above the 11-bit field.
    #[inline]
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw & MAX)
    }

    /// Converts a frequency in Hz to a divider period, truncating the
    /// division by the frequency.
    ///
    /// Never fails: zero and negative frequencies map to [`Period::SILENT`]
    /// and the result is clamped to `0..=2047`.
    #[inline]
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_hz(hz: i32, wave: bool) -> Self {
        if hz <= 0 {
            return Self::SILENT;
        }

        let divisor = if wave { hz.saturating_mul(2) } else { hz };
        let timer = OVERFLOW - CLOCK / divisor;

        let timer = if timer < 0 {
            0
        } else if timer > MAX as i32 {
            MAX as i32
        } else {
            timer
        };

        Self(timer as u16)
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Bits 7-0, written to NRx3.
    #[inline]
    #[must_use]
    pub const fn lo(self) -> u8 {
        self.0.to_le_bytes()[0]
    }

    /// Bits 10-8, written to bits 2-0 of NRx4.
    #[inline]
    #[must_use]
    pub const fn hi(self) -> u8 {
        self.0.to_le_bytes()[1] & 7
    }

    /// Nominal output frequency in Hz, truncated.
    #[inline]
    #[must_use]
    #[expect(clippy::cast_sign_loss)]
    pub const fn hz(self, wave: bool) -> u32 {
        let steps = OVERFLOW - self.0 as i32;
        let mul = if wave { 2 } else { 1 };
        (CLOCK / (steps * mul)) as u32
    }
}

impl From<u16> for Period {
    /// Same as [`Period::new`].
    #[inline]
    fn from(raw: u16) -> Self {
        Self::new(raw)
    }
}

impl From<Period> for u16 {
    #[inline]
    fn from(period: Period) -> Self {
        period.get()
    }
}

/// Timer period for `hz` on a pulse or noise channel (`is_wave == false`)
/// or on the wave channel.
#[inline]
#[must_use]
pub const fn hz_to_period(hz: i32, is_wave: bool) -> u16 {
    Period::from_hz(hz, is_wave).get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(hz: i32, wave: bool) -> u16 {
        if hz <= 0 {
            return 2047;
        }
        let div = if wave { i64::from(hz) * 2 } else { i64::from(hz) };
        let timer = (2048 - 131_072 / div).clamp(0, 2047);
        u16::try_from(timer).unwrap_or(2047)
    }

    #[test]
    fn non_positive_is_silent() {
        for hz in [0, -1, -440, i32::MIN] {
            assert_eq!(hz_to_period(hz, false), 2047, "pulse at {hz} Hz");
            assert_eq!(hz_to_period(hz, true), 2047, "wave at {hz} Hz");
        }
    }

    #[test]
    fn a4_on_pulse() {
        assert_eq!(hz_to_period(440, false), 1751, "2048 - 131072 / 440");
    }

    #[test]
    fn a4_on_wave() {
        assert_eq!(hz_to_period(440, true), 1900, "2048 - 131072 / 880");
    }

    #[test]
    fn matches_formula_over_range() {
        let samples = (1..=4096).chain([
            5000,
            10_000,
            65_536,
            131_072,
            131_073,
            1_000_000,
            i32::MAX / 2 + 1,
            i32::MAX,
        ]);
        for hz in samples {
            for wave in [false, true] {
                assert_eq!(
                    hz_to_period(hz, wave),
                    reference(hz, wave),
                    "{hz} Hz, wave = {wave}"
                );
            }
        }
    }

    #[test]
    fn always_in_range() {
        for hz in [i32::MIN, -5, 0, 1, 2, 63, 64, 65, 131_072, 262_144, i32::MAX] {
            for wave in [false, true] {
                assert!(hz_to_period(hz, wave) <= MAX, "{hz} Hz, wave = {wave}");
            }
        }
    }

    #[test]
    fn low_frequencies_clamp_to_zero() {
        assert_eq!(hz_to_period(1, false), 0, "2048 - 131072 is negative");
        assert_eq!(hz_to_period(63, false), 0, "2048 - 2080 is negative");
        assert_eq!(hz_to_period(64, false), 0, "2048 - 2048 is zero");
        assert_eq!(hz_to_period(65, false), 32, "2048 - 2016");
    }

    #[test]
    fn very_high_frequencies_saturate() {
        assert_eq!(hz_to_period(131_073, false), 2047, "quotient is zero");
        assert_eq!(hz_to_period(i32::MAX, true), 2047, "doubling saturates");
    }

    #[test]
    fn monotonic_on_pulse() {
        let periods: [u16; 4] = [100, 440, 1000, 20_000].map(|hz| hz_to_period(hz, false));
        assert_eq!(periods, [738, 1751, 1917, 2042], "sampled periods");
        assert!(
            periods.windows(2).all(|w| w[0] <= w[1]),
            "higher frequency never lowers the period"
        );
    }

    #[test]
    fn splits_into_register_halves() {
        let period = Period::new(0x5A3);
        assert_eq!(period.lo(), 0xA3, "low byte");
        assert_eq!(period.hi(), 0x05, "high three bits");
    }

    #[test]
    fn new_masks_to_eleven_bits() {
        assert_eq!(Period::new(0xFFFF).get(), 0x7FF, "upper bits dropped");
        assert_eq!(Period::new(0x0800).get(), 0, "bit 11 dropped");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn deserializing_masks_to_eleven_bits() {
        let period: Period = serde_json::from_str("5000").unwrap_or_default();
        assert_eq!(period, Period::new(5000), "same as new");
        assert_eq!(period.get(), 904, "5000 & 0x7FF");
        assert_eq!(
            serde_json::to_string(&Period::new(1751)).unwrap_or_default(),
            "1751",
            "serialized as the bare number"
        );
    }

    #[test]
    fn nominal_frequency() {
        assert_eq!(Period::new(1751).hz(false), 441, "131072 / 297");
        assert_eq!(Period::new(1900).hz(true), 442, "131072 / 296");
        assert_eq!(Period::new(0).hz(false), 64, "slowest pulse");
        assert_eq!(Period::SILENT.hz(false), 131_072, "fastest pulse");
    }
}
