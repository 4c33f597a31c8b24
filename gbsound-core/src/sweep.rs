/// Whether the channel 1 sweep raises or lowers the period.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum SweepDirection {
    #[default]
    Add = 0,
    Sub = 1,
}

impl From<u8> for SweepDirection {
    /// Only bit 3 is considered.
    #[inline]
    fn from(val: u8) -> Self {
        if val & 8 == 0 { Self::Add } else { Self::Sub }
    }
}

impl From<SweepDirection> for u8 {
    #[inline]
    fn from(val: SweepDirection) -> Self {
        (val as Self) << 3
    }
}

/// Contents of NR10.
///
/// Every `pace` 128 Hz ticks the period changes by `period >> step`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Sweep {
    /// 3 bits, zero disables the sweep.
    pub pace: u8,
    pub direction: SweepDirection,
    /// 3 bits.
    pub step: u8,
}

impl Sweep {
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        ((self.pace & 7) << 4) | ((self.direction as u8) << 3) | (self.step & 7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_fields() {
        let sweep = Sweep {
            pace: 5,
            direction: SweepDirection::Sub,
            step: 2,
        };
        assert_eq!(sweep.bits(), 0b0101_1010, "pace, direction, step");
    }

    #[test]
    fn bit_seven_is_never_set() {
        let sweep = Sweep {
            pace: 0xFF,
            direction: SweepDirection::Add,
            step: 0xFF,
        };
        assert_eq!(sweep.bits(), 0b0111_0111, "fields masked to 3 bits");
    }

    #[test]
    fn direction_survives_register_round_trip() {
        for dir in [SweepDirection::Add, SweepDirection::Sub] {
            assert_eq!(SweepDirection::from(u8::from(dir)), dir, "{dir:?}");
        }
        let sweep = Sweep {
            pace: 7,
            direction: SweepDirection::Sub,
            step: 7,
        };
        assert_eq!(SweepDirection::from(sweep.bits()), SweepDirection::Sub, "read back from NR10");
    }
}
