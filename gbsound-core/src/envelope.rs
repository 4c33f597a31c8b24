use crate::Error;
use core::str::FromStr;

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum EnvelopeDirection {
    #[default]
    Decrease = 0,
    Increase = 1,
}

impl From<u8> for EnvelopeDirection {
    /// Only bit 3 is considered.
    #[inline]
    fn from(val: u8) -> Self {
        if val & 8 == 0 {
            Self::Decrease
        } else {
            Self::Increase
        }
    }
}

impl From<EnvelopeDirection> for u8 {
    #[inline]
    fn from(val: EnvelopeDirection) -> Self {
        (val as Self) << 3
    }
}

impl FromStr for EnvelopeDirection {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("down") || s.eq_ignore_ascii_case("decrease") {
            Ok(Self::Decrease)
        } else if s.eq_ignore_ascii_case("up") || s.eq_ignore_ascii_case("increase") {
            Ok(Self::Increase)
        } else {
            Err(Error::UnknownDirection)
        }
    }
}

/// Contents of NR12, NR22 and NR42.
///
/// A `pace` of zero disables the automatic ramp and holds `volume`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Envelope {
    /// Initial volume, 4 bits.
    pub volume: u8,
    pub direction: EnvelopeDirection,
    /// Ramp step length in 64 Hz ticks, 3 bits.
    pub pace: u8,
}

impl Envelope {
    #[inline]
    #[must_use]
    pub const fn constant(volume: u8) -> Self {
        Self {
            volume,
            direction: EnvelopeDirection::Decrease,
            pace: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        ((self.volume & 0xF) << 4) | ((self.direction as u8) << 3) | (self.pace & 7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_fields() {
        let env = Envelope {
            volume: 0xA,
            direction: EnvelopeDirection::Increase,
            pace: 3,
        };
        assert_eq!(env.bits(), 0b1010_1011, "volume, direction, pace");
    }

    #[test]
    fn masks_oversized_fields() {
        let env = Envelope {
            volume: 0x1F,
            direction: EnvelopeDirection::Decrease,
            pace: 0xF,
        };
        assert_eq!(env.bits(), 0b1111_0111, "volume and pace truncated");
    }

    #[test]
    fn direction_is_bit_three() {
        assert_eq!(EnvelopeDirection::from(0xF8), EnvelopeDirection::Increase, "bit 3 set");
        assert_eq!(EnvelopeDirection::from(0xF7), EnvelopeDirection::Decrease, "bit 3 clear");
        assert_eq!(u8::from(EnvelopeDirection::Increase), 8, "bit 3 of NRx2");
    }

    #[test]
    fn direction_survives_register_round_trip() {
        for dir in [EnvelopeDirection::Decrease, EnvelopeDirection::Increase] {
            assert_eq!(EnvelopeDirection::from(u8::from(dir)), dir, "{dir:?}");
        }
        let env = Envelope {
            volume: 9,
            direction: EnvelopeDirection::Increase,
            pace: 2,
        };
        assert_eq!(
            EnvelopeDirection::from(env.bits()),
            EnvelopeDirection::Increase,
            "read back from a packed NRx2"
        );
    }

    #[test]
    fn parses_direction_words() {
        assert_eq!("UP".parse::<EnvelopeDirection>(), Ok(EnvelopeDirection::Increase), "up");
        assert_eq!(
            "decrease".parse::<EnvelopeDirection>(),
            Ok(EnvelopeDirection::Decrease),
            "decrease"
        );
        assert_eq!(
            "sideways".parse::<EnvelopeDirection>(),
            Err(Error::UnknownDirection),
            "no such direction"
        );
    }
}
