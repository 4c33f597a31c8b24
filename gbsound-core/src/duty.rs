use crate::Error;
use core::str::FromStr;

/// Fraction of each period the pulse output spends high.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[repr(u8)]
pub enum Duty {
    /// 12.5%
    Eighth = 0,
    /// 25%
    Quarter = 1,
    /// 50%
    #[default]
    Half = 2,
    /// 75%
    ThreeQuarters = 3,
}

impl Duty {
    /// Value of bits 7-6 of NR11/NR21.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Duty {
    type Error = Error;

    #[inline]
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Eighth),
            1 => Ok(Self::Quarter),
            2 => Ok(Self::Half),
            3 => Ok(Self::ThreeQuarters),
            _ => Err(Error::InvalidDuty { index }),
        }
    }
}

impl FromStr for Duty {
    type Err = Error;

    /// Accepts the percentage, with or without a trailing `%`.
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('%') {
            "12.5" => Ok(Self::Eighth),
            "25" => Ok(Self::Quarter),
            "50" => Ok(Self::Half),
            "75" => Ok(Self::ThreeQuarters),
            _ => Err(Error::UnknownDuty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_match_hardware_encoding() {
        assert_eq!(Duty::Eighth.bits(), 0, "12.5%");
        assert_eq!(Duty::ThreeQuarters.bits(), 3, "75%");
    }

    #[test]
    fn parses_percentages() {
        assert_eq!("12.5%".parse::<Duty>(), Ok(Duty::Eighth), "with sign");
        assert_eq!("50".parse::<Duty>(), Ok(Duty::Half), "without sign");
        assert_eq!("33".parse::<Duty>(), Err(Error::UnknownDuty), "not a duty");
    }

    #[test]
    fn rejects_large_index() {
        assert_eq!(
            Duty::try_from(4),
            Err(Error::InvalidDuty { index: 4 }),
            "two-bit field"
        );
    }
}
