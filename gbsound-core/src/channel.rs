use crate::{
    Error,
    registers::{NR11, NR12, NR13, NR14, NR21, NR22, NR23, NR24, NR31, NR33, NR34, NR41, NR42, NR44},
};
use core::{fmt, str::FromStr};

/// One of the four sound generators.
///
/// The discriminant is the channel's index, which is also its bit position
/// in NR51 and NR52.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Channel {
    Pulse1 = 0,
    Pulse2 = 1,
    Wave = 2,
    Noise = 3,
}

impl Channel {
    pub const ALL: [Self; 4] = [Self::Pulse1, Self::Pulse2, Self::Wave, Self::Noise];

    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    #[must_use]
    pub const fn is_wave(self) -> bool {
        matches!(self, Self::Wave)
    }

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pulse1 => "pulse1",
            Self::Pulse2 => "pulse2",
            Self::Wave => "wave",
            Self::Noise => "noise",
        }
    }

    /// NRx1: length, plus duty on the pulse channels.
    pub(crate) const fn length_reg(self) -> u16 {
        match self {
            Self::Pulse1 => NR11,
            Self::Pulse2 => NR21,
            Self::Wave => NR31,
            Self::Noise => NR41,
        }
    }

    /// NRx2: volume envelope. The wave channel has an output level instead.
    pub(crate) const fn envelope_reg(self) -> Option<u16> {
        match self {
            Self::Pulse1 => Some(NR12),
            Self::Pulse2 => Some(NR22),
            Self::Wave => None,
            Self::Noise => Some(NR42),
        }
    }

    /// NRx3 and NRx4. The noise channel has no period.
    pub(crate) const fn period_regs(self) -> Option<(u16, u16)> {
        match self {
            Self::Pulse1 => Some((NR13, NR14)),
            Self::Pulse2 => Some((NR23, NR24)),
            Self::Wave => Some((NR33, NR34)),
            Self::Noise => None,
        }
    }

    /// NRx4: trigger and length enable.
    pub(crate) const fn control_reg(self) -> u16 {
        match self {
            Self::Pulse1 => NR14,
            Self::Pulse2 => NR24,
            Self::Wave => NR34,
            Self::Noise => NR44,
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = Error;

    #[inline]
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Pulse1),
            1 => Ok(Self::Pulse2),
            2 => Ok(Self::Wave),
            3 => Ok(Self::Noise),
            _ => Err(Error::InvalidChannel { index }),
        }
    }
}

impl FromStr for Channel {
    type Err = Error;

    /// Accepts the channel names, `ch1` to `ch4` and `1` to `4`, ignoring
    /// ASCII case.
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let is = |name: &str| s.eq_ignore_ascii_case(name);

        if is("pulse1") || is("ch1") || is("1") {
            Ok(Self::Pulse1)
        } else if is("pulse2") || is("ch2") || is("2") {
            Ok(Self::Pulse2)
        } else if is("wave") || is("ch3") || is("3") {
            Ok(Self::Wave)
        } else if is("noise") || is("ch4") || is("4") {
            Ok(Self::Noise)
        } else {
            Err(Error::UnknownChannel)
        }
    }
}

impl fmt::Display for Channel {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
