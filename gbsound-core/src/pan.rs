use crate::Error;
use core::str::FromStr;

/// Output routing of one channel, as laid out in NR51 for channel 1.
///
/// The driver shifts these bits left by the channel index, so the right
/// enable lands in bits 3-0 and the left enable in bits 7-4.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Pan {
    None = 0x00,
    Right = 0x01,
    Left = 0x10,
    #[default]
    Both = 0x11,
}

impl Pan {
    #[inline]
    #[must_use]
    pub const fn new(left: bool, right: bool) -> Self {
        match (left, right) {
            (false, false) => Self::None,
            (false, true) => Self::Right,
            (true, false) => Self::Left,
            (true, true) => Self::Both,
        }
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl FromStr for Pan {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let is = |name: &str| s.eq_ignore_ascii_case(name);

        if is("none") || is("off") {
            Ok(Self::None)
        } else if is("right") || is("r") {
            Ok(Self::Right)
        } else if is("left") || is("l") {
            Ok(Self::Left)
        } else if is("both") || is("center") || is("lr") {
            Ok(Self::Both)
        } else {
            Err(Error::UnknownPan)
        }
    }
}
