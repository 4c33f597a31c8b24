use core::{error, fmt};
use fmt::Display;

/// Failure to turn untrusted input into one of the driver's field types.
///
/// Driver operations themselves never fail; this is only produced by the
/// `TryFrom` and `FromStr` conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    InvalidChannel { index: u8 },
    InvalidDuty { index: u8 },
    UnknownChannel,
    UnknownDirection,
    UnknownDuty,
    UnknownPan,
}

impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChannel { index } => {
                write!(f, "invalid channel index {index}, expected 0 to 3")
            }
            Self::InvalidDuty { index } => {
                write!(f, "invalid duty index {index}, expected 0 to 3")
            }
            Self::UnknownChannel => write!(
                f,
                "unknown channel name, expected pulse1, pulse2, wave or noise"
            ),
            Self::UnknownDirection => {
                write!(f, "unknown direction, expected up or down")
            }
            Self::UnknownDuty => {
                write!(f, "unknown duty cycle, expected 12.5, 25, 50 or 75")
            }
            Self::UnknownPan => {
                write!(f, "unknown panning, expected none, left, right or both")
            }
        }
    }
}

impl error::Error for Error {}
