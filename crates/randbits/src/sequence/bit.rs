use crate::Error;
use core::fmt;

/// A single binary digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// Returns the ASCII digit for this bit.
    pub const fn as_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }

    /// Returns `true` for [`Bit::One`].
    pub const fn is_one(self) -> bool {
        matches!(self, Self::One)
    }

    /// Parses `'0'` or `'1'`, returning `None` for anything else.
    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            _ => None,
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value { Self::One } else { Self::Zero }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_one()
    }
}

impl TryFrom<char> for Bit {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_char(symbol).ok_or(Error::InvalidBit { symbol })
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
