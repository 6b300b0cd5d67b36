use crate::{Bit, Error};
use core::{fmt, str::FromStr};

/// An immutable sequence of exactly [`BitSequence::BITS`] bits.
///
/// Bits are packed into a `u128` with the first generated bit in the most
/// significant position, so the textual form reads in generation order:
///
/// ```text
///  index 0                                                   index 127
///  |                                                                 |
///  v                                                                 v
///  MSB ------------------------ u128 --------------------------- LSB
/// ```
///
/// Because the storage is a fixed-width integer, the length invariant cannot
/// be violated and every position holds either [`Bit::Zero`] or [`Bit::One`].
///
/// # Example
/// ```
/// use randbits::{Bit, BitSequence};
///
/// let seq = BitSequence::from_raw(1 << 127);
/// assert_eq!(seq.get(0), Some(Bit::One));
/// assert_eq!(seq.get(1), Some(Bit::Zero));
/// assert_eq!(seq.to_string().len(), 128);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitSequence {
    raw: u128,
}

impl BitSequence {
    /// Number of bits in every sequence.
    pub const BITS: usize = u128::BITS as usize;

    /// Wraps a packed value. Bit 127 of `raw` is index 0.
    pub const fn from_raw(raw: u128) -> Self {
        Self { raw }
    }

    /// Returns the packed value.
    pub const fn to_raw(self) -> u128 {
        self.raw
    }

    /// Returns the bit at `index` in generation order, or `None` past the end.
    pub const fn get(&self, index: usize) -> Option<Bit> {
        if index >= Self::BITS {
            return None;
        }
        let shift = Self::BITS - 1 - index;
        if (self.raw >> shift) & 1 == 1 {
            Some(Bit::One)
        } else {
            Some(Bit::Zero)
        }
    }

    /// Iterates bits in generation order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Bit> + '_ {
        (0..Self::BITS).map(move |i| {
            let shift = Self::BITS - 1 - i;
            Bit::from((self.raw >> shift) & 1 == 1)
        })
    }

    /// Number of [`Bit::One`] positions.
    pub const fn count_ones(&self) -> u32 {
        self.raw.count_ones()
    }

    /// Number of [`Bit::Zero`] positions.
    pub const fn count_zeros(&self) -> u32 {
        self.raw.count_zeros()
    }

    /// Always [`BitSequence::BITS`].
    pub const fn len(&self) -> usize {
        Self::BITS
    }

    /// Always `false`; a sequence is never shorter than 128 bits.
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0128b}", self.raw)
    }
}

impl FromStr for BitSequence {
    type Err = Error;

    /// Parses exactly 128 `'0'`/`'1'` characters. Leading and trailing
    /// whitespace is ignored so a line read from a file parses directly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != Self::BITS {
            return Err(Error::InvalidLength { len });
        }
        let mut raw = 0u128;
        for (position, symbol) in s.chars().enumerate() {
            let bit = Bit::from_char(symbol).ok_or(Error::InvalidSymbol { symbol, position })?;
            raw = (raw << 1) | u128::from(bit.is_one());
        }
        Ok(Self { raw })
    }
}

impl From<BitSequence> for u128 {
    fn from(seq: BitSequence) -> Self {
        seq.raw
    }
}
