use crate::{Bit, BitSequence, Error, Result};

/// Accumulates bits one at a time into a [`BitSequence`].
///
/// # Example
/// ```
/// use randbits::{Bit, BitSequenceBuilder};
///
/// let mut builder = BitSequenceBuilder::new();
/// while !builder.is_full() {
///     builder.push(Bit::One);
/// }
/// let seq = builder.build().unwrap();
/// assert_eq!(seq.count_ones(), 128);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BitSequenceBuilder {
    raw: u128,
    len: usize,
}

impl BitSequenceBuilder {
    /// Creates an empty builder.
    pub const fn new() -> Self {
        Self { raw: 0, len: 0 }
    }

    /// Appends `bit` after the previously pushed bits.
    ///
    /// Returns `false` and leaves the builder unchanged once it is full.
    pub fn push(&mut self, bit: Bit) -> bool {
        if self.is_full() {
            return false;
        }
        self.raw = (self.raw << 1) | u128::from(bit.is_one());
        self.len += 1;
        true
    }

    /// Number of bits pushed so far.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// `true` until the first push.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` once [`BitSequence::BITS`] bits have been pushed.
    pub const fn is_full(&self) -> bool {
        self.len == BitSequence::BITS
    }

    /// Finishes the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Incomplete`] unless exactly [`BitSequence::BITS`] bits
    /// were pushed.
    pub fn build(self) -> Result<BitSequence> {
        if !self.is_full() {
            return Err(Error::Incomplete { len: self.len });
        }
        Ok(BitSequence::from_raw(self.raw))
    }

    /// Finishes a builder the caller has already filled.
    pub(crate) fn finish(self) -> BitSequence {
        debug_assert!(self.is_full());
        BitSequence::from_raw(self.raw)
    }
}
