/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `randbits` can produce.
///
/// Generation itself cannot fail once a random source exists. Errors come from
/// acquiring OS entropy, from parsing or building a [`crate::BitSequence`], and
/// from writing the rendered sequence.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The platform entropy source could not seed the generator.
    #[error("random source unavailable: {reason}")]
    RandomSourceUnavailable { reason: String },

    /// Input did not contain exactly [`crate::BitSequence::BITS`] symbols.
    #[error("invalid length: expected 128 bits, got {len}")]
    InvalidLength { len: usize },

    /// Input contained something other than `'0'` or `'1'`.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// A single character was not `'0'` or `'1'`.
    #[error("invalid bit symbol {symbol:?}")]
    InvalidBit { symbol: char },

    /// A builder was finished before all bits were pushed.
    #[error("incomplete sequence: {len} of 128 bits pushed")]
    Incomplete { len: usize },

    /// Writing the sequence failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
