use std::io::{self, Write};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Bit, BitSequence, BitSequenceBuilder, RandSource, Result, StdRandom};

/// Draws [`BitSequence::BITS`] independent bits from a [`RandSource`] and
/// renders them as a line of `'0'`/`'1'` characters.
///
/// The generator owns its random source, so callers decide how it is seeded.
/// Inject a seeded or mocked source to get reproducible output.
///
/// # Example
/// ```
/// use randbits::{BitStringGenerator, StdRandom};
///
/// let mut generator = BitStringGenerator::new(StdRandom::from_seed(1));
/// let seq = generator.next_sequence();
/// assert_eq!(seq.to_string().len(), 128);
/// ```
#[derive(Debug)]
pub struct BitStringGenerator<R>
where
    R: RandSource<bool>,
{
    rng: R,
}

impl<R> BitStringGenerator<R>
where
    R: RandSource<bool>,
{
    /// Creates a new [`BitStringGenerator`] that draws from `rng`.
    ///
    /// # Parameters
    /// - `rng`: A [`RandSource`] yielding one uniform bit per call
    ///
    /// # Returns
    /// A generator that owns `rng`. Pass `&mut rng` to keep using the source
    /// after the generator is dropped.
    ///
    /// # Example
    /// ```
    /// use randbits::{BitStringGenerator, RandSource};
    ///
    /// struct AlwaysZero;
    /// impl RandSource<bool> for AlwaysZero {
    ///     fn rand(&mut self) -> bool {
    ///         false
    ///     }
    /// }
    ///
    /// let seq = BitStringGenerator::new(AlwaysZero).next_sequence();
    /// assert_eq!(seq.to_raw(), 0);
    /// ```
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates one sequence, appending one bit per draw.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_sequence(&mut self) -> BitSequence {
        let mut builder = BitSequenceBuilder::new();
        while !builder.is_full() {
            builder.push(Bit::from(self.rng.rand()));
        }
        builder.finish()
    }

    /// Generates one sequence and writes it to `out` followed by `\n`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if writing or flushing fails.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self, out)))]
    pub fn write_sequence<W: Write>(&mut self, out: &mut W) -> Result<BitSequence> {
        let seq = self.next_sequence();
        writeln!(out, "{seq}")?;
        out.flush()?;
        Ok(seq)
    }

    /// Consumes the generator, returning the random source.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// Generates one sequence and prints it to standard output.
///
/// With `seed == None` the generator is seeded from OS entropy; with a seed the
/// output is reproducible.
///
/// # Errors
///
/// Returns [`crate::Error::RandomSourceUnavailable`] if entropy cannot be
/// obtained, or [`crate::Error::Io`] if stdout cannot be written.
pub fn generate_and_print(seed: Option<u64>) -> Result<BitSequence> {
    let rng = StdRandom::from_optional_seed(seed)?;
    let mut generator = BitStringGenerator::new(rng);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generator.write_sequence(&mut out)
}
