use super::{SIGNIFICANCE_LEVEL, frequency_monobit, longest_run_of_ones, runs};
use crate::BitSequence;
use core::fmt;

/// P-values of every randomness test for one sequence.
///
/// # Example
/// ```
/// use randbits::{BitStringGenerator, Report, StdRandom};
///
/// let seq = BitStringGenerator::new(StdRandom::from_seed(5)).next_sequence();
/// let report = Report::evaluate(&seq);
/// assert!((0.0..=1.0).contains(&report.monobit));
/// println!("{report}");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    /// Number of bits evaluated.
    pub len: usize,
    /// Frequency (monobit) test p-value.
    pub monobit: f64,
    /// Runs test p-value; `0.0` when the test does not apply.
    pub runs: f64,
    /// Longest-run-of-ones test p-value.
    pub longest_run: f64,
}

impl Report {
    /// Runs every test against `seq`.
    pub fn evaluate(seq: &BitSequence) -> Self {
        Self {
            len: seq.len(),
            monobit: frequency_monobit(seq),
            runs: runs(seq),
            longest_run: longest_run_of_ones(seq),
        }
    }

    /// `true` if every p-value reaches [`SIGNIFICANCE_LEVEL`].
    pub fn passed(&self) -> bool {
        [self.monobit, self.runs, self.longest_run]
            .iter()
            .all(|&p| p >= SIGNIFICANCE_LEVEL)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sequence Test Results")?;
        writeln!(f, "{}", "-".repeat(30))?;
        writeln!(f, "Length: {} bits", self.len)?;
        writeln!(f)?;
        writeln!(f, "1) Monobit P-value:             {:.6}", self.monobit)?;
        writeln!(f, "2) Runs P-value:                {:.6}", self.runs)?;
        write!(f, "3) Longest Run P-value:         {:.6}", self.longest_run)
    }
}
