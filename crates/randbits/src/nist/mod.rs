//! Randomness checks from NIST SP 800-22 sized for 128-bit sequences.
//!
//! Each test returns a p-value in `[0, 1]`. A sequence is considered random
//! for a test when its p-value is at least [`SIGNIFICANCE_LEVEL`].
//!
//! ## Tests
//! - [`frequency_monobit`]: balance of ones and zeros over the whole sequence.
//! - [`runs`]: number of uninterrupted runs of identical bits.
//! - [`longest_run_of_ones`]: longest run of ones within 8-bit blocks.
//!
//! [`Report`] runs all three and renders a plain-text summary.

mod report;

pub use report::*;

use crate::BitSequence;

/// Minimum p-value for a test to pass.
pub const SIGNIFICANCE_LEVEL: f64 = 0.01;

/// Block length used by the longest-run test.
const BLOCK_LEN: usize = 8;

/// Number of blocks the longest-run test reads (`128 / BLOCK_LEN`).
const BLOCKS: usize = 16;

/// Class probabilities for the longest run of ones in an 8-bit block: `<= 1`,
/// `2`, `3`, `>= 4`.
const LONGEST_RUN_PI: [f64; 4] = [0.2148, 0.3672, 0.2305, 0.1875];

/// Frequency (monobit) test p-value.
pub fn frequency_monobit(seq: &BitSequence) -> f64 {
    monobit_p(&to_bools(seq))
}

/// Runs test p-value.
///
/// Returns `0.0` when the sequence is too unbalanced for the test to apply,
/// which also counts as a failure.
pub fn runs(seq: &BitSequence) -> f64 {
    runs_p(&to_bools(seq))
}

/// Longest-run-of-ones test p-value.
pub fn longest_run_of_ones(seq: &BitSequence) -> f64 {
    longest_run_p(&to_bools(seq))
}

fn to_bools(seq: &BitSequence) -> Vec<bool> {
    seq.iter().map(bool::from).collect()
}

fn count_ones(bits: &[bool]) -> usize {
    bits.iter().filter(|&&b| b).count()
}

pub(crate) fn monobit_p(bits: &[bool]) -> f64 {
    let n = bits.len();
    if n == 0 {
        return 0.0;
    }
    let ones = count_ones(bits) as f64;
    let zeros = n as f64 - ones;
    let s_obs = (ones - zeros).abs() / (n as f64).sqrt();
    libm::erfc(s_obs / core::f64::consts::SQRT_2)
}

pub(crate) fn runs_p(bits: &[bool]) -> f64 {
    let n = bits.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let pi = count_ones(bits) as f64 / nf;
    let tau = 2.0 / nf.sqrt();
    if (pi - 0.5).abs() >= tau {
        return 0.0;
    }
    let v_obs = 1 + bits.windows(2).filter(|w| w[0] != w[1]).count();
    let num = (v_obs as f64 - 2.0 * nf * pi * (1.0 - pi)).abs();
    let den = 2.0 * (2.0 * nf).sqrt() * pi * (1.0 - pi);
    libm::erfc(num / den)
}

pub(crate) fn longest_run_p(bits: &[bool]) -> f64 {
    if bits.len() < BLOCK_LEN * BLOCKS {
        return 0.0;
    }
    let mut classes = [0usize; 4];
    for block in bits.chunks_exact(BLOCK_LEN).take(BLOCKS) {
        let longest = longest_run(block);
        let class = longest.clamp(1, 4) - 1;
        classes[class] += 1;
    }
    let expected = BLOCKS as f64;
    let chi2: f64 = classes
        .iter()
        .zip(LONGEST_RUN_PI)
        .map(|(&v, pi)| {
            let e = expected * pi;
            (v as f64 - e).powi(2) / e
        })
        .sum();
    igamc_three_halves(chi2 / 2.0)
}

fn longest_run(block: &[bool]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for &bit in block {
        if bit {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Upper regularized incomplete gamma `Q(3/2, x)`.
///
/// Closed form: `Q(3/2, x) = erfc(sqrt(x)) + 2 sqrt(x / pi) e^-x`.
fn igamc_three_halves(x: f64) -> f64 {
    if x <= 0.0 {
        return 1.0;
    }
    let q = libm::erfc(x.sqrt()) + 2.0 * (x / core::f64::consts::PI).sqrt() * (-x).exp();
    q.clamp(0.0, 1.0)
}
