use crate::{Error, RandSource, Result};
use ::rand::{Rng, SeedableRng, TryRngCore, rngs::OsRng, rngs::StdRng};

/// A `RandSource` backed by [`StdRng`].
///
/// The generator is seeded once at construction and owned by the caller, so
/// there is no process-wide random state. [`StdRandom::from_entropy`] gives
/// non-deterministic output; [`StdRandom::from_seed`] gives a reproducible
/// stream for tests and fixtures.
///
/// ⚠️ NOTE: Output quality is that of a general-purpose PRNG. Nothing in this
/// crate makes a cryptographic security claim about the generated bits.
#[derive(Clone, Debug)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeds a new generator from the operating system's entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSourceUnavailable`] if the platform cannot
    /// provide entropy.
    pub fn from_entropy() -> Result<Self> {
        Self::try_from_rng(&mut OsRng)
    }

    /// Seeds a new generator with bytes drawn from a fallible source.
    ///
    /// # Parameters
    /// - `seeder`: the source the seed is read from, typically [`OsRng`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSourceUnavailable`] carrying the seeder's error
    /// message if it cannot produce the seed.
    pub fn try_from_rng<S>(seeder: &mut S) -> Result<Self>
    where
        S: TryRngCore,
    {
        let rng = StdRng::try_from_rng(seeder).map_err(|e| Error::RandomSourceUnavailable {
            reason: e.to_string(),
        })?;
        Ok(Self { rng })
    }

    /// Seeds a new generator from a fixed value. Equal seeds yield equal
    /// streams.
    ///
    /// # Example
    /// ```
    /// use randbits::{RandSource, StdRandom};
    ///
    /// let mut a = StdRandom::from_seed(7);
    /// let mut b = StdRandom::from_seed(7);
    /// let x: Vec<bool> = (0..64).map(|_| a.rand()).collect();
    /// let y: Vec<bool> = (0..64).map(|_| b.rand()).collect();
    /// assert_eq!(x, y);
    /// ```
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uses entropy when `seed` is `None`, otherwise the given seed.
    ///
    /// # Errors
    ///
    /// See [`StdRandom::from_entropy`].
    pub fn from_optional_seed(seed: Option<u64>) -> Result<Self> {
        match seed {
            Some(seed) => Ok(Self::from_seed(seed)),
            None => Self::from_entropy(),
        }
    }
}

impl RandSource<bool> for StdRandom {
    fn rand(&mut self) -> bool {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct UnavailableRng;

    impl TryRngCore for UnavailableRng {
        type Error = io::Error;

        fn try_next_u32(&mut self) -> core::result::Result<u32, Self::Error> {
            Err(io::Error::other("entropy pool exhausted"))
        }

        fn try_next_u64(&mut self) -> core::result::Result<u64, Self::Error> {
            Err(io::Error::other("entropy pool exhausted"))
        }

        fn try_fill_bytes(&mut self, _dst: &mut [u8]) -> core::result::Result<(), Self::Error> {
            Err(io::Error::other("entropy pool exhausted"))
        }
    }

    fn draw_bits(rng: &mut StdRandom, n: usize) -> Vec<bool> {
        (0..n).map(|_| -> bool { rng.rand() }).collect()
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = StdRandom::from_seed(42);
        let mut b = StdRandom::from_seed(42);
        assert_eq!(draw_bits(&mut a, 256), draw_bits(&mut b, 256));
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = StdRandom::from_seed(1);
        let mut b = StdRandom::from_seed(2);
        assert_ne!(draw_bits(&mut a, 256), draw_bits(&mut b, 256));
    }

    #[test]
    fn entropy_source_initializes() {
        let mut rng = StdRandom::from_entropy().expect("OS entropy should be available");
        assert_eq!(draw_bits(&mut rng, 8).len(), 8);
    }

    #[test]
    fn failing_seeder_reports_unavailable_source() {
        let err = StdRandom::try_from_rng(&mut UnavailableRng).unwrap_err();
        assert!(matches!(err, Error::RandomSourceUnavailable { .. }));
        assert_eq!(
            err.to_string(),
            "random source unavailable: entropy pool exhausted"
        );
    }

    #[test]
    fn os_seeder_matches_from_entropy_shape() {
        let mut rng = StdRandom::try_from_rng(&mut OsRng).unwrap();
        assert_eq!(draw_bits(&mut rng, 128).len(), 128);
    }

    #[test]
    fn optional_seed_uses_seed_when_present() {
        let mut a = StdRandom::from_optional_seed(Some(9)).unwrap();
        let mut b = StdRandom::from_seed(9);
        assert_eq!(draw_bits(&mut a, 64), draw_bits(&mut b, 64));
    }

    #[test]
    fn bits_are_roughly_balanced() {
        let mut rng = StdRandom::from_seed(0xDEAD_BEEF);
        let n = 100_000;
        let ones = draw_bits(&mut rng, n).into_iter().filter(|&b| b).count();
        let ratio = ones as f64 / n as f64;
        // 5 sigma for n = 100k is ~0.0079.
        assert!((ratio - 0.5).abs() < 0.01, "ratio = {ratio}");
    }
}
