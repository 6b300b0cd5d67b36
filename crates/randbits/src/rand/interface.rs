/// A trait for random sources that return random values.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests.
///
/// The random type `T` is generic (typically `bool` for single bits)
///
/// # Example
/// ```
/// use randbits::RandSource;
///
/// struct AlwaysOne;
/// impl RandSource<bool> for AlwaysOne {
///     fn rand(&mut self) -> bool {
///         true
///     }
/// }
///
/// let mut rng = AlwaysOne;
/// assert!(rng.rand());
/// ```
pub trait RandSource<T> {
    /// Returns a random value.
    fn rand(&mut self) -> T;
}

impl<T, R> RandSource<T> for &mut R
where
    R: RandSource<T> + ?Sized,
{
    fn rand(&mut self) -> T {
        (**self).rand()
    }
}
