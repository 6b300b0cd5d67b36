mod bit;
mod bits;
mod builder;
#[cfg(feature = "serde")]
mod serde;

pub use bit::*;
pub use bits::*;
pub use builder::*;
