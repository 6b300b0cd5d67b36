mod interface;
mod std_random;

pub use interface::*;
pub use std_random::*;
