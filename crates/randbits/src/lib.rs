#![doc = include_str!("../README.md")]

mod error;
mod generator;
mod nist;
mod rand;
mod sequence;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::nist::*;
pub use crate::rand::*;
pub use crate::sequence::*;
