mod bit_string;

pub use bit_string::*;
