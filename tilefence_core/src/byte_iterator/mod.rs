//! Byte-level iteration and the token helpers the JSON reader is built from.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
