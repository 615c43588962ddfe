//! Core building blocks for tilefence: a byte iterator for hand-written parsers,
//! a small JSON value model and web-mercator tile coordinates.

pub mod byte_iterator;
pub mod json;
pub mod types;

pub use types::*;
