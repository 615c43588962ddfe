//! A small JSON value model with a reader and a canonical (sorted-key, compact) writer.
//!
//! Style expressions are JSON arrays, so this is the input and output format of
//! every expression in tilefence.

mod array;
mod object;
mod parse;
mod stringify;
mod value;

pub use array::JsonArray;
pub use object::JsonObject;
pub use parse::{MAX_DEPTH, parse_json_iter, parse_json_str};
pub use stringify::{escape_json_string, stringify};
pub use value::JsonValue;
