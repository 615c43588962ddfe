//! Features as they come out of a vector tile, and their conversion into
//! longitude/latitude geometry.

mod convert;
mod feature;
mod feature_type;

pub use convert::*;
pub use feature::*;
pub use feature_type::*;
