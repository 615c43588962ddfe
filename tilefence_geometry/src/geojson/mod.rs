//! Reading GeoJSON geometry objects into [`crate::Geometry`].
//!
//! Writing goes the other way through [`crate::Geometry::to_geojson`] and
//! [`crate::Geometry::stringify`].

mod parse;

pub use parse::*;
