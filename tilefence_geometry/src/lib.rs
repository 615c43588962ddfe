//! Geometry for the `within` expression: plain 2D geometry types, the
//! winding-number containment test, a structural GeoJSON geometry reader and
//! writer, and the conversion of tile-local feature geometry to longitude and
//! latitude.

mod geo;
pub mod geojson;
pub mod math;
pub mod tile;

pub use geo::*;
pub use geojson::*;
pub use tile::*;
