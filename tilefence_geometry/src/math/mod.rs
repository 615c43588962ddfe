//! Pure geometry math: ring areas, the winding-number containment test and
//! the containment dispatch used by the `within` expression.

mod area;
mod winding;
mod within;

pub use area::*;
pub use winding::*;
pub use within::*;
