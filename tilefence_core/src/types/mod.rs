mod tile_coord;
pub use tile_coord::*;
