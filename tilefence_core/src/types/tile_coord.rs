//! Tile coordinates in a Web Mercator tile pyramid.
//!
//! ```
//! use tilefence_core::TileCoord;
//!
//! let coord: TileCoord = "5/6/7".parse().unwrap();
//! assert_eq!(coord, TileCoord::new(5, 6, 7).unwrap());
//!
//! let [lon, lat] = coord.as_geo();
//! assert!(lon < 0.0 && lat > 0.0);
//! ```

use anyhow::{Context, Error, Result, ensure};
use std::{
	f64::consts::PI,
	fmt::{self, Debug, Display},
	str::FromStr,
};
use tilefence_derive::context;

/// The canonical id of a tile: zoom level plus column and row.
#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileCoord {
	pub level: u8,
	pub x: u32,
	pub y: u32,
}

impl TileCoord {
	/// Creates a tile coordinate, checking that `x` and `y` exist at `level`.
	pub fn new(level: u8, x: u32, y: u32) -> Result<TileCoord> {
		ensure!(level <= 31, "level ({level}) must be <= 31");
		let max = 1u64 << level;
		ensure!(u64::from(x) < max, "x ({x}) out of bounds for level {level}");
		ensure!(u64::from(y) < max, "y ({y}) out of bounds for level {level}");
		Ok(TileCoord { level, x, y })
	}

	/// Longitude and latitude (degrees) of the north-west corner of tile `x`/`y` at `level`.
	///
	/// `x` and `y` may be fractional, which addresses positions inside a tile.
	#[must_use]
	pub fn coord_to_geo(level: u8, x: f64, y: f64) -> [f64; 2] {
		let zoom = 2.0f64.powi(i32::from(level));
		[
			(x / zoom - 0.5) * 360.0,
			((PI * (1.0 - 2.0 * y / zoom)).exp().atan() / PI - 0.25) * 360.0,
		]
	}

	/// Longitude and latitude of this tile's north-west corner.
	#[must_use]
	pub fn as_geo(&self) -> [f64; 2] {
		TileCoord::coord_to_geo(self.level, f64::from(self.x), f64::from(self.y))
	}
}

impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileCoord({}, [{}, {}])", self.level, self.x, self.y)
	}
}

impl Display for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}/{}", self.level, self.x, self.y)
	}
}

impl FromStr for TileCoord {
	type Err = Error;

	/// Parses the `z/x/y` notation.
	#[context("while parsing tile coordinate '{}'", text)]
	fn from_str(text: &str) -> Result<TileCoord> {
		let parts = text.trim().split('/').collect::<Vec<_>>();
		ensure!(parts.len() == 3, "expected the format 'z/x/y'");
		let level = parts[0].parse::<u8>().context("invalid level")?;
		let x = parts[1].parse::<u32>().context("invalid x")?;
		let y = parts[2].parse::<u32>().context("invalid y")?;
		TileCoord::new(level, x, y)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rstest::rstest;

	#[test]
	fn new_checks_bounds() {
		assert!(TileCoord::new(0, 0, 0).is_ok());
		assert!(TileCoord::new(3, 7, 7).is_ok());
		assert_eq!(
			TileCoord::new(3, 8, 0).unwrap_err().to_string(),
			"x (8) out of bounds for level 3"
		);
		assert_eq!(
			TileCoord::new(3, 0, 8).unwrap_err().to_string(),
			"y (8) out of bounds for level 3"
		);
		assert_eq!(
			TileCoord::new(32, 0, 0).unwrap_err().to_string(),
			"level (32) must be <= 31"
		);
		assert!(TileCoord::new(31, u32::MAX >> 1, 0).is_ok());
	}

	#[test]
	fn world_corners() {
		let [lon, lat] = TileCoord::new(0, 0, 0).unwrap().as_geo();
		assert_relative_eq!(lon, -180.0);
		assert_relative_eq!(lat, 85.0511287798066, epsilon = 1e-9);

		let [lon, lat] = TileCoord::coord_to_geo(0, 1.0, 1.0);
		assert_relative_eq!(lon, 180.0);
		assert_relative_eq!(lat, -85.0511287798066, epsilon = 1e-9);

		let [lon, lat] = TileCoord::coord_to_geo(0, 0.5, 0.5);
		assert_relative_eq!(lon, 0.0);
		assert_relative_eq!(lat, 0.0, epsilon = 1e-9);
	}

	#[test]
	fn north_west_corner() {
		let [lon, lat] = TileCoord::new(10, 1, 1020).unwrap().as_geo();
		assert_eq!(format!("{lon:.5}"), "-179.64844");
		assert_eq!(format!("{lat:.5}"), "-84.92832");
	}

	#[rstest]
	#[case("0/0/0", 0, 0, 0)]
	#[case("14/8800/5373", 14, 8800, 5373)]
	#[case(" 3/1/2 ", 3, 1, 2)]
	fn parse(#[case] text: &str, #[case] level: u8, #[case] x: u32, #[case] y: u32) {
		assert_eq!(text.parse::<TileCoord>().unwrap(), TileCoord::new(level, x, y).unwrap());
	}

	#[rstest]
	#[case("1/2", "expected the format 'z/x/y'")]
	#[case("a/0/0", "invalid level")]
	#[case("1/0/-1", "invalid y")]
	#[case("1/2/0", "x (2) out of bounds for level 1")]
	fn parse_errors(#[case] text: &str, #[case] cause: &str) {
		let err = text.parse::<TileCoord>().unwrap_err();
		assert_eq!(err.to_string(), format!("while parsing tile coordinate '{text}'"));
		assert_eq!(err.chain().nth(1).unwrap().to_string(), cause);
	}

	#[test]
	fn display_and_debug() {
		let coord = TileCoord::new(5, 6, 7).unwrap();
		assert_eq!(coord.to_string(), "5/6/7");
		assert_eq!(format!("{coord:?}"), "TileCoord(5, [6, 7])");
	}
}
