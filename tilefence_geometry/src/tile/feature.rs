use super::FeatureType;
use std::fmt::Debug;

/// Read access to one feature of a vector tile.
///
/// Coordinates are tile-local integers: `(0, 0)` is the north-west corner of
/// the tile and `(extent, extent)` the south-east corner. Points and vertices
/// are grouped into rings (point features usually have a single ring).
pub trait GeometryTileFeature: Debug + Send + Sync {
	fn feature_type(&self) -> FeatureType;
	fn geometries(&self) -> &[Vec<[i32; 2]>];
	fn extent(&self) -> u32;
}

/// A feature held in memory.
#[derive(Clone, Debug, PartialEq)]
pub struct TileFeature {
	pub feature_type: FeatureType,
	pub geometries: Vec<Vec<[i32; 2]>>,
	pub extent: u32,
}

impl TileFeature {
	pub const DEFAULT_EXTENT: u32 = 4096;

	#[must_use]
	pub fn new(feature_type: FeatureType, geometries: Vec<Vec<[i32; 2]>>) -> Self {
		TileFeature {
			feature_type,
			geometries,
			extent: Self::DEFAULT_EXTENT,
		}
	}

	/// A point feature with one ring holding all `points`.
	#[must_use]
	pub fn new_points(points: Vec<[i32; 2]>) -> Self {
		Self::new(FeatureType::Point, vec![points])
	}

	#[must_use]
	pub fn with_extent(mut self, extent: u32) -> Self {
		self.extent = extent;
		self
	}
}

impl GeometryTileFeature for TileFeature {
	fn feature_type(&self) -> FeatureType {
		self.feature_type
	}

	fn geometries(&self) -> &[Vec<[i32; 2]>] {
		&self.geometries
	}

	fn extent(&self) -> u32 {
		self.extent
	}
}
