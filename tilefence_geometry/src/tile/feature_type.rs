/// Geometry type of a vector tile feature, numbered as in the vector tile format.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FeatureType {
	#[default]
	Unknown = 0,
	Point = 1,
	LineString = 2,
	Polygon = 3,
}

impl FeatureType {
	pub fn as_u64(self) -> u64 {
		self as u64
	}
}

impl From<u64> for FeatureType {
	fn from(value: u64) -> Self {
		match value {
			1 => FeatureType::Point,
			2 => FeatureType::LineString,
			3 => FeatureType::Polygon,
			_ => FeatureType::Unknown,
		}
	}
}
