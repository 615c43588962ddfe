use super::{CompositeGeometryTrait, GeometryTrait, PolygonGeometry};
use std::fmt::Debug;
use tilefence_core::json::JsonValue;

#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.0.iter().map(PolygonGeometry::to_coord_json).collect::<Vec<_>>())
	}

	fn contains_point(&self, x: f64, y: f64) -> bool {
		self.0.iter().any(|polygon| polygon.contains_point(x, y))
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	fn two_squares() -> MultiPolygonGeometry {
		MultiPolygonGeometry::from(&[
			[[[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]]],
			[[[10, 0], [14, 0], [14, 4], [10, 4], [10, 0]]],
		])
	}

	#[test]
	fn contains_point_in_any_member() {
		let polygons = two_squares();
		assert!(polygons.contains_point(2.0, 2.0));
		assert!(polygons.contains_point(12.0, 2.0));
		assert!(!polygons.contains_point(7.0, 2.0));
		assert!(!MultiPolygonGeometry::new().contains_point(2.0, 2.0));
	}

	#[test]
	fn coord_json() {
		assert_eq!(
			two_squares().to_coord_json().stringify(),
			"[[[[0,0],[4,0],[4,4],[0,4],[0,0]]],[[[10,0],[14,0],[14,4],[10,4],[10,0]]]]"
		);
	}
}
