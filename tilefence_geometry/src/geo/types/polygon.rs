use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, MultiPolygonGeometry, RingGeometry, SingleGeometryTrait};
use crate::math::point_in_polygon;
use std::fmt::Debug;
use tilefence_core::json::JsonValue;

/// An outer ring followed by optional inner rings.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl GeometryTrait for PolygonGeometry {
	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.0.iter().map(RingGeometry::to_coord_json).collect::<Vec<_>>())
	}

	/// True if any ring winds around the point; inner rings add area instead of cutting holes.
	fn contains_point(&self, x: f64, y: f64) -> bool {
		point_in_polygon(&Coordinates::new(x, y), self)
	}
}

impl SingleGeometryTrait<MultiPolygonGeometry> for PolygonGeometry {
	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![self])
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	fn with_hole() -> PolygonGeometry {
		PolygonGeometry::from(&[
			[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
			[[2, 2], [2, 8], [8, 8], [8, 2], [2, 2]],
		])
	}

	#[test]
	fn empty_polygon_contains_nothing() {
		assert!(!PolygonGeometry::new().contains_point(0.0, 0.0));
	}

	#[test]
	fn inner_rings_do_not_cut_holes() {
		let polygon = with_hole();
		assert!(polygon.contains_point(1.0, 1.0));
		assert!(polygon.contains_point(5.0, 5.0));
		assert!(!polygon.contains_point(11.0, 5.0));
	}

	#[test]
	fn into_first_and_rest() {
		let (outer, inner) = with_hole().into_first_and_rest().unwrap();
		assert_eq!(outer.len(), 5);
		assert_eq!(inner.len(), 1);
	}
}
