use super::{Coordinates, GeometryTrait, MultiPointGeometry, SingleGeometryTrait};
use std::fmt::Debug;
use tilefence_core::json::JsonValue;

/// A single position.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}

	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	fn to_coord_json(&self) -> JsonValue {
		self.0.to_json()
	}

	fn contains_point(&self, _x: f64, _y: f64) -> bool {
		false
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry(vec![self])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	#[test]
	fn accessors() {
		let point = PointGeometry::new(Coordinates::new(1.0, 2.0));
		assert_eq!(point.x(), 1.0);
		assert_eq!(point.y(), 2.0);
		assert_eq!(point.as_coord(), &Coordinates::new(1.0, 2.0));
		assert_eq!(PointGeometry::from(&[1, 2]), point);
	}

	#[test]
	fn has_no_interior() {
		let point = PointGeometry::from(&[5, 5]);
		assert!(!point.contains_point(5.0, 5.0));
	}

	#[test]
	fn into_multi() {
		let point = PointGeometry::from([1.5, 2.5]);
		let multi = point.clone().into_multi();
		assert_eq!(multi.len(), 1);
		assert_eq!(multi.first(), Some(&point));
		assert_eq!(format!("{point:?}"), "[1.5, 2.5]");
	}
}
