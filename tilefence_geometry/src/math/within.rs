use super::point_in_polygon;
use crate::{Geometry, PolygonGeometry};

/// Whether `candidate` lies within `polygon`.
///
/// A point must be inside the polygon, a multi-point needs every one of its
/// points inside. An empty multi-point is never within anything. Lines and
/// areas are not supported as candidates and always give `false`.
#[must_use]
pub fn geometry_within_polygon(candidate: &Geometry, polygon: &PolygonGeometry) -> bool {
	match candidate {
		Geometry::Point(point) => point_in_polygon(point.as_coord(), polygon),
		Geometry::MultiPoint(points) => {
			!points.0.is_empty() && points.0.iter().all(|point| point_in_polygon(point.as_coord(), polygon))
		}
		Geometry::LineString(_) | Geometry::MultiLineString(_) | Geometry::Polygon(_) | Geometry::MultiPolygon(_) => {
			false
		}
	}
}
