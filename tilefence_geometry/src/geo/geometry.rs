use super::*;
use std::fmt::Debug;
use tilefence_core::json::{JsonObject, JsonValue};

/// Any of the six GeoJSON geometry types.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	/// The GeoJSON type name, e.g. `"MultiPoint"`.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			Geometry::MultiPoint(_) | Geometry::MultiLineString(_) | Geometry::MultiPolygon(_) => self,
		}
	}

	#[must_use]
	pub fn to_coord_json(&self) -> JsonValue {
		match self {
			Geometry::Point(g) => g.to_coord_json(),
			Geometry::LineString(g) => g.to_coord_json(),
			Geometry::Polygon(g) => g.to_coord_json(),
			Geometry::MultiPoint(g) => g.to_coord_json(),
			Geometry::MultiLineString(g) => g.to_coord_json(),
			Geometry::MultiPolygon(g) => g.to_coord_json(),
		}
	}

	/// The GeoJSON geometry object: `{"coordinates": [...], "type": "..."}`.
	#[must_use]
	pub fn to_geojson(&self) -> JsonObject {
		let mut object = JsonObject::new();
		object.set("type", self.type_name());
		object.set("coordinates", self.to_coord_json());
		object
	}

	/// Compact GeoJSON text with sorted keys, so equal geometries give equal text.
	#[must_use]
	pub fn stringify(&self) -> String {
		self.to_geojson().stringify()
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

macro_rules! impl_from_geometry {
	($($variant:ident: $t:ty),*) => {$(
		impl From<$t> for Geometry {
			fn from(geometry: $t) -> Self {
				Geometry::$variant(geometry)
			}
		}
	)*}
}

impl_from_geometry!(
	Point: PointGeometry,
	LineString: LineStringGeometry,
	Polygon: PolygonGeometry,
	MultiPoint: MultiPointGeometry,
	MultiLineString: MultiLineStringGeometry,
	MultiPolygon: MultiPolygonGeometry
);

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn stringify_polygon() {
		let geometry = Geometry::from(PolygonGeometry::from(&[[[0, 0], [4, 0], [4, 4], [0, 0]]]));
		assert_eq!(
			geometry.stringify(),
			r#"{"coordinates":[[[0,0],[4,0],[4,4],[0,0]]],"type":"Polygon"}"#
		);
	}

	#[test]
	fn stringify_point_keeps_fractions() {
		let geometry = Geometry::from(PointGeometry::from([-0.5, 51.25]));
		assert_eq!(geometry.stringify(), r#"{"coordinates":[-0.5,51.25],"type":"Point"}"#);
	}

	#[test]
	fn into_multi() {
		let point = Geometry::from(PointGeometry::from(&[1, 2]));
		assert_eq!(point.type_name(), "Point");
		let multi = point.into_multi();
		assert_eq!(multi.type_name(), "MultiPoint");
		assert_eq!(multi.clone().into_multi(), multi);
	}

	#[test]
	fn stringify_line() {
		let geometry = Geometry::from(LineStringGeometry::from(&[[0, 0], [1, 1]]));
		assert_eq!(geometry.stringify(), r#"{"coordinates":[[0,0],[1,1]],"type":"LineString"}"#);
	}

	#[test]
	fn debug_names_the_type() {
		let geometry = Geometry::from(MultiPointGeometry::from(&[[1, 2]]));
		assert_eq!(format!("{geometry:?}"), "MultiPoint([[1.0, 2.0]])");
	}
}
