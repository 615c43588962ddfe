use crate::{
	Coordinates, Geometry, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry,
	PointGeometry, PolygonGeometry, RingGeometry,
};
use anyhow::{Result, bail, ensure};
use log::trace;
use tilefence_core::json::{JsonValue, parse_json_str};

/// Parses GeoJSON text holding a single geometry object.
pub fn parse_geojson_geometry_str(json: &str) -> Result<Geometry> {
	parse_geojson_geometry(&parse_json_str(json)?)
}

/// Reads a GeoJSON geometry object such as `{"type": "Point", "coordinates": [1, 2]}`.
///
/// Only the structure is checked: `coordinates` must be nested as deep as the
/// type requires and every position must hold at least two finite numbers
/// (further dimensions are dropped). Ring closure and orientation are not validated.
pub fn parse_geojson_geometry(json: &JsonValue) -> Result<Geometry> {
	let object = json.as_object()?;
	let Some(geometry_type) = object.get_str("type")? else {
		bail!("geometry must have a type");
	};
	let Some(coordinates) = object.get("coordinates") else {
		bail!("geometry must have coordinates");
	};
	trace!("parsing GeoJSON geometry of type '{geometry_type}'");

	Ok(match geometry_type {
		"Point" => Geometry::Point(PointGeometry(parse_position(coordinates)?)),
		"LineString" => Geometry::LineString(LineStringGeometry(parse_positions(coordinates)?)),
		"Polygon" => Geometry::Polygon(parse_polygon(coordinates)?),
		"MultiPoint" => Geometry::MultiPoint(MultiPointGeometry(
			parse_positions(coordinates)?.into_iter().map(PointGeometry).collect(),
		)),
		"MultiLineString" => Geometry::MultiLineString(MultiLineStringGeometry(parse_list(
			coordinates,
			|value| parse_positions(value).map(LineStringGeometry),
		)?)),
		"MultiPolygon" => Geometry::MultiPolygon(MultiPolygonGeometry(parse_list(coordinates, parse_polygon)?)),
		_ => bail!("unknown geometry type '{geometry_type}'"),
	})
}

fn parse_list<T>(json: &JsonValue, parse_item: impl Fn(&JsonValue) -> Result<T>) -> Result<Vec<T>> {
	json.as_array()?.iter().map(parse_item).collect()
}

fn parse_position(json: &JsonValue) -> Result<Coordinates> {
	let numbers = json.as_array()?.as_number_vec()?;
	ensure!(numbers.len() >= 2, "position must have at least two numbers");
	ensure!(
		numbers[0].is_finite() && numbers[1].is_finite(),
		"position must have finite numbers"
	);
	Ok(Coordinates::new(numbers[0], numbers[1]))
}

fn parse_positions(json: &JsonValue) -> Result<Vec<Coordinates>> {
	parse_list(json, parse_position)
}

fn parse_polygon(json: &JsonValue) -> Result<PolygonGeometry> {
	parse_list(json, |ring| parse_positions(ring).map(RingGeometry)).map(PolygonGeometry)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use tilefence_core::json::JsonObject;

	#[test]
	fn polygon() {
		let geometry =
			parse_geojson_geometry_str(r#"{"type":"Polygon","coordinates":[[[0,0],[4,0],[4,4],[0,4],[0,0]]]}"#).unwrap();
		assert_eq!(
			geometry,
			Geometry::Polygon(PolygonGeometry::from(&[[[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]]]))
		);
	}

	#[rstest]
	#[case(r#"{"coordinates":[1.5,-2],"type":"Point"}"#)]
	#[case(r#"{"coordinates":[[0,0],[1,1]],"type":"LineString"}"#)]
	#[case(r#"{"coordinates":[[0,0],[1,1]],"type":"MultiPoint"}"#)]
	#[case(r#"{"coordinates":[[[0,0],[1,1]],[[2,2],[3,3]]],"type":"MultiLineString"}"#)]
	#[case(r#"{"coordinates":[[[[0,0],[1,0],[1,1],[0,0]]],[[[5,5],[6,5],[6,6],[5,5]]]],"type":"MultiPolygon"}"#)]
	#[case(r#"{"coordinates":[[[0,0],[4,0],[4,4],[0,0]],[[1,1],[2,1],[2,2],[1,1]]],"type":"Polygon"}"#)]
	fn canonical_text_is_stable(#[case] text: &str) {
		assert_eq!(parse_geojson_geometry_str(text).unwrap().stringify(), text);
	}

	#[test]
	fn extra_members_and_dimensions_are_ignored() {
		let geometry =
			parse_geojson_geometry_str(r#"{"bbox":[0,0,1,1],"type":"Point","coordinates":[1,2,300]}"#).unwrap();
		assert_eq!(geometry, Geometry::Point(PointGeometry::from(&[1, 2])));
	}

	#[test]
	fn rings_are_not_closed_by_the_reader() {
		let geometry = parse_geojson_geometry_str(r#"{"type":"Polygon","coordinates":[[[0,0],[4,0],[4,4]]]}"#).unwrap();
		let Geometry::Polygon(polygon) = geometry else {
			panic!("expected a polygon");
		};
		assert_eq!(polygon.first().map(RingGeometry::len), Some(3));
	}

	#[rstest]
	#[case(r#"{"coordinates":[0,0]}"#, "geometry must have a type")]
	#[case(r#"{"type":"Point"}"#, "geometry must have coordinates")]
	#[case(r#"{"type":"Circle","coordinates":[0,0]}"#, "unknown geometry type 'Circle'")]
	#[case(r#"{"type":"Point","coordinates":[0]}"#, "position must have at least two numbers")]
	#[case(r#"{"type":"Point","coordinates":[[0,0]]}"#, "expected a number, found a array")]
	#[case(r#"{"type":"Polygon","coordinates":[[0,0],[1,1]]}"#, "expected an array, found a number")]
	#[case(r#"{"type":7,"coordinates":[0,0]}"#, "expected a string, found a number")]
	#[case(r#"["Point",[0,0]]"#, "expected an object, found a array")]
	fn errors(#[case] text: &str, #[case] message: &str) {
		assert_eq!(parse_geojson_geometry_str(text).unwrap_err().to_string(), message);
	}

	#[rstest]
	#[case(f64::INFINITY, 0.0)]
	#[case(0.0, f64::NEG_INFINITY)]
	#[case(f64::NAN, 0.0)]
	fn non_finite_positions(#[case] x: f64, #[case] y: f64) {
		let mut object = JsonObject::new();
		object.set("type", "Point");
		object.set("coordinates", JsonValue::from(vec![x, y]));
		assert_eq!(
			parse_geojson_geometry(&JsonValue::Object(object)).unwrap_err().to_string(),
			"position must have finite numbers"
		);
	}
}
