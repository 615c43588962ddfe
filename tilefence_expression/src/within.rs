//! The `within` expression: `["within", <GeoJSON polygon>]`.
//!
//! Evaluates to `true` if the current feature lies inside the polygon. Only
//! point features are supported; every point of a multi-point feature has to
//! be inside.

use crate::{EvaluationContext, Expression, ExpressionFactoryTrait, ParsingContext};
use anyhow::Result;
use log::{debug, trace};
use tilefence_core::json::JsonValue;
use tilefence_geometry::{
	FeatureType, Geometry, PolygonGeometry, convert_geometry, math::geometry_within_polygon, parse_geojson_geometry,
};

const OPERATOR: &str = "within";
const POLYGON_REQUIRED: &str = "'within' expression requires valid geojson source that contains polygon geometry type.";
const POINTS_ONLY: &str = "'within' expression currently only supports 'Point' geometry type";

#[derive(Clone, Debug, PartialEq)]
pub struct Within {
	polygon: PolygonGeometry,
}

impl Within {
	#[must_use]
	pub fn new(polygon: PolygonGeometry) -> Self {
		Within { polygon }
	}

	#[must_use]
	pub fn polygon(&self) -> &PolygonGeometry {
		&self.polygon
	}

	/// Parses `["within", geometry]`.
	///
	/// `geometry` is a GeoJSON `Polygon` object, or a string holding one as
	/// JSON text (the form [`serialize`](Expression::serialize) writes). Every
	/// problem is recorded in `ctx` and returned as the error. The operator
	/// name is not checked again, the registry dispatched on it already.
	pub fn parse(value: &JsonValue, ctx: &mut ParsingContext) -> Result<Within> {
		let JsonValue::Array(array) = value else {
			return Err(ctx.error(format!(
				"'within' expression must be an array, but found a {}",
				value.type_as_str()
			)));
		};
		let args = array.as_vec();
		if args.len() != 2 {
			return Err(ctx.error(format!(
				"'within' expression requires exactly one argument, but found {} instead.",
				args.len().saturating_sub(1)
			)));
		}

		let decoded;
		let geojson = match &args[1] {
			JsonValue::String(text) => match JsonValue::parse_str(text) {
				Ok(json) => {
					decoded = json;
					&decoded
				}
				Err(err) => {
					debug!("geojson text of 'within' expression is not valid JSON: {err:#}");
					return Err(ctx.error(POLYGON_REQUIRED));
				}
			},
			json => json,
		};

		let is_polygon = geojson
			.as_object()
			.ok()
			.and_then(|object| object.get_str("type").ok().flatten())
			== Some("Polygon");
		if !is_polygon {
			return Err(ctx.error(POLYGON_REQUIRED));
		}

		match parse_geojson_geometry(geojson) {
			Ok(Geometry::Polygon(polygon)) => Ok(Within { polygon }),
			Ok(_) => Err(ctx.error(POLYGON_REQUIRED)),
			Err(err) => Err(ctx.error(err.to_string())),
		}
	}

	/// Whether the feature in `params` lies inside the polygon.
	///
	/// `false` if the feature or the tile is missing. Features that are not
	/// points also give `false`, after a notice to `params.diagnostics`.
	pub fn contains(&self, params: &EvaluationContext) -> bool {
		let (Some(feature), Some(canonical)) = (params.feature, params.canonical) else {
			trace!("'within' evaluated without feature or tile");
			return false;
		};
		if feature.feature_type() != FeatureType::Point {
			params.diagnostics.warn(POINTS_ONLY);
			return false;
		}
		geometry_within_polygon(&convert_geometry(feature, &canonical), &self.polygon)
	}
}

impl Expression for Within {
	fn operator(&self) -> &'static str {
		OPERATOR
	}

	fn evaluate(&self, params: &EvaluationContext) -> Result<JsonValue> {
		Ok(JsonValue::Boolean(self.contains(params)))
	}

	fn serialize(&self) -> JsonValue {
		let geojson = Geometry::Polygon(self.polygon.clone()).stringify();
		JsonValue::from(vec![JsonValue::from(OPERATOR), JsonValue::from(geojson)])
	}
}

pub struct Factory {}

impl ExpressionFactoryTrait for Factory {
	fn operator(&self) -> &'static str {
		OPERATOR
	}

	fn build(&self, value: &JsonValue, ctx: &mut ParsingContext) -> Result<Box<dyn Expression>> {
		Ok(Box::new(Within::parse(value, ctx)?))
	}
}
