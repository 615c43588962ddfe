use super::parse_expression_arg;
use anyhow::Result;
use clap::{Args, ValueEnum};
use log::info;
use tilefence_core::TileCoord;
use tilefence_expression::EvaluationContext;
use tilefence_geometry::{FeatureType, TileFeature};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// expression as JSON, or @path to a file containing it
	#[arg(required = true)]
	expression: String,

	/// tile the points belong to, as z/x/y
	#[arg(long, short, required = true)]
	tile: TileCoord,

	/// size of the tile-local grid
	#[arg(long, short, default_value_t = TileFeature::DEFAULT_EXTENT)]
	extent: u32,

	/// geometry type of the feature
	#[arg(long = "type", value_enum, default_value_t = FeatureTypeArg::Point)]
	feature_type: FeatureTypeArg,

	/// evaluate every point as a separate feature and print one line per point
	#[arg(long)]
	each: bool,

	/// tile-local points as X,Y
	#[arg(required = true, allow_hyphen_values = true, value_parser = parse_point)]
	points: Vec<[i32; 2]>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FeatureTypeArg {
	Point,
	Linestring,
	Polygon,
}

impl From<FeatureTypeArg> for FeatureType {
	fn from(value: FeatureTypeArg) -> Self {
		match value {
			FeatureTypeArg::Point => FeatureType::Point,
			FeatureTypeArg::Linestring => FeatureType::LineString,
			FeatureTypeArg::Polygon => FeatureType::Polygon,
		}
	}
}

fn parse_point(text: &str) -> Result<[i32; 2], String> {
	let (x, y) = text
		.split_once(',')
		.ok_or_else(|| format!("expected X,Y but got '{text}'"))?;
	let parse = |value: &str| {
		value
			.trim()
			.parse::<i32>()
			.map_err(|e| format!("invalid coordinate '{value}': {e}"))
	};
	Ok([parse(x)?, parse(y)?])
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let expression = parse_expression_arg(&arguments.expression)?;
	let feature_type = FeatureType::from(arguments.feature_type);

	let features = if arguments.each {
		arguments
			.points
			.iter()
			.map(|point| TileFeature::new(feature_type, vec![vec![*point]]))
			.collect::<Vec<_>>()
	} else {
		vec![TileFeature::new(feature_type, vec![arguments.points.clone()])]
	};

	info!(
		"evaluating {} feature(s) on tile {}",
		features.len(),
		arguments.tile
	);

	for feature in features {
		let feature = feature.with_extent(arguments.extent);
		let params = EvaluationContext::new()
			.with_feature(&feature)
			.with_canonical(arguments.tile);
		println!("{}", expression.evaluate(&params)?.stringify());
	}
	Ok(())
}
