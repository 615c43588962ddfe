//! Style expressions evaluated against vector tile features.
//!
//! An expression is written as a JSON array whose first element names the
//! operator. [`ParsingContext::parse_expression`] looks the operator up in an
//! [`ExpressionRegistry`] and builds the matching [`Expression`], collecting
//! readable [`ParsingError`]s on the way. Evaluation happens against an
//! [`EvaluationContext`] describing the current feature and tile.
//!
//! ```
//! use tilefence_core::{TileCoord, json::JsonValue};
//! use tilefence_expression::{EvaluationContext, ParsingContext};
//! use tilefence_geometry::TileFeature;
//!
//! let json = JsonValue::parse_str(
//! 	r#"["within", {"type": "Polygon", "coordinates": [[[-10, -10], [10, -10], [10, 10], [-10, 10], [-10, -10]]]}]"#,
//! )
//! .unwrap();
//! let expression = ParsingContext::new().parse_expression(&json).unwrap();
//!
//! let feature = TileFeature::new_points(vec![[2048, 2048]]);
//! let params = EvaluationContext::new()
//! 	.with_feature(&feature)
//! 	.with_canonical(TileCoord::new(0, 0, 0).unwrap());
//! assert_eq!(expression.evaluate(&params).unwrap(), JsonValue::Boolean(true));
//! ```

mod diagnostics;
mod evaluation_context;
mod expression;
mod parsing_context;
mod registry;
pub mod within;

pub use diagnostics::*;
pub use evaluation_context::*;
pub use expression::*;
pub use parsing_context::*;
pub use registry::*;
pub use within::Within;
