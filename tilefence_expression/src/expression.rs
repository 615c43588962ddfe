use crate::{EvaluationContext, ParsingContext};
use anyhow::Result;
use std::fmt::Debug;
use tilefence_core::json::JsonValue;

/// A parsed expression node.
///
/// Nodes are immutable once built, so one node can be evaluated from several
/// threads at the same time.
pub trait Expression: Debug + Send + Sync {
	/// The operator name, e.g. `"within"`.
	fn operator(&self) -> &'static str;

	fn evaluate(&self, params: &EvaluationContext) -> Result<JsonValue>;

	/// The JSON form of this node; parsing it again yields an equal node.
	fn serialize(&self) -> JsonValue;
}

/// Builds expressions of one operator.
pub trait ExpressionFactoryTrait: Send + Sync {
	fn operator(&self) -> &'static str;

	/// Parses the complete expression array, operator name included.
	fn build(&self, value: &JsonValue, ctx: &mut ParsingContext) -> Result<Box<dyn Expression>>;
}
