use crate::{Expression, ExpressionRegistry};
use anyhow::{Error, Result, anyhow};
use log::debug;
use std::{cell::RefCell, fmt, rc::Rc};
use tilefence_core::json::JsonValue;

/// One problem found while parsing, located by a key path like `[1][0]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsingError {
	pub key: String,
	pub message: String,
}

impl fmt::Display for ParsingError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.key.is_empty() {
			write!(f, "{}", self.message)
		} else {
			write!(f, "{}: {}", self.key, self.message)
		}
	}
}

/// State of one parse: where in the expression we are and what went wrong so far.
///
/// Child contexts created with [`child`](Self::child) share the error list with
/// their parent, so all errors of a parse end up in the root context.
pub struct ParsingContext {
	key: String,
	errors: Rc<RefCell<Vec<ParsingError>>>,
	registry: Rc<ExpressionRegistry>,
}

impl ParsingContext {
	/// A root context using the built-in operators.
	#[must_use]
	pub fn new() -> Self {
		Self::with_registry(ExpressionRegistry::new_default())
	}

	#[must_use]
	pub fn with_registry(registry: ExpressionRegistry) -> Self {
		ParsingContext {
			key: String::new(),
			errors: Rc::new(RefCell::new(Vec::new())),
			registry: Rc::new(registry),
		}
	}

	/// A context for the element at `index` of the current expression.
	#[must_use]
	pub fn child(&self, index: usize) -> ParsingContext {
		ParsingContext {
			key: format!("{}[{index}]", self.key),
			errors: Rc::clone(&self.errors),
			registry: Rc::clone(&self.registry),
		}
	}

	#[must_use]
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Records `message` at the current key and returns it as an error,
	/// so callers can write `return Err(ctx.error(...))`.
	pub fn error(&mut self, message: impl Into<String>) -> Error {
		let error = ParsingError {
			key: self.key.clone(),
			message: message.into(),
		};
		debug!("parsing error: {error}");
		let result = anyhow!("{error}");
		self.errors.borrow_mut().push(error);
		result
	}

	#[must_use]
	pub fn errors(&self) -> Vec<ParsingError> {
		self.errors.borrow().clone()
	}

	#[must_use]
	pub fn has_errors(&self) -> bool {
		!self.errors.borrow().is_empty()
	}

	/// Parses an expression array, dispatching on its operator name.
	pub fn parse_expression(&mut self, value: &JsonValue) -> Result<Box<dyn Expression>> {
		let JsonValue::Array(array) = value else {
			return Err(self.error(format!(
				"expression must be an array, but found a {} instead",
				value.type_as_str()
			)));
		};
		let Some(first) = array.as_vec().first() else {
			return Err(self.error("expected an array with at least one element"));
		};
		let JsonValue::String(operator) = first else {
			return Err(self.child(0).error(format!(
				"expression name must be a string, but found a {} instead",
				first.type_as_str()
			)));
		};

		let registry = Rc::clone(&self.registry);
		let Some(factory) = registry.get(operator) else {
			return Err(self.child(0).error(format!("unknown expression '{operator}'")));
		};
		factory.build(value, self)
	}
}

impl Default for ParsingContext {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn parse(json: &str) -> (Result<Box<dyn Expression>>, Vec<ParsingError>) {
		let mut ctx = ParsingContext::new();
		let result = ctx.parse_expression(&JsonValue::parse_str(json).unwrap());
		(result, ctx.errors())
	}

	#[test]
	fn dispatches_to_within() {
		let (result, errors) =
			parse(r#"["within", {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}]"#);
		assert_eq!(result.unwrap().operator(), "within");
		assert!(errors.is_empty());
	}

	#[rstest]
	#[case("{}", "", "expression must be an array, but found a object instead")]
	#[case("[]", "", "expected an array with at least one element")]
	#[case("[1, 2]", "[0]", "expression name must be a string, but found a number instead")]
	#[case(r#"["contains", 1]"#, "[0]", "unknown expression 'contains'")]
	fn dispatch_errors(#[case] json: &str, #[case] key: &str, #[case] message: &str) {
		let (result, errors) = parse(json);
		let expected = ParsingError {
			key: key.to_string(),
			message: message.to_string(),
		};
		assert_eq!(result.unwrap_err().to_string(), expected.to_string());
		assert_eq!(errors, vec![expected]);
	}

	#[test]
	fn children_share_errors() {
		let mut ctx = ParsingContext::new();
		let mut child = ctx.child(1);
		assert_eq!(child.key(), "[1]");
		assert_eq!(child.child(0).key(), "[1][0]");

		let _ = child.error("inner problem");
		let _ = ctx.error("outer problem");
		assert!(ctx.has_errors());
		assert_eq!(
			ctx.errors().iter().map(ToString::to_string).collect::<Vec<_>>(),
			vec!["[1]: inner problem", "outer problem"]
		);
	}

	#[test]
	fn empty_registry_knows_nothing() {
		let mut ctx = ParsingContext::with_registry(ExpressionRegistry::new_empty());
		let err = ctx.parse_expression(&JsonValue::parse_str(r#"["within"]"#).unwrap()).unwrap_err();
		assert_eq!(err.to_string(), "[0]: unknown expression 'within'");
	}
}
