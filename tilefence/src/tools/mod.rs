pub mod serialize;
pub mod within;

use anyhow::{Context, Result, bail};
use log::debug;
use std::fs;
use tilefence_core::json::JsonValue;
use tilefence_expression::{Expression, ParsingContext};

/// Reads and parses an expression given on the command line.
///
/// `@path` reads the expression from a file, anything else is taken as JSON.
/// Parse failures list every error that was recorded.
pub fn parse_expression_arg(argument: &str) -> Result<Box<dyn Expression>> {
	let text = match argument.strip_prefix('@') {
		Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read expression file '{path}'"))?,
		None => argument.to_string(),
	};
	let json = JsonValue::parse_str(&text)?;

	let mut ctx = ParsingContext::new();
	match ctx.parse_expression(&json) {
		Ok(expression) => {
			debug!("parsed expression {expression:?}");
			Ok(expression)
		}
		Err(_) => {
			let errors = ctx.errors().iter().map(ToString::to_string).collect::<Vec<_>>();
			bail!("failed to parse expression:\n{}", errors.join("\n"))
		}
	}
}
