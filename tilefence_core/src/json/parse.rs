use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string, parse_tag,
};
use anyhow::{Context, Result};
use std::collections::BTreeMap;

/// Parses a complete JSON document. Anything but whitespace after the value is an error.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_str(json, true);
	let value = parse_json_iter(&mut iter).with_context(|| format!("while parsing JSON '{json}'"))?;
	iter.skip_whitespace();
	if !iter.is_at_end() {
		return Err(iter.format_error("unexpected trailing characters")).with_context(|| format!("while parsing JSON '{json}'"));
	}
	Ok(value)
}

/// Deepest nesting of arrays and objects accepted by [`parse_json_iter`].
pub const MAX_DEPTH: usize = 128;

/// Parses one JSON value starting at the current position.
///
/// Fails on numbers outside the `f64` range and on documents nested deeper
/// than [`MAX_DEPTH`].
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	parse_json_value(iter, 0)
}

fn parse_json_value(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	iter.skip_whitespace();
	let next = iter.expect_peeked_byte()?;
	if matches!(next, b'[' | b'{') && depth >= MAX_DEPTH {
		return Err(iter.format_error(&format!("nesting deeper than {MAX_DEPTH} levels")));
	}
	match next {
		b'[' => parse_array_entries(iter, |iter2| parse_json_value(iter2, depth + 1))
			.map(|items| JsonValue::Array(JsonArray(items))),
		b'{' => parse_json_object(iter, depth + 1),
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'-' => parse_json_number(iter),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_json_number(iter: &mut ByteIterator) -> Result<JsonValue> {
	let number = parse_number_as::<f64>(iter)?;
	if !number.is_finite() {
		return Err(iter.format_error("number out of range"));
	}
	Ok(JsonValue::Number(number))
}

fn parse_json_object(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	let mut entries = BTreeMap::new();
	parse_object_entries(iter, |key, iter2| {
		entries.insert(key, parse_json_value(iter2, depth)?);
		Ok(())
	})?;
	Ok(JsonValue::Object(JsonObject(entries)))
}
