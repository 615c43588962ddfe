use super::JsonValue;

/// Compact JSON text for `json`.
///
/// Numbers use Rust's shortest round-trip formatting, so integral values are
/// written without a fraction (`4`, not `4.0`). Non-finite numbers have no
/// JSON form and are written as `null`.
pub fn stringify(json: &JsonValue) -> String {
	match json {
		JsonValue::String(text) => format!("\"{}\"", escape_json_string(text)),
		JsonValue::Number(number) if number.is_finite() => number.to_string(),
		JsonValue::Number(_) | JsonValue::Null => String::from("null"),
		JsonValue::Boolean(value) => value.to_string(),
		JsonValue::Array(array) => array.stringify(),
		JsonValue::Object(object) => object.stringify(),
	}
}

pub fn escape_json_string(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'"' => output.push_str("\\\""),
			'\\' => output.push_str("\\\\"),
			'\n' => output.push_str("\\n"),
			'\r' => output.push_str("\\r"),
			'\t' => output.push_str("\\t"),
			'\u{08}' => output.push_str("\\b"),
			'\u{0c}' => output.push_str("\\f"),
			c if c.is_control() => output.push_str(&format!("\\u{:04x}", c as u32)),
			c => output.push(c),
		}
	}
	output
}
