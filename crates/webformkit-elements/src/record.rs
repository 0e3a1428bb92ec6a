//! Serialized submission records and their YAML-style block form.
//!
//! The record is an ordered key/value tree. Maps indent by two spaces per
//! level; sequence items sit two spaces deeper than their key, prefixed with
//! `- `. Strings are single-quoted when they would otherwise be ambiguous
//! (empty, numeric-looking, containing `: `, or starting with a character
//! YAML reserves), and bare otherwise:
//!
//! ```text
//! webform_element_attributes:
//!   class:
//!     - one
//!     - two
//!   style: 'color: red'
//!   custom: test
//! ```

/// One value in a submission record. Maps preserve insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
	Scalar(serde_json::Value),
	List(Vec<RecordValue>),
	Map(Vec<(String, RecordValue)>),
}

impl RecordValue {
	/// Convert a cleaned element value. JSON objects come out in the map's
	/// iteration order, which is why elements with an order-sensitive record
	/// shape build a [`RecordValue::Map`] directly instead.
	pub fn from_json(value: &serde_json::Value) -> Self {
		match value {
			serde_json::Value::Array(items) => {
				RecordValue::List(items.iter().map(RecordValue::from_json).collect())
			}
			serde_json::Value::Object(map) => RecordValue::Map(
				map.iter()
					.map(|(k, v)| (k.clone(), RecordValue::from_json(v)))
					.collect(),
			),
			scalar => RecordValue::Scalar(scalar.clone()),
		}
	}

	fn is_empty_container(&self) -> bool {
		match self {
			RecordValue::List(items) => items.is_empty(),
			RecordValue::Map(entries) => entries.is_empty(),
			RecordValue::Scalar(_) => false,
		}
	}
}

/// The serialized representation of values captured from one submission.
///
/// # Examples
///
/// ```
/// use webformkit_elements::{RecordValue, SubmissionRecord};
/// use serde_json::json;
///
/// let mut record = SubmissionRecord::new();
/// record.insert("name", RecordValue::Scalar(json!("test")));
/// record.insert("id", RecordValue::Scalar(json!("1")));
/// assert_eq!(record.to_yaml_block(), "name: test\nid: '1'");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionRecord {
	entries: Vec<(String, RecordValue)>,
}

impl SubmissionRecord {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, key: impl Into<String>, value: RecordValue) {
		self.entries.push((key.into(), value));
	}

	pub fn get(&self, key: &str) -> Option<&RecordValue> {
		self.entries
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v)
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn entries(&self) -> &[(String, RecordValue)] {
		&self.entries
	}

	/// Render the record as its YAML-style block, without a trailing
	/// newline.
	pub fn to_yaml_block(&self) -> String {
		let mut lines = Vec::new();
		write_map(&self.entries, 0, &mut lines);
		lines.join("\n")
	}
}

fn write_map(entries: &[(String, RecordValue)], depth: usize, lines: &mut Vec<String>) {
	let pad = "  ".repeat(depth);
	for (key, value) in entries {
		match value {
			RecordValue::Scalar(scalar) => {
				lines.push(format!("{pad}{key}: {}", scalar_text(scalar)));
			}
			_ if value.is_empty_container() => {
				lines.push(format!("{pad}{key}: {{  }}"));
			}
			RecordValue::Map(nested) => {
				lines.push(format!("{pad}{key}:"));
				write_map(nested, depth + 1, lines);
			}
			RecordValue::List(items) => {
				lines.push(format!("{pad}{key}:"));
				write_list(items, depth + 1, lines);
			}
		}
	}
}

fn write_list(items: &[RecordValue], depth: usize, lines: &mut Vec<String>) {
	let pad = "  ".repeat(depth);
	for item in items {
		match item {
			RecordValue::Scalar(scalar) => {
				lines.push(format!("{pad}- {}", scalar_text(scalar)));
			}
			RecordValue::Map(nested) => {
				lines.push(format!("{pad}-"));
				write_map(nested, depth + 1, lines);
			}
			RecordValue::List(nested) => {
				lines.push(format!("{pad}-"));
				write_list(nested, depth + 1, lines);
			}
		}
	}
}

fn scalar_text(value: &serde_json::Value) -> String {
	match value {
		serde_json::Value::String(s) => string_text(s),
		serde_json::Value::Bool(b) => b.to_string(),
		serde_json::Value::Number(n) => n.to_string(),
		serde_json::Value::Null => "null".to_string(),
		// Containers never reach here; write_map/write_list handle them.
		other => other.to_string(),
	}
}

fn string_text(s: &str) -> String {
	if needs_quoting(s) {
		format!("'{}'", s.replace('\'', "''"))
	} else {
		s.to_string()
	}
}

/// Whether a bare string scalar would parse as something other than itself.
fn needs_quoting(s: &str) -> bool {
	if s.is_empty() {
		return true;
	}
	if s.parse::<i64>().is_ok() || s.parse::<f64>().is_ok() {
		return true;
	}
	if matches!(
		s.to_ascii_lowercase().as_str(),
		"true" | "false" | "null" | "~" | "yes" | "no" | "on" | "off"
	) {
		return true;
	}
	// Alternate number spellings YAML resolves but Rust's parsers do not.
	let unsigned = s.trim_start_matches(['+', '-']);
	if unsigned.len() > 2
		&& (unsigned.starts_with("0x")
			|| unsigned.starts_with("0X")
			|| unsigned.starts_with("0o")
			|| unsigned.starts_with("0b"))
	{
		return true;
	}
	if matches!(
		unsigned.to_ascii_lowercase().as_str(),
		".inf" | ".nan" | "inf" | "nan"
	) {
		return true;
	}
	if s.contains(": ") || s.ends_with(':') {
		return true;
	}
	if s.contains(" #") {
		return true;
	}
	let first = s.chars().next().unwrap_or(' ');
	if matches!(
		first,
		'{' | '[' | '}' | ']' | '\'' | '"' | '&' | '*' | '!' | '|' | '>' | '%' | '@' | '`' | '-'
			| '?' | ',' | '#'
	) {
		return true;
	}
	s.starts_with(' ') || s.ends_with(' ')
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_bare_and_quoted_scalars() {
		assert_eq!(string_text("test"), "test");
		assert_eq!(string_text("Four"), "Four");
		assert_eq!(string_text(""), "''");
		assert_eq!(string_text("1"), "'1'");
		assert_eq!(string_text("color: red"), "'color: red'");
		assert_eq!(string_text("{default_value}"), "'{default_value}'");
		assert_eq!(string_text("it's"), "it's");
		assert_eq!(string_text("'quoted'"), "'''quoted'''");
	}

	#[test]
	fn test_nested_map_with_list() {
		let mut record = SubmissionRecord::new();
		record.insert(
			"webform_element_attributes",
			RecordValue::Map(vec![
				(
					"class".to_string(),
					RecordValue::List(vec![
						RecordValue::Scalar(json!("one")),
						RecordValue::Scalar(json!("two")),
						RecordValue::Scalar(json!("four")),
					]),
				),
				("style".to_string(), RecordValue::Scalar(json!("color: red"))),
				("custom".to_string(), RecordValue::Scalar(json!("test"))),
			]),
		);
		assert_eq!(
			record.to_yaml_block(),
			"webform_element_attributes:\n  class:\n    - one\n    - two\n    - four\n  style: 'color: red'\n  custom: test"
		);
	}

	#[test]
	fn test_list_entry_indentation() {
		let mut record = SubmissionRecord::new();
		record.insert(
			"entity_checkboxes",
			RecordValue::List(vec![RecordValue::Scalar(json!("1"))]),
		);
		assert_eq!(record.to_yaml_block(), "entity_checkboxes:\n  - '1'");
	}

	#[test]
	fn test_block_parses_as_yaml() {
		let mut record = SubmissionRecord::new();
		record.insert("checkbox_value_empty", RecordValue::Scalar(json!("")));
		record.insert(
			"checkbox_value_filled",
			RecordValue::Scalar(json!("{default_value}")),
		);
		record.insert(
			"checkbox_value_select_other",
			RecordValue::Scalar(json!("Four")),
		);
		let parsed: serde_yaml::Value =
			serde_yaml::from_str(&record.to_yaml_block()).expect("block should be valid YAML");
		assert_eq!(
			parsed["checkbox_value_filled"],
			serde_yaml::Value::String("{default_value}".to_string())
		);
		assert_eq!(
			parsed["checkbox_value_empty"],
			serde_yaml::Value::String(String::new())
		);
	}
}
