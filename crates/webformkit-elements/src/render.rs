//! Shared markup helpers for form pages and submission views.

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(ch),
		}
	}
	escaped
}

/// Default human-readable rendering of a cleaned value.
pub fn display_value(value: &serde_json::Value) -> String {
	match value {
		serde_json::Value::String(s) => s.clone(),
		serde_json::Value::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
		serde_json::Value::Number(n) => n.to_string(),
		serde_json::Value::Null => String::new(),
		serde_json::Value::Array(items) => items
			.iter()
			.map(display_value)
			.collect::<Vec<_>>()
			.join(", "),
		serde_json::Value::Object(map) => map
			.iter()
			.map(|(k, v)| format!("{k}: {}", display_value(v)))
			.collect::<Vec<_>>()
			.join(", "),
	}
}

/// HTML id for the control at a field path: `edit-a-b` for `a[b]`.
pub fn control_id(path: &str) -> String {
	let flattened: String = path
		.chars()
		.map(|ch| match ch {
			'[' | ']' | '_' | '.' => '-',
			other => other,
		})
		.collect();
	let mut id = String::from("edit");
	for part in flattened.split('-').filter(|part| !part.is_empty()) {
		id.push('-');
		id.push_str(part);
	}
	id
}

/// Wrap body markup in the minimal page shell every route renders.
pub fn page(title: &str, body: &str) -> String {
	format!(
		"<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
		escape_html(title),
		body
	)
}

/// A labeled item: the `<label>` + content pattern both the form page and
/// the submission view use, and the shape the label/value assertions match.
pub fn labeled(id: &str, label: &str, content: &str) -> String {
	format!(
		"<div class=\"form-item\">\n<label for=\"{}\">{}</label>\n{}\n</div>",
		escape_html(id),
		escape_html(label),
		content
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_escape_html() {
		assert_eq!(escape_html("a<b&\"c\""), "a&lt;b&amp;&quot;c&quot;");
	}

	#[test]
	fn test_control_id() {
		assert_eq!(control_id("composite[textfield]"), "edit-composite-textfield");
		assert_eq!(control_id("checkbox_value_empty"), "edit-checkbox-value-empty");
	}

	#[test]
	fn test_display_value_shapes() {
		assert_eq!(display_value(&json!("x")), "x");
		assert_eq!(display_value(&json!(true)), "Yes");
		assert_eq!(display_value(&json!(["a", "b"])), "a, b");
		assert_eq!(display_value(&json!(null)), "");
	}
}
