//! Assertion helpers for rendered markup and serialized records.

use regex::Regex;
use webformkit_elements::SubmissionRecord;

/// Normalize line endings and trailing whitespace before exact comparison.
pub fn normalize_block(text: &str) -> String {
	text.replace("\r\n", "\n").trim_end().to_string()
}

/// The pattern a (label, value) pair must match in rendered markup: the
/// label element, then the value after nothing but whitespace.
pub fn label_value_pattern(label: &str, value: &str) -> Regex {
	let pattern = format!(
		r"<label[^>]*>{}</label>\s*{}",
		regex::escape(label),
		regex::escape(value)
	);
	// Both parts are escaped literals; the pattern always compiles.
	Regex::new(&pattern).unwrap_or_else(|e| panic!("bad label/value pattern: {e}"))
}

/// Whether the markup renders `value` under a `<label>` reading `label`.
///
/// # Examples
///
/// ```
/// use webformkit_test::assertions::has_label_value;
///
/// let markup = "<label for=\"edit-x\">Owner</label>\n1";
/// assert!(has_label_value(markup, "Owner", "1"));
/// assert!(!has_label_value(markup, "Owner", "2"));
/// ```
pub fn has_label_value(markup: &str, label: &str, value: &str) -> bool {
	label_value_pattern(label, value).is_match(markup)
}

/// Panic unless the markup renders `value` labeled `label`.
pub fn assert_label_value(markup: &str, label: &str, value: &str) {
	assert!(
		has_label_value(markup, label, value),
		"no <label>{label}</label> followed by '{value}' in:\n{markup}"
	);
}

/// Panic unless the record's serialized block equals `expected` byte for
/// byte (after line-ending normalization), printing a line diff.
pub fn assert_record_eq(record: &SubmissionRecord, expected: &str) {
	let actual = normalize_block(&record.to_yaml_block());
	let expected = normalize_block(expected);
	assert!(
		actual == expected,
		"submission record mismatch:\n{}",
		line_diff(&expected, &actual)
	);
}

/// A minimal line diff: shared lines unprefixed, expected-only lines
/// prefixed `-`, actual-only lines prefixed `+`.
pub fn line_diff(expected: &str, actual: &str) -> String {
	let expected: Vec<&str> = expected.lines().collect();
	let actual: Vec<&str> = actual.lines().collect();
	let mut out = Vec::new();
	let common = expected.len().min(actual.len());
	for i in 0..common {
		if expected[i] == actual[i] {
			out.push(format!("  {}", expected[i]));
		} else {
			out.push(format!("- {}", expected[i]));
			out.push(format!("+ {}", actual[i]));
		}
	}
	for line in &expected[common..] {
		out.push(format!("- {line}"));
	}
	for line in &actual[common..] {
		out.push(format!("+ {line}"));
	}
	out.join("\n")
}
