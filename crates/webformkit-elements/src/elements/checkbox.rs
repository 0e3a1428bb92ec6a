//! Boolean checkbox element.

use crate::element::{ElementError, ElementResult, SubmissionContext, WebformElement};
use crate::render::escape_html;

/// A single checkbox storing `true`/`false`.
#[derive(Debug, Clone)]
pub struct Checkbox {
	name: String,
	title: String,
	default_checked: bool,
}

impl Checkbox {
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			title: name.clone(),
			name,
			default_checked: false,
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	pub fn checked(mut self) -> Self {
		self.default_checked = true;
		self
	}
}

/// Interpret a submitted checkbox value. Browsers post `on`/`1`, test input
/// tends to post `true`; all truthy spellings collapse to `true`.
pub(crate) fn checkbox_state(value: &serde_json::Value) -> ElementResult<bool> {
	match value {
		serde_json::Value::Bool(b) => Ok(*b),
		serde_json::Value::Null => Ok(false),
		serde_json::Value::String(s) => Ok(matches!(s.as_str(), "1" | "true" | "on" | "checked")),
		serde_json::Value::Number(n) => Ok(n.as_i64() == Some(1)),
		other => Err(ElementError::InvalidValue {
			title: "Checkbox".to_string(),
			message: format!("expected a checkbox state, got {other}"),
		}),
	}
}

impl WebformElement for Checkbox {
	fn name(&self) -> &str {
		&self.name
	}

	fn title(&self) -> &str {
		&self.title
	}

	fn clean(
		&self,
		value: Option<&serde_json::Value>,
		_ctx: &SubmissionContext<'_>,
	) -> ElementResult<serde_json::Value> {
		match value {
			None => Ok(serde_json::Value::Bool(self.default_checked)),
			Some(v) => Ok(serde_json::Value::Bool(checkbox_state(v)?)),
		}
	}

	fn render_input(&self, path: &str, value: &serde_json::Value) -> String {
		let checked = match value {
			serde_json::Value::Null => self.default_checked,
			other => checkbox_state(other).unwrap_or(false),
		};
		format!(
			"<input type=\"checkbox\" id=\"{}\" name=\"{}\"{} />",
			escape_html(&crate::render::control_id(path)),
			escape_html(path),
			if checked { " checked" } else { "" }
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::entity::EntityStore;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(true), true)]
	#[case(json!("1"), true)]
	#[case(json!("on"), true)]
	#[case(json!(1), true)]
	#[case(json!(false), false)]
	#[case(json!(""), false)]
	#[case(json!("0"), false)]
	#[case(json!(null), false)]
	fn test_truthy_spellings(#[case] value: serde_json::Value, #[case] expected: bool) {
		assert_eq!(checkbox_state(&value).unwrap(), expected);
	}

	#[test]
	fn test_default_state() {
		let store = EntityStore::new();
		let ctx = SubmissionContext { entities: &store };
		assert_eq!(
			Checkbox::new("agree").clean(None, &ctx).unwrap(),
			json!(false)
		);
		assert_eq!(
			Checkbox::new("agree").checked().clean(None, &ctx).unwrap(),
			json!(true)
		);
	}
}
