//! Single-line text element.

use crate::cardinality::Cardinality;
use crate::element::{ElementError, ElementResult, SubmissionContext, WebformElement};
use crate::render::escape_html;

/// A text input, optionally multi-valued.
///
/// # Examples
///
/// ```
/// use webformkit_elements::elements::Textfield;
/// use webformkit_elements::{Cardinality, WebformElement};
///
/// let field = Textfield::new("first_name")
///     .with_title("First name")
///     .required();
/// assert_eq!(field.name(), "first_name");
/// assert_eq!(field.title(), "First name");
/// assert!(WebformElement::required(&field));
/// assert_eq!(field.cardinality(), Cardinality::Single);
/// ```
#[derive(Debug, Clone)]
pub struct Textfield {
	name: String,
	title: String,
	required: bool,
	multiple: Cardinality,
	default: Option<serde_json::Value>,
}

impl Textfield {
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			title: name.clone(),
			name,
			required: false,
			multiple: Cardinality::Single,
			default: None,
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn with_multiple(mut self, multiple: Cardinality) -> Self {
		self.multiple = multiple;
		self
	}

	pub fn with_default(mut self, default: impl Into<String>) -> Self {
		self.default = Some(serde_json::Value::String(default.into()));
		self
	}

	pub fn with_default_list(mut self, defaults: Vec<String>) -> Self {
		self.default = Some(serde_json::json!(defaults));
		self
	}

	fn clean_one(&self, value: &serde_json::Value) -> ElementResult<serde_json::Value> {
		let text = match value {
			serde_json::Value::String(s) => s.clone(),
			serde_json::Value::Number(n) => n.to_string(),
			serde_json::Value::Null => String::new(),
			other => {
				return Err(ElementError::InvalidValue {
					title: self.title.clone(),
					message: format!("expected text, got {other}"),
				});
			}
		};
		Ok(serde_json::Value::String(text))
	}
}

impl WebformElement for Textfield {
	fn name(&self) -> &str {
		&self.name
	}

	fn title(&self) -> &str {
		&self.title
	}

	fn required(&self) -> bool {
		self.required
	}

	fn cardinality(&self) -> Cardinality {
		self.multiple
	}

	fn clean(
		&self,
		value: Option<&serde_json::Value>,
		_ctx: &SubmissionContext<'_>,
	) -> ElementResult<serde_json::Value> {
		let raw = match (value, &self.default) {
			(Some(v), _) => v.clone(),
			(None, Some(default)) => default.clone(),
			(None, None) => serde_json::Value::Null,
		};
		let cleaned = self
			.multiple
			.clean_items(&self.title, &raw, |item| self.clean_one(item))?;
		if self.required {
			let empty = match &cleaned {
				serde_json::Value::String(s) => s.is_empty(),
				serde_json::Value::Array(items) => items.is_empty(),
				_ => false,
			};
			if empty {
				return Err(ElementError::Required {
					title: self.title.clone(),
				});
			}
		}
		Ok(cleaned)
	}

	fn render_input(&self, path: &str, value: &serde_json::Value) -> String {
		let shown = match value {
			serde_json::Value::Null => self.default.clone().unwrap_or_default(),
			other => other.clone(),
		};
		match self.multiple {
			Cardinality::Single => text_input(path, shown.as_str().unwrap_or_default()),
			_ => {
				let items: Vec<String> = match shown {
					serde_json::Value::Array(items) => items
						.iter()
						.map(|v| v.as_str().unwrap_or_default().to_string())
						.collect(),
					serde_json::Value::String(s) if !s.is_empty() => vec![s],
					_ => vec![],
				};
				let mut inputs: Vec<String> = items
					.iter()
					.enumerate()
					.map(|(i, item)| text_input(&format!("{path}[{i}]"), item))
					.collect();
				inputs.push(text_input(&format!("{path}[{}]", items.len()), ""));
				format!(
					"<div class=\"webform-multiple\" data-name=\"{}\">\n{}\n</div>",
					escape_html(path),
					inputs.join("\n")
				)
			}
		}
	}
}

fn text_input(path: &str, value: &str) -> String {
	format!(
		"<input type=\"text\" id=\"{}\" name=\"{}\" value=\"{}\" />",
		escape_html(&crate::render::control_id(path)),
		escape_html(path),
		escape_html(value)
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::entity::EntityStore;
	use serde_json::json;

	fn ctx_store() -> EntityStore {
		EntityStore::new()
	}

	#[test]
	fn test_default_applies_when_unsubmitted() {
		let store = ctx_store();
		let ctx = SubmissionContext { entities: &store };
		let field = Textfield::new("name").with_default("fallback");
		assert_eq!(field.clean(None, &ctx).unwrap(), json!("fallback"));
	}

	#[test]
	fn test_required_rejects_empty() {
		let store = ctx_store();
		let ctx = SubmissionContext { entities: &store };
		let field = Textfield::new("name").with_title("Name").required();
		let err = field.clean(Some(&json!("")), &ctx).unwrap_err();
		assert_eq!(err.to_string(), "Name field is required.");
	}

	#[test]
	fn test_multiple_cleans_to_list() {
		let store = ctx_store();
		let ctx = SubmissionContext { entities: &store };
		let field = Textfield::new("names").with_multiple(Cardinality::Unlimited);
		assert_eq!(
			field.clean(Some(&json!(["a", "b"])), &ctx).unwrap(),
			json!(["a", "b"])
		);
	}
}
