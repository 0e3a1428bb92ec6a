//! `checkbox_value`: a checkbox gating a value entry.

use crate::element::{ElementError, ElementResult, SubmissionContext, WebformElement};
use crate::elements::checkbox::checkbox_state;
use crate::render::escape_html;

/// How the gated value is entered.
#[derive(Debug, Clone)]
pub enum ValueEntry {
	/// A plain text entry, submitted under the `value` key.
	Text,
	/// A select over fixed options, submitted under the `select` key.
	Select { options: Vec<String> },
}

/// A checkbox plus a value entry.
///
/// While the checkbox is unchecked the element's value is the empty string,
/// whatever the entry holds. Once checked, the entry's value (or its
/// configured default) becomes the element value and is required: a checked
/// box with no value fails with `{entry title} field is required.`
#[derive(Debug, Clone)]
pub struct CheckboxValue {
	name: String,
	title: String,
	entry_title: String,
	entry: ValueEntry,
	default_checked: bool,
	default_value: Option<String>,
}

impl CheckboxValue {
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			title: name.clone(),
			name,
			entry_title: "Value".to_string(),
			entry: ValueEntry::Text,
			default_checked: false,
			default_value: None,
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Title of the value entry; also the subject of the required-field
	/// message.
	pub fn with_entry_title(mut self, title: impl Into<String>) -> Self {
		self.entry_title = title.into();
		self
	}

	pub fn with_entry(mut self, entry: ValueEntry) -> Self {
		self.entry = entry;
		self
	}

	pub fn checked(mut self) -> Self {
		self.default_checked = true;
		self
	}

	pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
		self.default_value = Some(value.into());
		self
	}

	fn entry_key(&self) -> &'static str {
		match self.entry {
			ValueEntry::Text => "value",
			ValueEntry::Select { .. } => "select",
		}
	}

	fn submitted_entry(&self, subtree: &serde_json::Map<String, serde_json::Value>) -> Option<String> {
		subtree
			.get(self.entry_key())
			.and_then(|v| v.as_str())
			.filter(|s| !s.is_empty())
			.map(str::to_string)
	}
}

impl WebformElement for CheckboxValue {
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
		let empty = serde_json::Map::new();
		let subtree = match value {
			None | Some(serde_json::Value::Null) => &empty,
			Some(serde_json::Value::Object(map)) => map,
			Some(other) => {
				return Err(ElementError::InvalidValue {
					title: self.title.clone(),
					message: format!("expected a checkbox/value subtree, got {other}"),
				});
			}
		};

		let checked = match subtree.get("checkbox") {
			None => self.default_checked,
			Some(state) => checkbox_state(state)?,
		};
		if !checked {
			return Ok(serde_json::Value::String(String::new()));
		}

		let entry = self
			.submitted_entry(subtree)
			.or_else(|| self.default_value.clone());
		match entry {
			Some(value) => {
				if let ValueEntry::Select { options } = &self.entry {
					if !options.contains(&value) {
						return Err(ElementError::InvalidChoice {
							title: self.entry_title.clone(),
							choice: value,
						});
					}
				}
				Ok(serde_json::Value::String(value))
			}
			None => Err(ElementError::Required {
				title: self.entry_title.clone(),
			}),
		}
	}

	fn render_input(&self, path: &str, _value: &serde_json::Value) -> String {
		let checkbox_path = format!("{path}[checkbox]");
		let entry_path = format!("{path}[{}]", self.entry_key());
		let entry_control = match &self.entry {
			ValueEntry::Text => format!(
				"<input type=\"text\" id=\"{}\" name=\"{}\" value=\"{}\" />",
				escape_html(&crate::render::control_id(&entry_path)),
				escape_html(&entry_path),
				escape_html(self.default_value.as_deref().unwrap_or(""))
			),
			ValueEntry::Select { options } => {
				let options: Vec<String> = options
					.iter()
					.map(|option| {
						format!(
							"<option value=\"{}\"{}>{}</option>",
							escape_html(option),
							if self.default_value.as_deref() == Some(option) {
								" selected"
							} else {
								""
							},
							escape_html(option)
						)
					})
					.collect();
				format!(
					"<select id=\"{}\" name=\"{}\">\n{}\n</select>",
					escape_html(&crate::render::control_id(&entry_path)),
					escape_html(&entry_path),
					options.join("\n")
				)
			}
		};
		format!(
			"<div class=\"webform-checkbox-value\" data-name=\"{}\">\n<input type=\"checkbox\" id=\"{}\" name=\"{}\"{} />\n<label for=\"{}\">{}</label>\n{}\n</div>",
			escape_html(path),
			escape_html(&crate::render::control_id(&checkbox_path)),
			escape_html(&checkbox_path),
			if self.default_checked { " checked" } else { "" },
			escape_html(&crate::render::control_id(&entry_path)),
			escape_html(&self.entry_title),
			entry_control
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::entity::EntityStore;
	use serde_json::json;

	fn ctx(store: &EntityStore) -> SubmissionContext<'_> {
		SubmissionContext { entities: store }
	}

	#[test]
	fn test_unchecked_yields_empty_string() {
		let store = EntityStore::new();
		let el = CheckboxValue::new("cv").with_default_value("kept");
		assert_eq!(el.clean(None, &ctx(&store)).unwrap(), json!(""));
	}

	#[test]
	fn test_checked_default_value() {
		let store = EntityStore::new();
		let el = CheckboxValue::new("cv").checked().with_default_value("kept");
		assert_eq!(el.clean(None, &ctx(&store)).unwrap(), json!("kept"));
	}

	#[test]
	fn test_checked_without_value_is_required() {
		let store = EntityStore::new();
		let el = CheckboxValue::new("cv").with_entry_title("Enter a value");
		let err = el
			.clean(Some(&json!({"checkbox": true})), &ctx(&store))
			.unwrap_err();
		assert_eq!(err.to_string(), "Enter a value field is required.");
	}

	#[test]
	fn test_submitted_value_wins_over_default() {
		let store = EntityStore::new();
		let el = CheckboxValue::new("cv").checked().with_default_value("kept");
		let cleaned = el
			.clean(
				Some(&json!({"checkbox": true, "value": "submitted"})),
				&ctx(&store),
			)
			.unwrap();
		assert_eq!(cleaned, json!("submitted"));
	}

	#[test]
	fn test_select_entry_validates_choice() {
		let store = EntityStore::new();
		let el = CheckboxValue::new("cv")
			.with_entry_title("Pick one")
			.with_entry(ValueEntry::Select {
				options: vec!["One".into(), "Four".into()],
			})
			.checked()
			.with_default_value("Four");
		assert_eq!(el.clean(None, &ctx(&store)).unwrap(), json!("Four"));
		let err = el
			.clean(
				Some(&json!({"checkbox": true, "select": "Nine"})),
				&ctx(&store),
			)
			.unwrap_err();
		assert_eq!(err.to_string(), "Pick one: 'Nine' is not a valid choice.");
	}
}
