//! The attributes editor element (`webform_element_attributes`).

use crate::attributes::ElementAttributes;
use crate::element::{ElementError, ElementResult, SubmissionContext, WebformElement};
use crate::elements::checkbox::checkbox_state;
use crate::record::RecordValue;
use crate::render::escape_html;

/// Edits an [`ElementAttributes`] set: class checkboxes over a configured
/// option list plus a free-form "other" entry, an inline style string, and a
/// YAML mapping of custom attributes.
///
/// The cleaned value is the serialized [`ElementAttributes`]; the record
/// entry is its ordered `class` / `style` / custom map.
#[derive(Debug, Clone)]
pub struct AttributesElement {
	name: String,
	title: String,
	class_options: Vec<String>,
	default_classes: Vec<String>,
	default_other: String,
	default_style: String,
	default_custom: String,
}

impl AttributesElement {
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			title: name.clone(),
			name,
			class_options: vec![],
			default_classes: vec![],
			default_other: String::new(),
			default_style: String::new(),
			default_custom: String::new(),
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	pub fn with_class_options(mut self, options: Vec<String>) -> Self {
		self.class_options = options;
		self
	}

	pub fn with_default_classes(mut self, classes: Vec<String>) -> Self {
		self.default_classes = classes;
		self
	}

	/// Default for the free-form class entry, whitespace-separated.
	pub fn with_default_other(mut self, other: impl Into<String>) -> Self {
		self.default_other = other.into();
		self
	}

	pub fn with_default_style(mut self, style: impl Into<String>) -> Self {
		self.default_style = style.into();
		self
	}

	/// Default custom attributes, as the YAML mapping the control edits.
	pub fn with_default_custom(mut self, custom: impl Into<String>) -> Self {
		self.default_custom = custom.into();
		self
	}

	/// Build the attribute set from a submitted subtree, falling back to the
	/// configured defaults for parts that were not submitted.
	fn clean_attributes(
		&self,
		value: Option<&serde_json::Value>,
	) -> ElementResult<ElementAttributes> {
		let subtree = match value {
			None | Some(serde_json::Value::Null) => None,
			Some(serde_json::Value::Object(map)) => Some(map),
			Some(other) => {
				return Err(ElementError::InvalidValue {
					title: self.title.clone(),
					message: format!("expected an attributes subtree, got {other}"),
				});
			}
		};

		let selected = match subtree.and_then(|map| map.get("class")) {
			None => self.default_classes.clone(),
			Some(serde_json::Value::Object(states)) => {
				let mut selected = Vec::new();
				for option in &self.class_options {
					if let Some(state) = states.get(option) {
						if checkbox_state(state)? {
							selected.push(option.clone());
						}
					}
				}
				selected
			}
			Some(serde_json::Value::Array(items)) => items
				.iter()
				.map(|v| v.as_str().unwrap_or_default().to_string())
				.collect(),
			Some(other) => {
				return Err(ElementError::InvalidValue {
					title: self.title.clone(),
					message: format!("expected class selections, got {other}"),
				});
			}
		};
		let other_classes = subtree
			.and_then(|map| map.get("class_other"))
			.and_then(|v| v.as_str())
			.unwrap_or(&self.default_other)
			.to_string();
		let style = subtree
			.and_then(|map| map.get("style"))
			.and_then(|v| v.as_str())
			.unwrap_or(&self.default_style)
			.to_string();
		let custom = subtree
			.and_then(|map| map.get("custom"))
			.and_then(|v| v.as_str())
			.unwrap_or(&self.default_custom)
			.to_string();

		ElementAttributes::new()
			.with_classes(selected)
			.with_other_classes(&other_classes)
			.with_style(style)
			.with_custom_yaml(&custom)
	}
}

impl WebformElement for AttributesElement {
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
		let attrs = self.clean_attributes(value)?;
		serde_json::to_value(&attrs).map_err(|e| ElementError::InvalidValue {
			title: self.title.clone(),
			message: e.to_string(),
		})
	}

	fn render_input(&self, path: &str, _value: &serde_json::Value) -> String {
		let class_boxes: Vec<String> = self
			.class_options
			.iter()
			.map(|option| {
				let option_path = format!("{path}[class][{option}]");
				format!(
					"<label><input type=\"checkbox\" name=\"{}\"{} /> {}</label>",
					escape_html(&option_path),
					if self.default_classes.contains(option) {
						" checked"
					} else {
						""
					},
					escape_html(option)
				)
			})
			.collect();
		format!(
			"<div class=\"webform-element-attributes\" data-name=\"{}\">\n{}\n<input type=\"text\" name=\"{}\" value=\"{}\" />\n<input type=\"text\" name=\"{}\" value=\"{}\" />\n<textarea name=\"{}\">{}</textarea>\n</div>",
			escape_html(path),
			class_boxes.join("\n"),
			escape_html(&format!("{path}[class_other]")),
			escape_html(&self.default_other),
			escape_html(&format!("{path}[style]")),
			escape_html(&self.default_style),
			escape_html(&format!("{path}[custom]")),
			escape_html(&self.default_custom)
		)
	}

	fn format_value(&self, value: &serde_json::Value) -> String {
		match serde_json::from_value::<ElementAttributes>(value.clone()) {
			Ok(attrs) => {
				let mut parts = Vec::new();
				if !attrs.classes().is_empty() {
					parts.push(format!("class: {}", attrs.classes().join(" ")));
				}
				if !attrs.style().is_empty() {
					parts.push(format!("style: {}", attrs.style()));
				}
				for (name, value) in attrs.custom() {
					parts.push(format!("{name}: {value}"));
				}
				parts.join("; ")
			}
			Err(_) => crate::render::display_value(value),
		}
	}

	fn record_value(&self, cleaned: &serde_json::Value) -> RecordValue {
		match serde_json::from_value::<ElementAttributes>(cleaned.clone()) {
			Ok(attrs) => attrs.to_record_value(),
			Err(_) => RecordValue::from_json(cleaned),
		}
	}
}
