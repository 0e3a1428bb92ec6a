//! Choice elements: `select` and `checkboxes`.

use crate::cardinality::Cardinality;
use crate::element::{ElementError, ElementResult, SubmissionContext, WebformElement};
use crate::elements::checkbox::checkbox_state;
use crate::render::escape_html;

/// A select list over a fixed option set, single- or multi-valued.
///
/// # Examples
///
/// ```
/// use webformkit_elements::elements::Select;
/// use webformkit_elements::{Cardinality, WebformElement};
///
/// let select = Select::new("color", vec!["red".into(), "blue".into()])
///     .with_multiple(Cardinality::Unlimited);
/// assert_eq!(select.cardinality(), Cardinality::Unlimited);
/// ```
#[derive(Debug, Clone)]
pub struct Select {
	name: String,
	title: String,
	options: Vec<String>,
	required: bool,
	multiple: Cardinality,
	default: Option<serde_json::Value>,
}

impl Select {
	pub fn new(name: impl Into<String>, options: Vec<String>) -> Self {
		let name = name.into();
		Self {
			title: name.clone(),
			name,
			options,
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

	pub fn options(&self) -> &[String] {
		&self.options
	}

	fn clean_choice(&self, value: &serde_json::Value) -> ElementResult<serde_json::Value> {
		let choice = match value {
			serde_json::Value::String(s) => s.clone(),
			serde_json::Value::Null => String::new(),
			other => other.to_string(),
		};
		if choice.is_empty() {
			return Ok(serde_json::Value::String(choice));
		}
		if !self.options.contains(&choice) {
			return Err(ElementError::InvalidChoice {
				title: self.title.clone(),
				choice,
			});
		}
		Ok(serde_json::Value::String(choice))
	}
}

impl WebformElement for Select {
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
			.clean_items(&self.title, &raw, |item| self.clean_choice(item))?;
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
		let selected: Vec<&str> = match &shown {
			serde_json::Value::String(s) => vec![s.as_str()],
			serde_json::Value::Array(items) => {
				items.iter().filter_map(|v| v.as_str()).collect()
			}
			_ => vec![],
		};
		let options: Vec<String> = self
			.options
			.iter()
			.map(|option| {
				format!(
					"<option value=\"{}\"{}>{}</option>",
					escape_html(option),
					if selected.contains(&option.as_str()) {
						" selected"
					} else {
						""
					},
					escape_html(option)
				)
			})
			.collect();
		format!(
			"<select id=\"{}\" name=\"{}\"{}>\n{}\n</select>",
			escape_html(&crate::render::control_id(path)),
			escape_html(path),
			if self.multiple.is_multiple() {
				" multiple"
			} else {
				""
			},
			options.join("\n")
		)
	}
}

/// A checkbox group: inherently multi-valued over a fixed option set.
#[derive(Debug, Clone)]
pub struct Checkboxes {
	name: String,
	title: String,
	options: Vec<String>,
	default: Vec<String>,
}

impl Checkboxes {
	pub fn new(name: impl Into<String>, options: Vec<String>) -> Self {
		let name = name.into();
		Self {
			title: name.clone(),
			name,
			options,
			default: vec![],
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	pub fn with_default(mut self, default: Vec<String>) -> Self {
		self.default = default;
		self
	}

	pub fn options(&self) -> &[String] {
		&self.options
	}

	/// Selected options, in option order, from either submission shape: a
	/// `{option: state}` map (browser checkbox group) or a plain list.
	fn selected_from(&self, value: &serde_json::Value) -> ElementResult<Vec<String>> {
		match value {
			serde_json::Value::Object(map) => {
				let mut selected = Vec::new();
				for option in &self.options {
					if let Some(state) = map.get(option) {
						if checkbox_state(state)? {
							selected.push(option.clone());
						}
					}
				}
				for key in map.keys() {
					if !self.options.contains(key) {
						return Err(ElementError::InvalidChoice {
							title: self.title.clone(),
							choice: key.clone(),
						});
					}
				}
				Ok(selected)
			}
			serde_json::Value::Array(items) => {
				let mut selected = Vec::new();
				for item in items {
					let choice = item.as_str().unwrap_or_default().to_string();
					if !self.options.contains(&choice) {
						return Err(ElementError::InvalidChoice {
							title: self.title.clone(),
							choice,
						});
					}
					selected.push(choice);
				}
				Ok(selected)
			}
			serde_json::Value::Null => Ok(vec![]),
			other => Err(ElementError::InvalidValue {
				title: self.title.clone(),
				message: format!("expected selected options, got {other}"),
			}),
		}
	}
}

impl WebformElement for Checkboxes {
	fn name(&self) -> &str {
		&self.name
	}

	fn title(&self) -> &str {
		&self.title
	}

	fn cardinality(&self) -> Cardinality {
		Cardinality::Unlimited
	}

	fn clean(
		&self,
		value: Option<&serde_json::Value>,
		_ctx: &SubmissionContext<'_>,
	) -> ElementResult<serde_json::Value> {
		let selected = match value {
			None => self.default.clone(),
			Some(v) => self.selected_from(v)?,
		};
		Ok(serde_json::json!(selected))
	}

	fn render_input(&self, path: &str, value: &serde_json::Value) -> String {
		let selected = match value {
			serde_json::Value::Null => self.default.clone(),
			other => self.selected_from(other).unwrap_or_default(),
		};
		let boxes: Vec<String> = self
			.options
			.iter()
			.map(|option| {
				let option_path = format!("{path}[{option}]");
				format!(
					"<label><input type=\"checkbox\" id=\"{}\" name=\"{}\"{} /> {}</label>",
					escape_html(&crate::render::control_id(&option_path)),
					escape_html(&option_path),
					if selected.contains(option) {
						" checked"
					} else {
						""
					},
					escape_html(option)
				)
			})
			.collect();
		format!(
			"<div class=\"form-checkboxes\" data-name=\"{}\">\n{}\n</div>",
			escape_html(path),
			boxes.join("\n")
		)
	}
}
