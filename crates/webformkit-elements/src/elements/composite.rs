//! Composite element: named sub-elements with an excluded set.

use crate::element::{ElementError, ElementResult, SubmissionContext, WebformElement};
use crate::record::RecordValue;
use crate::render::{escape_html, labeled};

/// A group of named sub-elements submitted under `parent[child]` paths.
///
/// Sub-elements named in the excluded set are suppressed entirely: they
/// render no markup on the form page and never reach the submission record.
/// Display-only sub-elements (markup, details) render when included but are
/// always left out of the record.
pub struct Composite {
	name: String,
	title: String,
	sub_elements: Vec<Box<dyn WebformElement>>,
	excluded: Vec<String>,
}

impl Composite {
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			title: name.clone(),
			name,
			sub_elements: vec![],
			excluded: vec![],
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	pub fn with_sub_element(mut self, element: Box<dyn WebformElement>) -> Self {
		self.sub_elements.push(element);
		self
	}

	pub fn with_excluded(mut self, excluded: Vec<String>) -> Self {
		self.excluded = excluded;
		self
	}

	pub fn sub_elements(&self) -> impl Iterator<Item = &dyn WebformElement> {
		self.sub_elements.iter().map(Box::as_ref)
	}

	fn is_excluded(&self, name: &str) -> bool {
		self.excluded.iter().any(|excluded| excluded == name)
	}

	/// Sub-elements that take part in submissions: included value elements.
	fn value_sub_elements(&self) -> impl Iterator<Item = &dyn WebformElement> {
		self.sub_elements()
			.filter(|sub| !self.is_excluded(sub.name()) && !sub.is_display_only())
	}
}

impl WebformElement for Composite {
	fn name(&self) -> &str {
		&self.name
	}

	fn title(&self) -> &str {
		&self.title
	}

	fn clean(
		&self,
		value: Option<&serde_json::Value>,
		ctx: &SubmissionContext<'_>,
	) -> ElementResult<serde_json::Value> {
		let empty = serde_json::Map::new();
		let subtree = match value {
			None | Some(serde_json::Value::Null) => &empty,
			Some(serde_json::Value::Object(map)) => map,
			Some(other) => {
				return Err(ElementError::InvalidValue {
					title: self.title.clone(),
					message: format!("expected a composite subtree, got {other}"),
				});
			}
		};
		let mut cleaned = serde_json::Map::new();
		for sub in self.value_sub_elements() {
			let sub_value = sub.clean(subtree.get(sub.name()), ctx)?;
			cleaned.insert(sub.name().to_string(), sub_value);
		}
		Ok(serde_json::Value::Object(cleaned))
	}

	fn render_input(&self, path: &str, _value: &serde_json::Value) -> String {
		let mut parts = Vec::new();
		for sub in self.sub_elements() {
			if self.is_excluded(sub.name()) {
				continue;
			}
			let sub_path = format!("{path}[{}]", sub.name());
			let control = sub.render_input(&sub_path, &serde_json::Value::Null);
			if sub.is_display_only() {
				parts.push(control);
			} else {
				parts.push(labeled(
					&crate::render::control_id(&sub_path),
					sub.title(),
					&control,
				));
			}
		}
		format!(
			"<fieldset class=\"webform-composite\" data-name=\"{}\">\n{}\n</fieldset>",
			escape_html(path),
			parts.join("\n")
		)
	}

	fn format_value(&self, value: &serde_json::Value) -> String {
		let serde_json::Value::Object(map) = value else {
			return crate::render::display_value(value);
		};
		self.value_sub_elements()
			.filter_map(|sub| {
				map.get(sub.name())
					.map(|v| format!("{}: {}", sub.title(), sub.format_value(v)))
			})
			.collect::<Vec<_>>()
			.join("; ")
	}

	/// Record entries follow sub-element declaration order, not the JSON
	/// object's key order.
	fn record_value(&self, cleaned: &serde_json::Value) -> RecordValue {
		let serde_json::Value::Object(map) = cleaned else {
			return RecordValue::from_json(cleaned);
		};
		RecordValue::Map(
			self.value_sub_elements()
				.filter_map(|sub| {
					map.get(sub.name())
						.map(|v| (sub.name().to_string(), sub.record_value(v)))
				})
				.collect(),
		)
	}
}
