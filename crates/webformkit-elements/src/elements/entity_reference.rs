//! Entity-reference elements over the in-memory entity store.

use crate::cardinality::Cardinality;
use crate::element::{ElementError, ElementResult, SubmissionContext, WebformElement};
use crate::render::escape_html;

/// The control an entity reference renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityWidget {
	Autocomplete,
	Select,
	Radios,
	Checkboxes,
}

/// A reference to entities of one target type, stored as the referenced
/// id's string form (`'1'`), a list of them when multi-valued.
#[derive(Debug, Clone)]
pub struct EntityReference {
	name: String,
	title: String,
	target_type: String,
	widget: EntityWidget,
	multiple: Cardinality,
	default_ids: Vec<u64>,
	required: bool,
}

impl EntityReference {
	pub fn new(name: impl Into<String>, target_type: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			title: name.clone(),
			name,
			target_type: target_type.into(),
			widget: EntityWidget::Autocomplete,
			multiple: Cardinality::Single,
			default_ids: vec![],
			required: false,
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	pub fn with_widget(mut self, widget: EntityWidget) -> Self {
		self.widget = widget;
		self
	}

	pub fn with_multiple(mut self, multiple: Cardinality) -> Self {
		self.multiple = multiple;
		self
	}

	pub fn with_default_ids(mut self, ids: Vec<u64>) -> Self {
		self.default_ids = ids;
		self
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn target_type(&self) -> &str {
		&self.target_type
	}

	fn clean_reference(
		&self,
		value: &serde_json::Value,
		ctx: &SubmissionContext<'_>,
	) -> ElementResult<serde_json::Value> {
		let id_text = match value {
			serde_json::Value::String(s) => s.clone(),
			serde_json::Value::Number(n) => n.to_string(),
			serde_json::Value::Null => String::new(),
			other => {
				return Err(ElementError::InvalidValue {
					title: self.title.clone(),
					message: format!("expected an entity id, got {other}"),
				});
			}
		};
		if id_text.is_empty() {
			return Ok(serde_json::Value::String(id_text));
		}
		let id: u64 = id_text.parse().map_err(|_| ElementError::UnknownEntity {
			title: self.title.clone(),
			target_type: self.target_type.clone(),
			id: id_text.clone(),
		})?;
		if !ctx.entities.contains(&self.target_type, id) {
			return Err(ElementError::UnknownEntity {
				title: self.title.clone(),
				target_type: self.target_type.clone(),
				id: id_text,
			});
		}
		Ok(serde_json::Value::String(id_text))
	}
}

impl WebformElement for EntityReference {
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
		ctx: &SubmissionContext<'_>,
	) -> ElementResult<serde_json::Value> {
		let raw = match value {
			Some(v) => v.clone(),
			None => {
				let defaults: Vec<String> =
					self.default_ids.iter().map(u64::to_string).collect();
				match self.multiple {
					Cardinality::Single => defaults
						.first()
						.map(|id| serde_json::Value::String(id.clone()))
						.unwrap_or(serde_json::Value::Null),
					_ => serde_json::json!(defaults),
				}
			}
		};
		let cleaned = self
			.multiple
			.clean_items(&self.title, &raw, |item| self.clean_reference(item, ctx))?;
		if self.required {
			let empty = match &cleaned {
				serde_json::Value::String(s) => s.is_empty(),
				serde_json::Value::Array(items) => items.is_empty(),
				serde_json::Value::Null => true,
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

	fn render_input(&self, path: &str, _value: &serde_json::Value) -> String {
		let default_text = self
			.default_ids
			.first()
			.map(u64::to_string)
			.unwrap_or_default();
		match self.widget {
			EntityWidget::Autocomplete => format!(
				"<input type=\"text\" class=\"entity-autocomplete\" data-target-type=\"{}\" id=\"{}\" name=\"{}\" value=\"{}\" />",
				escape_html(&self.target_type),
				escape_html(&crate::render::control_id(path)),
				escape_html(path),
				escape_html(&default_text)
			),
			EntityWidget::Select => format!(
				"<select id=\"{}\" name=\"{}\"{} data-target-type=\"{}\"></select>",
				escape_html(&crate::render::control_id(path)),
				escape_html(path),
				if self.multiple.is_multiple() { " multiple" } else { "" },
				escape_html(&self.target_type)
			),
			EntityWidget::Radios | EntityWidget::Checkboxes => {
				let input_type = if self.widget == EntityWidget::Radios {
					"radio"
				} else {
					"checkbox"
				};
				format!(
					"<div class=\"entity-{input_type}s\" data-name=\"{}\" data-target-type=\"{}\"><input type=\"{input_type}\" name=\"{}\" value=\"{}\" checked /></div>",
					escape_html(path),
					escape_html(&self.target_type),
					escape_html(path),
					escape_html(&default_text)
				)
			}
		}
	}

	/// Both the view and the record keep the bare id string.
	fn format_value(&self, value: &serde_json::Value) -> String {
		match value {
			serde_json::Value::String(s) => s.clone(),
			serde_json::Value::Array(items) => items
				.iter()
				.map(|v| v.as_str().unwrap_or_default().to_string())
				.collect::<Vec<_>>()
				.join(", "),
			other => crate::render::display_value(other),
		}
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
	fn test_default_single_reference() {
		let store = EntityStore::with_defaults();
		let el = EntityReference::new("owner", "user").with_default_ids(vec![1]);
		assert_eq!(el.clean(None, &ctx(&store)).unwrap(), json!("1"));
	}

	#[test]
	fn test_default_list_reference() {
		let store = EntityStore::with_defaults();
		let el = EntityReference::new("owners", "user")
			.with_widget(EntityWidget::Checkboxes)
			.with_multiple(Cardinality::Unlimited)
			.with_default_ids(vec![1]);
		assert_eq!(el.clean(None, &ctx(&store)).unwrap(), json!(["1"]));
	}

	#[test]
	fn test_unknown_entity_rejected() {
		let store = EntityStore::with_defaults();
		let el = EntityReference::new("owner", "user").with_title("Owner");
		let err = el.clean(Some(&json!("99")), &ctx(&store)).unwrap_err();
		assert_eq!(err.to_string(), "Owner: unknown user '99'.");
	}
}
