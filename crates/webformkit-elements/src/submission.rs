//! The submission pipeline: bind input, apply defaults, validate, and
//! produce the submission view plus the serialized record.

use tracing::{debug, trace};

use crate::definition::WebformDefinition;
use crate::element::SubmissionContext;
use crate::entity::EntityStore;
use crate::paths::insert_at_path;
use crate::record::SubmissionRecord;
use crate::render::{control_id, labeled, page};

/// Submitted field values, addressed by dot/bracket field paths.
///
/// Unspecified fields take the element's configured default. Inputs are
/// built once per test case and never mutated by the pipeline.
///
/// # Examples
///
/// ```
/// use webformkit_elements::SubmissionInput;
/// use serde_json::json;
///
/// let input = SubmissionInput::new()
///     .with("checkbox_value_empty[checkbox]", json!(true))
///     .with("name", json!("Ada"));
/// assert!(!input.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SubmissionInput {
	fields: Vec<(String, serde_json::Value)>,
}

impl SubmissionInput {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, path: impl Into<String>, value: serde_json::Value) -> Self {
		self.fields.push((path.into(), value));
		self
	}

	pub fn insert(&mut self, path: impl Into<String>, value: serde_json::Value) {
		self.fields.push((path.into(), value));
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn fields(&self) -> &[(String, serde_json::Value)] {
		&self.fields
	}

	/// Fold the flat path/value pairs into a nested value tree.
	pub fn to_tree(&self) -> serde_json::Map<String, serde_json::Value> {
		let mut tree = serde_json::Map::new();
		for (path, value) in &self.fields {
			insert_at_path(&mut tree, path, value.clone());
		}
		tree
	}
}

/// A successful submission: the rendered view and the serialized record.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
	pub markup: String,
	pub record: SubmissionRecord,
}

/// A rejected submission: the user-visible messages and the re-rendered
/// form page carrying them.
#[derive(Debug, Clone)]
pub struct SubmissionRejection {
	pub messages: Vec<String>,
	pub markup: String,
}

/// Run a submission against a form definition.
///
/// Each non-display element is cleaned in declaration order; all validation
/// messages are collected rather than stopping at the first. On success the
/// outcome carries the submission view (a `<label>` / value block per
/// element) and the record in element order.
pub fn process_submission(
	definition: &WebformDefinition,
	entities: &EntityStore,
	input: &SubmissionInput,
) -> Result<SubmissionOutcome, SubmissionRejection> {
	debug!(form = definition.id(), fields = input.fields().len(), "processing submission");
	let tree = input.to_tree();
	let ctx = SubmissionContext { entities };

	let mut cleaned = Vec::new();
	let mut messages = Vec::new();
	for element in definition.elements() {
		if element.is_display_only() {
			continue;
		}
		match element.clean(tree.get(element.name()), &ctx) {
			Ok(value) => {
				trace!(element = element.name(), "element cleaned");
				cleaned.push((element, value));
			}
			Err(error) => {
				trace!(element = element.name(), %error, "element rejected");
				messages.push(error.to_string());
			}
		}
	}

	if !messages.is_empty() {
		debug!(form = definition.id(), errors = messages.len(), "submission rejected");
		return Err(SubmissionRejection {
			markup: definition.render_form_with_errors(&messages),
			messages,
		});
	}

	let mut record = SubmissionRecord::new();
	let mut body = String::new();
	body.push_str("<div class=\"webform-submission\">\n");
	for (element, value) in &cleaned {
		record.insert(element.name(), element.record_value(value));
		body.push_str(&labeled(
			&control_id(element.name()),
			element.title(),
			&crate::render::escape_html(&element.format_value(value)),
		));
		body.push('\n');
	}
	body.push_str("</div>");

	Ok(SubmissionOutcome {
		markup: page(&format!("{}: submission", definition.title()), &body),
		record,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::elements::{Checkbox, Textfield};

	fn definition() -> WebformDefinition {
		WebformDefinition::new("contact", "Contact")
			.with_element(Box::new(
				Textfield::new("name").with_title("Your name").required(),
			))
			.with_element(Box::new(Checkbox::new("subscribe").with_title("Subscribe")))
	}

	#[test]
	fn test_successful_submission_record_order() {
		let entities = EntityStore::new();
		let input = SubmissionInput::new().with("name", serde_json::json!("Ada"));
		let outcome = process_submission(&definition(), &entities, &input).unwrap();
		assert_eq!(outcome.record.to_yaml_block(), "name: Ada\nsubscribe: false");
		assert!(outcome.markup.contains("<label for=\"edit-name\">Your name</label>"));
	}

	#[test]
	fn test_missing_required_field_is_rejected() {
		let entities = EntityStore::new();
		let rejection =
			process_submission(&definition(), &entities, &SubmissionInput::new()).unwrap_err();
		assert_eq!(rejection.messages, ["Your name field is required."]);
		assert!(rejection.markup.contains("Your name field is required."));
	}

	#[test]
	fn test_identical_input_is_idempotent() {
		let entities = EntityStore::new();
		let input = SubmissionInput::new().with("name", serde_json::json!("Ada"));
		let def = definition();
		let first = process_submission(&def, &entities, &input).unwrap();
		let second = process_submission(&def, &entities, &input).unwrap();
		assert_eq!(first.record, second.record);
		assert_eq!(first.markup, second.markup);
	}
}
