//! Webform definitions: ordered element lists with form-page rendering.

use crate::cardinality::Cardinality;
use crate::element::WebformElement;
use crate::render::{control_id, escape_html, labeled, page};

/// A named, ordered form configuration.
///
/// Definitions are immutable once registered; element order is declaration
/// order and drives both the rendered form and the submission record.
pub struct WebformDefinition {
	id: String,
	title: String,
	elements: Vec<Box<dyn WebformElement>>,
}

impl WebformDefinition {
	pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			elements: vec![],
		}
	}

	pub fn with_element(mut self, element: Box<dyn WebformElement>) -> Self {
		self.elements.push(element);
		self
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn elements(&self) -> impl Iterator<Item = &dyn WebformElement> {
		self.elements.iter().map(Box::as_ref)
	}

	pub fn element(&self, name: &str) -> Option<&dyn WebformElement> {
		self.elements()
			.find(|element| element.name() == name)
	}

	/// The `multiple` property of a named element, in its definition form
	/// (`false` / `true` / limit).
	pub fn cardinality_of(&self, name: &str) -> Option<Cardinality> {
		self.element(name).map(WebformElement::cardinality)
	}

	/// Render the form page: every element's label and input control (at
	/// its configured default), display-only elements verbatim.
	pub fn render_form(&self) -> String {
		self.render_form_page(&[])
	}

	/// Render the form page with validation messages above the form.
	pub fn render_form_with_errors(&self, messages: &[String]) -> String {
		self.render_form_page(messages)
	}

	fn render_form_page(&self, messages: &[String]) -> String {
		let mut body = String::new();
		if !messages.is_empty() {
			body.push_str("<div class=\"messages messages--error\">\n");
			for message in messages {
				body.push_str(&format!(
					"<div class=\"message\">{}</div>\n",
					escape_html(message)
				));
			}
			body.push_str("</div>\n");
		}
		body.push_str(&format!(
			"<form method=\"post\" action=\"/webform/{}\">\n",
			escape_html(&self.id)
		));
		for element in self.elements() {
			let control = element.render_input(element.name(), &serde_json::Value::Null);
			if element.is_display_only() {
				body.push_str(&control);
				body.push('\n');
			} else {
				body.push_str(&labeled(
					&control_id(element.name()),
					element.title(),
					&control,
				));
				body.push('\n');
			}
		}
		body.push_str("<input type=\"submit\" value=\"Submit\" />\n</form>");
		page(&self.title, &body)
	}
}

impl std::fmt::Debug for WebformDefinition {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("WebformDefinition")
			.field("id", &self.id)
			.field("title", &self.title)
			.field(
				"elements",
				&self.elements().map(|e| e.name()).collect::<Vec<_>>(),
			)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::elements::Textfield;

	fn definition() -> WebformDefinition {
		WebformDefinition::new("contact", "Contact")
			.with_element(Box::new(Textfield::new("name").with_title("Your name")))
	}

	#[test]
	fn test_element_lookup() {
		let def = definition();
		assert!(def.element("name").is_some());
		assert!(def.element("missing").is_none());
		assert_eq!(def.cardinality_of("name"), Some(Cardinality::Single));
	}

	#[test]
	fn test_form_page_labels_inputs() {
		let markup = definition().render_form();
		assert!(markup.contains("<label for=\"edit-name\">Your name</label>"));
		assert!(markup.contains("name=\"name\""));
		assert!(markup.contains("action=\"/webform/contact\""));
	}

	#[test]
	fn test_error_messages_rendered() {
		let markup =
			definition().render_form_with_errors(&["Your name field is required.".to_string()]);
		assert!(markup.contains("messages--error"));
		assert!(markup.contains("Your name field is required."));
	}
}
