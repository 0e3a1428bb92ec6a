//! Display-only elements: rendered on the form page, absent from records.

use crate::element::{ElementResult, SubmissionContext, WebformElement};
use crate::render::escape_html;

/// Literal markup shown on the form page.
#[derive(Debug, Clone)]
pub struct Markup {
	name: String,
	markup: String,
}

impl Markup {
	pub fn new(name: impl Into<String>, markup: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			markup: markup.into(),
		}
	}
}

impl WebformElement for Markup {
	fn name(&self) -> &str {
		&self.name
	}

	fn title(&self) -> &str {
		&self.name
	}

	fn is_display_only(&self) -> bool {
		true
	}

	fn clean(
		&self,
		_value: Option<&serde_json::Value>,
		_ctx: &SubmissionContext<'_>,
	) -> ElementResult<serde_json::Value> {
		Ok(serde_json::Value::Null)
	}

	fn render_input(&self, path: &str, _value: &serde_json::Value) -> String {
		// The markup is author-supplied and rendered verbatim.
		format!(
			"<div class=\"webform-markup\" data-name=\"{}\">{}</div>",
			escape_html(path),
			self.markup
		)
	}
}

/// A collapsible details/summary block.
#[derive(Debug, Clone)]
pub struct Details {
	name: String,
	title: String,
	body: String,
	open: bool,
}

impl Details {
	pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			title: title.into(),
			body: String::new(),
			open: false,
		}
	}

	pub fn with_body(mut self, body: impl Into<String>) -> Self {
		self.body = body.into();
		self
	}

	pub fn open(mut self) -> Self {
		self.open = true;
		self
	}
}

impl WebformElement for Details {
	fn name(&self) -> &str {
		&self.name
	}

	fn title(&self) -> &str {
		&self.title
	}

	fn is_display_only(&self) -> bool {
		true
	}

	fn clean(
		&self,
		_value: Option<&serde_json::Value>,
		_ctx: &SubmissionContext<'_>,
	) -> ElementResult<serde_json::Value> {
		Ok(serde_json::Value::Null)
	}

	fn render_input(&self, path: &str, _value: &serde_json::Value) -> String {
		format!(
			"<details data-name=\"{}\"{}><summary>{}</summary>{}</details>",
			escape_html(path),
			if self.open { " open" } else { "" },
			escape_html(&self.title),
			self.body
		)
	}
}
