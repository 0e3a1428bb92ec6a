//! The element abstraction every webform element type implements.

use crate::cardinality::Cardinality;
use crate::entity::EntityStore;
use crate::record::RecordValue;

/// Validation failure for a single element.
///
/// The `Display` form of each variant is the user-visible message rendered
/// into the error page, e.g. `Enter a value field is required.`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElementError {
	#[error("{title} field is required.")]
	Required { title: String },
	#[error("{title}: '{choice}' is not a valid choice.")]
	InvalidChoice { title: String, choice: String },
	#[error("{title}: cannot hold more than {limit} values.")]
	TooManyValues { title: String, limit: u32 },
	#[error("{title}: unknown {target_type} '{id}'.")]
	UnknownEntity {
		title: String,
		target_type: String,
		id: String,
	},
	#[error("{title}: {message}")]
	InvalidValue { title: String, message: String },
}

pub type ElementResult<T> = Result<T, ElementError>;

/// Per-submission context handed to [`WebformElement::clean`].
///
/// Carries the collaborators an element may need to resolve submitted
/// values; today that is only the entity store backing entity-reference
/// elements.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionContext<'a> {
	pub entities: &'a EntityStore,
}

/// A single webform element.
///
/// Implementations own their configuration (name, title, defaults, options)
/// and know how to validate a submitted value subtree, render their form
/// input control, and present a cleaned value for the submission view and
/// the serialized record.
pub trait WebformElement: Send + Sync {
	/// Machine name, also the root of the element's field path.
	fn name(&self) -> &str;

	/// Human-readable title rendered as the element's `<label>`.
	fn title(&self) -> &str;

	fn required(&self) -> bool {
		false
	}

	fn cardinality(&self) -> Cardinality {
		Cardinality::Single
	}

	/// Display-only elements render no input control and contribute nothing
	/// to the submission record.
	fn is_display_only(&self) -> bool {
		false
	}

	/// Validate and normalize the submitted value subtree for this element.
	///
	/// `value` is the subtree addressed by the element's name in the parsed
	/// submission input, or `None` when the field was not submitted at all;
	/// implementations fall back to their configured default in that case.
	fn clean(&self, value: Option<&serde_json::Value>, ctx: &SubmissionContext<'_>)
	-> ElementResult<serde_json::Value>;

	/// Form-page input control markup. `path` is the element's full field
	/// path (`name` for top-level elements, `parent[child]` inside
	/// composites); `value` is the value the control should show.
	fn render_input(&self, path: &str, value: &serde_json::Value) -> String;

	/// Human-readable rendering of a cleaned value for the submission view.
	fn format_value(&self, value: &serde_json::Value) -> String {
		crate::render::display_value(value)
	}

	/// The cleaned value's shape in the serialized submission record.
	///
	/// The default conversion covers scalars and lists; elements whose
	/// record entry is an ordered map (attributes) override this.
	fn record_value(&self, cleaned: &serde_json::Value) -> RecordValue {
		RecordValue::from_json(cleaned)
	}
}
