//! The submit-and-expect harness.
//!
//! One call drives a whole scenario: look the fixture up, run the submission
//! pipeline, and check the outcome against an expectation. The pipeline runs
//! twice with the same input; a second run producing a different outcome is
//! reported as an error in its own right.

use thiserror::Error;
use tracing::debug;

use webformkit_elements::{
	FormRegistry, RegistryError, SubmissionInput, SubmissionOutcome, process_submission,
};

use crate::assertions::{has_label_value, line_diff, normalize_block};

/// What a scenario expects from a successful submission.
#[derive(Debug, Clone)]
pub enum Expected {
	/// The serialized submission record, byte for byte.
	Record(String),
	/// (label, value) pairs the submission view must render.
	LabelValues(Vec<(String, String)>),
}

impl Expected {
	pub fn record(block: impl Into<String>) -> Self {
		Self::Record(block.into())
	}

	pub fn label_values(pairs: Vec<(&str, &str)>) -> Self {
		Self::LabelValues(
			pairs
				.into_iter()
				.map(|(label, value)| (label.to_string(), value.to_string()))
				.collect(),
		)
	}
}

#[derive(Debug, Error)]
pub enum HarnessError {
	#[error(transparent)]
	FixtureNotFound(#[from] RegistryError),

	#[error("submission rejected: {}", messages.join("; "))]
	SubmissionRejected { messages: Vec<String> },

	#[error("submission record mismatch:\n{diff}")]
	RecordMismatch { diff: String },

	#[error("submission view does not render '{value}' under label '{label}'")]
	LabelValueNotFound { label: String, value: String },

	#[error("resubmitting the same input changed the outcome:\n{diff}")]
	NotIdempotent { diff: String },
}

pub type HarnessResult<T> = Result<T, HarnessError>;

/// Submit `input` against the registered form `form_id` and check the
/// outcome against `expected`.
///
/// # Examples
///
/// ```
/// use webformkit_test::{fixture_registry, submit_and_expect, Expected, SubmissionInput};
///
/// submit_and_expect(
///     &fixture_registry(),
///     "test_element_checkbox_value",
///     SubmissionInput::new(),
///     Expected::label_values(vec![("Checkbox value select other", "Four")]),
/// )
/// .unwrap();
/// ```
pub fn submit_and_expect(
	registry: &FormRegistry,
	form_id: &str,
	input: SubmissionInput,
	expected: Expected,
) -> HarnessResult<()> {
	let definition = registry.get(form_id)?;
	debug!(form = form_id, "running scenario submission");

	let outcome = run(registry, definition, &input)?;
	let second = run(registry, definition, &input)?;
	if second.record != outcome.record || second.markup != outcome.markup {
		return Err(HarnessError::NotIdempotent {
			diff: line_diff(
				&outcome.record.to_yaml_block(),
				&second.record.to_yaml_block(),
			),
		});
	}

	match expected {
		Expected::Record(block) => {
			let actual = normalize_block(&outcome.record.to_yaml_block());
			let block = normalize_block(&block);
			if actual != block {
				return Err(HarnessError::RecordMismatch {
					diff: line_diff(&block, &actual),
				});
			}
		}
		Expected::LabelValues(pairs) => {
			for (label, value) in pairs {
				if !has_label_value(&outcome.markup, &label, &value) {
					return Err(HarnessError::LabelValueNotFound { label, value });
				}
			}
		}
	}
	Ok(())
}

fn run(
	registry: &FormRegistry,
	definition: &webformkit_elements::WebformDefinition,
	input: &SubmissionInput,
) -> HarnessResult<SubmissionOutcome> {
	process_submission(definition, registry.entities(), input)
		.map_err(|rejection| HarnessError::SubmissionRejected {
			messages: rejection.messages,
		})
}
