//! Scenario: checkbox/value elements.

use serde_json::json;
use webformkit_test::{
	Expected, HarnessError, SubmissionInput, fixture_registry, submit_and_expect,
};

#[test]
fn test_default_submission_record() {
	submit_and_expect(
		&fixture_registry(),
		"test_element_checkbox_value",
		SubmissionInput::new(),
		Expected::record(
			"checkbox_value_empty: ''\ncheckbox_value_filled: '{default_value}'\ncheckbox_value_select_other: Four",
		),
	)
	.unwrap();
}

#[test]
fn test_checking_the_empty_box_without_a_value_is_rejected() {
	let input = SubmissionInput::new().with("checkbox_value_empty[checkbox]", json!(true));
	let err = submit_and_expect(
		&fixture_registry(),
		"test_element_checkbox_value",
		input,
		Expected::record(""),
	)
	.unwrap_err();
	let HarnessError::SubmissionRejected { messages } = err else {
		panic!("expected a rejection, got: {err}");
	};
	assert_eq!(messages, ["Enter a value field is required."]);
}

#[test]
fn test_checking_the_empty_box_with_a_value_is_accepted() {
	let input = SubmissionInput::new()
		.with("checkbox_value_empty[checkbox]", json!(true))
		.with("checkbox_value_empty[value]", json!("typed"));
	submit_and_expect(
		&fixture_registry(),
		"test_element_checkbox_value",
		input,
		Expected::record(
			"checkbox_value_empty: typed\ncheckbox_value_filled: '{default_value}'\ncheckbox_value_select_other: Four",
		),
	)
	.unwrap();
}

#[test]
fn test_submission_view_shows_the_select_default() {
	submit_and_expect(
		&fixture_registry(),
		"test_element_checkbox_value",
		SubmissionInput::new(),
		Expected::label_values(vec![
			("Checkbox value filled", "{default_value}"),
			("Checkbox value select other", "Four"),
		]),
	)
	.unwrap();
}

#[test]
fn test_unchecking_the_filled_box_clears_its_value() {
	let input = SubmissionInput::new().with("checkbox_value_filled[checkbox]", json!(false));
	submit_and_expect(
		&fixture_registry(),
		"test_element_checkbox_value",
		input,
		Expected::record(
			"checkbox_value_empty: ''\ncheckbox_value_filled: ''\ncheckbox_value_select_other: Four",
		),
	)
	.unwrap();
}
