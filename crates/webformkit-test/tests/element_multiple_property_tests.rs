//! Scenario: the `multiple` property across element types.

use rstest::rstest;
use serde_json::json;
use webformkit_test::{Expected, SubmissionInput, fixture_registry, submit_and_expect};

#[rstest]
#[case("textfield_single", json!(false))]
#[case("textfield_multiple", json!(true))]
#[case("textfield_multiple_limit", json!(5))]
#[case("select_single", json!(false))]
#[case("select_multiple", json!(true))]
#[case("checkboxes", json!(true))]
#[case("entity_multiple_limit", json!(2))]
#[case("entity_checkboxes_limit", json!(3))]
fn test_multiple_property_values(#[case] name: &str, #[case] expected: serde_json::Value) {
	let registry = fixture_registry();
	let definition = registry.get("test_element_multiple_property").unwrap();
	let cardinality = definition
		.cardinality_of(name)
		.unwrap_or_else(|| panic!("no element named {name}"));
	assert_eq!(cardinality.to_property_value(), expected);
}

#[test]
fn test_default_submission_record_shapes() {
	// Single-valued elements record scalars, multi-valued ones record lists
	// even when they hold one item.
	submit_and_expect(
		&fixture_registry(),
		"test_element_multiple_property",
		SubmissionInput::new(),
		Expected::record(concat!(
			"textfield_single: first\n",
			"textfield_multiple:\n  - one\n  - two\n",
			"textfield_multiple_limit:\n  - one\n",
			"select_single: one\n",
			"select_multiple:\n  - one\n  - two\n",
			"checkboxes:\n  - one\n",
			"entity_multiple_limit:\n  - '1'\n",
			"entity_checkboxes_limit:\n  - '1'\n  - '2'",
		)),
	)
	.unwrap();
}

#[test]
fn test_scalar_input_to_a_multiple_element_becomes_a_list() {
	let input = SubmissionInput::new().with("textfield_multiple", json!("solo"));
	submit_and_expect(
		&fixture_registry(),
		"test_element_multiple_property",
		input,
		Expected::record(concat!(
			"textfield_single: first\n",
			"textfield_multiple:\n  - solo\n",
			"textfield_multiple_limit:\n  - one\n",
			"select_single: one\n",
			"select_multiple:\n  - one\n  - two\n",
			"checkboxes:\n  - one\n",
			"entity_multiple_limit:\n  - '1'\n",
			"entity_checkboxes_limit:\n  - '1'\n  - '2'",
		)),
	)
	.unwrap();
}

#[test]
fn test_resubmitting_identical_input_is_idempotent() {
	// submit_and_expect itself runs the pipeline twice; running the whole
	// scenario again must also see the same record.
	let registry = fixture_registry();
	for _ in 0..2 {
		submit_and_expect(
			&registry,
			"test_element_multiple_property",
			SubmissionInput::new().with("textfield_single", json!("again")),
			Expected::record(concat!(
				"textfield_single: again\n",
				"textfield_multiple:\n  - one\n  - two\n",
				"textfield_multiple_limit:\n  - one\n",
				"select_single: one\n",
				"select_multiple:\n  - one\n  - two\n",
				"checkboxes:\n  - one\n",
				"entity_multiple_limit:\n  - '1'\n",
				"entity_checkboxes_limit:\n  - '1'\n  - '2'",
			)),
		)
		.unwrap();
	}
}
