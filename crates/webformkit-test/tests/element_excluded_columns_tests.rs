//! Scenario: composite elements with excluded columns.

use http::StatusCode;
use serde_json::json;
use webformkit_test::{
	Expected, SubmissionInput, WebformClient, fixture_registry, submit_and_expect,
};

#[tokio::test]
async fn test_form_page_renders_only_included_sub_fields() {
	let client = WebformClient::for_registry(fixture_registry());
	let response = client
		.get("/webform/test_element_excluded_columns")
		.await
		.unwrap();
	response
		.assert_status(StatusCode::OK)
		.assert_contains("name=\"composite[textfield]\"")
		.assert_not_contains("markup")
		.assert_not_contains("details");
}

#[test]
fn test_excluded_sub_fields_never_reach_the_record() {
	submit_and_expect(
		&fixture_registry(),
		"test_element_excluded_columns",
		SubmissionInput::new().with("composite[textfield]", json!("hello")),
		Expected::record("composite:\n  textfield: hello"),
	)
	.unwrap();
}

#[tokio::test]
async fn test_posting_the_form_shows_the_submission_view() {
	let client = WebformClient::for_registry(fixture_registry());
	let input = SubmissionInput::new().with("composite[textfield]", json!("hello"));
	let response = client
		.post_form("/webform/test_element_excluded_columns", &input)
		.await
		.unwrap();
	response
		.assert_status(StatusCode::OK)
		.assert_contains("Text field: hello")
		.assert_not_contains("markup");
}
