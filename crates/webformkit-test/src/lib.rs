//! Test harness and fixtures for webformkit.
//!
//! The crate has three layers:
//!
//! - [`fixtures`]: the bundled form definitions scenarios run against, plus
//!   [`fixture_registry`] to register them all at once.
//! - [`harness`]: [`submit_and_expect`], the one-call submit/assert driver.
//! - [`client`] and [`response`]: an in-process HTTP simulation for tests
//!   that need the page-level view (rendered forms, status codes, error
//!   re-renders) rather than the pipeline outcome.
//!
//! # Examples
//!
//! ```
//! use webformkit_test::{fixture_registry, submit_and_expect, Expected, SubmissionInput};
//! use serde_json::json;
//!
//! submit_and_expect(
//!     &fixture_registry(),
//!     "test_element_excluded_columns",
//!     SubmissionInput::new().with("composite[textfield]", json!("hello")),
//!     Expected::record("composite:\n  textfield: hello"),
//! )
//! .unwrap();
//! ```

pub mod assertions;
pub mod client;
pub mod fixtures;
pub mod harness;
pub mod response;

pub use assertions::{assert_label_value, assert_record_eq, has_label_value};
pub use client::{ClientError, ClientResult, RequestHandler, WebformClient};
pub use fixtures::fixture_registry;
pub use harness::{Expected, HarnessError, HarnessResult, submit_and_expect};
pub use response::TestResponse;

pub use webformkit_elements::SubmissionInput;
