//! # webformkit
//!
//! Fixture-driven submit/assert testing for webform-style forms.
//!
//! The workspace is split in two:
//!
//! - [`elements`]: the element model, form definitions, the fixture registry,
//!   and the submission pipeline that turns bound input into a rendered
//!   submission view plus a serialized [`elements::SubmissionRecord`].
//! - [`test`]: the harness itself: an in-process test client, assertion
//!   helpers, the bundled form fixtures, and [`test::submit_and_expect`].
//!
//! ```
//! use webformkit::test::{fixture_registry, submit_and_expect, Expected, SubmissionInput};
//!
//! let registry = fixture_registry();
//! let outcome = submit_and_expect(
//!     &registry,
//!     "test_element_checkbox_value",
//!     SubmissionInput::new(),
//!     Expected::label_values(vec![("Checkbox value select other", "Four")]),
//! );
//! assert!(outcome.is_ok());
//! ```

pub use webformkit_elements as elements;
pub use webformkit_test as test;
