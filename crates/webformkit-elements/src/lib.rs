//! Webform element model and submission pipeline.
//!
//! This crate provides everything a submitted form passes through:
//! element types and their validation ([`elements`]), ordered form
//! definitions ([`WebformDefinition`]) resolved by id through a
//! [`FormRegistry`], and [`process_submission`], which turns bound input
//! into a rendered submission view plus a serialized [`SubmissionRecord`].

pub mod attributes;
pub mod cardinality;
pub mod definition;
pub mod element;
pub mod elements;
pub mod entity;
pub mod paths;
pub mod record;
pub mod registry;
pub mod render;
pub mod submission;

pub use attributes::ElementAttributes;
pub use cardinality::Cardinality;
pub use definition::WebformDefinition;
pub use element::{ElementError, ElementResult, SubmissionContext, WebformElement};
pub use entity::{Entity, EntityStore};
pub use record::{RecordValue, SubmissionRecord};
pub use registry::{FormRegistry, RegistryError, RegistryResult};
pub use submission::{
	SubmissionInput, SubmissionOutcome, SubmissionRejection, process_submission,
};
