//! Resolving form identifiers to definitions.

use std::collections::BTreeMap;

use crate::definition::WebformDefinition;
use crate::entity::EntityStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	#[error("fixture not found: {id}")]
	FixtureNotFound { id: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registered form definitions plus the entity store submissions resolve
/// against.
///
/// # Examples
///
/// ```
/// use webformkit_elements::{FormRegistry, RegistryError, WebformDefinition};
///
/// let mut registry = FormRegistry::new();
/// registry.register(WebformDefinition::new("contact", "Contact"));
/// assert!(registry.get("contact").is_ok());
/// assert!(matches!(
///     registry.get("missing"),
///     Err(RegistryError::FixtureNotFound { .. }),
/// ));
/// ```
#[derive(Debug, Default)]
pub struct FormRegistry {
	forms: BTreeMap<String, WebformDefinition>,
	entities: EntityStore,
}

impl FormRegistry {
	pub fn new() -> Self {
		Self {
			forms: BTreeMap::new(),
			entities: EntityStore::with_defaults(),
		}
	}

	pub fn with_entities(mut self, entities: EntityStore) -> Self {
		self.entities = entities;
		self
	}

	pub fn register(&mut self, definition: WebformDefinition) {
		self.forms.insert(definition.id().to_string(), definition);
	}

	pub fn get(&self, id: &str) -> RegistryResult<&WebformDefinition> {
		self.forms
			.get(id)
			.ok_or_else(|| RegistryError::FixtureNotFound { id: id.to_string() })
	}

	pub fn entities(&self) -> &EntityStore {
		&self.entities
	}

	pub fn ids(&self) -> impl Iterator<Item = &str> {
		self.forms.keys().map(String::as_str)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_missing_fixture() {
		let registry = FormRegistry::new();
		assert_eq!(
			registry.get("absent").unwrap_err(),
			RegistryError::FixtureNotFound {
				id: "absent".to_string()
			}
		);
	}

	#[test]
	fn test_registered_fixture_resolves() {
		let mut registry = FormRegistry::new();
		registry.register(WebformDefinition::new("a", "A"));
		assert_eq!(registry.get("a").unwrap().id(), "a");
		assert_eq!(registry.ids().collect::<Vec<_>>(), ["a"]);
	}
}
