//! In-memory entity store backing entity-reference elements.

use std::collections::BTreeMap;

/// A referenceable entity: numeric id plus display label.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Entity {
	pub id: u64,
	pub label: String,
}

/// Entities grouped by target type (`user`, `node`, ...).
///
/// # Examples
///
/// ```
/// use webformkit_elements::EntityStore;
///
/// let store = EntityStore::with_defaults();
/// assert!(store.contains("user", 1));
/// assert_eq!(store.label("user", 1), Some("admin"));
/// assert!(!store.contains("user", 99));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
	by_type: BTreeMap<String, BTreeMap<u64, Entity>>,
}

impl EntityStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// The store the bundled fixtures run against: user 1 (`admin`) and a
	/// couple of nodes.
	pub fn with_defaults() -> Self {
		let mut store = Self::new();
		store.add("user", 1, "admin");
		store.add("node", 1, "First page");
		store.add("node", 2, "Second page");
		store
	}

	pub fn add(&mut self, target_type: impl Into<String>, id: u64, label: impl Into<String>) {
		let target_type = target_type.into();
		self.by_type.entry(target_type).or_default().insert(
			id,
			Entity {
				id,
				label: label.into(),
			},
		);
	}

	pub fn contains(&self, target_type: &str, id: u64) -> bool {
		self.by_type
			.get(target_type)
			.is_some_and(|entities| entities.contains_key(&id))
	}

	pub fn label(&self, target_type: &str, id: u64) -> Option<&str> {
		self.by_type
			.get(target_type)
			.and_then(|entities| entities.get(&id))
			.map(|entity| entity.label.as_str())
	}

	pub fn ids(&self, target_type: &str) -> Vec<u64> {
		self.by_type
			.get(target_type)
			.map(|entities| entities.keys().copied().collect())
			.unwrap_or_default()
	}
}
