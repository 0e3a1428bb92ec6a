//! Element cardinality: the `multiple` property of a value element.

use crate::element::{ElementError, ElementResult};

/// How many values an element stores.
///
/// Serializes to the property form used in form definitions: `false` for a
/// single value, `true` for unlimited values, and an integer for a capped
/// list.
///
/// # Examples
///
/// ```
/// use webformkit_elements::Cardinality;
/// use serde_json::json;
///
/// assert_eq!(Cardinality::Single.to_property_value(), json!(false));
/// assert_eq!(Cardinality::Unlimited.to_property_value(), json!(true));
/// assert_eq!(Cardinality::Limit(5).to_property_value(), json!(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cardinality {
	#[default]
	Single,
	Unlimited,
	Limit(u32),
}

impl Cardinality {
	pub fn is_multiple(self) -> bool {
		!matches!(self, Cardinality::Single)
	}

	pub fn to_property_value(self) -> serde_json::Value {
		match self {
			Cardinality::Single => serde_json::Value::Bool(false),
			Cardinality::Unlimited => serde_json::Value::Bool(true),
			Cardinality::Limit(n) => serde_json::json!(n),
		}
	}

	/// Parse the property form (`false` / `true` / integer).
	pub fn from_property_value(value: &serde_json::Value) -> Option<Self> {
		match value {
			serde_json::Value::Bool(false) => Some(Cardinality::Single),
			serde_json::Value::Bool(true) => Some(Cardinality::Unlimited),
			serde_json::Value::Number(n) => n.as_u64().map(|n| Cardinality::Limit(n as u32)),
			_ => None,
		}
	}

	/// Clean a submitted value against this cardinality with a per-item
	/// cleaner.
	///
	/// Single elements get exactly the item cleaner. Multiple elements
	/// accept a scalar (wrapped into a one-item list) or a list, and a
	/// capped list rejects overlong input with
	/// [`ElementError::TooManyValues`].
	pub fn clean_items<F>(
		self,
		title: &str,
		value: &serde_json::Value,
		mut clean_one: F,
	) -> ElementResult<serde_json::Value>
	where
		F: FnMut(&serde_json::Value) -> ElementResult<serde_json::Value>,
	{
		match self {
			Cardinality::Single => clean_one(value),
			Cardinality::Unlimited | Cardinality::Limit(_) => {
				let items: Vec<&serde_json::Value> = match value {
					serde_json::Value::Array(items) => items.iter().collect(),
					serde_json::Value::Null => vec![],
					other => vec![other],
				};
				if let Cardinality::Limit(limit) = self {
					if items.len() > limit as usize {
						return Err(ElementError::TooManyValues {
							title: title.to_string(),
							limit,
						});
					}
				}
				let mut cleaned = Vec::with_capacity(items.len());
				for item in items {
					cleaned.push(clean_one(item)?);
				}
				Ok(serde_json::Value::Array(cleaned))
			}
		}
	}
}
