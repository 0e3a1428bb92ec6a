//! The attribute set edited by the `webform_element_attributes` element.

use crate::element::{ElementError, ElementResult};
use crate::record::RecordValue;

/// A rendered element's attribute set: class list, inline style, and custom
/// attributes.
///
/// The class list is the merge of the classes picked from the configured
/// options and the free-form "other" entry, in that order, de-duplicated
/// while preserving first occurrence.
///
/// # Examples
///
/// ```
/// use webformkit_elements::ElementAttributes;
///
/// let attrs = ElementAttributes::new()
///     .with_classes(vec!["one".into(), "two".into()])
///     .with_other_classes("two four")
///     .with_style("color: red");
/// assert_eq!(attrs.classes(), &["one", "two", "four"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct ElementAttributes {
	classes: Vec<String>,
	style: String,
	custom: Vec<(String, String)>,
}

impl ElementAttributes {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the class list with the given classes, de-duplicated.
	pub fn with_classes(mut self, classes: Vec<String>) -> Self {
		self.classes.clear();
		for class in classes {
			self.push_class(class);
		}
		self
	}

	/// Merge a whitespace-separated free-form class entry into the list.
	pub fn with_other_classes(mut self, other: &str) -> Self {
		for class in other.split_whitespace() {
			self.push_class(class.to_string());
		}
		self
	}

	pub fn with_style(mut self, style: impl Into<String>) -> Self {
		self.style = style.into();
		self
	}

	pub fn with_custom(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.custom.push((name.into(), value.into()));
		self
	}

	/// Parse a YAML map of custom attributes, e.g. `custom: test`.
	pub fn with_custom_yaml(mut self, yaml: &str) -> ElementResult<Self> {
		if yaml.trim().is_empty() {
			return Ok(self);
		}
		let parsed: serde_yaml::Value =
			serde_yaml::from_str(yaml).map_err(|e| ElementError::InvalidValue {
				title: "Custom attributes".to_string(),
				message: format!("invalid attribute mapping: {e}"),
			})?;
		let map = parsed.as_mapping().ok_or_else(|| ElementError::InvalidValue {
			title: "Custom attributes".to_string(),
			message: "custom attributes must be a mapping".to_string(),
		})?;
		for (key, value) in map {
			let name = key
				.as_str()
				.ok_or_else(|| ElementError::InvalidValue {
					title: "Custom attributes".to_string(),
					message: "attribute names must be strings".to_string(),
				})?
				.to_string();
			let value = match value {
				serde_yaml::Value::String(s) => s.clone(),
				serde_yaml::Value::Bool(b) => b.to_string(),
				serde_yaml::Value::Number(n) => n.to_string(),
				other => {
					return Err(ElementError::InvalidValue {
						title: "Custom attributes".to_string(),
						message: format!("attribute '{name}' has unsupported value {other:?}"),
					});
				}
			};
			self.custom.push((name, value));
		}
		Ok(self)
	}

	fn push_class(&mut self, class: String) {
		if !class.is_empty() && !self.classes.contains(&class) {
			self.classes.push(class);
		}
	}

	pub fn classes(&self) -> &[String] {
		&self.classes
	}

	pub fn style(&self) -> &str {
		&self.style
	}

	pub fn custom(&self) -> &[(String, String)] {
		&self.custom
	}

	/// The record shape: `class` list, `style`, then each custom attribute
	/// as its own key, all order-preserving. Empty parts are omitted.
	pub fn to_record_value(&self) -> RecordValue {
		let mut entries = Vec::new();
		if !self.classes.is_empty() {
			entries.push((
				"class".to_string(),
				RecordValue::List(
					self.classes
						.iter()
						.map(|c| RecordValue::Scalar(serde_json::Value::String(c.clone())))
						.collect(),
				),
			));
		}
		if !self.style.is_empty() {
			entries.push((
				"style".to_string(),
				RecordValue::Scalar(serde_json::Value::String(self.style.clone())),
			));
		}
		for (name, value) in &self.custom {
			entries.push((
				name.clone(),
				RecordValue::Scalar(serde_json::Value::String(value.clone())),
			));
		}
		RecordValue::Map(entries)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_class_merge_preserves_order_and_dedupes() {
		let attrs = ElementAttributes::new()
			.with_classes(vec!["one".into(), "two".into(), "one".into()])
			.with_other_classes("four two");
		assert_eq!(attrs.classes(), &["one", "two", "four"]);
	}

	#[test]
	fn test_custom_yaml_mapping() {
		let attrs = ElementAttributes::new()
			.with_custom_yaml("custom: test")
			.unwrap();
		assert_eq!(attrs.custom(), &[("custom".to_string(), "test".to_string())]);
	}

	#[test]
	fn test_custom_yaml_rejects_non_mapping() {
		let err = ElementAttributes::new()
			.with_custom_yaml("- a\n- b")
			.unwrap_err();
		assert!(matches!(err, ElementError::InvalidValue { .. }));
	}

	#[test]
	fn test_record_value_order() {
		let attrs = ElementAttributes::new()
			.with_classes(vec!["one".into()])
			.with_style("color: red")
			.with_custom("custom", "test");
		let RecordValue::Map(entries) = attrs.to_record_value() else {
			panic!("expected map record value");
		};
		let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
		assert_eq!(keys, ["class", "style", "custom"]);
	}
}
