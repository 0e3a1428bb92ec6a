//! The bundled form fixtures the scenario tests run against.
//!
//! Each function builds one pre-registered form configuration;
//! [`fixture_registry`] registers them all into a fresh registry. Nothing
//! here is cached: every call constructs new state, so tests never share
//! mutable fixtures.

use webformkit_elements::{
	Cardinality, FormRegistry, WebformDefinition,
	elements::{
		AttributesElement, CheckboxValue, Checkboxes, Composite, Details, EntityReference,
		EntityWidget, Markup, Select, Textfield, ValueEntry,
	},
};

/// A registry holding every bundled fixture.
pub fn fixture_registry() -> FormRegistry {
	let mut registry = FormRegistry::new();
	registry.register(test_element_attributes());
	registry.register(test_element_checkbox_value());
	registry.register(test_element_entity_reference());
	registry.register(test_element_excluded_columns());
	registry.register(test_element_multiple_property());
	registry
}

/// One attributes editor: classes `one`/`two` picked from the options,
/// `four` entered free-form, a default style and one custom attribute.
pub fn test_element_attributes() -> WebformDefinition {
	WebformDefinition::new("test_element_attributes", "Test: element attributes").with_element(
		Box::new(
			AttributesElement::new("webform_element_attributes")
				.with_title("Element attributes")
				.with_class_options(vec!["one".into(), "two".into(), "three".into()])
				.with_default_classes(vec!["one".into(), "two".into()])
				.with_default_other("four")
				.with_default_style("color: red")
				.with_default_custom("custom: test"),
		),
	)
}

/// Three checkbox/value elements: unchecked, checked with a default value
/// (the literal string `{default_value}`), and checked over a select.
pub fn test_element_checkbox_value() -> WebformDefinition {
	WebformDefinition::new("test_element_checkbox_value", "Test: checkbox value")
		.with_element(Box::new(
			CheckboxValue::new("checkbox_value_empty")
				.with_title("Checkbox value empty")
				.with_entry_title("Enter a value"),
		))
		.with_element(Box::new(
			CheckboxValue::new("checkbox_value_filled")
				.with_title("Checkbox value filled")
				.with_entry_title("Enter a value")
				.checked()
				.with_default_value("{default_value}"),
		))
		.with_element(Box::new(
			CheckboxValue::new("checkbox_value_select_other")
				.with_title("Checkbox value select other")
				.with_entry_title("Select a value")
				.with_entry(ValueEntry::Select {
					options: vec!["One".into(), "Two".into(), "Three".into(), "Four".into()],
				})
				.checked()
				.with_default_value("Four"),
		))
}

/// Five entity references defaulting to user 1: three single-valued, two
/// list-valued.
pub fn test_element_entity_reference() -> WebformDefinition {
	WebformDefinition::new("test_element_entity_reference", "Test: entity reference")
		.with_element(Box::new(
			EntityReference::new("entity_autocomplete", "user")
				.with_title("Entity autocomplete")
				.with_default_ids(vec![1]),
		))
		.with_element(Box::new(
			EntityReference::new("entity_select", "user")
				.with_title("Entity select")
				.with_widget(EntityWidget::Select)
				.with_default_ids(vec![1]),
		))
		.with_element(Box::new(
			EntityReference::new("entity_radios", "user")
				.with_title("Entity radios")
				.with_widget(EntityWidget::Radios)
				.with_default_ids(vec![1]),
		))
		.with_element(Box::new(
			EntityReference::new("entity_checkboxes", "user")
				.with_title("Entity checkboxes")
				.with_widget(EntityWidget::Checkboxes)
				.with_multiple(Cardinality::Unlimited)
				.with_default_ids(vec![1]),
		))
		.with_element(Box::new(
			EntityReference::new("entity_multiple", "user")
				.with_title("Entity multiple")
				.with_multiple(Cardinality::Unlimited)
				.with_default_ids(vec![1]),
		))
}

/// A composite whose `markup` and `details` sub-elements are excluded;
/// only the `textfield` sub-field takes part in the form.
pub fn test_element_excluded_columns() -> WebformDefinition {
	WebformDefinition::new("test_element_excluded_columns", "Test: excluded columns").with_element(
		Box::new(
			Composite::new("composite")
				.with_title("Composite")
				.with_sub_element(Box::new(Textfield::new("textfield").with_title("Text field")))
				.with_sub_element(Box::new(Markup::new(
					"markup",
					"<p>This is a markup element.</p>",
				)))
				.with_sub_element(Box::new(
					Details::new("details", "More details").with_body("<p>Hidden help.</p>"),
				))
				.with_excluded(vec!["markup".to_string(), "details".to_string()]),
		),
	)
}

/// Eight elements spanning every cardinality form:
/// `false, true, 5, false, true, true, 2, 3`.
pub fn test_element_multiple_property() -> WebformDefinition {
	let options = vec!["one".to_string(), "two".to_string(), "three".to_string()];
	WebformDefinition::new("test_element_multiple_property", "Test: multiple property")
		.with_element(Box::new(
			Textfield::new("textfield_single")
				.with_title("Textfield single")
				.with_default("first"),
		))
		.with_element(Box::new(
			Textfield::new("textfield_multiple")
				.with_title("Textfield multiple")
				.with_multiple(Cardinality::Unlimited)
				.with_default_list(vec!["one".into(), "two".into()]),
		))
		.with_element(Box::new(
			Textfield::new("textfield_multiple_limit")
				.with_title("Textfield multiple limit")
				.with_multiple(Cardinality::Limit(5))
				.with_default_list(vec!["one".into()]),
		))
		.with_element(Box::new(
			Select::new("select_single", options.clone())
				.with_title("Select single")
				.with_default("one"),
		))
		.with_element(Box::new(
			Select::new("select_multiple", options.clone())
				.with_title("Select multiple")
				.with_multiple(Cardinality::Unlimited)
				.with_default_list(vec!["one".into(), "two".into()]),
		))
		.with_element(Box::new(
			Checkboxes::new("checkboxes", options)
				.with_title("Checkboxes")
				.with_default(vec!["one".into()]),
		))
		.with_element(Box::new(
			EntityReference::new("entity_multiple_limit", "user")
				.with_title("Entity multiple limit")
				.with_multiple(Cardinality::Limit(2))
				.with_default_ids(vec![1]),
		))
		.with_element(Box::new(
			EntityReference::new("entity_checkboxes_limit", "node")
				.with_title("Entity checkboxes limit")
				.with_widget(EntityWidget::Checkboxes)
				.with_multiple(Cardinality::Limit(3))
				.with_default_ids(vec![1, 2]),
		))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_registry_holds_all_fixtures() {
		let registry = fixture_registry();
		let ids: Vec<&str> = registry.ids().collect();
		assert_eq!(
			ids,
			[
				"test_element_attributes",
				"test_element_checkbox_value",
				"test_element_entity_reference",
				"test_element_excluded_columns",
				"test_element_multiple_property",
			]
		);
	}

	#[test]
	fn test_fixtures_are_rebuilt_per_call() {
		// Two calls must not share state; definitions are value-equal but
		// independently owned.
		let first = fixture_registry();
		let second = fixture_registry();
		assert_eq!(
			first.get("test_element_attributes").unwrap().render_form(),
			second.get("test_element_attributes").unwrap().render_form(),
		);
	}
}
