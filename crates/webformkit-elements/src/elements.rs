//! Concrete element types.

pub mod attributes_element;
pub mod checkbox;
pub mod checkbox_value;
pub mod composite;
pub mod display;
pub mod entity_reference;
pub mod select;
pub mod textfield;

pub use attributes_element::AttributesElement;
pub use checkbox::Checkbox;
pub use checkbox_value::{CheckboxValue, ValueEntry};
pub use composite::Composite;
pub use display::{Details, Markup};
pub use entity_reference::{EntityReference, EntityWidget};
pub use select::{Checkboxes, Select};
pub use textfield::Textfield;
