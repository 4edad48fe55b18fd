//! A single `<field>` element of a document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::document::field_value::FieldValue;

/// Attribute name holding a field's identifying name.
pub const NAME_ATTRIBUTE: &str = "name";

/// XML attribute map of a field, a document or an operation element.
///
/// Insertion order is kept so that rendering the same input twice produces
/// byte-identical output.
pub type Attributes = IndexMap<String, FieldValue>;

/// One named value of a document, with optional metadata attributes such as
/// `boost`.
///
/// The field's name lives in its attribute map under `name`. It is set once at
/// construction; rewriting it through [`Field::attributes_mut`] leaves
/// name-based lookups on the parent document unspecified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    attributes: Attributes,
    value: FieldValue,
}

impl Field {
    /// Create a field from an attribute map and a value.
    ///
    /// Neither the attributes nor the value are validated.
    pub fn new(attributes: Attributes, value: FieldValue) -> Self {
        Field { attributes, value }
    }

    /// Create a field carrying only a `name` attribute.
    pub fn named<S: Into<String>, V: Into<FieldValue>>(name: S, value: V) -> Self {
        let mut attributes = Attributes::new();
        attributes.insert(NAME_ATTRIBUTE.to_string(), FieldValue::Text(name.into()));
        Field::new(attributes, value.into())
    }

    /// The value of the `name` attribute, or an empty string when it is missing.
    pub fn name(&self) -> String {
        self.attributes
            .get(NAME_ATTRIBUTE)
            .map(FieldValue::to_text)
            .unwrap_or_default()
    }

    /// The field's value.
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Replace the field's value.
    pub fn set_value<V: Into<FieldValue>>(&mut self, value: V) {
        self.value = value.into();
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Set a metadata attribute, replacing any previous value for `key`.
    pub fn set_attribute<K: Into<String>, V: Into<FieldValue>>(&mut self, key: K, value: V) {
        self.attributes.insert(key.into(), value.into());
    }

    /// The field's `boost` attribute, if set to a number.
    pub fn boost(&self) -> Option<f64> {
        self.attributes.get("boost").and_then(FieldValue::as_float)
    }
}
