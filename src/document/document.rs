//! Document structure for update messages.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::document::field::{Attributes, Field, NAME_ATTRIBUTE};
use crate::document::field_value::FieldValue;
use crate::error::{MessageError, Result};

/// Raw key/value document as supplied by callers.
pub type RawDocument = Map<String, Value>;

/// A document represents one `<doc>` element of an add message.
///
/// Fields are kept in insertion order, which is also their serialization
/// order. Field names need not be unique: a multi-valued field is simply
/// several fields sharing a name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document-level XML attributes such as `boost`
    attributes: Attributes,
    /// The fields of this document, in order
    fields: Vec<Field>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Document::default()
    }

    /// Build a document from a raw key/value map.
    ///
    /// Every key yields one field per value. A sequence yields one field per
    /// element, a scalar is treated as a one-element sequence, and elements
    /// whose textual form is empty are dropped. Nested sequences and maps are
    /// rejected with [`MessageError::MalformedInput`].
    pub fn from_raw(raw: &RawDocument) -> Result<Self> {
        let mut doc = Document::new();

        for (name, values) in raw {
            let values = match values {
                Value::Array(items) => items.as_slice(),
                scalar => std::slice::from_ref(scalar),
            };

            for value in values {
                let value = FieldValue::from_json(value).map_err(|e| match e {
                    MessageError::MalformedInput(msg) => {
                        MessageError::malformed_input(format!("field '{name}': {msg}"))
                    }
                    other => other,
                })?;
                if value.is_blank() {
                    continue;
                }
                doc.fields.push(Field::named(name.as_str(), value));
            }
        }

        Ok(doc)
    }

    /// All fields with the given name, in insertion order.
    pub fn fields_by_name(&self, name: &str) -> Vec<&Field> {
        self.fields.iter().filter(|f| f.name() == name).collect()
    }

    /// The first field with the given name.
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// The first field with the given name, mutably.
    pub fn field_by_name_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Append a field.
    ///
    /// `options` become the field's XML attributes; a `name` entry in them is
    /// overridden by `name`. Unlike [`Document::from_raw`], blank values are
    /// kept.
    ///
    /// ```
    /// use solr_message::document::{Attributes, Document, FieldValue};
    ///
    /// let mut doc = Document::new();
    /// let mut options = Attributes::new();
    /// options.insert("boost".to_string(), FieldValue::from(2.0));
    /// doc.add_field("title", "A Title", options);
    ///
    /// assert_eq!(doc.field_by_name("title").unwrap().boost(), Some(2.0));
    /// ```
    pub fn add_field<S, V>(&mut self, name: S, value: V, options: Attributes)
    where
        S: Into<String>,
        V: Into<FieldValue>,
    {
        let mut attributes = options;
        attributes.insert(NAME_ATTRIBUTE.to_string(), FieldValue::Text(name.into()));
        self.fields.push(Field::new(attributes, value.into()));
    }

    /// Append an already built field.
    pub fn push_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Remove every field with the given name, returning them in order.
    pub fn remove_fields(&mut self, name: &str) -> Vec<Field> {
        let (removed, kept): (Vec<Field>, Vec<Field>) = std::mem::take(&mut self.fields)
            .into_iter()
            .partition(|f| f.name() == name);
        self.fields = kept;
        removed
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Vec<Field> {
        &mut self.fields
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Set a document-level attribute such as `boost` or `commitWithin`.
    pub fn set_attribute<K: Into<String>, V: Into<FieldValue>>(&mut self, key: K, value: V) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Create a builder for constructing documents.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }
}

/// One element of add input: either a raw map still to be normalized, or a
/// document the caller already built.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentInput {
    Raw(RawDocument),
    Document(Document),
}

impl DocumentInput {
    /// Resolve the input into a document, normalizing raw maps.
    pub fn into_document(self) -> Result<Document> {
        match self {
            DocumentInput::Raw(raw) => Document::from_raw(&raw),
            DocumentInput::Document(doc) => Ok(doc),
        }
    }
}

impl From<RawDocument> for DocumentInput {
    fn from(raw: RawDocument) -> Self {
        DocumentInput::Raw(raw)
    }
}

impl From<Document> for DocumentInput {
    fn from(doc: Document) -> Self {
        DocumentInput::Document(doc)
    }
}

impl TryFrom<Value> for DocumentInput {
    type Error = MessageError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(DocumentInput::Raw(map)),
            other => Err(MessageError::malformed_input(format!(
                "document must be a key/value map, got: {other}"
            ))),
        }
    }
}

/// A builder for constructing documents in a fluent manner.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new() -> Self {
        DocumentBuilder::default()
    }

    /// Add a field with no extra attributes.
    pub fn field<S: Into<String>, V: Into<FieldValue>>(mut self, name: S, value: V) -> Self {
        self.document.add_field(name, value, Attributes::new());
        self
    }

    /// Add a field with extra attributes.
    pub fn field_with<S: Into<String>, V: Into<FieldValue>>(
        mut self,
        name: S,
        value: V,
        options: Attributes,
    ) -> Self {
        self.document.add_field(name, value, options);
        self
    }

    /// Set a document-level attribute.
    pub fn attribute<K: Into<String>, V: Into<FieldValue>>(mut self, key: K, value: V) -> Self {
        self.document.set_attribute(key, value);
        self
    }

    /// Build the final document.
    pub fn build(self) -> Document {
        self.document
    }
}
