//! Update message builders.
//!
//! Each function is a pure mapping from its input to a fresh [`Message`]; no
//! state is shared between calls, so the builders may be used from any number
//! of threads at once.

use serde_json::Value;

use crate::document::document::{Document, DocumentInput, RawDocument};
use crate::document::field::{Attributes, Field, NAME_ATTRIBUTE};
use crate::document::field_value::FieldValue;
use crate::error::{MessageError, Result};
use crate::message::element::{Element, Message, Operation};

/// Input of [`add`]: one or several raw maps or documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Documents(Vec<DocumentInput>);

impl Documents {
    pub fn new() -> Self {
        Documents::default()
    }

    pub fn push<D: Into<DocumentInput>>(&mut self, doc: D) {
        self.0.push(doc.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<DocumentInput> {
        self.0
    }
}

impl From<DocumentInput> for Documents {
    fn from(doc: DocumentInput) -> Self {
        Documents(vec![doc])
    }
}

impl From<Document> for Documents {
    fn from(doc: Document) -> Self {
        Documents(vec![doc.into()])
    }
}

impl From<RawDocument> for Documents {
    fn from(raw: RawDocument) -> Self {
        Documents(vec![raw.into()])
    }
}

impl<D: Into<DocumentInput>> From<Vec<D>> for Documents {
    fn from(docs: Vec<D>) -> Self {
        Documents(docs.into_iter().map(Into::into).collect())
    }
}

impl<D: Into<DocumentInput>, const N: usize> From<[D; N]> for Documents {
    fn from(docs: [D; N]) -> Self {
        Documents(docs.into_iter().map(Into::into).collect())
    }
}

impl FromIterator<DocumentInput> for Documents {
    fn from_iter<I: IntoIterator<Item = DocumentInput>>(iter: I) -> Self {
        Documents(iter.into_iter().collect())
    }
}

impl TryFrom<Value> for Documents {
    type Error = MessageError;

    /// An object is a single raw document, an array a sequence of them.
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => items.into_iter().map(DocumentInput::try_from).collect(),
            single => Ok(Documents(vec![DocumentInput::try_from(single)?])),
        }
    }
}

/// Input of the delete builders: a single value or a sequence of values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OneOrMany(Vec<FieldValue>);

impl OneOrMany {
    pub fn into_inner(self) -> Vec<FieldValue> {
        self.0
    }
}

macro_rules! one_or_many_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for OneOrMany {
                fn from(value: $ty) -> Self {
                    OneOrMany(vec![value.into()])
                }
            }
        )*
    };
}

one_or_many_from_scalar!(
    FieldValue,
    &str,
    String,
    &String,
    i32,
    u32,
    i64,
    f64,
    bool,
    chrono::DateTime<chrono::Utc>,
);

impl<T: Into<FieldValue>> From<Vec<T>> for OneOrMany {
    fn from(values: Vec<T>) -> Self {
        OneOrMany(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>, const N: usize> From<[T; N]> for OneOrMany {
    fn from(values: [T; N]) -> Self {
        OneOrMany(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue> + Clone> From<&[T]> for OneOrMany {
    fn from(values: &[T]) -> Self {
        OneOrMany(values.iter().cloned().map(Into::into).collect())
    }
}

/// Generate an `<add>` message.
///
/// `data` is a single raw map or document, or a sequence of them. Raw maps are
/// normalized with [`Document::from_raw`]. `add_attrs` become the attributes
/// of the `<add>` element.
///
/// ```
/// use serde_json::json;
/// use solr_message::document::Attributes;
/// use solr_message::message::{self, Documents};
///
/// let data = Documents::try_from(json!({"id": 100})).unwrap();
/// let xml = message::add(data, Attributes::new()).unwrap().to_xml().unwrap();
/// assert_eq!(xml, r#"<add><doc><field name="id">100</field></doc></add>"#);
/// ```
pub fn add<D, A>(data: D, add_attrs: A) -> Result<Message>
where
    D: Into<Documents>,
    A: Into<Attributes>,
{
    add_with(data, add_attrs, |_| {})
}

/// Generate an `<add>` message, letting `customize` adjust every document.
///
/// `customize` runs once per document, after normalization and before
/// serialization. It is the place to set per-document or per-field attributes
/// such as `boost`, or to add and remove fields. The document is local to this
/// call and not visible anywhere else while the hook runs.
///
/// ```
/// use serde_json::json;
/// use solr_message::message::{self, AddOptions, Documents};
///
/// let data = Documents::try_from(json!({"id": 1, "nickname": "Tim"})).unwrap();
/// let options = AddOptions::default().commit_within(1000);
/// let message = message::add_with(data, options, |doc| {
///     doc.set_attribute("boost", 10);
///     if let Some(nickname) = doc.field_by_name_mut("nickname") {
///         nickname.set_attribute("boost", 20);
///     }
/// })
/// .unwrap();
///
/// assert_eq!(
///     message.to_xml().unwrap(),
///     concat!(
///         r#"<add commitWithin="1000"><doc boost="10"><field name="id">1</field>"#,
///         r#"<field name="nickname" boost="20">Tim</field></doc></add>"#
///     )
/// );
/// ```
pub fn add_with<D, A, F>(data: D, add_attrs: A, mut customize: F) -> Result<Message>
where
    D: Into<Documents>,
    A: Into<Attributes>,
    F: FnMut(&mut Document),
{
    let documents = data.into().into_inner();
    let mut root = element_with_attributes(Operation::Add.as_str(), &add_attrs.into());
    let count = documents.len();

    for input in documents {
        let mut doc = input.into_document()?;
        customize(&mut doc);
        log::trace!("serializing document with {} fields", doc.len());
        root.push_child(doc_element(&doc));
    }

    log::debug!("built add message with {count} documents");
    Ok(Message::new(Operation::Add, root))
}

/// Generate a `<commit/>` message whose attributes are exactly `opts`.
pub fn commit<A: Into<Attributes>>(opts: A) -> Result<Message> {
    single_element(Operation::Commit, &opts.into())
}

/// Generate an `<optimize/>` message whose attributes are exactly `opts`.
pub fn optimize<A: Into<Attributes>>(opts: A) -> Result<Message> {
    single_element(Operation::Optimize, &opts.into())
}

/// Generate a `<rollback/>` message.
pub fn rollback() -> Result<Message> {
    single_element(Operation::Rollback, &Attributes::new())
}

/// Generate a `<delete>` message with one `<id>` per value, in order.
///
/// ```
/// use solr_message::message;
///
/// let xml = message::delete_by_id(vec![1, 2, 3]).unwrap().to_xml().unwrap();
/// assert_eq!(xml, "<delete><id>1</id><id>2</id><id>3</id></delete>");
/// ```
pub fn delete_by_id<I: Into<OneOrMany>>(ids: I) -> Result<Message> {
    delete_document("id", ids.into())
}

/// Generate a `<delete>` message with one `<query>` per value, in order.
///
/// Queries are written verbatim apart from XML escaping.
pub fn delete_by_query<Q: Into<OneOrMany>>(queries: Q) -> Result<Message> {
    delete_document("query", queries.into())
}

fn single_element(operation: Operation, opts: &Attributes) -> Result<Message> {
    log::debug!("built {operation} message with {} attributes", opts.len());
    Ok(Message::new(
        operation,
        element_with_attributes(operation.as_str(), opts),
    ))
}

fn delete_document(kind: &str, values: OneOrMany) -> Result<Message> {
    let values = values.into_inner();
    let mut root = Element::new(Operation::Delete.as_str());
    for value in &values {
        root.push_child(Element::new(kind).with_text(value.to_text()));
    }

    log::debug!("built delete message with {} {kind} entries", values.len());
    Ok(Message::new(Operation::Delete, root))
}

fn element_with_attributes(name: &str, attributes: &Attributes) -> Element {
    let mut element = Element::new(name);
    for (key, value) in attributes {
        element.set_attribute(key.as_str(), value.to_text());
    }
    element
}

fn doc_element(doc: &Document) -> Element {
    let mut element = element_with_attributes("doc", doc.attributes());
    for field in doc.fields() {
        element.push_child(field_element(field));
    }
    element
}

fn field_element(field: &Field) -> Element {
    let mut element = Element::new("field").with_attribute(NAME_ATTRIBUTE, field.name());
    for (key, value) in field.attributes() {
        if key == NAME_ATTRIBUTE {
            continue;
        }
        element.set_attribute(key.as_str(), value.to_text());
    }
    element.with_text(field.value().to_text())
}
