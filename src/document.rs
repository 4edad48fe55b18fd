//! Document model for update messages.
//!
//! A [`Document`] is the in-memory form of one `<doc>` element: an ordered
//! list of [`Field`]s plus document-level attributes. Documents are either
//! built directly or normalized from raw key/value maps.
//!
//! # Core Components
//!
//! - [`document::Document`] - Ordered fields plus `<doc>` attributes
//! - [`document::DocumentInput`] - Raw map or pre-built document, as accepted by `add`
//! - [`field::Field`] - One `<field>` element: attributes and a value
//! - [`field_value::FieldValue`] - Scalar values for fields and attributes
//! - [`converter`] - Reading raw documents from JSON and JSONL files
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use solr_message::document::{Document, DocumentInput};
//!
//! let doc = Document::builder()
//!     .field("id", 1)
//!     .field("title", "Rust Programming Guide")
//!     .attribute("boost", 2.5)
//!     .build();
//! assert_eq!(doc.len(), 2);
//!
//! let raw = DocumentInput::try_from(json!({"id": 2, "cat": ["a", "", "b"]})).unwrap();
//! assert_eq!(raw.into_document().unwrap().len(), 3);
//! ```

pub mod converter;
#[allow(clippy::module_inception)]
pub mod document;
pub mod field;
pub mod field_value;

pub use document::{Document, DocumentBuilder, DocumentInput, RawDocument};
pub use field::{Attributes, Field, NAME_ATTRIBUTE};
pub use field_value::FieldValue;
