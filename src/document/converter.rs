//! Document converters for reading raw documents from files.
//!
//! Converters yield [`DocumentInput::Raw`] items; normalization into
//! documents is left to the add builder so that blank filtering and
//! multi-value expansion happen in one place.

use std::path::Path;

use crate::document::document::DocumentInput;
use crate::error::Result;

pub mod json;
pub mod jsonl;

/// A trait for converting file formats into raw document iterators.
///
/// # Example
///
/// ```no_run
/// use solr_message::document::Attributes;
/// use solr_message::document::converter::DocumentConverter;
/// use solr_message::document::converter::jsonl::JsonlDocumentConverter;
/// use solr_message::message;
///
/// let converter = JsonlDocumentConverter::new();
/// let docs = converter
///     .convert("documents.jsonl")
///     .unwrap()
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// let xml = message::add(docs, Attributes::new()).unwrap().to_xml().unwrap();
/// println!("{xml}");
/// ```
pub trait DocumentConverter {
    /// The iterator type that yields raw documents.
    type Iter: Iterator<Item = Result<DocumentInput>>;

    /// Convert a file into an iterator of raw documents.
    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter>;
}
