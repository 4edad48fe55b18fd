//! JSON format document converter.
//!
//! The file holds either a single object or an array of objects:
//! ```json
//! [
//!   {"id": 1, "title": "Rust Programming"},
//!   {"id": 2, "title": "Python Basics"}
//! ]
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::document::converter::DocumentConverter;
use crate::document::document::DocumentInput;
use crate::error::Result;

/// A document converter for JSON format.
#[derive(Clone, Debug, Default)]
pub struct JsonDocumentConverter;

impl JsonDocumentConverter {
    pub fn new() -> Self {
        JsonDocumentConverter
    }

    /// Read raw documents from any reader, e.g. stdin.
    pub fn from_reader<R: Read>(
        &self,
        reader: R,
    ) -> Result<std::vec::IntoIter<Result<DocumentInput>>> {
        let value: Value = serde_json::from_reader(reader)?;
        let items = match value {
            Value::Array(items) => items,
            single => vec![single],
        };
        let docs: Vec<_> = items.into_iter().map(DocumentInput::try_from).collect();
        Ok(docs.into_iter())
    }
}

impl DocumentConverter for JsonDocumentConverter {
    type Iter = std::vec::IntoIter<Result<DocumentInput>>;

    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter> {
        let file = File::open(path.as_ref())?;
        self.from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MessageError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_json_single_object() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"id": 1, "cat": ["a", "b"]}}"#).unwrap();
        file.flush().unwrap();

        let converter = JsonDocumentConverter::new();
        let docs: Vec<_> = converter.convert(file.path()).unwrap().collect();

        assert_eq!(docs.len(), 1);
        let doc = docs.into_iter().next().unwrap().unwrap().into_document().unwrap();
        assert_eq!(doc.fields_by_name("cat").len(), 2);
    }

    #[test]
    fn test_json_array_of_objects() {
        let converter = JsonDocumentConverter::new();
        let input = r#"[{"id": 1}, {"id": 2}, {"id": 3}]"#;
        let docs: Vec<_> = converter.from_reader(input.as_bytes()).unwrap().collect();

        assert_eq!(docs.len(), 3);
        assert!(docs.iter().all(|d| d.is_ok()));
    }

    #[test]
    fn test_json_array_with_scalar() {
        let converter = JsonDocumentConverter::new();
        let docs: Vec<_> = converter.from_reader("[{\"id\": 1}, 5]".as_bytes()).unwrap().collect();

        assert!(docs[0].is_ok());
        assert!(matches!(docs[1], Err(MessageError::MalformedInput(_))));
    }
}
