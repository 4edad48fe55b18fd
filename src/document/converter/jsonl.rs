//! JSONL format document converter.
//!
//! Each non-blank line must be a single JSON object:
//! ```jsonl
//! {"id": 1, "title": "Rust Programming", "cat": ["book", "rust"]}
//! {"id": 2, "title": "Python Basics"}
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use crate::document::converter::DocumentConverter;
use crate::document::document::DocumentInput;
use crate::error::{MessageError, Result};

/// A document converter for JSONL format.
#[derive(Clone, Debug, Default)]
pub struct JsonlDocumentConverter;

impl JsonlDocumentConverter {
    pub fn new() -> Self {
        JsonlDocumentConverter
    }

    /// Read raw documents from any buffered reader, e.g. stdin.
    pub fn from_reader<R: BufRead>(&self, reader: R) -> JsonlDocumentIterator<R> {
        JsonlDocumentIterator {
            reader,
            line_number: 0,
        }
    }
}

/// Parse a single JSON line into a raw document.
fn parse_json_line(line: &str, line_number: usize) -> Result<DocumentInput> {
    let value: Value = serde_json::from_str(line)?;
    DocumentInput::try_from(value).map_err(|e| match e {
        MessageError::MalformedInput(msg) => {
            MessageError::malformed_input(format!("line {line_number}: {msg}"))
        }
        other => other,
    })
}

/// Iterator over JSONL documents.
#[derive(Debug)]
pub struct JsonlDocumentIterator<R> {
    reader: R,
    line_number: usize,
}

impl<R: BufRead> Iterator for JsonlDocumentIterator<R> {
    type Item = Result<DocumentInput>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        loop {
            line.clear();
            self.line_number += 1;
            match self.reader.read_line(&mut line) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    return Some(parse_json_line(line, self.line_number));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

impl DocumentConverter for JsonlDocumentConverter {
    type Iter = JsonlDocumentIterator<BufReader<File>>;

    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter> {
        let file = File::open(path.as_ref())?;
        Ok(self.from_reader(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_jsonl_multiple_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"id": 1, "title": "Test1"}}"#).unwrap();
        writeln!(file, r#"{{"id": 2, "title": "Test2"}}"#).unwrap();
        file.flush().unwrap();

        let converter = JsonlDocumentConverter::new();
        let docs: Vec<_> = converter.convert(file.path()).unwrap().collect();

        assert_eq!(docs.len(), 2);
        let doc1 = docs[0].as_ref().unwrap().clone().into_document().unwrap();
        assert_eq!(doc1.field_by_name("title").unwrap().value().to_text(), "Test1");
    }

    #[test]
    fn test_jsonl_empty_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"title": "Test1"}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"title": "Test2"}}"#).unwrap();
        file.flush().unwrap();

        let converter = JsonlDocumentConverter::new();
        let docs: Vec<_> = converter.convert(file.path()).unwrap().collect();

        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn test_jsonl_rejects_non_object_line() {
        let input = "{\"id\": 1}\n[1, 2]\n";
        let converter = JsonlDocumentConverter::new();
        let docs: Vec<_> = converter.from_reader(input.as_bytes()).collect();

        assert!(docs[0].is_ok());
        match &docs[1] {
            Err(MessageError::MalformedInput(msg)) => assert!(msg.starts_with("line 2")),
            other => panic!("Expected malformed input, got {other:?}"),
        }
    }

    #[test]
    fn test_jsonl_invalid_json() {
        let converter = JsonlDocumentConverter::new();
        let docs: Vec<_> = converter.from_reader("{".as_bytes()).collect();
        assert!(matches!(docs[0], Err(MessageError::Json(_))));
    }

    #[test]
    fn test_jsonl_missing_file() {
        let converter = JsonlDocumentConverter::new();
        let err = converter.convert("/nonexistent/docs.jsonl").unwrap_err();
        assert!(matches!(err, MessageError::Io(_)));
    }
}
