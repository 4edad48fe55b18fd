//! Typed options for the operation-level elements.
//!
//! The builders take plain [`Attributes`]; these structs are a typed way to
//! produce the attribute names the update handler understands. Only options
//! that are set are emitted.
//!
//! ```
//! use solr_message::message::{self, CommitOptions};
//!
//! let options = CommitOptions::default().wait_searcher(false);
//! let xml = message::commit(options).unwrap().to_xml().unwrap();
//! assert_eq!(xml, r#"<commit waitSearcher="false"/>"#);
//! ```

use serde::{Deserialize, Serialize};

use crate::document::field::Attributes;
use crate::document::field_value::FieldValue;

fn put<V: Into<FieldValue>>(attributes: &mut Attributes, key: &str, value: Option<V>) {
    if let Some(value) = value {
        attributes.insert(key.to_string(), value.into());
    }
}

/// Attributes of the `<add>` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddOptions {
    /// Replace documents with the same unique key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    /// Commit the added documents within this many milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_within: Option<i64>,
    /// Boost applied to every added document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<f64>,
}

impl AddOptions {
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    pub fn commit_within(mut self, millis: i64) -> Self {
        self.commit_within = Some(millis);
        self
    }

    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn to_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        put(&mut attributes, "overwrite", self.overwrite);
        put(&mut attributes, "commitWithin", self.commit_within);
        put(&mut attributes, "boost", self.boost);
        attributes
    }
}

/// Attributes of the `<commit>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommitOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_flush: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_searcher: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expunge_deletes: Option<bool>,
}

impl CommitOptions {
    pub fn wait_flush(mut self, wait: bool) -> Self {
        self.wait_flush = Some(wait);
        self
    }

    pub fn wait_searcher(mut self, wait: bool) -> Self {
        self.wait_searcher = Some(wait);
        self
    }

    pub fn expunge_deletes(mut self, expunge: bool) -> Self {
        self.expunge_deletes = Some(expunge);
        self
    }

    pub fn to_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        put(&mut attributes, "waitFlush", self.wait_flush);
        put(&mut attributes, "waitSearcher", self.wait_searcher);
        put(&mut attributes, "expungeDeletes", self.expunge_deletes);
        attributes
    }
}

/// Attributes of the `<optimize>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_flush: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_searcher: Option<bool>,
    /// Merge down to at most this many segments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_segments: Option<u32>,
}

impl OptimizeOptions {
    pub fn wait_flush(mut self, wait: bool) -> Self {
        self.wait_flush = Some(wait);
        self
    }

    pub fn wait_searcher(mut self, wait: bool) -> Self {
        self.wait_searcher = Some(wait);
        self
    }

    pub fn max_segments(mut self, segments: u32) -> Self {
        self.max_segments = Some(segments);
        self
    }

    pub fn to_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        put(&mut attributes, "waitFlush", self.wait_flush);
        put(&mut attributes, "waitSearcher", self.wait_searcher);
        put(&mut attributes, "maxSegments", self.max_segments);
        attributes
    }
}

impl From<AddOptions> for Attributes {
    fn from(options: AddOptions) -> Self {
        options.to_attributes()
    }
}

impl From<CommitOptions> for Attributes {
    fn from(options: CommitOptions) -> Self {
        options.to_attributes()
    }
}

impl From<OptimizeOptions> for Attributes {
    fn from(options: OptimizeOptions) -> Self {
        options.to_attributes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_options_emit_nothing() {
        assert!(AddOptions::default().to_attributes().is_empty());
        assert!(CommitOptions::default().to_attributes().is_empty());
        assert!(OptimizeOptions::default().to_attributes().is_empty());
    }

    #[test]
    fn test_add_options() {
        let attributes = AddOptions::default().commit_within(1000).overwrite(false).to_attributes();
        let keys: Vec<&str> = attributes.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["overwrite", "commitWithin"]);
        assert_eq!(attributes["commitWithin"], FieldValue::Integer(1000));
    }

    #[test]
    fn test_optimize_options() {
        let attributes = OptimizeOptions::default().max_segments(2).to_attributes();
        assert_eq!(attributes["maxSegments"].to_text(), "2");
    }

    #[test]
    fn test_options_from_json() {
        let options: CommitOptions =
            serde_json::from_str(r#"{"waitFlush": true, "expungeDeletes": false}"#).unwrap();
        assert_eq!(options, CommitOptions::default().wait_flush(true).expunge_deletes(false));

        let json = serde_json::to_string(&AddOptions::default().boost(2.0)).unwrap();
        assert_eq!(json, r#"{"boost":2.0}"#);
    }
}
