//! Scalar values carried by fields and attributes.
//!
//! [`FieldValue`] is the value of a `<field>` element and also the value type of
//! every XML attribute map in the crate. Each variant has exactly one textual
//! form, produced by [`FieldValue::to_text`], which is what ends up in the
//! message.
//!
//! ```
//! use solr_message::document::field_value::FieldValue;
//!
//! assert_eq!(FieldValue::from(100).to_text(), "100");
//! assert_eq!(FieldValue::from(true).to_text(), "true");
//! assert_eq!(FieldValue::from("Tim").to_text(), "Tim");
//! assert!(FieldValue::Null.is_blank());
//! ```

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MessageError, Result};

/// Represents a scalar value for a field or an attribute.
///
/// Only scalars are representable. Sequences are expanded into several fields
/// by [`Document::from_raw`](crate::document::Document::from_raw), and nested
/// maps are rejected as malformed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// DateTime value, rendered in the index's UTC `Z` format
    DateTime(DateTime<Utc>),
    /// Absent value, rendered as empty text
    Null,
}

impl FieldValue {
    /// Render the value to the text that is written into the message.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
            FieldValue::Null => String::new(),
        }
    }

    /// Whether the textual form of the value is empty.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Null => true,
            _ => false,
        }
    }

    /// Convert to text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to integer if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Convert to a float; integers are widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            FieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Convert to boolean if this is a boolean value.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert a JSON value into a scalar field value.
    ///
    /// Arrays and objects are not scalars and fail with
    /// [`MessageError::MalformedInput`].
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(FieldValue::Null),
            Value::Bool(b) => Ok(FieldValue::Boolean(*b)),
            Value::String(s) => Ok(FieldValue::Text(s.clone())),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(FieldValue::Integer(i))
                } else if n.is_f64() {
                    Ok(FieldValue::Float(n.as_f64().unwrap_or_default()))
                } else {
                    // u64 beyond i64::MAX keeps its exact digits
                    Ok(FieldValue::Text(n.to_string()))
                }
            }
            Value::Array(_) => Err(MessageError::malformed_input(format!(
                "sequence cannot be rendered as a single value: {value}"
            ))),
            Value::Object(_) => Err(MessageError::malformed_input(format!(
                "map cannot be rendered as a value: {value}"
            ))),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl TryFrom<&Value> for FieldValue {
    type Error = MessageError;

    fn try_from(value: &Value) -> Result<Self> {
        FieldValue::from_json(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Text(value.clone())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::Float(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::DateTime(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}
