//! # solr-message
//!
//! XML update message generation for Solr-style document indexing services.
//!
//! ## Features
//!
//! - Documents built from raw key/value maps or assembled field by field
//! - Multi-valued fields, with blank values dropped on bulk import
//! - Per-document and per-field attributes (`boost` and friends) through a
//!   customization hook
//! - `add`, `commit`, `optimize`, `rollback` and delete-by-id/query messages
//! - Compact, escaped XML output
//!
//! The crate only builds outgoing messages. Sending them and parsing the
//! responses belongs to the transport layer.

pub mod cli;
pub mod document;
pub mod error;
pub mod message;

pub mod prelude {
    pub use crate::document::{Attributes, Document, DocumentInput, Field, FieldValue};
    pub use crate::error::{MessageError, Result};
    pub use crate::message::{
        AddOptions, CommitOptions, Documents, Message, Operation, OptimizeOptions, RenderOptions,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
