//! Update message generation.
//!
//! Builders for the XML vocabulary of the update handler: `add`, `commit`,
//! `optimize`, `rollback` and `delete` (by id or by query). Every builder
//! returns a [`Message`] tree; rendering it is a separate, explicit step.
//!
//! ```
//! use solr_message::message::{self, CommitOptions};
//!
//! let delete = message::delete_by_query("id:[* TO *]").unwrap();
//! assert_eq!(
//!     delete.to_xml().unwrap(),
//!     "<delete><query>id:[* TO *]</query></delete>"
//! );
//!
//! let commit = message::commit(CommitOptions::default().wait_flush(true)).unwrap();
//! assert_eq!(commit.to_xml().unwrap(), r#"<commit waitFlush="true"/>"#);
//! ```

pub mod builder;
pub mod element;
pub mod options;

pub use builder::{
    Documents, OneOrMany, add, add_with, commit, delete_by_id, delete_by_query, optimize, rollback,
};
pub use element::{Element, Message, Operation, RenderOptions};
pub use options::{AddOptions, CommitOptions, OptimizeOptions};
