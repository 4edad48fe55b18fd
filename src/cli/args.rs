//! Command line argument parsing for the solr-message CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::message::{AddOptions, CommitOptions, OptimizeOptions, RenderOptions};

/// solr-message - Generate XML update messages for a Solr-style index
#[derive(Parser, Debug, Clone)]
#[command(name = "solr-message")]
#[command(about = "Generate XML update messages for a Solr-style indexing service")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SolrMessageArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Prefix the message with an XML declaration
    #[arg(long, global = true)]
    pub declaration: bool,

    /// Indent nested elements by this many spaces instead of compact output
    #[arg(long, global = true, value_name = "SPACES")]
    pub indent: Option<usize>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SolrMessageArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            declaration: self.declaration,
            indent: self.indent,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate an <add> message from JSON or JSONL documents
    Add(AddArgs),

    /// Generate a <commit/> message
    Commit(CommitArgs),

    /// Generate an <optimize/> message
    Optimize(OptimizeArgs),

    /// Generate a <rollback/> message
    Rollback,

    /// Generate a <delete> message for the given ids
    #[command(name = "delete-by-id")]
    DeleteById(DeleteByIdArgs),

    /// Generate a <delete> message for the given queries
    #[command(name = "delete-by-query")]
    DeleteByQuery(DeleteByQueryArgs),
}

/// Document file formats accepted by `add`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputFormat {
    /// A single JSON object or an array of objects
    Json,
    /// One JSON object per line
    Jsonl,
}

/// Arguments for the add message
#[derive(Parser, Debug, Clone)]
pub struct AddArgs {
    /// Document file path; reads stdin when omitted or "-"
    #[arg(value_name = "DOCUMENT_FILE")]
    pub document_file: Option<PathBuf>,

    /// Document file format
    #[arg(short, long, default_value = "jsonl")]
    pub format: InputFormat,

    /// Replace documents with the same unique key
    #[arg(long)]
    pub overwrite: Option<bool>,

    /// Commit within this many milliseconds
    #[arg(long, value_name = "MILLIS")]
    pub commit_within: Option<i64>,

    /// Boost attribute of the <add> element
    #[arg(long)]
    pub boost: Option<f64>,

    /// Boost attribute set on every <doc> element
    #[arg(long)]
    pub doc_boost: Option<f64>,
}

impl AddArgs {
    pub fn options(&self) -> AddOptions {
        AddOptions {
            overwrite: self.overwrite,
            commit_within: self.commit_within,
            boost: self.boost,
        }
    }

    /// Whether documents are read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.document_file
            .as_ref()
            .is_none_or(|path| path.as_os_str() == "-")
    }
}

/// Arguments for the commit message
#[derive(Parser, Debug, Clone)]
pub struct CommitArgs {
    #[arg(long)]
    pub wait_flush: Option<bool>,

    #[arg(long)]
    pub wait_searcher: Option<bool>,

    #[arg(long)]
    pub expunge_deletes: Option<bool>,
}

impl CommitArgs {
    pub fn options(&self) -> CommitOptions {
        CommitOptions {
            wait_flush: self.wait_flush,
            wait_searcher: self.wait_searcher,
            expunge_deletes: self.expunge_deletes,
        }
    }
}

/// Arguments for the optimize message
#[derive(Parser, Debug, Clone)]
pub struct OptimizeArgs {
    #[arg(long)]
    pub wait_flush: Option<bool>,

    #[arg(long)]
    pub wait_searcher: Option<bool>,

    /// Merge down to at most this many segments
    #[arg(long)]
    pub max_segments: Option<u32>,
}

impl OptimizeArgs {
    pub fn options(&self) -> OptimizeOptions {
        OptimizeOptions {
            wait_flush: self.wait_flush,
            wait_searcher: self.wait_searcher,
            max_segments: self.max_segments,
        }
    }
}

/// Arguments for deleting by id
#[derive(Parser, Debug, Clone)]
pub struct DeleteByIdArgs {
    /// Unique keys of the documents to delete
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,
}

/// Arguments for deleting by query
#[derive(Parser, Debug, Clone)]
pub struct DeleteByQueryArgs {
    /// Queries selecting the documents to delete
    #[arg(value_name = "QUERY", required = true)]
    pub queries: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_command() {
        let args = SolrMessageArgs::try_parse_from([
            "solr-message",
            "add",
            "docs.json",
            "--format",
            "json",
            "--commit-within",
            "1000",
            "--overwrite",
            "false",
        ])
        .unwrap();

        if let Command::Add(add_args) = args.command {
            assert_eq!(add_args.document_file, Some(PathBuf::from("docs.json")));
            assert_eq!(add_args.format, InputFormat::Json);
            assert!(!add_args.reads_stdin());
            assert_eq!(
                add_args.options(),
                AddOptions::default().commit_within(1000).overwrite(false)
            );
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_add_reads_stdin_by_default() {
        let args = SolrMessageArgs::try_parse_from(["solr-message", "add"]).unwrap();
        if let Command::Add(add_args) = args.command {
            assert!(add_args.reads_stdin());
            assert_eq!(add_args.format, InputFormat::Jsonl);
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_commit_command() {
        let args = SolrMessageArgs::try_parse_from([
            "solr-message",
            "commit",
            "--wait-searcher",
            "false",
        ])
        .unwrap();

        if let Command::Commit(commit_args) = args.command {
            assert_eq!(commit_args.options(), CommitOptions::default().wait_searcher(false));
        } else {
            panic!("Expected Commit command");
        }
    }

    #[test]
    fn test_delete_commands_require_values() {
        assert!(SolrMessageArgs::try_parse_from(["solr-message", "delete-by-id"]).is_err());

        let args =
            SolrMessageArgs::try_parse_from(["solr-message", "delete-by-id", "1", "2"]).unwrap();
        if let Command::DeleteById(delete_args) = args.command {
            assert_eq!(delete_args.ids, vec!["1", "2"]);
        } else {
            panic!("Expected DeleteById command");
        }
    }

    #[test]
    fn test_render_flags() {
        let args = SolrMessageArgs::try_parse_from([
            "solr-message",
            "rollback",
            "--declaration",
            "--indent",
            "2",
        ])
        .unwrap();

        assert_eq!(
            args.render_options(),
            RenderOptions::compact().with_declaration(true).with_indent(2)
        );
    }

    #[test]
    fn test_verbosity_levels() {
        let args = SolrMessageArgs::try_parse_from(["solr-message", "rollback"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = SolrMessageArgs::try_parse_from(["solr-message", "-vv", "rollback"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            SolrMessageArgs::try_parse_from(["solr-message", "--quiet", "rollback"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
