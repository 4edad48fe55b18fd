//! Command implementations for the solr-message CLI.

use std::io::{self, Write};

use crate::cli::args::*;
use crate::document::converter::DocumentConverter;
use crate::document::converter::json::JsonDocumentConverter;
use crate::document::converter::jsonl::JsonlDocumentConverter;
use crate::error::Result;
use crate::message::{self, Documents, Message};

/// Execute a CLI command, writing the rendered message to stdout.
pub fn execute_command(args: SolrMessageArgs) -> Result<()> {
    let message = build_message(&args)?;
    let xml = message.to_xml_with(&args.render_options())?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{xml}")?;
    Ok(())
}

/// Build the message a command describes, without rendering it.
pub fn build_message(args: &SolrMessageArgs) -> Result<Message> {
    match &args.command {
        Command::Add(add_args) => add_documents(add_args),
        Command::Commit(commit_args) => message::commit(commit_args.options()),
        Command::Optimize(optimize_args) => message::optimize(optimize_args.options()),
        Command::Rollback => message::rollback(),
        Command::DeleteById(delete_args) => message::delete_by_id(delete_args.ids.clone()),
        Command::DeleteByQuery(delete_args) => {
            message::delete_by_query(delete_args.queries.clone())
        }
    }
}

fn add_documents(args: &AddArgs) -> Result<Message> {
    let documents = read_documents(args)?;
    log::info!("read {} documents", documents.len());

    let doc_boost = args.doc_boost;
    message::add_with(documents, args.options(), |doc| {
        if let Some(boost) = doc_boost {
            doc.set_attribute("boost", boost);
        }
    })
}

fn read_documents(args: &AddArgs) -> Result<Documents> {
    match (&args.document_file, args.format) {
        (Some(path), InputFormat::Json) if !args.reads_stdin() => {
            log::debug!("reading JSON documents from {}", path.display());
            JsonDocumentConverter::new().convert(path)?.collect()
        }
        (Some(path), InputFormat::Jsonl) if !args.reads_stdin() => {
            log::debug!("reading JSONL documents from {}", path.display());
            JsonlDocumentConverter::new().convert(path)?.collect()
        }
        (_, InputFormat::Json) => {
            log::debug!("reading JSON documents from stdin");
            JsonDocumentConverter::new()
                .from_reader(io::stdin().lock())?
                .collect()
        }
        (_, InputFormat::Jsonl) => {
            log::debug!("reading JSONL documents from stdin");
            JsonlDocumentConverter::new()
                .from_reader(io::stdin().lock())
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::NamedTempFile;

    fn parse(argv: &[&str]) -> SolrMessageArgs {
        SolrMessageArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_add_from_jsonl_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"id": 1, "cat": ["a", ""]}}"#).unwrap();
        writeln!(file, r#"{{"id": 2}}"#).unwrap();
        file.flush().unwrap();

        let path = file.path().to_str().unwrap();
        let args = parse(&["solr-message", "add", path, "--doc-boost", "2.5"]);
        let xml = build_message(&args).unwrap().to_xml().unwrap();

        assert_eq!(
            xml,
            concat!(
                r#"<add><doc boost="2.5"><field name="id">1</field>"#,
                r#"<field name="cat">a</field></doc>"#,
                r#"<doc boost="2.5"><field name="id">2</field></doc></add>"#
            )
        );
    }

    #[test]
    fn test_add_from_json_file_with_options() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1}}]"#).unwrap();
        file.flush().unwrap();

        let path = file.path().to_str().unwrap();
        let args = parse(&["solr-message", "add", path, "-f", "json", "--commit-within", "10"]);
        let xml = build_message(&args).unwrap().to_xml().unwrap();

        assert_eq!(
            xml,
            r#"<add commitWithin="10"><doc><field name="id">1</field></doc></add>"#
        );
    }

    #[test]
    fn test_simple_commands() {
        let args = parse(&["solr-message", "optimize", "--max-segments", "1"]);
        assert_eq!(
            build_message(&args).unwrap().to_xml().unwrap(),
            r#"<optimize maxSegments="1"/>"#
        );

        let args = parse(&["solr-message", "delete-by-query", "id:1", "id:2"]);
        assert_eq!(
            build_message(&args).unwrap().to_xml().unwrap(),
            "<delete><query>id:1</query><query>id:2</query></delete>"
        );
    }
}
