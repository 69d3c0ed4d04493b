#![allow(clippy::print_stdout)]
use crate::cli::{Args, Command};
use anyhow::{bail, Context};
use clap::Parser;
use rdf_notebook::io::{RdfDocument, RdfFormat};
use rdf_notebook::sparql::{query_document, ClientConfig, Endpoint, SparqlClient};
use rdf_notebook::table::ResultTable;
use rdf_notebook::visualize::plot_document;
use std::ffi::OsStr;
use std::fs;
use std::io::stderr;
use std::path::Path;
use std::time::Duration;

mod cli;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let matches = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(matches.log_level)
        .with_writer(stderr)
        .init();
    match matches.command {
        Command::Plot {
            file,
            format,
            output,
        } => {
            let document = read_document(&file, format.as_deref())?;
            plot_document(&document)
                .write_html(&output)
                .with_context(|| format!("Failed to write the graph to {}", output.display()))?;
            tracing::info!("Graph of {} written to {}", file.display(), output.display());
            Ok(())
        }
        Command::Query {
            file,
            format,
            query,
            output,
        } => {
            let document = read_document(&file, format.as_deref())?;
            let query = read_query(&query)?;
            let table = query_document(document, &query)
                .with_context(|| format!("Failed to evaluate the query against {}", file.display()))?;
            write_table(&table, output.as_deref())
        }
        Command::Remote {
            query,
            store,
            timeout,
            output,
        } => {
            let query = read_query(&query)?;
            let endpoint = store.parse::<Endpoint>()?;
            let client = SparqlClient::with_config(&ClientConfig {
                timeout: Some(Duration::from_secs(timeout)),
                ..ClientConfig::default()
            })?;
            let table = client
                .query(&query, &endpoint)
                .await
                .with_context(|| format!("The query sent to {endpoint} failed"))?;
            write_table(&table, output.as_deref())
        }
    }
}

fn read_document(file: &Path, format: Option<&str>) -> anyhow::Result<RdfDocument> {
    let format = if let Some(format) = format {
        rdf_format_from_name(format)?
    } else {
        rdf_format_from_path(file)?
    };
    let data = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let document = RdfDocument::parse_with_format(&data, format)
        .with_context(|| format!("Failed to parse {}", file.display()))?;
    tracing::debug!("Loaded {} quads from {}", document.len(), file.display());
    Ok(document)
}

/// Returns the query text, reading it from a file if `query` is `@<path>`.
fn read_query(query: &str) -> anyhow::Result<String> {
    if let Some(path) = query.strip_prefix('@') {
        fs::read_to_string(path).with_context(|| format!("Failed to read the query file {path}"))
    } else {
        Ok(query.to_owned())
    }
}

fn write_table(table: &ResultTable, output: Option<&Path>) -> anyhow::Result<()> {
    if let Some(output) = output {
        fs::write(output, table.to_html())
            .with_context(|| format!("Failed to write the table to {}", output.display()))
    } else {
        print!("{table}");
        Ok(())
    }
}

fn rdf_format_from_path(path: &Path) -> anyhow::Result<RdfFormat> {
    if let Some(ext) = path.extension().and_then(OsStr::to_str) {
        RdfFormat::from_extension(ext)
            .with_context(|| format!("The file extension '{ext}' is unknown"))
    } else {
        bail!(
            "The path {} has no extension to guess a file format from",
            path.display()
        )
    }
}

fn rdf_format_from_name(name: &str) -> anyhow::Result<RdfFormat> {
    if let Some(t) = RdfFormat::from_extension(name) {
        return Ok(t);
    }
    if let Some(t) = RdfFormat::from_media_type(name) {
        return Ok(t);
    }
    bail!("The file format '{name}' is unknown")
}
