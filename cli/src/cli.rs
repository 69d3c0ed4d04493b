use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(about, version, name = "rdf-notebook")]
/// Explore RDF data from the terminal: plot graphs and run SPARQL queries
pub struct Args {
    /// Maximal level of the log messages written to stderr
    ///
    /// One of "error", "warn", "info", "debug" or "trace".
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: Level,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the graph of an RDF file as an interactive HTML page
    Plot {
        /// File to plot
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// The format of the file to plot
        ///
        /// It can be an extension like "nt" or a MIME type like "application/n-triples".
        ///
        /// By default the format is guessed from the file extension.
        #[arg(long)]
        format: Option<String>,
        /// HTML file to write the page to
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: PathBuf,
    },
    /// Evaluate a SPARQL query against the content of an RDF file
    Query {
        /// File to query
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// The format of the file to query
        ///
        /// It can be an extension like "nt" or a MIME type like "application/n-triples".
        ///
        /// By default the format is guessed from the file extension.
        #[arg(long)]
        format: Option<String>,
        /// The SPARQL query
        ///
        /// A value starting with "@" is read from the file with the given path.
        #[arg(short, long)]
        query: String,
        /// HTML file to write the result table to
        ///
        /// If no file is given, a text table is written to stdout.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
    /// Send a SPARQL query to a remote endpoint
    Remote {
        /// The SPARQL query
        ///
        /// A value starting with "@" is read from the file with the given path.
        #[arg(short, long)]
        query: String,
        /// The endpoint to query
        ///
        /// "F" (Fedlex), "G" (geo.admin.ch), "L" (LINDAS) or the URL of any SPARQL endpoint.
        #[arg(short, long, default_value = "L", value_hint = ValueHint::Url)]
        store: String,
        /// Request timeout in seconds
        #[arg(long, default_value_t = 60)]
        timeout: u64,
        /// HTML file to write the result table to
        ///
        /// If no file is given, a text table is written to stdout.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}
