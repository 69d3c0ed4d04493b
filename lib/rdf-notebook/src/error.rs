use oxigraph::sparql::EvaluationError;
use oxigraph::store::StorageError;
use oxrdf::IriParseError;
use oxrdfio::RdfParseError;
use reqwest::{StatusCode, Url};
use sparesults::QueryResultsParseError;

/// An error raised while parsing an RDF serialization into an
/// [`RdfDocument`](crate::io::RdfDocument).
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The serialization is invalid.
    #[error(transparent)]
    Syntax(#[from] RdfParseError),
    /// The base IRI is invalid.
    #[error("Invalid base IRI '{iri}': {error}")]
    InvalidBaseIri {
        /// The IRI itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
}

/// An error raised while running a query against a locally parsed document.
#[derive(Debug, thiserror::Error)]
pub enum LocalQueryError {
    /// The RDF data could not be parsed.
    #[error(transparent)]
    Parsing(#[from] ParseError),
    /// The parsed data could not be inserted into the in-memory store.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The query could not be parsed or evaluated.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

/// An error raised while running a query against a remote SPARQL endpoint.
#[derive(Debug, thiserror::Error)]
pub enum RemoteQueryError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status code.
    #[error("SPARQL endpoint {url} answered with status {status}")]
    Status {
        /// The endpoint that was queried.
        url: Url,
        /// The returned status.
        status: StatusCode,
    },
    /// The response body is not a valid SPARQL JSON results document.
    #[error(transparent)]
    Results(#[from] QueryResultsParseError),
}

/// An error raised while parsing an [`Endpoint`](crate::sparql::Endpoint) from a string.
#[derive(Debug, thiserror::Error)]
#[error("Invalid SPARQL endpoint '{value}': {error}")]
pub struct EndpointParseError {
    /// The rejected input.
    pub value: String,
    /// The URL parsing error.
    #[source]
    pub error: url::ParseError,
}

/// An error raised while building a [`ResultTable`](crate::table::ResultTable) from rows.
#[derive(Debug, thiserror::Error)]
#[error("Row {row} has {found} cells but the table has {expected} columns")]
pub struct RowLengthError {
    /// The index of the offending row.
    pub row: usize,
    /// The number of columns of the table.
    pub expected: usize,
    /// The number of cells in the row.
    pub found: usize,
}
