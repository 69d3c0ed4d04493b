//! [SPARQL](https://www.w3.org/TR/sparql11-query/) query runners.
//!
//! Queries run either against a freshly parsed local document ([`local_query`]) or against a
//! remote SPARQL endpoint over HTTP ([`remote_query`]). Both return a [`ResultTable`].

mod endpoint;
mod local;
mod remote;

pub use endpoint::{Endpoint, FEDLEX_ENDPOINT, GEO_ENDPOINT, LINDAS_ENDPOINT};
pub use local::{local_query, local_query_with_format, query_document};
pub use remote::{
    remote_query, ClientConfig, SparqlClient, FORM_CONTENT_TYPE, HTTP_TIMEOUT, SPARQL_RESULTS_JSON,
};

use crate::table::ResultTable;
use oxrdf::{Term, Triple};

/// The column of the table produced for `ASK` queries.
pub const BOOLEAN_COLUMN: &str = "boolean";

/// The columns of the table produced for `CONSTRUCT` and `DESCRIBE` queries.
pub const TRIPLE_COLUMNS: [&str; 3] = ["subject", "predicate", "object"];

/// Returns the plain string value of a term: the IRI, the blank node id or the literal's lexical
/// form.
pub fn term_value(term: &Term) -> String {
    match term {
        Term::NamedNode(node) => node.as_str().to_owned(),
        Term::BlankNode(node) => node.as_str().to_owned(),
        Term::Literal(literal) => literal.value().to_owned(),
        Term::Triple(triple) => format!("<< {triple} >>"),
    }
}

fn boolean_table(value: bool) -> ResultTable {
    let mut table = ResultTable::new([BOOLEAN_COLUMN]);
    table.push_values([Some(value.to_string())]);
    table
}

fn push_triple(table: &mut ResultTable, triple: Triple) {
    table.push_values([
        Some(term_value(&triple.subject.into())),
        Some(triple.predicate.into_string()),
        Some(term_value(&triple.object)),
    ]);
}
