use crate::error::LocalQueryError;
use crate::io::{RdfDocument, RdfFormat};
use crate::sparql::{boolean_table, push_triple, term_value, TRIPLE_COLUMNS};
use crate::table::ResultTable;
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;
use oxrdf::Variable;

/// Parses the Turtle `data` and evaluates `query` against it.
///
/// Cells hold the plain value of the bound terms, unbound variables give empty cells.
///
/// ```
/// use rdf_notebook::sparql::local_query;
/// use rdf_notebook::table::Cell;
///
/// let table = local_query(
///     "<http://example.com/a> <http://example.com/name> \"A\" .",
///     "SELECT ?s ?name WHERE { ?s <http://example.com/name> ?name }",
/// )?;
/// assert_eq!(table.columns(), ["s", "name"]);
/// assert_eq!(table.get(0, "name"), Some(&Cell::from("A")));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn local_query(data: &str, query: &str) -> Result<ResultTable, LocalQueryError> {
    local_query_with_format(data, RdfFormat::Turtle, query)
}

/// Parses `data` in the given `format` and evaluates `query` against it.
pub fn local_query_with_format(
    data: &str,
    format: RdfFormat,
    query: &str,
) -> Result<ResultTable, LocalQueryError> {
    query_document(RdfDocument::parse_with_format(data, format)?, query)
}

/// Loads an already parsed document into a fresh in-memory store and evaluates `query`.
pub fn query_document(document: RdfDocument, query: &str) -> Result<ResultTable, LocalQueryError> {
    let store = Store::new()?;
    store.extend(document.into_quads())?;

    let table = match store.query(query)? {
        QueryResults::Solutions(solutions) => {
            let variables = solutions.variables().to_vec();
            let mut table = ResultTable::new(variables.iter().map(Variable::as_str));
            for solution in solutions {
                let solution = solution?;
                table.push_values(variables.iter().map(|v| solution.get(v).map(term_value)));
            }
            table
        }
        QueryResults::Boolean(value) => boolean_table(value),
        QueryResults::Graph(triples) => {
            let mut table = ResultTable::new(TRIPLE_COLUMNS);
            for triple in triples {
                push_triple(&mut table, triple?);
            }
            table
        }
    };

    tracing::debug!("Local query returned {} rows", table.len());
    Ok(table)
}
