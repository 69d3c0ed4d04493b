#![cfg(test)]
#![allow(clippy::panic_in_result_fn)]

use rdf_notebook::error::LocalQueryError;
use rdf_notebook::io::{RdfDocument, RdfFormat};
use rdf_notebook::sparql::{local_query, local_query_with_format, query_document, BOOLEAN_COLUMN};
use rdf_notebook::table::{Cell, ColumnKind};
use std::error::Error;

const DATA: &str = r#"
@prefix schema: <http://schema.org/> .
@prefix wd: <http://www.wikidata.org/entity/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

wd:Q72 a schema:City ;
    schema:name "Zurich"@en ;
    schema:population 421878 ;
    schema:url "https://www.stadt-zuerich.ch/"^^xsd:anyURI .

wd:Q70 a schema:City ;
    schema:name "Bern"@en ;
    schema:population 134794 .
"#;

#[test]
fn test_select_returns_projected_columns() -> Result<(), Box<dyn Error>> {
    let table = local_query(
        DATA,
        "PREFIX schema: <http://schema.org/>
         SELECT ?city ?name ?url WHERE {
            ?city schema:name ?name .
            OPTIONAL { ?city schema:url ?url }
         } ORDER BY ?name",
    )?;
    assert_eq!(table.columns(), ["city", "name", "url"]);
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.get(0, "city"),
        Some(&Cell::from("http://www.wikidata.org/entity/Q70"))
    );
    assert_eq!(table.get(0, "name"), Some(&Cell::from("Bern")));
    assert_eq!(table.get(0, "url"), Some(&Cell::Null));
    assert_eq!(
        table.get(1, "url"),
        Some(&Cell::from("https://www.stadt-zuerich.ch/"))
    );
    Ok(())
}

#[test]
fn test_local_results_stay_text() -> Result<(), Box<dyn Error>> {
    let table = local_query(
        DATA,
        "SELECT ?population WHERE { ?city <http://schema.org/population> ?population } ORDER BY ?population",
    )?;
    assert_eq!(table.column_kind("population"), Some(ColumnKind::Text));
    assert_eq!(table.get(0, "population"), Some(&Cell::from("134794")));
    Ok(())
}

#[test]
fn test_ask() -> Result<(), Box<dyn Error>> {
    let table = local_query(DATA, "ASK { ?s a <http://schema.org/City> }")?;
    assert_eq!(table.columns(), [BOOLEAN_COLUMN]);
    assert_eq!(table.get(0, BOOLEAN_COLUMN), Some(&Cell::from("true")));
    Ok(())
}

#[test]
fn test_construct() -> Result<(), Box<dyn Error>> {
    let table = local_query(
        DATA,
        "CONSTRUCT { ?s <http://example.com/label> ?name } WHERE { ?s <http://schema.org/name> ?name }",
    )?;
    assert_eq!(table.columns(), ["subject", "predicate", "object"]);
    assert_eq!(table.len(), 2);
    assert!(table
        .column("predicate")
        .unwrap_or_default()
        .iter()
        .all(|c| **c == Cell::from("http://example.com/label")));
    Ok(())
}

#[test]
fn test_other_formats() -> Result<(), Box<dyn Error>> {
    let table = local_query_with_format(
        "<http://example.com/s> <http://example.com/p> \"o\" .\n",
        RdfFormat::NTriples,
        "SELECT ?o WHERE { ?s ?p ?o }",
    )?;
    assert_eq!(table.get(0, "o"), Some(&Cell::from("o")));
    Ok(())
}

#[test]
fn test_query_parsed_document() -> Result<(), Box<dyn Error>> {
    let document = RdfDocument::parse(DATA)?;
    let table = query_document(document, "SELECT (COUNT(*) AS ?count) WHERE { ?s ?p ?o }")?;
    assert_eq!(table.get(0, "count"), Some(&Cell::from("7")));
    Ok(())
}

#[test]
fn test_invalid_data_is_reported() {
    let result = local_query("this is not turtle", "SELECT * WHERE { ?s ?p ?o }");
    assert!(matches!(result, Err(LocalQueryError::Parsing(_))));
}

#[test]
fn test_invalid_query_is_reported() {
    let result = local_query(DATA, "SELECT WHERE");
    assert!(matches!(result, Err(LocalQueryError::Evaluation(_))));
}

#[test]
fn test_html_rendering_of_local_results() -> Result<(), Box<dyn Error>> {
    let table = local_query(
        DATA,
        "SELECT ?city WHERE { ?city <http://schema.org/name> \"Bern\"@en }",
    )?;
    assert!(table.to_html().contains(
        "<td><a href=\"http://www.wikidata.org/entity/Q70\" target=\"_blank\">http://www.wikidata.org/entity/Q70</a></td>"
    ));
    Ok(())
}
