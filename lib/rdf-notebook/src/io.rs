//! Parsing of RDF serializations into an in-memory [`RdfDocument`].

use crate::error::ParseError;
use crate::namespace::NamespaceManager;
use oxrdf::{Quad, TripleRef};
pub use oxrdfio::RdfFormat;
use oxrdfio::RdfParser;

/// The parsed content of an RDF serialization.
///
/// It keeps the quads in the order of the input together with the prefixes the input declared.
///
/// ```
/// use rdf_notebook::io::RdfDocument;
///
/// let document = RdfDocument::parse(
///     "@prefix ex: <http://example.com/> . ex:alice ex:knows ex:bob .",
/// )?;
/// assert_eq!(document.len(), 1);
/// assert_eq!(document.namespaces().namespace("ex"), Some("http://example.com/"));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone, Debug)]
pub struct RdfDocument {
    quads: Vec<Quad>,
    namespaces: NamespaceManager,
}

impl RdfDocument {
    /// Parses a [Turtle](https://www.w3.org/TR/turtle/) serialization.
    pub fn parse(data: &str) -> Result<Self, ParseError> {
        Self::parse_with_format(data, RdfFormat::Turtle)
    }

    /// Parses a serialization in the given `format`.
    pub fn parse_with_format(data: &str, format: RdfFormat) -> Result<Self, ParseError> {
        Self::parse_with_parser(data, RdfParser::from_format(format))
    }

    /// Parses a serialization in the given `format`, resolving relative IRIs against `base_iri`.
    pub fn parse_with_base_iri(
        data: &str,
        format: RdfFormat,
        base_iri: &str,
    ) -> Result<Self, ParseError> {
        let parser = RdfParser::from_format(format)
            .with_base_iri(base_iri)
            .map_err(|error| ParseError::InvalidBaseIri {
                iri: base_iri.to_owned(),
                error,
            })?;
        Self::parse_with_parser(data, parser)
    }

    fn parse_with_parser(data: &str, parser: RdfParser) -> Result<Self, ParseError> {
        let mut parser = parser.for_reader(data.as_bytes());
        let mut quads = Vec::new();
        for quad in parser.by_ref() {
            quads.push(quad?);
        }

        // Prefixes are only complete once the whole input has been read
        let mut namespaces = NamespaceManager::default();
        for (prefix, namespace) in parser.prefixes() {
            namespaces.bind(prefix, namespace);
        }

        tracing::debug!("Parsed {} quads", quads.len());
        Ok(Self { quads, namespaces })
    }

    /// Returns the number of parsed quads.
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Returns whether the document contains no quad.
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Returns the parsed quads in input order.
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// Iterates over the triples of the document, ignoring graph names.
    pub fn triples(&self) -> impl Iterator<Item = TripleRef<'_>> {
        self.quads.iter().map(|quad| {
            TripleRef::new(&quad.subject, &quad.predicate, &quad.object)
        })
    }

    /// Returns the prefixes known for this document.
    pub fn namespaces(&self) -> &NamespaceManager {
        &self.namespaces
    }

    /// Consumes the document and returns its quads.
    pub fn into_quads(self) -> Vec<Quad> {
        self.quads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{NamedNodeRef, TermRef};

    #[test]
    fn parse_keeps_declared_prefixes() -> Result<(), ParseError> {
        let document = RdfDocument::parse(
            r#"
            @prefix schema: <http://schema.org/> .
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            <http://example.com/a> schema:name "A" .
            "#,
        )?;
        assert_eq!(
            document.namespaces().namespace("schema"),
            Some("http://schema.org/")
        );
        assert_eq!(document.namespaces().namespace("owl"), Some("http://www.w3.org/2002/07/owl#"));
        Ok(())
    }

    #[test]
    fn parse_keeps_input_order() -> Result<(), ParseError> {
        let document = RdfDocument::parse_with_format(
            "<http://example.com/s> <http://example.com/p> <http://example.com/o2> .\n\
             <http://example.com/s> <http://example.com/p> <http://example.com/o1> .\n",
            RdfFormat::NTriples,
        )?;
        let objects = document.triples().map(|t| t.object).collect::<Vec<_>>();
        assert_eq!(
            objects,
            vec![
                TermRef::from(NamedNodeRef::new_unchecked("http://example.com/o2")),
                TermRef::from(NamedNodeRef::new_unchecked("http://example.com/o1")),
            ]
        );
        Ok(())
    }

    #[test]
    fn parse_resolves_relative_iris() -> Result<(), ParseError> {
        let document =
            RdfDocument::parse_with_base_iri("<a> <b> <c> .", RdfFormat::Turtle, "http://example.com/")?;
        assert_eq!(
            document.quads()[0].subject.to_string(),
            "<http://example.com/a>"
        );
        Ok(())
    }

    #[test]
    fn invalid_base_iri_is_reported() {
        let result = RdfDocument::parse_with_base_iri("", RdfFormat::Turtle, "not an iri");
        assert!(matches!(result, Err(ParseError::InvalidBaseIri { .. })));
    }

    #[test]
    fn syntax_errors_are_reported() {
        let result = RdfDocument::parse("<http://example.com/s> <http://example.com/p> .");
        assert!(matches!(result, Err(ParseError::Syntax(_))));
    }
}
