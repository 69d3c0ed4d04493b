//! Conversion of RDF documents into directed graphs for visualization.
//!
//! IRIs, blank nodes and literals become distinctly typed nodes, predicates become edge labels.
//!
//! Usage example:
//! ```
//! use rdf_notebook::graph::{rdf_to_digraph, NodeType};
//! use rdf_notebook::io::RdfDocument;
//!
//! let document = RdfDocument::parse(
//!     r#"@prefix ex: <http://example.com/> . ex:alice ex:name "Alice" ; ex:knows [ ex:name "Bob" ] ."#,
//! )?;
//! let graph = rdf_to_digraph(&document);
//! assert_eq!(graph.node("ex:alice").map(|n| n.node_type()), Some(NodeType::UriRef));
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edge_count(), 3);
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

use crate::io::RdfDocument;
use oxrdf::{SubjectRef, TermRef};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// The kind of RDF term a [`GraphNode`] stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NodeType {
    /// A node identified by an IRI.
    #[serde(rename = "URIRef")]
    UriRef,
    /// A blank node.
    #[serde(rename = "BNode")]
    BNode,
    /// A literal (or a quoted triple).
    #[serde(rename = "Literal")]
    Literal,
}

impl NodeType {
    /// The tag used in node data, e.g. `URIRef`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UriRef => "URIRef",
            Self::BNode => "BNode",
            Self::Literal => "Literal",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of an [`RdfDiGraph`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
    id: String,
    node_type: NodeType,
    label: Option<String>,
}

impl GraphNode {
    /// The unique id of the node.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// The display label. Only literal nodes carry one.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// A directed graph with at most one labelled edge per ordered pair of nodes.
#[derive(Clone, Debug, Default)]
pub struct RdfDiGraph {
    graph: DiGraph<GraphNode, String>,
    index: HashMap<String, NodeIndex>,
}

impl RdfDiGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node or, if a node with the same `id` exists, updates its type and label.
    pub fn add_node(
        &mut self,
        id: impl Into<String>,
        node_type: NodeType,
        label: Option<String>,
    ) -> NodeIndex {
        let id = id.into();
        if let Some(&index) = self.index.get(&id) {
            let node = &mut self.graph[index];
            node.node_type = node_type;
            if label.is_some() {
                node.label = label;
            }
            return index;
        }
        let index = self.graph.add_node(GraphNode {
            id: id.clone(),
            node_type,
            label,
        });
        self.index.insert(id, index);
        index
    }

    /// Adds an edge from `source` to `target`. An existing edge between them gets the new label.
    pub fn add_edge(&mut self, source: NodeIndex, target: NodeIndex, label: impl Into<String>) {
        self.graph.update_edge(source, target, label.into());
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the node with the given `id`.
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index.get(id).map(|index| &self.graph[*index])
    }

    /// Iterates over the nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_indices().map(|index| &self.graph[index])
    }

    /// Iterates over the edges as `(source, target, label)`.
    pub fn edges(&self) -> impl Iterator<Item = (&GraphNode, &GraphNode, &str)> {
        self.graph.edge_references().map(|edge| {
            (
                &self.graph[edge.source()],
                &self.graph[edge.target()],
                edge.weight().as_str(),
            )
        })
    }

    /// Returns the label of the edge from `source` to `target`.
    pub fn edge_label(&self, source: &str, target: &str) -> Option<&str> {
        let source = *self.index.get(source)?;
        let target = *self.index.get(target)?;
        let edge = self.graph.find_edge(source, target)?;
        Some(self.graph[edge].as_str())
    }

    /// Returns the ids of the nodes reachable over one outgoing edge from `id`.
    pub fn successors(&self, id: &str) -> Vec<&str> {
        let Some(&index) = self.index.get(id) else {
            return Vec::new();
        };
        let mut successors = self
            .graph
            .neighbors_directed(index, Direction::Outgoing)
            .map(|n| self.graph[n].id.as_str())
            .collect::<Vec<_>>();
        successors.sort_unstable();
        successors
    }

    /// Returns the underlying petgraph graph.
    pub fn inner(&self) -> &DiGraph<GraphNode, String> {
        &self.graph
    }
}

/// Converts the triples of `document` into a directed graph.
///
/// Node ids are compact names for IRIs, `_:bnode_<id>` for blank nodes and
/// `Literal_<n>_<value>` for literals, where `n` counts literal occurrences so that equal literals
/// stay distinct nodes. Edges are labelled with the compact name of the predicate.
///
/// The document is read as a set of triples: a triple repeated in the input is converted once.
pub fn rdf_to_digraph(document: &RdfDocument) -> RdfDiGraph {
    let mut namespaces = document.namespaces().clone();
    let mut graph = RdfDiGraph::new();
    let mut literal_counter = 0_usize;
    let mut add_literal = |graph: &mut RdfDiGraph, value: String| {
        let id = format!("Literal_{literal_counter}_{value}");
        literal_counter += 1;
        graph.add_node(id, NodeType::Literal, Some(value))
    };

    let mut seen = HashSet::new();
    for triple in document.triples() {
        if !seen.insert(triple) {
            continue;
        }
        let subject = match triple.subject {
            SubjectRef::NamedNode(node) => {
                graph.add_node(namespaces.qname(node.as_str()), NodeType::UriRef, None)
            }
            SubjectRef::BlankNode(node) => {
                graph.add_node(blank_node_id(node.as_str()), NodeType::BNode, None)
            }
            SubjectRef::Triple(quoted) => {
                add_literal(&mut graph, format!("<< {quoted} >>"))
            }
        };
        let predicate = namespaces.qname(triple.predicate.as_str());
        let object = match triple.object {
            TermRef::NamedNode(node) => {
                graph.add_node(namespaces.qname(node.as_str()), NodeType::UriRef, None)
            }
            TermRef::BlankNode(node) => {
                graph.add_node(blank_node_id(node.as_str()), NodeType::BNode, None)
            }
            TermRef::Literal(literal) => add_literal(&mut graph, literal.value().to_owned()),
            TermRef::Triple(quoted) => add_literal(&mut graph, format!("<< {quoted} >>")),
        };
        graph.add_edge(subject, object, predicate);
    }

    tracing::debug!(
        "Converted RDF document into a graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}

fn blank_node_id(id: &str) -> String {
    format!("_:bnode_{id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    const DATA: &str = r#"
@prefix ex: <http://example.com/> .
@prefix schema: <http://schema.org/> .

ex:alice a schema:Person ;
    schema:name "Alice" ;
    schema:age 42 ;
    schema:knows ex:bob , _:carol .
ex:bob schema:name "Bob" .
_:carol schema:name "Alice" .
"#;

    #[test]
    fn iri_nodes_use_compact_names() -> Result<(), ParseError> {
        let graph = rdf_to_digraph(&RdfDocument::parse(DATA)?);
        assert_eq!(
            graph.node("ex:alice").map(GraphNode::node_type),
            Some(NodeType::UriRef)
        );
        assert_eq!(
            graph.node("schema:Person").map(GraphNode::node_type),
            Some(NodeType::UriRef)
        );
        assert_eq!(graph.edge_label("ex:alice", "schema:Person"), Some("rdf:type"));
        Ok(())
    }

    #[test]
    fn equal_literals_stay_distinct() -> Result<(), ParseError> {
        let graph = rdf_to_digraph(&RdfDocument::parse(DATA)?);
        let literals = graph
            .nodes()
            .filter(|n| n.node_type() == NodeType::Literal)
            .map(|n| (n.id().to_owned(), n.label().map(str::to_owned)))
            .collect::<Vec<_>>();
        assert_eq!(
            literals,
            vec![
                ("Literal_0_Alice".to_owned(), Some("Alice".to_owned())),
                ("Literal_1_42".to_owned(), Some("42".to_owned())),
                ("Literal_2_Bob".to_owned(), Some("Bob".to_owned())),
                ("Literal_3_Alice".to_owned(), Some("Alice".to_owned())),
            ]
        );
        Ok(())
    }

    #[test]
    fn blank_nodes_are_prefixed() -> Result<(), ParseError> {
        let graph = rdf_to_digraph(&RdfDocument::parse(DATA)?);
        let blank_nodes = graph
            .nodes()
            .filter(|n| n.node_type() == NodeType::BNode)
            .collect::<Vec<_>>();
        assert_eq!(blank_nodes.len(), 1);
        assert!(blank_nodes[0].id().starts_with("_:bnode_"));
        assert_eq!(blank_nodes[0].label(), None);
        Ok(())
    }

    #[test]
    fn counts_nodes_and_edges() -> Result<(), ParseError> {
        let graph = rdf_to_digraph(&RdfDocument::parse(DATA)?);
        // alice, Person, bob, carol and four literals
        assert_eq!(graph.node_count(), 8);
        assert_eq!(graph.edge_count(), 7);
        let successors = graph.successors("ex:alice");
        assert_eq!(successors.len(), 5);
        assert_eq!(successors[0], "Literal_0_Alice");
        assert!(successors[2].starts_with("_:bnode_"));
        assert_eq!(&successors[3..], ["ex:bob", "schema:Person"]);
        Ok(())
    }

    #[test]
    fn parallel_triples_keep_last_predicate() -> Result<(), ParseError> {
        let graph = rdf_to_digraph(&RdfDocument::parse(
            "@prefix ex: <http://example.com/> . ex:a ex:first ex:b . ex:a ex:second ex:b .",
        )?);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_label("ex:a", "ex:b"), Some("ex:second"));
        Ok(())
    }

    #[test]
    fn unknown_namespaces_get_generated_prefixes() -> Result<(), ParseError> {
        let graph = rdf_to_digraph(&RdfDocument::parse(
            "<http://example.org/vocab#s> <http://example.org/vocab#p> <http://example.org/vocab#o> .",
        )?);
        assert!(graph.node("ns1:s").is_some());
        assert_eq!(graph.edge_label("ns1:s", "ns1:o"), Some("ns1:p"));
        Ok(())
    }

    #[test]
    fn repeated_triples_are_converted_once() -> Result<(), ParseError> {
        let graph = rdf_to_digraph(&RdfDocument::parse(
            r#"@prefix ex: <http://example.com/> .
            ex:a ex:p "x" .
            ex:a ex:p "x" .
            ex:a ex:q "y", "y" ."#,
        )?);
        let ids = graph.nodes().map(GraphNode::id).collect::<Vec<_>>();
        assert_eq!(ids, ["ex:a", "Literal_0_x", "Literal_1_y"]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_label("ex:a", "Literal_1_y"), Some("ex:q"));
        Ok(())
    }

    #[test]
    fn quoted_triples_become_literals() -> Result<(), ParseError> {
        let graph = rdf_to_digraph(&RdfDocument::parse(
            r#"@prefix ex: <http://example.com/> .
            << ex:a ex:p ex:b >> ex:q ex:c .
            ex:c ex:r << ex:a ex:p "b" >> ."#,
        )?);
        let subject = "<< <http://example.com/a> <http://example.com/p> <http://example.com/b> >>";
        let node = graph.node(&format!("Literal_0_{subject}"));
        assert_eq!(node.map(GraphNode::node_type), Some(NodeType::Literal));
        assert_eq!(node.and_then(GraphNode::label), Some(subject));

        let object = r#"<< <http://example.com/a> <http://example.com/p> "b" >>"#;
        let node = graph.node(&format!("Literal_1_{object}"));
        assert_eq!(node.map(GraphNode::node_type), Some(NodeType::Literal));
        assert_eq!(node.and_then(GraphNode::label), Some(object));

        assert_eq!(
            graph.edge_label(&format!("Literal_0_{subject}"), "ex:c"),
            Some("ex:q")
        );
        assert_eq!(graph.node_count(), 3);
        Ok(())
    }

    #[test]
    fn empty_document_gives_empty_graph() -> Result<(), ParseError> {
        let graph = rdf_to_digraph(&RdfDocument::parse("")?);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        Ok(())
    }
}
