//! Interactive graph visualization with [Cytoscape.js](https://js.cytoscape.org/).
//!
//! Usage example:
//! ```
//! use rdf_notebook::visualize::parse_and_plot;
//!
//! let widget = parse_and_plot(
//!     r#"@prefix ex: <http://example.com/> . ex:alice ex:name "Alice" ."#,
//! )?;
//! assert_eq!(widget.elements().len(), 3);
//! assert!(widget.to_html()?.contains("cytoscape("));
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

mod style;
mod widget;

pub use style::{default_style, StyleRule};
pub use widget::{CytoscapeWidget, EdgeData, Element, Layout, NodeData, CYTOSCAPE_SCRIPT_URL};

use crate::error::ParseError;
use crate::graph::rdf_to_digraph;
use crate::io::RdfDocument;

/// Parses a Turtle document and returns a styled interactive graph of its triples.
pub fn parse_and_plot(ttl: &str) -> Result<CytoscapeWidget, ParseError> {
    Ok(plot_document(&RdfDocument::parse(ttl)?))
}

/// Same as [`parse_and_plot`] for an already parsed document.
pub fn plot_document(document: &RdfDocument) -> CytoscapeWidget {
    let graph = rdf_to_digraph(document);
    let mut widget = CytoscapeWidget::from_digraph(&graph);
    widget.set_style(default_style());
    widget
}
