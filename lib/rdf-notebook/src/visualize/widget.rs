use crate::display::display_html;
use crate::graph::{NodeType, RdfDiGraph};
use crate::visualize::StyleRule;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// The Cytoscape.js build loaded by the rendered HTML.
pub const CYTOSCAPE_SCRIPT_URL: &str = "https://unpkg.com/cytoscape@3.30.2/dist/cytoscape.min.js";

static WIDGET_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// The data of a node element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NodeData {
    pub id: String,
    pub node_type: NodeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// The data of an edge element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EdgeData {
    pub source: String,
    pub target: String,
    pub label: String,
}

/// A Cytoscape.js element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "group")]
pub enum Element {
    #[serde(rename = "nodes")]
    Node { data: NodeData },
    #[serde(rename = "edges")]
    Edge { data: EdgeData, classes: String },
}

/// The Cytoscape.js layout used to place the nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub name: String,
}

impl Layout {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new("cose")
    }
}

/// An interactive graph: Cytoscape.js elements together with their style and layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CytoscapeWidget {
    elements: Vec<Element>,
    style: Vec<StyleRule>,
    layout: Layout,
}

impl CytoscapeWidget {
    /// Creates an unstyled widget showing `graph`.
    ///
    /// Nodes keep their id, type tag and label. Edges carry the predicate label and the `directed`
    /// class.
    pub fn from_digraph(graph: &RdfDiGraph) -> Self {
        let nodes = graph.nodes().map(|node| Element::Node {
            data: NodeData {
                id: node.id().to_owned(),
                node_type: node.node_type(),
                label: node.label().map(str::to_owned),
            },
        });
        let edges = graph.edges().map(|(source, target, label)| Element::Edge {
            data: EdgeData {
                source: source.id().to_owned(),
                target: target.id().to_owned(),
                label: label.to_owned(),
            },
            classes: "directed".to_owned(),
        });
        Self {
            elements: nodes.chain(edges).collect(),
            style: Vec::new(),
            layout: Layout::default(),
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn style(&self) -> &[StyleRule] {
        &self.style
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Replaces the style sheet.
    pub fn set_style(&mut self, style: Vec<StyleRule>) {
        self.style = style;
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Serializes elements, style and layout as a JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Renders a standalone HTML page showing the graph.
    pub fn to_html(&self) -> serde_json::Result<String> {
        Ok(format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>RDF graph</title>\n\
             <script src=\"{CYTOSCAPE_SCRIPT_URL}\"></script>\n</head>\n<body style=\"margin: 0\">\n{}\n</body>\n</html>\n",
            self.to_html_fragment("cy", "100vh")?
        ))
    }

    /// Writes the page rendered by [`Self::to_html`] to `path`.
    pub fn write_html(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.to_html()?)
    }

    /// Called by the evcxr kernel to render the graph inline.
    pub fn evcxr_display(&self) {
        let id = format!(
            "rdf-notebook-graph-{}",
            WIDGET_COUNTER.fetch_add(1, Ordering::Relaxed)
        );
        match self.to_html_fragment(&id, "500px") {
            Ok(fragment) => display_html(&format!(
                "<script src=\"{CYTOSCAPE_SCRIPT_URL}\"></script>\n{fragment}"
            )),
            Err(error) => tracing::warn!("Could not serialize graph: {error}"),
        }
    }

    fn to_html_fragment(&self, container_id: &str, height: &str) -> serde_json::Result<String> {
        // "</" would close the script element early
        let json = self.to_json()?.replace("</", "<\\/");
        Ok(format!(
            "<div id=\"{container_id}\" style=\"width: 100%; height: {height}\"></div>\n\
             <script>\n\
             (function () {{\n\
             const widget = {json};\n\
             cytoscape({{\n\
             container: document.getElementById(\"{container_id}\"),\n\
             elements: widget.elements,\n\
             style: widget.style,\n\
             layout: widget.layout,\n\
             }});\n\
             }})();\n\
             </script>"
        ))
    }
}
