use serde::Serialize;
use serde_json::{Map, Value};

/// A Cytoscape.js style rule: a selector and the style properties applied to matching elements.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StyleRule {
    pub selector: String,
    pub style: Map<String, Value>,
}

impl StyleRule {
    /// Creates a rule without properties.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            style: Map::new(),
        }
    }

    /// Sets a style property.
    #[must_use]
    pub fn with(mut self, property: &str, value: impl Into<Value>) -> Self {
        self.style.insert(property.to_owned(), value.into());
        self
    }
}

/// The style of the interactive graph: IRIs in blue, literals as teal rectangles, blank nodes as
/// small grey dots, and predicate labels on directed edges.
pub fn default_style() -> Vec<StyleRule> {
    vec![
        labelled_node("URIRef", "#0868ac", "data(id)"),
        labelled_node("Literal", "#7bccc4", "data(label)").with("shape", "rectangle"),
        StyleRule::new("node[node_type = \"BNode\"]")
            .with("background-color", "grey")
            .with("width", "10")
            .with("height", "10"),
        StyleRule::new("edge.directed")
            .with("font-family", "helvetica")
            .with("font-size", "12px")
            .with("label", "data(label)")
            .with("color", "white")
            .with("text-outline-width", 2)
            .with("text-outline-color", "#43a2ca")
            .with("background-color", "#43a2ca")
            .with("curve-style", "bezier")
            .with("target-arrow-shape", "triangle"),
    ]
}

fn labelled_node(node_type: &str, color: &str, content: &str) -> StyleRule {
    StyleRule::new(format!("node[node_type = \"{node_type}\"]"))
        .with("font-family", "helvetica")
        .with("font-size", "12px")
        .with("color", "white")
        .with("text-outline-width", 2)
        .with("text-outline-color", color)
        .with("background-color", color)
        .with("content", content)
        .with("text-valign", "center")
}
