//! Compact names ("qnames") for IRIs.
//!
//! The [`NamespaceManager`] knows a set of prefix bindings and turns IRIs into `prefix:local`
//! names. IRIs whose namespace is not bound get a generated `nsN` prefix, which is then kept for
//! later lookups.

use std::collections::HashMap;
use unicode_general_category::{get_general_category, GeneralCategory};

/// The prefixes every manager starts with.
pub const DEFAULT_BINDINGS: [(&str, &str); 5] = [
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("xml", "http://www.w3.org/XML/1998/namespace"),
];

/// Maps namespaces to prefixes and computes compact names.
///
/// ```
/// use rdf_notebook::namespace::NamespaceManager;
///
/// let mut namespaces = NamespaceManager::default();
/// namespaces.bind("ex", "http://example.com/");
/// assert_eq!(namespaces.qname("http://example.com/alice"), "ex:alice");
/// assert_eq!(
///     namespaces.qname("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
///     "rdf:type"
/// );
/// assert_eq!(namespaces.qname("http://other.org/vocab#Thing"), "ns1:Thing");
/// ```
#[derive(Clone, Debug)]
pub struct NamespaceManager {
    by_prefix: HashMap<String, String>,
    by_namespace: HashMap<String, String>,
}

impl Default for NamespaceManager {
    fn default() -> Self {
        let mut manager = Self::empty();
        for (prefix, namespace) in DEFAULT_BINDINGS {
            manager.bind(prefix, namespace);
        }
        manager
    }
}

impl NamespaceManager {
    /// Creates a manager without any binding.
    pub fn empty() -> Self {
        Self {
            by_prefix: HashMap::new(),
            by_namespace: HashMap::new(),
        }
    }

    /// Binds `prefix` to `namespace`.
    ///
    /// A previous binding of the same prefix, or of the same namespace, is replaced.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        let prefix = prefix.into();
        let namespace = namespace.into();
        if let Some(old_namespace) = self.by_prefix.remove(&prefix) {
            self.by_namespace.remove(&old_namespace);
        }
        if let Some(old_prefix) = self.by_namespace.remove(&namespace) {
            self.by_prefix.remove(&old_prefix);
        }
        self.by_prefix.insert(prefix.clone(), namespace.clone());
        self.by_namespace.insert(namespace, prefix);
    }

    /// Returns the namespace bound to `prefix`.
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.by_prefix.get(prefix).map(String::as_str)
    }

    /// Returns the prefix bound to `namespace`.
    pub fn prefix(&self, namespace: &str) -> Option<&str> {
        self.by_namespace.get(namespace).map(String::as_str)
    }

    /// Iterates over all `(prefix, namespace)` bindings, sorted by prefix.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut bindings = self
            .by_prefix
            .iter()
            .map(|(p, n)| (p.as_str(), n.as_str()))
            .collect::<Vec<_>>();
        bindings.sort_unstable();
        bindings.into_iter()
    }

    /// Returns the compact name of `iri`.
    ///
    /// The longest bound namespace covering the IRI's namespace wins. If the namespace is unbound,
    /// a fresh `nsN` prefix is bound. The empty prefix yields the bare local name. IRIs that cannot
    /// be split into a namespace and a local name are returned unchanged.
    pub fn qname(&mut self, iri: &str) -> String {
        let Some((namespace, _)) = split_iri(iri) else {
            return match self.prefix(iri) {
                Some(prefix) => format!("{prefix}:"),
                None => iri.to_owned(),
            };
        };

        let namespace = self.longest_bound_namespace(iri, namespace.len()).unwrap_or(namespace);
        let local = &iri[namespace.len()..];
        let prefix = match self.prefix(namespace) {
            Some(prefix) => prefix.to_owned(),
            None => self.generate_prefix(namespace),
        };

        if prefix.is_empty() {
            local.to_owned()
        } else {
            format!("{prefix}:{local}")
        }
    }

    fn longest_bound_namespace<'a>(&self, iri: &'a str, min_len: usize) -> Option<&'a str> {
        self.by_namespace
            .keys()
            .filter(|ns| ns.len() >= min_len && ns.len() < iri.len() && iri.starts_with(ns.as_str()))
            .map(String::len)
            .max()
            .map(|len| &iri[..len])
    }

    fn generate_prefix(&mut self, namespace: &str) -> String {
        let prefix = (1..)
            .map(|i| format!("ns{i}"))
            .find(|candidate| !self.by_prefix.contains_key(candidate))
            .unwrap_or_default();
        tracing::debug!("Generated prefix {prefix} for namespace {namespace}");
        self.bind(prefix.clone(), namespace);
        prefix
    }
}

/// Splits an IRI into a namespace and a local name.
///
/// The local name is the longest trailing run of name characters that starts with a letter or an
/// underscore.
pub fn split_iri(iri: &str) -> Option<(&str, &str)> {
    let (boundary, _) = iri.char_indices().rev().find(|(_, c)| !is_name_char(*c))?;
    let (offset, _) = iri[boundary..]
        .char_indices()
        .find(|(_, c)| is_name_start_char(*c))?;
    let split = boundary + offset;
    (split > 0).then(|| iri.split_at(split))
}

/// Letters (`Ll`, `Lu`, `Lo`, `Lt`), letter numbers (`Nl`) and `_`.
fn is_name_start_char(c: char) -> bool {
    c == '_'
        || matches!(
            get_general_category(c),
            GeneralCategory::LowercaseLetter
                | GeneralCategory::UppercaseLetter
                | GeneralCategory::OtherLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::LetterNumber
        )
}

/// Name start characters plus modifier letters, combining marks, decimal digits and a few
/// punctuation characters.
fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c, '-' | '.' | '%' | '(' | ')' | '\u{B7}' | '\u{387}')
        || matches!(
            get_general_category(c),
            GeneralCategory::ModifierLetter
                | GeneralCategory::NonspacingMark
                | GeneralCategory::SpacingMark
                | GeneralCategory::EnclosingMark
                | GeneralCategory::DecimalNumber
        )
}
