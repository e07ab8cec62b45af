//! Clauses shared by every query form: the prefix header and the WHERE
//! pattern.

use serde::{Deserialize, Serialize};
use sparql_syntax::prelude::*;

use crate::pattern::GraphPattern;

/// Namespaces seeded by `add_popular_prefixes`.
const POPULAR_PREFIXES: [(&str, &str); 6] = [
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("xml", "http://www.w3.org/2001/XMLSchema#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("prov", "http://www.w3.org/ns/prov#"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
];

/// The header and body every query form carries: prefix declarations in
/// insertion order, and at most one WHERE pattern (setting again replaces).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct QueryBase {
    prefixes: Vec<Prefix>,
    where_pattern: Option<GraphPattern>,
}

impl QueryBase {
    pub fn new() -> Self {
        QueryBase::default()
    }

    pub fn add_prefix(&mut self, prefix: Prefix) {
        self.prefixes.push(prefix);
    }

    /// Seeds the fixed table of well-known namespace prefixes.
    pub fn add_popular_prefixes(&mut self) {
        for (alias, namespace) in POPULAR_PREFIXES {
            self.add_prefix(Prefix::new(alias, namespace));
        }
    }

    pub fn set_where_pattern(&mut self, pattern: GraphPattern) {
        self.where_pattern = Some(pattern);
    }

    pub fn prefixes(&self) -> &[Prefix] {
        &self.prefixes
    }

    pub fn where_pattern(&self) -> Option<&GraphPattern> {
        self.where_pattern.as_ref()
    }

    /// Appends the rendered prefix declarations, one per line.
    pub(crate) fn render_prefixes(&self, text: &mut String) {
        for prefix in &self.prefixes {
            text.push_str(&prefix.render());
        }
    }
}

/// Drops the single trailing newline of a rendered pattern block so the
/// closing brace sits flush before the next clause.
pub(crate) fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}
