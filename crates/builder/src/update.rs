//! Update queries: DELETE/INSERT statements over a WHERE pattern.

use serde::{Deserialize, Serialize};
use sparql_syntax::prelude::*;
use tracing::trace;

use crate::error::RenderResult;
use crate::pattern::{indent, GraphPattern};
use crate::query::{strip_trailing_newline, QueryBase};

/// A DELETE/INSERT/WHERE update statement. Each clause renders only when its
/// pattern is set; the clause order is fixed regardless of which are present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct UpdateQuery {
    base: QueryBase,
    delete: Option<GraphPattern>,
    insert: Option<GraphPattern>,
}

impl UpdateQuery {
    /// Creates a new, empty update query.
    pub fn new() -> Self {
        UpdateQuery::default()
    }

    /// Adds a PREFIX declaration to the query header.
    pub fn add_prefix(mut self, prefix: Prefix) -> Self {
        self.base.add_prefix(prefix);
        self
    }

    /// Seeds the fixed table of well-known namespace prefixes (rdf, rdfs,
    /// xml, owl, prov, foaf).
    pub fn add_popular_prefixes(mut self) -> Self {
        self.base.add_popular_prefixes();
        self
    }

    /// Sets the graph pattern used as the DELETE part.
    pub fn set_delete_pattern(mut self, pattern: GraphPattern) -> Self {
        self.delete = Some(pattern);
        self
    }

    /// Sets the graph pattern used as the INSERT part.
    pub fn set_insert_pattern(mut self, pattern: GraphPattern) -> Self {
        self.insert = Some(pattern);
        self
    }

    /// Sets the graph pattern used as the WHERE part.
    pub fn set_where_pattern(mut self, pattern: GraphPattern) -> Self {
        self.base.set_where_pattern(pattern);
        self
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    /// Renders the statement as a top-level query.
    pub fn render(&self) -> RenderResult<String> {
        self.render_at(0)
    }

    /// Renders the statement at the given nesting depth. A failure in any
    /// clause pattern aborts the whole render.
    pub fn render_at(&self, depth: usize) -> RenderResult<String> {
        trace!(depth, "rendering update query");

        let outer = indent(depth);
        let mut text = String::new();

        self.base.render_prefixes(&mut text);

        if let Some(pattern) = &self.delete {
            text.push_str(&format!("\n{outer}DELETE "));
            let block = pattern.render_at(depth)?;
            text.push_str(strip_trailing_newline(&block));
        }

        if let Some(pattern) = &self.insert {
            text.push_str(&format!("\n{outer}INSERT "));
            let block = pattern.render_at(depth)?;
            text.push_str(strip_trailing_newline(&block));
        }

        if let Some(pattern) = self.base.where_pattern() {
            text.push_str(&format!("\n{outer}WHERE "));
            let block = pattern.render_at(depth)?;
            text.push_str(strip_trailing_newline(&block));
        }

        Ok(text)
    }
}
