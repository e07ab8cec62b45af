//! SELECT queries: projected variables, modifiers and solution-ordering
//! clauses over a WHERE pattern.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use sparql_syntax::prelude::*;
use tracing::trace;

use crate::error::RenderResult;
use crate::pattern::{indent, GraphPattern};
use crate::query::{strip_trailing_newline, QueryBase};

/// A SELECT query. Renders either as a full statement or, nested inside a
/// [`GraphPattern`], as a subquery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SelectQuery {
    base: QueryBase,
    distinct: bool,
    limit: Option<u64>,
    variables: Vec<String>,
    group_by: Vec<GroupBy>,
    having: Vec<Having>,
    order_by: Vec<OrderBy>,
}

impl SelectQuery {
    /// Creates a new, empty SELECT query.
    pub fn new() -> Self {
        SelectQuery::default()
    }

    /// Marks the query as SELECT DISTINCT.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Limits the number of results returned by the query.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
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

    /// Sets the graph pattern used as the WHERE part. Setting again
    /// replaces the previous pattern.
    pub fn set_where_pattern(mut self, pattern: GraphPattern) -> Self {
        self.base.set_where_pattern(pattern);
        self
    }

    /// Adds variables to the projection. With no variables added the query
    /// selects `*`.
    pub fn add_variables(
        mut self,
        variables: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.variables
            .extend(variables.into_iter().map(Into::into));
        self
    }

    /// Adds a GROUP BY clause.
    pub fn add_group_by(mut self, group: GroupBy) -> Self {
        self.group_by.push(group);
        self
    }

    /// Adds a HAVING clause. Renders between GROUP BY and ORDER BY.
    pub fn add_having(mut self, having: Having) -> Self {
        self.having.push(having);
        self
    }

    /// Adds an ORDER BY clause.
    pub fn add_order_by(mut self, order: OrderBy) -> Self {
        self.order_by.push(order);
        self
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    /// Renders the query as a top-level statement.
    pub fn render(&self) -> RenderResult<String> {
        self.render_at(0)
    }

    /// Renders the query at the given nesting depth.
    ///
    /// The WHERE token is emitted even when no pattern has been set. A
    /// failure in the WHERE pattern aborts the whole render.
    pub fn render_at(&self, depth: usize) -> RenderResult<String> {
        trace!(depth, variables = self.variables.len(), "rendering select query");

        let outer = indent(depth);
        let mut text = String::new();

        self.base.render_prefixes(&mut text);

        text.push('\n');
        text.push_str(&outer);
        text.push_str("SELECT ");
        if self.distinct {
            text.push_str("DISTINCT ");
        }
        if self.variables.is_empty() {
            text.push('*');
        } else {
            text.push_str(&self.variables.iter().join(" "));
        }

        text.push('\n');
        text.push_str(&outer);
        text.push_str("WHERE ");
        if let Some(pattern) = self.base.where_pattern() {
            let block = pattern.render_at(depth)?;
            text.push_str(strip_trailing_newline(&block));
        }

        for group in &self.group_by {
            text.push('\n');
            text.push_str(&outer);
            text.push_str(&group.render());
        }

        for having in &self.having {
            text.push('\n');
            text.push_str(&outer);
            text.push_str(&having.render());
        }

        for order in &self.order_by {
            text.push('\n');
            text.push_str(&outer);
            text.push_str(&order.render());
        }

        if let Some(limit) = self.limit {
            text.push_str(&format!("\nLIMIT {limit}"));
        }

        Ok(text)
    }
}
