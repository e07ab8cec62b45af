//! Graph patterns: ordered containers mixing triples, nested patterns and
//! nested subqueries, rendered as indented brace blocks.

use serde::{Deserialize, Serialize};
use sparql_syntax::prelude::*;
use tracing::trace;

use crate::error::{RenderError, RenderResult};
use crate::select::SelectQuery;

/// The indent unit applied once per nesting level.
const INDENT_UNIT: &str = "   ";

/// Maximum nesting depth the renderer will recurse into. Trees deeper than
/// this fail with [`RenderError::DepthLimitExceeded`] rather than risking the
/// stack on programmatically generated input.
pub const MAX_RENDER_DEPTH: usize = 128;

/// Returns the indentation for the given nesting depth.
pub(crate) fn indent(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

/// A single entry of a graph pattern body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum PatternEntry {
    /// A plain triple clause.
    Triple(Triple),
    /// A nested graph pattern block.
    Pattern(GraphPattern),
    /// A nested SELECT subquery.
    SubSelect(SelectQuery),
}

/// A block of matching conditions (triples, filters, sub-patterns) that a
/// query engine evaluates together.
///
/// Entries render in insertion order, followed by bindings, then filters.
/// The optional/union decoration is fixed at construction; the body is
/// extended through the `add_*` builders. Rendering borrows the pattern
/// immutably and can be repeated freely.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct GraphPattern {
    optional: bool,
    union: bool,
    entries: Vec<PatternEntry>,
    filters: Vec<Filter>,
    bindings: Vec<Binding>,
    havings: Vec<Having>,
}

impl GraphPattern {
    /// Creates a new, empty graph pattern.
    pub fn new() -> Self {
        GraphPattern::default()
    }

    /// Creates a pattern rendered with an OPTIONAL decoration.
    pub fn optional() -> Self {
        GraphPattern {
            optional: true,
            ..GraphPattern::default()
        }
    }

    /// Creates a pattern rendered as a UNION continuation of the preceding
    /// pattern.
    pub fn union() -> Self {
        GraphPattern {
            union: true,
            ..GraphPattern::default()
        }
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_union(&self) -> bool {
        self.union
    }

    /// The entries added so far, in insertion order.
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a single triple to the pattern body.
    pub fn add_triple(mut self, triple: Triple) -> Self {
        self.entries.push(PatternEntry::Triple(triple));
        self
    }

    /// Adds a sequence of triples to the pattern body.
    pub fn add_triples(mut self, triples: impl IntoIterator<Item = Triple>) -> Self {
        self.entries
            .extend(triples.into_iter().map(PatternEntry::Triple));
        self
    }

    /// Nests another graph pattern inside this one. The child is moved in;
    /// it renders one level deeper than its parent.
    pub fn add_nested_pattern(mut self, pattern: GraphPattern) -> Self {
        self.entries.push(PatternEntry::Pattern(pattern));
        self
    }

    /// Nests a SELECT query inside this pattern. The subquery renders two
    /// levels deeper, wrapped in its own brace pair.
    pub fn add_nested_select(mut self, query: SelectQuery) -> Self {
        self.entries.push(PatternEntry::SubSelect(query));
        self
    }

    /// Adds a FILTER constraint. Filters render after all entries and
    /// bindings.
    pub fn add_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Adds a BIND expression. Bindings render after all entries, before
    /// filters.
    pub fn add_binding(mut self, binding: Binding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Accepts a HAVING clause for interface compatibility. Clauses attached
    /// to a bare pattern are stored but never rendered; only the clauses
    /// attached to a [`SelectQuery`] appear in query text.
    pub fn add_having(mut self, having: Having) -> Self {
        self.havings.push(having);
        self
    }

    /// Renders the pattern as a top-level block.
    pub fn render(&self) -> RenderResult<String> {
        self.render_at(0)
    }

    /// Renders the pattern at the given nesting depth.
    ///
    /// The output is a newline-terminated brace block. Any failure in a
    /// nested pattern or subquery aborts the whole render.
    pub fn render_at(&self, depth: usize) -> RenderResult<String> {
        if depth > MAX_RENDER_DEPTH {
            return Err(RenderError::DepthLimitExceeded {
                depth,
                max: MAX_RENDER_DEPTH,
            });
        }

        trace!(depth, entries = self.entries.len(), "rendering graph pattern");

        let outer = indent(depth);
        let inner = indent(depth + 1);

        let mut text = if self.optional {
            format!("{outer}OPTIONAL {{\n")
        } else if self.union {
            format!("{outer}UNION\n{outer}{{\n")
        } else {
            format!("{outer}{{\n")
        };

        for entry in &self.entries {
            match entry {
                PatternEntry::Triple(triple) => {
                    text.push_str(&inner);
                    text.push_str(&triple.render());
                }
                PatternEntry::Pattern(pattern) => {
                    text.push_str(&pattern.render_at(depth + 1)?);
                }
                PatternEntry::SubSelect(query) => {
                    // One extra level so the subquery sits correctly inside
                    // the brace pair it is wrapped in.
                    let subquery = query.render_at(depth + 2)?;
                    text.push_str(&format!("{inner}{{{subquery}{inner}}}\n"));
                }
            }
        }

        for binding in &self.bindings {
            text.push_str(&format!("{inner}{}\n", binding.render()));
        }

        for filter in &self.filters {
            text.push_str(&format!("{inner}{}\n", filter.render()));
        }

        text.push_str(&outer);
        text.push_str("}\n");

        Ok(text)
    }
}
