//! Programmatic construction and rendering of SPARQL queries.
//!
//! Queries are assembled bottom-up: build a [`pattern::GraphPattern`] from
//! triples, nested patterns and subqueries, attach it to a
//! [`select::SelectQuery`] or [`update::UpdateQuery`], then call `render()`
//! once at the root. Rendering walks the tree top-down, each node deriving
//! its indentation from a depth parameter passed by its parent.

pub mod error;
pub mod pattern;
pub mod query;
pub mod select;
pub mod update;

pub mod prelude {
    pub use crate::error::{RenderError, RenderResult};
    pub use crate::pattern::{GraphPattern, PatternEntry, MAX_RENDER_DEPTH};
    pub use crate::query::QueryBase;
    pub use crate::select::SelectQuery;
    pub use crate::update::UpdateQuery;

    pub use sparql_syntax::prelude::*;
}

// Declare the tests module, only compiled when running tests
#[cfg(test)]
mod tests;
