//! SPARQL syntax terms: the leaf constructs that query text is assembled from.
//!
//! Each term is a plain data holder whose [`render::Render`] implementation
//! produces its textual form. Composition into graph patterns and full
//! queries lives in the `sparql-builder` crate.

pub mod binding;
pub mod expression;
pub mod filter;
pub mod order;
pub mod prefix;
pub mod render;
pub mod triple;

pub mod prelude {
    pub use super::binding::Binding;
    pub use super::expression::{Bound, Expression, IfClause};
    pub use super::filter::Filter;
    pub use super::order::{GroupBy, Having, Order, OrderBy, OrderTemplate};
    pub use super::prefix::Prefix;
    pub use super::render::Render;
    pub use super::triple::Triple;
}

#[test]
fn it_compiles() {}
