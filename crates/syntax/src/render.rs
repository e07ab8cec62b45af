//! Module for rendering syntax terms to SPARQL text.

use std::fmt;

use itertools::Itertools;

use crate::binding::Binding;
use crate::expression::{Bound, Expression, IfClause};
use crate::filter::Filter;
use crate::order::{GroupBy, Having, Order, OrderBy, OrderTemplate};
use crate::prefix::Prefix;
use crate::triple::Triple;

/// Trait for rendering a syntax term to its SPARQL textual form.
///
/// Terms that terminate a line of query text on their own ([`Triple`],
/// [`Prefix`]) include the trailing newline; clause terms are rendered
/// without one and the composition layer supplies line breaks.
pub trait Render {
    /// Render this term to SPARQL text.
    fn render(&self) -> String;
}

impl Render for Triple {
    fn render(&self) -> String {
        format!("{} {} {} .\n", self.subject, self.predicate, self.object)
    }
}

impl Render for Prefix {
    fn render(&self) -> String {
        format!("PREFIX {}: <{}>\n", self.alias, self.namespace)
    }
}

impl Render for Filter {
    fn render(&self) -> String {
        format!("FILTER ({})", self.expression)
    }
}

impl Render for Binding {
    fn render(&self) -> String {
        format!("BIND ({} AS {})", self.value.render(), self.variable)
    }
}

impl Render for Expression {
    fn render(&self) -> String {
        match self {
            Expression::Raw(text) => text.clone(),
            Expression::Bound(bound) => bound.render(),
            Expression::If(if_clause) => if_clause.render(),
        }
    }
}

impl Render for Bound {
    fn render(&self) -> String {
        format!("BOUND ({})", self.variable)
    }
}

impl Render for IfClause {
    fn render(&self) -> String {
        format!(
            "IF ({}, {}, {})",
            self.condition.render(),
            self.when_true,
            self.when_false
        )
    }
}

impl Render for GroupBy {
    fn render(&self) -> String {
        format!("GROUP BY {}", self.variables.iter().join(" "))
    }
}

impl Render for Having {
    fn render(&self) -> String {
        format!("HAVING ({})", self.expression)
    }
}

impl Render for OrderTemplate {
    fn render(&self) -> String {
        match self.order {
            Order::Asc => self.variable.clone(),
            Order::Desc => format!("DESC({})", self.variable),
        }
    }
}

impl Render for OrderBy {
    fn render(&self) -> String {
        format!(
            "ORDER BY {}",
            self.ordering.iter().map(Render::render).join(" ")
        )
    }
}

// Display implementations using Render

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl fmt::Display for IfClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl fmt::Display for Having {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl fmt::Display for OrderTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
