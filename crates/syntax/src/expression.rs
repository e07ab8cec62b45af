use serde::{Deserialize, Serialize};

/// The value forms a binding accepts: verbatim expression text or one of the
/// conditional constructs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Expression {
    /// Verbatim expression text, spliced into the output as-is.
    Raw(String),
    /// A BOUND test on a variable.
    Bound(Bound),
    /// A conditional IF expression.
    If(IfClause),
}

impl From<&str> for Expression {
    fn from(text: &str) -> Self {
        Expression::Raw(text.to_string())
    }
}

impl From<String> for Expression {
    fn from(text: String) -> Self {
        Expression::Raw(text)
    }
}

impl From<Bound> for Expression {
    fn from(bound: Bound) -> Self {
        Expression::Bound(bound)
    }
}

impl From<IfClause> for Expression {
    fn from(if_clause: IfClause) -> Self {
        Expression::If(if_clause)
    }
}

/// Tests whether a variable is bound to a value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Bound {
    /// The variable to test.
    pub variable: String,
}

impl Bound {
    pub fn new(variable: impl Into<String>) -> Self {
        Bound {
            variable: variable.into(),
        }
    }
}

/// A conditional expression selecting one of two values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IfClause {
    /// The condition to evaluate.
    pub condition: Box<Expression>,
    /// The value produced when the condition holds.
    pub when_true: String,
    /// The value produced otherwise.
    pub when_false: String,
}

impl IfClause {
    pub fn new(
        condition: impl Into<Expression>,
        when_true: impl Into<String>,
        when_false: impl Into<String>,
    ) -> Self {
        IfClause {
            condition: Box::new(condition.into()),
            when_true: when_true.into(),
            when_false: when_false.into(),
        }
    }
}
