use serde::{Deserialize, Serialize};

use crate::expression::Expression;

/// A BIND expression assigning the result of an expression to a variable
/// within a pattern.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Binding {
    /// The expression computing the value.
    pub value: Expression,
    /// The variable the value is assigned to.
    pub variable: String,
}

impl Binding {
    pub fn new(value: impl Into<Expression>, variable: impl Into<String>) -> Self {
        Binding {
            value: value.into(),
            variable: variable.into(),
        }
    }
}
