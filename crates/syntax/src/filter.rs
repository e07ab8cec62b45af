use serde::{Deserialize, Serialize};

/// A FILTER constraint restricting the solutions of the enclosing pattern.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// The constraint expression, verbatim.
    pub expression: String,
}

impl Filter {
    pub fn new(expression: impl Into<String>) -> Self {
        Filter {
            expression: expression.into(),
        }
    }
}
