use serde::{Deserialize, Serialize};

/// Specifies the ordering direction (ascending or descending).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

/// A single ordering key, consisting of the variable and ordering direction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderTemplate {
    /// The variable to order by.
    pub variable: String,
    /// An enum either 'asc' or 'desc'.
    pub order: Order,
}

impl OrderTemplate {
    /// Creates an ascending ordering key.
    pub fn asc(variable: impl Into<String>) -> Self {
        OrderTemplate {
            variable: variable.into(),
            order: Order::Asc,
        }
    }

    /// Creates a descending ordering key.
    pub fn desc(variable: impl Into<String>) -> Self {
        OrderTemplate {
            variable: variable.into(),
            order: Order::Desc,
        }
    }
}

/// An ORDER BY clause holding a sequence of ordering keys.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// A specification of the ordering of solutions.
    pub ordering: Vec<OrderTemplate>,
}

impl OrderBy {
    pub fn new(ordering: impl IntoIterator<Item = OrderTemplate>) -> Self {
        OrderBy {
            ordering: ordering.into_iter().collect(),
        }
    }
}

/// A GROUP BY clause over a set of variables.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GroupBy {
    /// The variables which should be grouped into like solutions.
    pub variables: Vec<String>,
}

impl GroupBy {
    pub fn new(variables: impl IntoIterator<Item = impl Into<String>>) -> Self {
        GroupBy {
            variables: variables.into_iter().map(Into::into).collect(),
        }
    }
}

/// A HAVING constraint over grouped solutions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Having {
    /// The constraint expression, verbatim.
    pub expression: String,
}

impl Having {
    pub fn new(expression: impl Into<String>) -> Self {
        Having {
            expression: expression.into(),
        }
    }
}
