use serde::{Deserialize, Serialize};

/// A short alias bound to a namespace IRI, used to abbreviate identifiers in
/// query text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    /// The alias, without the trailing colon.
    pub alias: String,
    /// The namespace IRI the alias expands to.
    pub namespace: String,
}

impl Prefix {
    /// Creates a new prefix declaration.
    pub fn new(alias: impl Into<String>, namespace: impl Into<String>) -> Self {
        Prefix {
            alias: alias.into(),
            namespace: namespace.into(),
        }
    }
}
