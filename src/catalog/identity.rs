use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a category (e.g., `communication`).
///
/// Identifiers are the registry's primary key and the only thing symbol
/// entries store about their categories; labels and icons are resolved
/// through the registry.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        CategoryId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        CategoryId(value.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(value: String) -> Self {
        CategoryId(value)
    }
}
