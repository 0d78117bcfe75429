//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
///
/// Categories are identified by name; the name is also what the product
/// listing is filtered by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
