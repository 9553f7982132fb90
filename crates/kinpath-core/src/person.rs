//! People in the family table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a person.
pub type PersonId = i64;

/// A person in the family dataset.
///
/// People are read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

impl Person {
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Label used wherever an ID has no matching person.
    pub fn placeholder_name(id: PersonId) -> String {
        format!("Unknown({})", id)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
