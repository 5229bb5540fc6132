use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminant for the three catalog collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Performer,
    Genre,
    Title,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Performer => "performer",
            EntityKind::Genre => "genre",
            EntityKind::Title => "title",
        };
        write!(f, "{name}")
    }
}
