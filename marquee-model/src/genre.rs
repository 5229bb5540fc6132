use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::GenreId;

/// A genre as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon_url: String,
    pub created_at: DateTime<Utc>,
}

/// Mutable field set accepted by the administrative update path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenreDraft {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon_url: String,
}

impl Genre {
    pub fn from_draft(id: GenreId, draft: GenreDraft, created_at: DateTime<Utc>) -> Self {
        Genre {
            id,
            name: draft.name,
            slug: draft.slug,
            description: draft.description,
            icon_url: draft.icon_url,
            created_at,
        }
    }

    pub fn apply_draft(&mut self, draft: GenreDraft) {
        self.name = draft.name;
        self.slug = draft.slug;
        self.description = draft.description;
        self.icon_url = draft.icon_url;
    }
}
