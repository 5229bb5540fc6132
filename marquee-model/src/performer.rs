use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::PerformerId;

/// A performer as stored in the catalog.
///
/// `slug` is the public lookup key; `created_at` drives the default
/// descending sort of listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performer {
    pub id: PerformerId,
    pub name: String,
    pub slug: String,
    pub photo_url: String,
    pub created_at: DateTime<Utc>,
}

/// Mutable field set accepted by the administrative update path.
///
/// `Default` yields the blank record the create-blank operation persists
/// before the admin client fills it in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformerDraft {
    pub name: String,
    pub slug: String,
    pub photo_url: String,
}

impl Performer {
    /// Materializes a blank record from a draft, stamping identity and
    /// creation time.
    pub fn from_draft(id: PerformerId, draft: PerformerDraft, created_at: DateTime<Utc>) -> Self {
        Performer {
            id,
            name: draft.name,
            slug: draft.slug,
            photo_url: draft.photo_url,
            created_at,
        }
    }

    /// Applies a draft over the stored record, keeping identity and audit
    /// fields.
    pub fn apply_draft(&mut self, draft: PerformerDraft) {
        self.name = draft.name;
        self.slug = draft.slug;
        self.photo_url = draft.photo_url;
    }
}
