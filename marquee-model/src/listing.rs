use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{GenreId, PerformerId};
use crate::performer::Performer;

/// Performer listing entry with its derived appearance count.
///
/// `title_count` is computed against the title collection at read time,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformerCard {
    pub id: PerformerId,
    pub name: String,
    pub slug: String,
    pub photo_url: String,
    pub title_count: usize,
    pub created_at: DateTime<Utc>,
}

impl PerformerCard {
    pub fn new(performer: Performer, title_count: usize) -> Self {
        PerformerCard {
            id: performer.id,
            name: performer.name,
            slug: performer.slug,
            photo_url: performer.photo_url,
            title_count,
            created_at: performer.created_at,
        }
    }
}

/// Genre summary card backed by a representative title's cover image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionCard {
    pub id: GenreId,
    pub slug: String,
    pub title: String,
    pub image: String,
}
