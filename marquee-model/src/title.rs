use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{GenreId, PerformerId, TitleId};

/// A title as stored in the catalog.
///
/// Performer and genre references are held on the title side only; the
/// reverse direction is derived at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub id: TitleId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub poster_url: String,
    pub big_poster_url: String,
    pub video_url: String,
    /// Editorial rating in `[0, 10]`, overwritten as a whole.
    pub rating: f32,
    /// Monotonic open counter, bumped only through the counter service.
    pub count_opened: u64,
    /// One-way marker: the publish announcement has been dispatched.
    pub announced: bool,
    pub performers: Vec<PerformerId>,
    pub genres: Vec<GenreId>,
    pub created_at: DateTime<Utc>,
}

/// Mutable field set accepted by the administrative update path.
///
/// Deliberately excludes `rating` and `count_opened`; those move only
/// through their dedicated counter operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleDraft {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub poster_url: String,
    pub big_poster_url: String,
    pub video_url: String,
    pub announced: bool,
    pub performers: Vec<PerformerId>,
    pub genres: Vec<GenreId>,
}

impl Title {
    pub fn from_draft(id: TitleId, draft: TitleDraft, created_at: DateTime<Utc>) -> Self {
        Title {
            id,
            title: draft.title,
            slug: draft.slug,
            description: draft.description,
            poster_url: draft.poster_url,
            big_poster_url: draft.big_poster_url,
            video_url: draft.video_url,
            rating: 0.0,
            count_opened: 0,
            announced: draft.announced,
            performers: draft.performers,
            genres: draft.genres,
            created_at,
        }
    }

    /// Applies a draft over the stored record.
    ///
    /// `announced` never reverts: once a title is announced, drafts that
    /// still carry `false` cannot clear the marker.
    pub fn apply_draft(&mut self, draft: TitleDraft) {
        self.title = draft.title;
        self.slug = draft.slug;
        self.description = draft.description;
        self.poster_url = draft.poster_url;
        self.big_poster_url = draft.big_poster_url;
        self.video_url = draft.video_url;
        self.announced = self.announced || draft.announced;
        self.performers = draft.performers;
        self.genres = draft.genres;
    }

    pub fn references_performer(&self, id: PerformerId) -> bool {
        self.performers.contains(&id)
    }

    pub fn references_any_genre(&self, ids: &[GenreId]) -> bool {
        self.genres.iter().any(|genre| ids.contains(genre))
    }
}
