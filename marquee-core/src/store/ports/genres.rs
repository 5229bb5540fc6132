use async_trait::async_trait;
use marquee_model::{Genre, GenreDraft, GenreId};

use crate::error::Result;

#[async_trait]
pub trait GenreStore: Send + Sync {
    async fn get(&self, id: GenreId) -> Result<Option<Genre>>;

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Genre>>;

    /// Scans the collection, optionally narrowed by a case-insensitive
    /// substring match over name, slug and description.
    async fn list(&self, search: Option<&str>) -> Result<Vec<Genre>>;

    async fn insert_blank(&self) -> Result<GenreId>;

    async fn update(&self, id: GenreId, draft: GenreDraft) -> Result<Option<Genre>>;

    async fn delete(&self, id: GenreId) -> Result<Option<Genre>>;
}
