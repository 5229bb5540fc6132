use async_trait::async_trait;
use marquee_model::{Title, TitleDraft, TitleId};

use crate::error::Result;

#[async_trait]
pub trait TitleStore: Send + Sync {
    async fn get(&self, id: TitleId) -> Result<Option<Title>>;

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Title>>;

    /// Scans the collection, optionally narrowed by a case-insensitive
    /// substring match over the title field.
    async fn list(&self, search: Option<&str>) -> Result<Vec<Title>>;

    async fn insert_blank(&self) -> Result<TitleId>;

    async fn update(&self, id: TitleId, draft: TitleDraft) -> Result<Option<Title>>;

    async fn delete(&self, id: TitleId) -> Result<Option<Title>>;

    /// Bumps `count_opened` by exactly one as a single conditional store
    /// operation and returns the updated record. Must not be implemented
    /// as a read-modify-write pair.
    async fn increment_open_count(&self, slug: &str) -> Result<Option<Title>>;

    /// Overwrites the rating. Range checks happen above the port.
    async fn set_rating(&self, id: TitleId, rating: f32) -> Result<Option<Title>>;
}
