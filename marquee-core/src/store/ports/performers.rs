use async_trait::async_trait;
use marquee_model::{Performer, PerformerDraft, PerformerId};

use crate::error::Result;

#[async_trait]
pub trait PerformerStore: Send + Sync {
    async fn get(&self, id: PerformerId) -> Result<Option<Performer>>;

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Performer>>;

    /// Scans the collection, optionally narrowed by a case-insensitive
    /// substring match over name and slug. Scan order is unspecified.
    async fn list(&self, search: Option<&str>) -> Result<Vec<Performer>>;

    /// Persists a blank record and returns its id.
    async fn insert_blank(&self) -> Result<PerformerId>;

    async fn update(&self, id: PerformerId, draft: PerformerDraft) -> Result<Option<Performer>>;

    /// Hard delete; returns the removed record.
    async fn delete(&self, id: PerformerId) -> Result<Option<Performer>>;
}
