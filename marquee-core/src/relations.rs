//! Derived back-references from titles to the entities they cite.

use marquee_model::{GenreId, PerformerId, Title};

use crate::error::Result;
use crate::store::CatalogStore;

/// Answers "which titles reference performer P / genre G".
///
/// Scan-and-filter over the title collection; no secondary index is
/// maintained, so results are always consistent with the store's current
/// state. Order follows the store's natural scan order.
#[derive(Debug, Clone)]
pub struct RelationshipIndex {
    store: CatalogStore,
}

impl RelationshipIndex {
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }

    pub async fn titles_for_performer(&self, id: PerformerId) -> Result<Vec<Title>> {
        let mut titles = self.store.titles().list(None).await?;
        titles.retain(|title| title.references_performer(id));
        Ok(titles)
    }

    pub async fn titles_for_genres(&self, ids: &[GenreId]) -> Result<Vec<Title>> {
        let mut titles = self.store.titles().list(None).await?;
        titles.retain(|title| title.references_any_genre(ids));
        Ok(titles)
    }
}
