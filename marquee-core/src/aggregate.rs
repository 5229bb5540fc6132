//! Denormalized read models built at request time.

use futures::future::try_join_all;
use marquee_model::{CollectionCard, PerformerCard, Title};

use crate::error::{CatalogError, Result};
use crate::relations::RelationshipIndex;
use crate::store::CatalogStore;

/// Builds the listing and card views the public client renders.
///
/// Nothing here is cached; every view reflects the store as of the reads
/// that produced it. Reads are not snapshot-isolated against concurrent
/// writes.
#[derive(Debug, Clone)]
pub struct AggregationEngine {
    store: CatalogStore,
    relations: RelationshipIndex,
}

impl AggregationEngine {
    pub fn new(store: CatalogStore, relations: RelationshipIndex) -> Self {
        Self { store, relations }
    }

    /// Performer listing with appearance counts, newest first.
    pub async fn performer_listing(&self, search: Option<&str>) -> Result<Vec<PerformerCard>> {
        let performers = self.store.performers().list(search).await?;

        let mut cards = try_join_all(performers.into_iter().map(|performer| async move {
            let titles = self.relations.titles_for_performer(performer.id).await?;
            Ok::<_, CatalogError>(PerformerCard::new(performer, titles.len()))
        }))
        .await?;

        cards.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(cards)
    }

    /// One collection card per genre, carrying the big poster of a title
    /// associated with it. Genres with no titles are omitted.
    pub async fn genre_collections(&self) -> Result<Vec<CollectionCard>> {
        let mut genres = self.store.genres().list(None).await?;
        genres.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let cards = try_join_all(genres.into_iter().map(|genre| async move {
            let titles = self.relations.titles_for_genres(&[genre.id]).await?;
            Ok::<_, CatalogError>(titles.into_iter().next().map(|title| CollectionCard {
                id: genre.id,
                slug: genre.slug,
                title: genre.name,
                image: title.big_poster_url,
            }))
        }))
        .await?;

        Ok(cards.into_iter().flatten().collect())
    }

    /// Titles that have been opened at least once, most opened first.
    pub async fn most_popular(&self) -> Result<Vec<Title>> {
        let mut titles = self.store.titles().list(None).await?;
        titles.retain(|title| title.count_opened > 0);
        titles.sort_by(|a, b| b.count_opened.cmp(&a.count_opened));
        Ok(titles)
    }
}
