//! Public catalog surface.
//!
//! Composes the store, the derived-view builders, the counter service and
//! the notification dispatcher, and maps every absence signal to a typed
//! not-found error so callers never see store-specific `None`s.

use std::fmt;
use std::sync::Arc;

use marquee_model::{
    CollectionCard, EntityKind, Genre, GenreDraft, GenreId, Performer, PerformerCard,
    PerformerDraft, PerformerId, Title, TitleDraft, TitleId,
};
use tracing::info;

use crate::aggregate::AggregationEngine;
use crate::counters::CounterService;
use crate::error::{CatalogError, Result};
use crate::notify::{NotificationDispatcher, NotificationTransport, NotifierConfig};
use crate::relations::RelationshipIndex;
use crate::store::CatalogStore;

/// The catalog backend's API surface.
#[derive(Clone)]
pub struct CatalogService {
    store: CatalogStore,
    relations: RelationshipIndex,
    aggregation: AggregationEngine,
    counters: CounterService,
    dispatcher: NotificationDispatcher,
}

impl fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogService").finish_non_exhaustive()
    }
}

impl CatalogService {
    pub fn new(
        store: CatalogStore,
        transport: Arc<dyn NotificationTransport>,
        notifier: NotifierConfig,
    ) -> Self {
        let relations = RelationshipIndex::new(store.clone());
        let aggregation = AggregationEngine::new(store.clone(), relations.clone());
        let counters = CounterService::new(store.clone());
        let dispatcher = NotificationDispatcher::new(transport, notifier);
        Self {
            store,
            relations,
            aggregation,
            counters,
            dispatcher,
        }
    }

    /* Performers */

    /// Performer listing with derived appearance counts, newest first.
    pub async fn performers(&self, search: Option<&str>) -> Result<Vec<PerformerCard>> {
        self.aggregation.performer_listing(search).await
    }

    pub async fn performer_by_slug(&self, slug: &str) -> Result<Performer> {
        self.store
            .performers()
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Performer, slug))
    }

    pub async fn performer_by_id(&self, id: PerformerId) -> Result<Performer> {
        self.store
            .performers()
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Performer, id.to_string()))
    }

    pub async fn create_performer(&self) -> Result<PerformerId> {
        let id = self.store.performers().insert_blank().await?;
        info!(%id, "blank performer created");
        Ok(id)
    }

    pub async fn update_performer(
        &self,
        id: PerformerId,
        draft: PerformerDraft,
    ) -> Result<Performer> {
        self.store
            .performers()
            .update(id, draft)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Performer, id.to_string()))
    }

    pub async fn delete_performer(&self, id: PerformerId) -> Result<Performer> {
        let removed = self
            .store
            .performers()
            .delete(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Performer, id.to_string()))?;
        info!(%id, "performer deleted");
        Ok(removed)
    }

    /* Genres */

    pub async fn genres(&self, search: Option<&str>) -> Result<Vec<Genre>> {
        let mut genres = self.store.genres().list(search).await?;
        genres.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(genres)
    }

    pub async fn genre_by_slug(&self, slug: &str) -> Result<Genre> {
        self.store
            .genres()
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Genre, slug))
    }

    pub async fn genre_by_id(&self, id: GenreId) -> Result<Genre> {
        self.store
            .genres()
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Genre, id.to_string()))
    }

    /// Collection cards for every genre with at least one title.
    pub async fn collections(&self) -> Result<Vec<CollectionCard>> {
        self.aggregation.genre_collections().await
    }

    pub async fn create_genre(&self) -> Result<GenreId> {
        let id = self.store.genres().insert_blank().await?;
        info!(%id, "blank genre created");
        Ok(id)
    }

    pub async fn update_genre(&self, id: GenreId, draft: GenreDraft) -> Result<Genre> {
        self.store
            .genres()
            .update(id, draft)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Genre, id.to_string()))
    }

    pub async fn delete_genre(&self, id: GenreId) -> Result<Genre> {
        let removed = self
            .store
            .genres()
            .delete(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Genre, id.to_string()))?;
        info!(%id, "genre deleted");
        Ok(removed)
    }

    /* Titles */

    pub async fn titles(&self, search: Option<&str>) -> Result<Vec<Title>> {
        let mut titles = self.store.titles().list(search).await?;
        titles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(titles)
    }

    pub async fn title_by_slug(&self, slug: &str) -> Result<Title> {
        self.store
            .titles()
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Title, slug))
    }

    pub async fn title_by_id(&self, id: TitleId) -> Result<Title> {
        self.store
            .titles()
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Title, id.to_string()))
    }

    pub async fn titles_by_performer(&self, id: PerformerId) -> Result<Vec<Title>> {
        self.relations.titles_for_performer(id).await
    }

    pub async fn titles_by_genres(&self, ids: &[GenreId]) -> Result<Vec<Title>> {
        self.relations.titles_for_genres(ids).await
    }

    /// Titles opened at least once, most opened first.
    pub async fn most_popular(&self) -> Result<Vec<Title>> {
        self.aggregation.most_popular().await
    }

    pub async fn record_open(&self, slug: &str) -> Result<Title> {
        self.counters.record_open(slug).await
    }

    pub async fn set_rating(&self, id: TitleId, rating: f32) -> Result<Title> {
        self.counters.set_rating(id, rating).await
    }

    pub async fn create_title(&self) -> Result<TitleId> {
        let id = self.store.titles().insert_blank().await?;
        info!(%id, "blank title created");
        Ok(id)
    }

    /// Administrative title update.
    ///
    /// First publish dispatches the announcement before anything is
    /// persisted: a transport failure aborts the whole update and the
    /// `announced` marker stays false, so the flag and the notification
    /// cannot drift apart. A caller retrying the full update after a
    /// partial transport failure may therefore duplicate the calls that
    /// already went through (at-least-once delivery).
    pub async fn update_title(&self, id: TitleId, mut draft: TitleDraft) -> Result<Title> {
        let current = self.title_by_id(id).await?;

        if !current.announced && !draft.announced {
            self.dispatcher.announce(&draft).await?;
            draft.announced = true;
        }

        self.store
            .titles()
            .update(id, draft)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Title, id.to_string()))
    }

    pub async fn delete_title(&self, id: TitleId) -> Result<Title> {
        let removed = self
            .store
            .titles()
            .delete(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Title, id.to_string()))?;
        info!(%id, "title deleted");
        Ok(removed)
    }
}
