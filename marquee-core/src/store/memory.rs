//! In-memory store adapter.
//!
//! Reference implementation of the collection ports, also the backend for
//! the integration suites. Per-entry mutation under the map's entry guard
//! is what gives `increment_open_count` its required atomicity.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use marquee_model::{
    EntityKind, Genre, GenreDraft, GenreId, Performer, PerformerDraft, PerformerId, Title,
    TitleDraft, TitleId,
};

use crate::error::{CatalogError, Result};
use crate::store::ports::{GenreStore, PerformerStore, TitleStore};

#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    performers: DashMap<PerformerId, Performer>,
    genres: DashMap<GenreId, Genre>,
    titles: DashMap<TitleId, Title>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(needle: &str, fields: &[&str]) -> bool {
    let needle = needle.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

fn slug_conflict(kind: EntityKind, slug: &str) -> CatalogError {
    CatalogError::Validation(format!("{kind} slug already in use: {slug}"))
}

#[async_trait]
impl PerformerStore for MemoryCatalogStore {
    async fn get(&self, id: PerformerId) -> Result<Option<Performer>> {
        Ok(self.performers.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Performer>> {
        Ok(self
            .performers
            .iter()
            .find(|entry| entry.slug == slug)
            .map(|entry| entry.value().clone()))
    }

    async fn list(&self, search: Option<&str>) -> Result<Vec<Performer>> {
        Ok(self
            .performers
            .iter()
            .filter(|entry| search.is_none_or(|term| matches(term, &[&entry.name, &entry.slug])))
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn insert_blank(&self) -> Result<PerformerId> {
        let id = PerformerId::new();
        let blank = Performer::from_draft(id, PerformerDraft::default(), Utc::now());
        self.performers.insert(id, blank);
        Ok(id)
    }

    async fn update(&self, id: PerformerId, draft: PerformerDraft) -> Result<Option<Performer>> {
        let taken = !draft.slug.is_empty()
            && self
                .performers
                .iter()
                .any(|entry| entry.slug == draft.slug && entry.id != id);
        if taken {
            return Err(slug_conflict(EntityKind::Performer, &draft.slug));
        }

        Ok(self.performers.get_mut(&id).map(|mut entry| {
            entry.apply_draft(draft);
            entry.value().clone()
        }))
    }

    async fn delete(&self, id: PerformerId) -> Result<Option<Performer>> {
        Ok(self.performers.remove(&id).map(|(_, performer)| performer))
    }
}

#[async_trait]
impl GenreStore for MemoryCatalogStore {
    async fn get(&self, id: GenreId) -> Result<Option<Genre>> {
        Ok(self.genres.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Genre>> {
        Ok(self
            .genres
            .iter()
            .find(|entry| entry.slug == slug)
            .map(|entry| entry.value().clone()))
    }

    async fn list(&self, search: Option<&str>) -> Result<Vec<Genre>> {
        Ok(self
            .genres
            .iter()
            .filter(|entry| {
                search.is_none_or(|term| {
                    matches(term, &[&entry.name, &entry.slug, &entry.description])
                })
            })
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn insert_blank(&self) -> Result<GenreId> {
        let id = GenreId::new();
        let blank = Genre::from_draft(id, GenreDraft::default(), Utc::now());
        self.genres.insert(id, blank);
        Ok(id)
    }

    async fn update(&self, id: GenreId, draft: GenreDraft) -> Result<Option<Genre>> {
        let taken = !draft.slug.is_empty()
            && self
                .genres
                .iter()
                .any(|entry| entry.slug == draft.slug && entry.id != id);
        if taken {
            return Err(slug_conflict(EntityKind::Genre, &draft.slug));
        }

        Ok(self.genres.get_mut(&id).map(|mut entry| {
            entry.apply_draft(draft);
            entry.value().clone()
        }))
    }

    async fn delete(&self, id: GenreId) -> Result<Option<Genre>> {
        Ok(self.genres.remove(&id).map(|(_, genre)| genre))
    }
}

#[async_trait]
impl TitleStore for MemoryCatalogStore {
    async fn get(&self, id: TitleId) -> Result<Option<Title>> {
        Ok(self.titles.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Title>> {
        Ok(self
            .titles
            .iter()
            .find(|entry| entry.slug == slug)
            .map(|entry| entry.value().clone()))
    }

    async fn list(&self, search: Option<&str>) -> Result<Vec<Title>> {
        Ok(self
            .titles
            .iter()
            .filter(|entry| search.is_none_or(|term| matches(term, &[&entry.title])))
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn insert_blank(&self) -> Result<TitleId> {
        let id = TitleId::new();
        let blank = Title::from_draft(id, TitleDraft::default(), Utc::now());
        self.titles.insert(id, blank);
        Ok(id)
    }

    async fn update(&self, id: TitleId, draft: TitleDraft) -> Result<Option<Title>> {
        let taken = !draft.slug.is_empty()
            && self
                .titles
                .iter()
                .any(|entry| entry.slug == draft.slug && entry.id != id);
        if taken {
            return Err(slug_conflict(EntityKind::Title, &draft.slug));
        }

        Ok(self.titles.get_mut(&id).map(|mut entry| {
            entry.apply_draft(draft);
            entry.value().clone()
        }))
    }

    async fn delete(&self, id: TitleId) -> Result<Option<Title>> {
        Ok(self.titles.remove(&id).map(|(_, title)| title))
    }

    async fn increment_open_count(&self, slug: &str) -> Result<Option<Title>> {
        let id = self
            .titles
            .iter()
            .find(|entry| entry.slug == slug)
            .map(|entry| entry.id);

        let Some(id) = id else {
            return Ok(None);
        };

        // The bump happens under the entry guard, so concurrent opens
        // cannot lose increments.
        Ok(self.titles.get_mut(&id).map(|mut entry| {
            entry.count_opened += 1;
            entry.value().clone()
        }))
    }

    async fn set_rating(&self, id: TitleId, rating: f32) -> Result<Option<Title>> {
        Ok(self.titles.get_mut(&id).map(|mut entry| {
            entry.rating = rating;
            entry.value().clone()
        }))
    }
}
