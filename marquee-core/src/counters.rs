//! Counter and rating mutations for titles.

use std::ops::RangeInclusive;

use marquee_model::{EntityKind, Title, TitleId};
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::store::CatalogStore;

/// Accepted rating domain.
pub const RATING_RANGE: RangeInclusive<f32> = 0.0..=10.0;

/// Atomic open-count increments and validated rating overwrites.
#[derive(Debug, Clone)]
pub struct CounterService {
    store: CatalogStore,
}

impl CounterService {
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }

    /// Bumps the open counter for the title behind `slug` by exactly one.
    /// Unknown slugs leave every counter untouched.
    pub async fn record_open(&self, slug: &str) -> Result<Title> {
        let title = self
            .store
            .titles()
            .increment_open_count(slug)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Title, slug))?;
        debug!(slug, count_opened = title.count_opened, "open recorded");
        Ok(title)
    }

    /// Overwrites the rating after bounds-checking it against
    /// [`RATING_RANGE`]. Out-of-range values are rejected, not clamped.
    pub async fn set_rating(&self, id: TitleId, rating: f32) -> Result<Title> {
        if !RATING_RANGE.contains(&rating) {
            return Err(CatalogError::Validation(format!(
                "rating {rating} outside accepted range {:?}",
                RATING_RANGE
            )));
        }

        self.store
            .titles()
            .set_rating(id, rating)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Title, id.to_string()))
    }
}
