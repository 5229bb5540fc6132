pub mod memory;
pub mod ports;

pub use memory::MemoryCatalogStore;
pub use ports::{GenreStore, PerformerStore, TitleStore};

use std::fmt;
use std::sync::Arc;

/// Facade bundling the per-collection store ports.
///
/// Cheap to clone; every handle is shared. The backing adapter is chosen
/// at construction and never inspected afterwards.
#[derive(Clone)]
pub struct CatalogStore {
    performers: Arc<dyn PerformerStore>,
    genres: Arc<dyn GenreStore>,
    titles: Arc<dyn TitleStore>,
}

impl CatalogStore {
    pub fn new(
        performers: Arc<dyn PerformerStore>,
        genres: Arc<dyn GenreStore>,
        titles: Arc<dyn TitleStore>,
    ) -> Self {
        Self {
            performers,
            genres,
            titles,
        }
    }

    /// Builds a store backed by the in-memory adapter.
    pub fn in_memory() -> Self {
        let backend = Arc::new(MemoryCatalogStore::new());
        Self {
            performers: backend.clone(),
            genres: backend.clone(),
            titles: backend,
        }
    }

    pub fn performers(&self) -> &dyn PerformerStore {
        self.performers.as_ref()
    }

    pub fn genres(&self) -> &dyn GenreStore {
        self.genres.as_ref()
    }

    pub fn titles(&self) -> &dyn TitleStore {
        self.titles.as_ref()
    }
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogStore").finish_non_exhaustive()
    }
}
