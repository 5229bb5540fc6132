#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use marquee_core::{
    CatalogService, CatalogStore, LinkButton, NotificationTransport, NotifierConfig,
    TransportError,
};
use marquee_model::{GenreDraft, GenreId, PerformerDraft, PerformerId, TitleDraft, TitleId};

/// Transport double that records every call and can be told to fail
/// either half of the announcement.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    photos: Mutex<Vec<String>>,
    messages: Mutex<Vec<(String, LinkButton)>>,
    fail_photos: AtomicBool,
    fail_messages: AtomicBool,
}

impl RecordingTransport {
    pub fn photo_count(&self) -> usize {
        self.photos.lock().unwrap().len()
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    pub fn last_message(&self) -> Option<(String, LinkButton)> {
        self.messages.lock().unwrap().last().cloned()
    }

    pub fn fail_photos(&self, fail: bool) {
        self.fail_photos.store(fail, Ordering::SeqCst);
    }

    pub fn fail_messages(&self, fail: bool) {
        self.fail_messages.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl NotificationTransport for RecordingTransport {
    async fn send_photo(&self, photo_url: &str) -> Result<(), TransportError> {
        if self.fail_photos.load(Ordering::SeqCst) {
            return Err(TransportError::Api("photo rejected".to_string()));
        }
        self.photos.lock().unwrap().push(photo_url.to_string());
        Ok(())
    }

    async fn send_message(&self, text: &str, action: &LinkButton) -> Result<(), TransportError> {
        if self.fail_messages.load(Ordering::SeqCst) {
            return Err(TransportError::Api("message rejected".to_string()));
        }
        self.messages
            .lock()
            .unwrap()
            .push((text.to_string(), action.clone()));
        Ok(())
    }
}

pub fn notifier_config() -> NotifierConfig {
    NotifierConfig {
        watch_url: "https://marquee.example/watch".parse().unwrap(),
        photos_enabled: true,
    }
}

/// Catalog service over the in-memory adapter plus the recording
/// transport it announces through.
pub fn service() -> (CatalogService, Arc<RecordingTransport>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let transport = Arc::new(RecordingTransport::default());
    let service = CatalogService::new(
        CatalogStore::in_memory(),
        transport.clone(),
        notifier_config(),
    );
    (service, transport)
}

pub fn performer_draft(name: &str, slug: &str) -> PerformerDraft {
    PerformerDraft {
        name: name.to_string(),
        slug: slug.to_string(),
        photo_url: format!("/uploads/performers/{slug}.jpg"),
    }
}

pub fn genre_draft(name: &str, slug: &str) -> GenreDraft {
    GenreDraft {
        name: name.to_string(),
        slug: slug.to_string(),
        description: format!("{name} titles"),
        icon_url: format!("/uploads/genres/{slug}.svg"),
    }
}

pub fn title_draft(title: &str, slug: &str) -> TitleDraft {
    TitleDraft {
        title: title.to_string(),
        slug: slug.to_string(),
        description: format!("{title} description"),
        poster_url: format!("/uploads/titles/{slug}.jpg"),
        big_poster_url: format!("/uploads/titles/{slug}-big.jpg"),
        video_url: format!("/videos/{slug}.mp4"),
        ..TitleDraft::default()
    }
}

pub async fn seed_performer(service: &CatalogService, name: &str, slug: &str) -> PerformerId {
    let id = service.create_performer().await.unwrap();
    service
        .update_performer(id, performer_draft(name, slug))
        .await
        .unwrap();
    id
}

pub async fn seed_genre(service: &CatalogService, name: &str, slug: &str) -> GenreId {
    let id = service.create_genre().await.unwrap();
    service
        .update_genre(id, genre_draft(name, slug))
        .await
        .unwrap();
    id
}

/// Seeds a fully populated title. The draft is pre-marked announced so
/// seeding never trips the notification workflow; announcement tests
/// build their drafts explicitly.
pub async fn seed_title(
    service: &CatalogService,
    title: &str,
    slug: &str,
    performers: Vec<PerformerId>,
    genres: Vec<GenreId>,
) -> TitleId {
    let id = service.create_title().await.unwrap();
    let draft = TitleDraft {
        performers,
        genres,
        announced: true,
        ..title_draft(title, slug)
    };
    service.update_title(id, draft).await.unwrap();
    id
}

/// Nudges the clock so successive creations get distinct stamps.
pub async fn tick() {
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
}
