//! One-time publish announcements.
//!
//! The dispatcher formats and sends the "now showing" messages through an
//! abstract transport. Deciding *whether* a title still needs its
//! announcement is the catalog service's job; once invoked, the
//! dispatcher always sends.

mod telegram;
mod transport;

pub use telegram::{TelegramConfig, TelegramTransport};
pub use transport::{LinkButton, NotificationTransport, TransportError};

use std::fmt;
use std::sync::Arc;

use marquee_model::TitleDraft;
use serde::Deserialize;
use tracing::info;
use url::Url;

const WATCH_BUTTON_LABEL: &str = "🍿 Go to watch";

/// Announcement behavior, fixed at construction.
///
/// `photos_enabled = false` mirrors the non-production setup where the
/// cover-photo call is suppressed; the text announcement always goes out.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifierConfig {
    /// Landing page the announcement button links to.
    pub watch_url: Url,
    #[serde(default = "default_photos_enabled")]
    pub photos_enabled: bool,
}

fn default_photos_enabled() -> bool {
    true
}

/// Sends the two-part publish announcement for a title.
#[derive(Clone)]
pub struct NotificationDispatcher {
    transport: Arc<dyn NotificationTransport>,
    config: NotifierConfig,
}

impl fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationDispatcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl NotificationDispatcher {
    pub fn new(transport: Arc<dyn NotificationTransport>, config: NotifierConfig) -> Self {
        Self { transport, config }
    }

    /// Sends the cover photo (unless suppressed) followed by the text
    /// announcement. Errors propagate immediately; a failed photo call
    /// means the message is never attempted.
    pub async fn announce(&self, draft: &TitleDraft) -> Result<(), TransportError> {
        if self.config.photos_enabled {
            self.transport.send_photo(&draft.poster_url).await?;
        }

        let text = format!("<b>{}</b>\n\n{}\n\n", draft.title, draft.description);
        let button = LinkButton {
            url: self.config.watch_url.to_string(),
            label: WATCH_BUTTON_LABEL.to_string(),
        };
        self.transport.send_message(&text, &button).await?;

        info!(title = %draft.title, "publish announcement dispatched");
        Ok(())
    }
}
