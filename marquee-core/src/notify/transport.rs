use async_trait::async_trait;
use thiserror::Error;

/// Failure of the external messaging channel.
///
/// Propagated unchanged to the caller; the enclosing update aborts and
/// nothing is retried. Calls that already went through are not rolled
/// back.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),
}

/// Single inline action attached to an announcement message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkButton {
    pub url: String,
    pub label: String,
}

/// Abstract announcement channel.
///
/// Both calls either fully succeed or surface the failure; silently
/// swallowing a transport error would break the one-time dispatch
/// bookkeeping built on top of it.
#[async_trait]
pub trait NotificationTransport: Send + Sync {
    async fn send_photo(&self, photo_url: &str) -> Result<(), TransportError>;

    async fn send_message(&self, text: &str, action: &LinkButton) -> Result<(), TransportError>;
}
