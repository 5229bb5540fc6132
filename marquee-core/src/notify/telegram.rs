use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use super::transport::{LinkButton, NotificationTransport, TransportError};

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Credentials and target channel for the Bot API.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

/// Bot API adapter for the announcement channel.
pub struct TelegramTransport {
    http: reqwest::Client,
    config: TelegramConfig,
}

impl std::fmt::Debug for TelegramTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramTransport")
            .field("chat_id", &self.config.chat_id)
            .finish_non_exhaustive()
    }
}

impl TelegramTransport {
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn call<B>(&self, method: &str, body: &B) -> Result<(), TransportError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!(
            "{TELEGRAM_API_BASE}/bot{}/{method}",
            self.config.bot_token
        );
        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();

        #[derive(Debug, Deserialize)]
        struct BotApiEnvelope {
            ok: bool,
            #[serde(default)]
            description: Option<String>,
        }

        let envelope = response.json::<BotApiEnvelope>().await?;
        if status.is_success() && envelope.ok {
            debug!(method, "telegram call accepted");
            return Ok(());
        }

        let message = envelope
            .description
            .unwrap_or_else(|| format!("telegram {method} failed with status {status}"));
        Err(TransportError::Api(message))
    }
}

#[async_trait]
impl NotificationTransport for TelegramTransport {
    async fn send_photo(&self, photo_url: &str) -> Result<(), TransportError> {
        self.call(
            "sendPhoto",
            &json!({
                "chat_id": self.config.chat_id,
                "photo": photo_url,
            }),
        )
        .await
    }

    async fn send_message(&self, text: &str, action: &LinkButton) -> Result<(), TransportError> {
        self.call(
            "sendMessage",
            &json!({
                "chat_id": self.config.chat_id,
                "text": text,
                "parse_mode": "HTML",
                "reply_markup": {
                    "inline_keyboard": [[{
                        "text": action.label,
                        "url": action.url,
                    }]],
                },
            }),
        )
        .await
    }
}
