//! Telegram Bot API notifier

use crate::config::TelegramConfig;
use crate::error::{ScanError, ScanResult};
use crate::services::notifier::Notifier;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

pub struct TelegramNotifier {
    send_message_url: Url,
    client: Client,
}

impl TelegramNotifier {
    pub fn new(config: &TelegramConfig) -> ScanResult<Self> {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: &TelegramConfig, client: Client) -> ScanResult<Self> {
        // Leading "./" keeps a token like "123:ABC" from parsing as a URL scheme
        let path = format!("./bot{}/sendMessage", config.bot_token);
        let send_message_url = config
            .api_url
            .join(&path)
            .map_err(|e| ScanError::Config(format!("invalid Telegram API URL: {}", e)))?;

        Ok(Self {
            send_message_url,
            client,
        })
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, recipient: &str, text: &str) -> ScanResult<()> {
        let response = self
            .client
            .post(self.send_message_url.clone())
            .json(&SendMessageRequest {
                chat_id: recipient,
                text,
            })
            .send()
            .await?;

        let status = response.status();
        let body: SendMessageResponse = response.json().await.map_err(|e| {
            ScanError::Notification(format!("unreadable Telegram response ({}): {}", status, e))
        })?;

        if !body.ok {
            return Err(ScanError::Notification(format!(
                "Telegram rejected message ({}): {}",
                status,
                body.description.unwrap_or_else(|| "no description".to_string())
            )));
        }

        debug!(recipient = %recipient, chars = text.chars().count(), "Telegram: message delivered");
        Ok(())
    }
}
