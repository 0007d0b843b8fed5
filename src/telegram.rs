use serde::{Deserialize, Serialize};

use crate::error::BotError;

const API_BASE: &str = "https://api.telegram.org";

/// Bot API client for the single destination chat. Constructed once at
/// startup and reused for the process lifetime.
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    token: String,
    chat_id: String,
    base_url: String,
}

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

impl TelegramClient {
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_base_url(token, chat_id, API_BASE)
    }

    pub fn with_base_url(
        token: impl Into<String>,
        chat_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            chat_id: chat_id.into(),
            base_url: base_url.into(),
        }
    }

    pub async fn send_message(&self, text: &str) -> Result<(), BotError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let resp = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| BotError::Delivery(err.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            // The body is not guaranteed to be JSON here (proxies answer
            // with HTML), so the status always names the failure.
            let reason = resp
                .json::<SendMessageResponse>()
                .await
                .ok()
                .and_then(|body| body.description)
                .map(|description| format!("status {status}: {description}"))
                .unwrap_or_else(|| format!("status {status}"));
            return Err(BotError::Delivery(reason));
        }

        let body: SendMessageResponse = resp
            .json()
            .await
            .map_err(|err| BotError::Delivery(err.to_string()))?;

        if !body.ok {
            let reason = body
                .description
                .unwrap_or_else(|| format!("status {status}"));
            return Err(BotError::Delivery(reason));
        }

        Ok(())
    }

    /// Best-effort delivery: failures are logged and swallowed so a broken
    /// chat never stops the poll loop. Returns whether the message was
    /// actually delivered.
    pub async fn notify(&self, text: &str) -> bool {
        match self.send_message(text).await {
            Ok(()) => {
                tracing::debug!(message = text, "telegram message sent");
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to send telegram message");
                false
            }
        }
    }
}
