use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::error::BotError;

const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Client for the homework-review API. One authenticated GET per poll cycle.
#[derive(Clone)]
pub struct PracticumClient {
    http: reqwest::Client,
    token: String,
    endpoint: String,
}

impl PracticumClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_endpoint(token, ENDPOINT)
    }

    pub fn with_endpoint(token: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetches homework statuses bounded below by `from_date`. Returns the
    /// decoded JSON body on 200; any other status is a server fault, any
    /// transport failure is a connection fault.
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value, BotError> {
        let resp = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to reach the homework API");
                BotError::Transport(err)
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::error!(code = %status, "homework API returned an error status");
            return Err(BotError::ServerStatus(status));
        }

        Ok(resp.json::<Value>().await?)
    }
}
