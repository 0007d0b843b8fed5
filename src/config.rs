use std::env;
use std::time::Duration;

use anyhow::{Result, anyhow};

pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

/// Runtime configuration, built once from the environment at startup and
/// passed into the poll loop.
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    /// Fixed delay between cycles. No backoff, deliberately.
    pub retry_period: Duration,
    /// When enabled, the poll cursor advances to the `current_date` value of
    /// each successfully processed response. Off by default: the service has
    /// historically re-requested from the epoch on every cycle.
    pub advance_cursor: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let retry_secs = env::var("RETRY_PERIOD")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_PERIOD_SECS);

        Ok(Self {
            practicum_token: required("PRACTICUM_TOKEN")?,
            telegram_token: required("TELEGRAM_TOKEN")?,
            telegram_chat_id: required("TELEGRAM_CHAT_ID")?,
            retry_period: Duration::from_secs(retry_secs),
            advance_cursor: env::var("ADVANCE_CURSOR")
                .map(|val| val == "true")
                .unwrap_or(false),
        })
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| anyhow!("{name} must be set"))
}
