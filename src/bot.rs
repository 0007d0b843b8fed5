use serde_json::Value;

use crate::config::Config;
use crate::error::BotError;
use crate::models::Homework;
use crate::practicum::PracticumClient;
use crate::telegram::TelegramClient;

/// Sent when the API has no homework entries for the requested window.
pub const FALLBACK_MESSAGE: &str = "Работа не взята на проверку";

/// Closed status vocabulary. Anything else is an error, never silently
/// ignored.
fn verdict(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Работа проверена: ревьюеру всё понравилось. Ура!"),
        "reviewing" => Some("Работа взята на проверку ревьюером."),
        "rejected" => Some("Работа проверена: у ревьюера есть замечания."),
        _ => None,
    }
}

/// Checks the API response against the documented shape and extracts the
/// most recent homework entry, if any. The API returns entries
/// most-recent-first, so no sorting is performed here.
pub fn check_response(body: &Value) -> Result<Option<Homework>, BotError> {
    let map = match body.as_object() {
        Some(map) => map,
        None => {
            tracing::error!("API response is not an object");
            return Err(BotError::ResponseNotAnObject);
        }
    };

    let homeworks = match map.get("homeworks") {
        Some(value) => value,
        None => {
            tracing::error!("API response has no \"homeworks\" key");
            return Err(BotError::MissingHomeworksKey);
        }
    };

    let list = homeworks
        .as_array()
        .ok_or(BotError::HomeworksNotAnArray)?;

    match list.first() {
        Some(first) => serde_json::from_value(first.clone())
            .map(Some)
            .map_err(|err| BotError::MalformedRecord(err.to_string())),
        None => Ok(None),
    }
}

/// Builds the chat message for a homework entry from its name and the
/// verdict mapped from its review status.
pub fn parse_status(homework: &Homework) -> Result<String, BotError> {
    let name = match homework.homework_name.as_deref() {
        Some(name) => name,
        None => {
            tracing::error!("homework record has no \"homework_name\" field");
            return Err(BotError::MissingHomeworkName);
        }
    };

    let verdict = match homework.status.as_deref().and_then(verdict) {
        Some(text) => text,
        None => {
            tracing::error!(status = ?homework.status, "unknown homework status");
            return Err(BotError::UnknownStatus(homework.status.clone()));
        }
    };

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}

async fn cycle(
    config: &Config,
    practicum: &PracticumClient,
    telegram: &TelegramClient,
    cursor: &mut i64,
) -> Result<(), BotError> {
    let body = practicum.homework_statuses(*cursor).await?;

    let message = match check_response(&body)? {
        Some(homework) => parse_status(&homework)?,
        None => FALLBACK_MESSAGE.to_string(),
    };

    let delivered = telegram.notify(&message).await;

    // The cursor only moves past work the chat has actually seen.
    if config.advance_cursor && delivered {
        if let Some(current) = body.get("current_date").and_then(Value::as_i64) {
            *cursor = current;
        }
    }

    Ok(())
}

/// One poll cycle. This is the catch-all boundary: any pipeline error has its
/// chat alert (if the fault carries one) sent best-effort, is logged, and is
/// never propagated, so one bad cycle cannot stop the loop.
pub async fn run_cycle(
    config: &Config,
    practicum: &PracticumClient,
    telegram: &TelegramClient,
    cursor: &mut i64,
) {
    match cycle(config, practicum, telegram, cursor).await {
        Ok(()) => println!("пока нормально работает))"),
        Err(err) => {
            if let Some(alert) = err.alert_text() {
                telegram.notify(alert).await;
            }
            tracing::error!(error = %err, "cycle failed");
        }
    }
}

/// Fetch, validate, translate, notify, sleep — forever. The fixed sleep runs
/// whether the cycle succeeded or failed and is the only rate limiting.
pub async fn run(config: &Config, practicum: &PracticumClient, telegram: &TelegramClient) {
    let mut cursor: i64 = 0;
    loop {
        run_cycle(config, practicum, telegram, &mut cursor).await;
        tokio::time::sleep(config.retry_period).await;
    }
}
