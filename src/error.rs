use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong inside one poll cycle. None of these are
/// fatal to the process; the loop absorbs them all.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("request to the homework API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("homework API returned status {0}")]
    ServerStatus(StatusCode),

    #[error("API response is not a JSON object")]
    ResponseNotAnObject,

    #[error("API response has no \"homeworks\" key")]
    MissingHomeworksKey,

    #[error("\"homeworks\" is not an array")]
    HomeworksNotAnArray,

    #[error("malformed homework record: {0}")]
    MalformedRecord(String),

    #[error("homework record has no \"homework_name\" field")]
    MissingHomeworkName,

    #[error("unknown homework status: {0:?}")]
    UnknownStatus(Option<String>),

    #[error("telegram delivery failed: {0}")]
    Delivery(String),
}

impl BotError {
    /// Chat alert sent for fetch and response-shape faults. `None` means the
    /// fault is log-only. The texts are fixed and match what subscribers of
    /// the chat have always seen.
    pub fn alert_text(&self) -> Option<&'static str> {
        match self {
            BotError::ServerStatus(_) => Some("Сбой подключения к API"),
            BotError::Transport(_) => Some("Сбой подкл."),
            BotError::ResponseNotAnObject => Some("неверный ответ api"),
            BotError::MissingHomeworksKey => Some("отсутствует ключ"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_faults_carry_alert_texts() {
        assert_eq!(
            BotError::ResponseNotAnObject.alert_text(),
            Some("неверный ответ api")
        );
        assert_eq!(
            BotError::MissingHomeworksKey.alert_text(),
            Some("отсутствует ключ")
        );
        assert_eq!(
            BotError::ServerStatus(StatusCode::BAD_GATEWAY).alert_text(),
            Some("Сбой подключения к API")
        );
    }

    #[test]
    fn log_only_faults_have_no_alert() {
        assert_eq!(BotError::HomeworksNotAnArray.alert_text(), None);
        assert_eq!(BotError::MissingHomeworkName.alert_text(), None);
        assert_eq!(BotError::UnknownStatus(None).alert_text(), None);
        assert_eq!(BotError::Delivery("boom".to_string()).alert_text(), None);
    }
}
