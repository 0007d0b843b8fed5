//! Notification bridge between the Yandex Practicum homework-review API and a
//! Telegram chat. The bot polls the review API on a fixed interval, extracts
//! the most recent submission, translates its review status into a
//! human-readable verdict and pushes the result to the configured chat.

pub mod bot;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod practicum;
pub mod telegram;
