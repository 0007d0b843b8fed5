use homework_bot::bot;
use homework_bot::config::Config;
use homework_bot::logger;
use homework_bot::practicum::PracticumClient;
use homework_bot::telegram::TelegramClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let _log_guards = match logger::init_logging() {
        Ok(guards) => guards,
        Err(err) => {
            eprintln!("Failed to initialize logging: {err}");
            std::process::exit(1);
        }
    };

    // Missing credentials are the only fatal condition; everything after
    // this point is absorbed by the poll loop.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "required environment variables are missing, exiting");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting homework status bot");

    let practicum = PracticumClient::new(config.practicum_token.clone());
    let telegram = TelegramClient::new(
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
    );

    bot::run(&config, &practicum, &telegram).await;
}
