use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use intake_bot::adapters::storage::InMemoryConversationStore;
use intake_bot::adapters::telegram::{RunnerError, TelegramRunner};
use intake_bot::application::DialogueDriver;
use intake_bot::config::{AppConfig, ConfigError, LogFormat, RuntimeConfig, ValidationError};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Runner(#[from] RunnerError),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.runtime);
    config.validate()?;

    let doctors = config.telegram.doctors_recipient()?;
    let bot = TelegramRunner::bot(&config.telegram);
    let driver = Arc::new(DialogueDriver::new(
        Arc::new(InMemoryConversationStore::new()),
        Arc::new(TelegramRunner::gateway(&bot, &config.telegram)),
        doctors,
        config.intake.submission,
    ));

    info!(
        environment = ?config.runtime.environment,
        %doctors,
        submission = %config.intake.submission,
        menu_style = ?config.telegram.menu_style,
        "Intake bot starting"
    );

    let runner = Arc::new(TelegramRunner::new(bot, driver, &config.telegram));
    runner.run().await?;
    Ok(())
}

fn init_tracing(runtime: &RuntimeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&runtime.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = match runtime.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
    };
}
