use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;

use turnir::cli::{Cli, Commands};
use turnir::core::{config, init_logger};
use turnir::telegram::{HandlerDeps, create_bot, schema, setup_bot_commands};

/// Main entry point for the Telegram bot
///
/// # Errors
/// Returns an error if initialization fails (logging, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present, before any config
    // statics are first read
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Run) | None => run_bot().await,
    }
}

async fn run_bot() -> Result<()> {
    let bot = create_bot()?;

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    if config::admin::ADMIN_IDS.is_empty() {
        log::warn!("ADMIN_IDS is empty - admin panel, broadcast and giveaway are unreachable");
    }

    let deps = HandlerDeps::from_config();

    log::info!("🤖 Бот запущено!");
    Dispatcher::builder(bot, schema(deps))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
