//! Bot initialization and command definitions

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Я умію:")]
pub enum Command {
    #[command(description = "головне меню")]
    Start,
    #[command(description = "зареєструвати команду")]
    Register,
    #[command(description = "скасувати реєстрацію")]
    Cancel,
    #[command(description = "панель адміністратора")]
    Admin,
}

/// Creates a Bot instance from the BOT_TOKEN environment variable
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - BOT_TOKEN missing
pub fn create_bot() -> anyhow::Result<Bot> {
    let token = std::env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN is not set"))?;
    Ok(Bot::new(token))
}

/// Sets up bot commands in Telegram UI
///
/// The admin-only commands (/admin, /broadcast, /giveaway) are deliberately
/// not advertised here.
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    use teloxide::types::BotCommand;

    bot.set_my_commands(vec![
        BotCommand::new("start", "головне меню"),
        BotCommand::new("register", "зареєструвати команду"),
        BotCommand::new("cancel", "скасувати реєстрацію"),
    ])
    .await?;

    Ok(())
}
