//! Command endpoint helpers

use teloxide::prelude::*;
use teloxide::types::Message;

use crate::telegram::handlers::HandlerDeps;
use crate::telegram::menu::{main_menu, welcome_text};

/// Operator id of the message sender; 0 when Telegram omits the sender.
pub fn operator_id(msg: &Message) -> i64 {
    msg.from.as_ref().and_then(|u| i64::try_from(u.id.0).ok()).unwrap_or(0)
}

/// `/start`: subscribes the operator (add-if-absent, first contact only)
/// and shows the welcome screen with the main menu.
pub async fn handle_start_command(bot: &Bot, deps: &HandlerDeps, msg: &Message) -> ResponseResult<()> {
    let operator = operator_id(msg);

    match deps.subscribers.add_if_absent(operator).await {
        Ok(true) => log::info!("New subscriber: {}", operator),
        Ok(false) => {}
        Err(e) => log::error!("Failed to record subscriber {}: {}", operator, e),
    }

    let first_name = msg.from.as_ref().map(|u| u.first_name.as_str()).unwrap_or("гравець");
    bot.send_message(msg.chat.id, welcome_text(first_name))
        .reply_markup(main_menu())
        .await?;
    Ok(())
}
