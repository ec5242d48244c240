//! Dispatcher schema and handler chain builders
//!
//! The handler tree is where message ownership is decided. Branch order:
//! hidden admin text commands, then the command enum, then free-text
//! arbitration (wizard first, edit sub-flow second, inert otherwise),
//! then callback queries. The administrator-identity check for admin-only
//! actions happens here, once per action, before any admin module runs.

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::commands::{handle_start_command, operator_id};
use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::Command;
use crate::telegram::{admin, broadcast, menu, registration};

/// Creates the main dispatcher schema for the Telegram bot.
///
/// Returns a handler tree for teloxide's Dispatcher; the same schema is
/// used in production and in integration tests.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_broadcast = deps.clone();
    let deps_giveaway = deps.clone();
    let deps_commands = deps.clone();
    let deps_messages = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        // Hidden admin commands (not in Command enum, they take free args)
        .branch(broadcast_handler(deps_broadcast))
        .branch(giveaway_handler(deps_giveaway))
        // Command handler
        .branch(command_handler(deps_commands))
        // Free-text handler: wizard / edit arbitration
        .branch(message_handler(deps_messages))
        // Callback query handler
        .branch(callback_handler(deps_callback))
}

/// Handler for /broadcast admin command (hidden, not in Command enum)
fn broadcast_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| text.starts_with("/broadcast")).unwrap_or(false))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let operator = operator_id(&msg);
                if !admin::is_admin(operator) {
                    bot.send_message(msg.chat.id, "❌ Немає доступу").await?;
                    return Ok(());
                }
                if deps.sessions.in_wizard(operator).await {
                    registration::reprompt_current_step(&bot, &deps, msg.chat.id, operator).await?;
                    return Ok(());
                }
                let message_text = msg.text().unwrap_or_default();
                broadcast::handle_broadcast_command(&bot, &deps, msg.chat.id, message_text).await?;
                Ok(())
            }
        })
}

/// Handler for /giveaway admin command (hidden, not in Command enum)
fn giveaway_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| text.starts_with("/giveaway")).unwrap_or(false))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let operator = operator_id(&msg);
                if !admin::is_admin(operator) {
                    bot.send_message(msg.chat.id, "❌ Немає доступу").await?;
                    return Ok(());
                }
                if deps.sessions.in_wizard(operator).await {
                    registration::reprompt_current_step(&bot, &deps, msg.chat.id, operator).await?;
                    return Ok(());
                }
                broadcast::handle_giveaway_command(&bot, &deps, msg.chat.id).await?;
                Ok(())
            }
        })
}

/// Handler for bot commands (/start, /register, /cancel, /admin)
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                let operator = operator_id(&msg);
                let chat_id = msg.chat.id;
                log::info!("🎯 Received command: {:?} from chat {}", cmd, chat_id);

                // Mid-wizard, only /cancel and /register act (discard or
                // restart); anything else re-prompts the current step
                // instead of corrupting a field or forking the flow.
                if deps.sessions.in_wizard(operator).await && !matches!(cmd, Command::Cancel | Command::Register) {
                    registration::reprompt_current_step(&bot, &deps, chat_id, operator).await?;
                    return Ok(());
                }

                match cmd {
                    Command::Start => handle_start_command(&bot, &deps, &msg).await?,
                    Command::Register => registration::start_wizard(&bot, &deps, chat_id, operator).await?,
                    Command::Cancel => registration::cancel(&bot, &deps, chat_id, operator).await?,
                    Command::Admin => {
                        if admin::is_admin(operator) {
                            admin::show_admin_panel(&bot, chat_id).await?;
                        } else {
                            bot.send_message(chat_id, "❌ У вас немає доступу до адмін-панелі")
                                .await?;
                        }
                    }
                }
                Ok(())
            }
        },
    ))
}

/// Handler for free-text messages: wizard first, then the edit sub-flow,
/// otherwise inert. Slash-prefixed text never reaches the flows.
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| !text.starts_with('/')).unwrap_or(false))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let operator = operator_id(&msg);
                let chat_id = msg.chat.id;
                let Some(text) = msg.text() else {
                    return Ok(());
                };

                // An active wizard session owns every free-text message of
                // its operator; the edit sub-flow must never see them.
                if let Some(outcome) = deps.sessions.advance_wizard(operator, text).await {
                    registration::apply_outcome(&bot, &deps, chat_id, operator, outcome).await?;
                    return Ok(());
                }

                // Edit sub-flow input, administrators only: a stray
                // non-admin message can never reach a store mutation.
                if admin::is_admin(operator) && admin::handle_edit_input(&bot, &deps, chat_id, operator, text).await? {
                    return Ok(());
                }

                // No active flow claims the message: inert, no reply.
                Ok(())
            }
        })
}

/// Handler for callback queries (inline keyboard buttons)
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            let _ = bot.answer_callback_query(q.id.clone()).await;

            let Some(data) = q.data.as_deref() else {
                return Ok(());
            };
            let (Some(chat_id), Some(message_id)) = (
                q.message.as_ref().map(|m| m.chat().id),
                q.message.as_ref().map(|m| m.id()),
            ) else {
                return Ok(());
            };
            let operator = i64::try_from(q.from.id.0).unwrap_or(0);

            if data.starts_with("menu:") {
                menu::handle_menu_callback(&bot, chat_id, message_id, &q.from.first_name, data).await?;
            } else if data.starts_with("admin:") || data.starts_with("edit:") || data.starts_with("delete:") {
                // Single admin gate for every admin-only button press.
                if !admin::is_admin(operator) {
                    bot.edit_message_text(chat_id, message_id, "❌ Немає доступу").await?;
                    return Ok(());
                }
                admin::handle_admin_callback(&bot, &deps, chat_id, message_id, operator, data).await?;
            }

            Ok(())
        }
    })
}
