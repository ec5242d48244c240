//! Telegram driver for the registration wizard
//!
//! The state machine itself lives in [`crate::wizard`]; this module owns
//! the conversation side: prompts, the confirm keyboard, committing the
//! finished record and the follow-up notifications.

use chrono::Utc;
use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup, KeyboardRemove};

use crate::core::config;
use crate::core::types::TeamRecord;
use crate::telegram::handlers::HandlerDeps;
use crate::telegram::notifications::notify_admins_new_team;
use crate::wizard::steps::{CONFIRM_BUTTON, DECLINE_BUTTON, REGISTRATION_INTRO, STEPS};
use crate::wizard::Advance;

/// Starts (or restarts) the wizard for this operator and asks the first
/// question. Any prior session of either kind is discarded.
pub async fn start_wizard(bot: &Bot, deps: &HandlerDeps, chat_id: ChatId, operator: i64) -> ResponseResult<()> {
    deps.sessions.begin_wizard(operator).await;
    bot.send_message(chat_id, format!("{REGISTRATION_INTRO}\n\n{}", STEPS[0].prompt))
        .await?;
    Ok(())
}

/// Cancels whatever session the operator holds (wizard or edit pointer).
pub async fn cancel(bot: &Bot, deps: &HandlerDeps, chat_id: ChatId, operator: i64) -> ResponseResult<()> {
    if deps.sessions.clear(operator).await {
        bot.send_message(chat_id, "❌ Скасовано.")
            .reply_markup(KeyboardRemove::new())
            .await?;
    }
    Ok(())
}

/// Re-prompts the current step after a mid-wizard command was ignored.
pub async fn reprompt_current_step(bot: &Bot, deps: &HandlerDeps, chat_id: ChatId, operator: i64) -> ResponseResult<()> {
    if let Some(prompt) = deps.sessions.wizard_prompt(operator).await {
        bot.send_message(chat_id, format!("⏳ Реєстрація триває. Для скасування: /cancel\n\n{prompt}"))
            .await?;
    }
    Ok(())
}

fn confirm_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(CONFIRM_BUTTON),
        KeyboardButton::new(DECLINE_BUTTON),
    ]])
    .one_time_keyboard()
    .resize_keyboard()
}

/// Turns one wizard transition into replies and, on commit, the store
/// append plus admin notifications.
pub async fn apply_outcome(
    bot: &Bot,
    deps: &HandlerDeps,
    chat_id: ChatId,
    operator: i64,
    outcome: Advance,
) -> ResponseResult<()> {
    match outcome {
        Advance::Reprompt(error) => {
            bot.send_message(chat_id, error.to_string()).await?;
        }
        Advance::Ask { ack, prompt } => {
            let text = match ack {
                Some(ack) => format!("{ack}\n\n{prompt}"),
                None => prompt.to_string(),
            };
            bot.send_message(chat_id, text).await?;
        }
        Advance::AwaitConfirm { summary } => {
            bot.send_message(chat_id, summary)
                .reply_markup(confirm_keyboard())
                .await?;
        }
        Advance::Committed(answers) => {
            let Some(record) = TeamRecord::from_answers(&answers, operator, Utc::now()) else {
                // Unreachable through the linear wizard; keep the operator
                // unstuck anyway.
                log::error!("Wizard committed with incomplete answers for operator {}", operator);
                bot.send_message(chat_id, "❌ Сталася помилка. Почніть заново: /register")
                    .reply_markup(KeyboardRemove::new())
                    .await?;
                return Ok(());
            };

            match deps.teams.append(record.clone()).await {
                Ok(index) => {
                    log::info!("New registration #{}: {} [{}]", index + 1, record.team_name, record.team_tag);
                    notify_admins_new_team(bot, &record, index).await;
                    bot.send_message(
                        chat_id,
                        format!(
                            "✅ Реєстрацію завершено!\n\n\
                             Очікуйте підтвердження від організаторів.\n\n\
                             Приєднуйтесь: {}",
                            config::GROUP_LINK.as_str()
                        ),
                    )
                    .reply_markup(KeyboardRemove::new())
                    .await?;
                }
                Err(e) => {
                    log::error!("Failed to persist registration for operator {}: {}", operator, e);
                    bot.send_message(
                        chat_id,
                        "❌ Не вдалося зберегти реєстрацію. Спробуйте ще раз: /register",
                    )
                    .reply_markup(KeyboardRemove::new())
                    .await?;
                }
            }
        }
        Advance::Declined => {
            bot.send_message(chat_id, "❌ Скасовано. Для нової реєстрації: /register")
                .reply_markup(KeyboardRemove::new())
                .await?;
        }
    }
    Ok(())
}
