//! Administrator panel: statistics, team listing, edit and delete flows
//!
//! Every function here assumes the administrator-identity check already
//! happened at the dispatcher boundary (`handlers::schema`) — it is done
//! once per admin-only action, not re-scattered across call sites. The
//! only exception is [`handle_edit_input`], which the free-text
//! arbitration calls for admins only.

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, MessageId};

use crate::core::config::admin::ADMIN_IDS;
use crate::core::types::{EDITABLE_FIELDS, Field};
use crate::core::validation::validate_field;
use crate::telegram::handlers::HandlerDeps;
use crate::telegram::menu::{ADMIN_PANEL_TEXT, admin_menu, back_to_admin};

/// Check if user is admin
pub fn is_admin(user_id: i64) -> bool {
    ADMIN_IDS.contains(&user_id)
}

/// `/admin` entry point.
pub async fn show_admin_panel(bot: &Bot, chat_id: ChatId) -> ResponseResult<()> {
    bot.send_message(chat_id, ADMIN_PANEL_TEXT)
        .reply_markup(admin_menu())
        .await?;
    Ok(())
}

/// Routes `admin:*`, `edit:*` and `delete:*` callback actions.
pub async fn handle_admin_callback(
    bot: &Bot,
    deps: &HandlerDeps,
    chat_id: ChatId,
    message_id: MessageId,
    operator: i64,
    data: &str,
) -> ResponseResult<()> {
    match data {
        "admin:back" => {
            bot.edit_message_text(chat_id, message_id, ADMIN_PANEL_TEXT)
                .reply_markup(admin_menu())
                .await?;
        }
        "admin:stats" => show_stats(bot, deps, chat_id, message_id).await?,
        "admin:teams" => list_teams(bot, deps, chat_id, message_id).await?,
        "admin:edit" => {
            show_team_picker(
                bot,
                deps,
                chat_id,
                message_id,
                "✏️ Оберіть команду для редагування:",
                "📋 Немає команд для редагування",
                "edit:team",
                "",
            )
            .await?;
        }
        "admin:delete" => {
            show_team_picker(
                bot,
                deps,
                chat_id,
                message_id,
                "🗑 Оберіть команду для видалення:",
                "📋 Немає команд для видалення",
                "delete:team",
                "🗑 ",
            )
            .await?;
        }
        "admin:broadcast" => {
            bot.edit_message_text(
                chat_id,
                message_id,
                "📢 РОЗСИЛКА\n\n\
                 Використайте команду:\n\
                 /broadcast ваше повідомлення\n\n\
                 Повідомлення буде відправлено всім підписникам.",
            )
            .reply_markup(admin_menu())
            .await?;
        }
        "admin:giveaway" => {
            bot.edit_message_text(
                chat_id,
                message_id,
                "🎁 РОЗІГРАШ\n\n\
                 Використайте команду:\n\
                 /giveaway\n\n\
                 Буде обрано випадкового переможця.",
            )
            .reply_markup(admin_menu())
            .await?;
        }
        _ => {
            if let Some(raw) = data.strip_prefix("edit:team:") {
                select_edit_team(bot, deps, chat_id, message_id, operator, raw).await?;
            } else if let Some(key) = data.strip_prefix("edit:field:") {
                select_edit_field(bot, deps, chat_id, message_id, operator, key).await?;
            } else if let Some(raw) = data.strip_prefix("delete:team:") {
                delete_team(bot, deps, chat_id, message_id, raw).await?;
            }
        }
    }
    Ok(())
}

async fn report_store_error(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    error: crate::core::AppError,
) -> ResponseResult<()> {
    log::error!("Store failure in admin panel: {}", error);
    bot.edit_message_text(
        chat_id,
        message_id,
        "❌ Помилка сховища даних. Перевірте журнал бота і спробуйте ще раз.",
    )
    .reply_markup(admin_menu())
    .await?;
    Ok(())
}

async fn show_stats(bot: &Bot, deps: &HandlerDeps, chat_id: ChatId, message_id: MessageId) -> ResponseResult<()> {
    let teams = match deps.teams.count().await {
        Ok(n) => n,
        Err(e) => return report_store_error(bot, chat_id, message_id, e).await,
    };
    let subscribers = match deps.subscribers.count().await {
        Ok(n) => n,
        Err(e) => return report_store_error(bot, chat_id, message_id, e).await,
    };

    let text = format!(
        "📊 СТАТИСТИКА\n\n\
         👥 Підписників: {subscribers}\n\
         🏆 Зареєстрованих команд: {teams}\n\
         👤 Гравців: {}\n",
        teams * 5
    );
    bot.edit_message_text(chat_id, message_id, text)
        .reply_markup(admin_menu())
        .await?;
    Ok(())
}

/// Sends every registered team as its own message, full card each.
async fn list_teams(bot: &Bot, deps: &HandlerDeps, chat_id: ChatId, message_id: MessageId) -> ResponseResult<()> {
    let teams = match deps.teams.load().await {
        Ok(teams) => teams,
        Err(e) => return report_store_error(bot, chat_id, message_id, e).await,
    };

    if teams.is_empty() {
        bot.edit_message_text(chat_id, message_id, "📋 Поки що немає зареєстрованих команд")
            .reply_markup(admin_menu())
            .await?;
        return Ok(());
    }

    bot.edit_message_text(
        chat_id,
        message_id,
        format!(
            "📋 Всього команд: {}\n\nВідправляю детальну інформацію...",
            teams.len()
        ),
    )
    .reply_markup(admin_menu())
    .await?;

    for (i, team) in teams.iter().enumerate() {
        if let Err(e) = bot.send_message(chat_id, team.format_full(i)).await {
            log::warn!("Failed to send team card #{}: {}", i + 1, e);
        }
    }
    Ok(())
}

/// Shared team-picker screen for the edit and delete entries.
#[allow(clippy::too_many_arguments)]
async fn show_team_picker(
    bot: &Bot,
    deps: &HandlerDeps,
    chat_id: ChatId,
    message_id: MessageId,
    title: &str,
    empty_text: &str,
    action: &str,
    row_prefix: &str,
) -> ResponseResult<()> {
    let teams = match deps.teams.load().await {
        Ok(teams) => teams,
        Err(e) => return report_store_error(bot, chat_id, message_id, e).await,
    };

    if teams.is_empty() {
        bot.edit_message_text(chat_id, message_id, empty_text)
            .reply_markup(admin_menu())
            .await?;
        return Ok(());
    }

    let mut rows: Vec<Vec<InlineKeyboardButton>> = teams
        .iter()
        .enumerate()
        .map(|(i, team)| {
            vec![InlineKeyboardButton::callback(
                format!("{row_prefix}{}. {} [{}]", i + 1, team.team_name, team.team_tag),
                format!("{action}:{i}"),
            )]
        })
        .collect();
    rows.push(vec![InlineKeyboardButton::callback("◀️ Назад", "admin:back")]);

    bot.edit_message_text(chat_id, message_id, title)
        .reply_markup(InlineKeyboardMarkup::new(rows))
        .await?;
    Ok(())
}

/// `SelectTeam`: remembers the slot and shows the field picker.
async fn select_edit_team(
    bot: &Bot,
    deps: &HandlerDeps,
    chat_id: ChatId,
    message_id: MessageId,
    operator: i64,
    raw_index: &str,
) -> ResponseResult<()> {
    let Ok(index) = raw_index.parse::<usize>() else {
        return Ok(());
    };

    let team = match deps.teams.get(index).await {
        Ok(Some(team)) => team,
        Ok(None) => {
            // Deleted under the admin's feet: report, back to the panel.
            bot.edit_message_text(chat_id, message_id, "❌ Команду не знайдено")
                .reply_markup(admin_menu())
                .await?;
            return Ok(());
        }
        Err(e) => return report_store_error(bot, chat_id, message_id, e).await,
    };

    deps.sessions.begin_edit(operator, index).await;

    let mut rows: Vec<Vec<InlineKeyboardButton>> = EDITABLE_FIELDS
        .iter()
        .map(|field| {
            vec![InlineKeyboardButton::callback(
                field.label(),
                format!("edit:field:{field}"),
            )]
        })
        .collect();
    rows.push(vec![InlineKeyboardButton::callback("◀️ Назад", "admin:edit")]);

    bot.edit_message_text(
        chat_id,
        message_id,
        format!(
            "✏️ Редагування команди:\n{} [{}]\n\nОберіть поле для зміни:",
            team.team_name, team.team_tag
        ),
    )
    .reply_markup(InlineKeyboardMarkup::new(rows))
    .await?;
    Ok(())
}

/// `SelectField`: arms the edit pointer and asks for the new value.
async fn select_edit_field(
    bot: &Bot,
    deps: &HandlerDeps,
    chat_id: ChatId,
    message_id: MessageId,
    operator: i64,
    key: &str,
) -> ResponseResult<()> {
    let Ok(field) = key.parse::<Field>() else {
        return Ok(());
    };

    if deps.sessions.select_edit_field(operator, field).await.is_none() {
        // No edit session anymore (expired or replaced by a wizard).
        bot.edit_message_text(chat_id, message_id, "❌ Сесію редагування втрачено. Почніть з /admin")
            .reply_markup(admin_menu())
            .await?;
        return Ok(());
    }

    bot.edit_message_text(
        chat_id,
        message_id,
        format!(
            "✏️ Введіть нове значення для поля:\n📝 {}\n\n\
             Відправте нове значення текстовим повідомленням.",
            field.label()
        ),
    )
    .await?;
    Ok(())
}

async fn delete_team(
    bot: &Bot,
    deps: &HandlerDeps,
    chat_id: ChatId,
    message_id: MessageId,
    raw_index: &str,
) -> ResponseResult<()> {
    let Ok(index) = raw_index.parse::<usize>() else {
        return Ok(());
    };

    match deps.teams.delete(index).await {
        Ok(Some(team)) => {
            log::info!("Team deleted: {} [{}]", team.team_name, team.team_tag);
            bot.edit_message_text(
                chat_id,
                message_id,
                format!("✅ Команду видалено:\n{} [{}]", team.team_name, team.team_tag),
            )
            .reply_markup(admin_menu())
            .await?;
        }
        Ok(None) => {
            bot.edit_message_text(chat_id, message_id, "❌ Помилка видалення команди")
                .reply_markup(admin_menu())
                .await?;
        }
        Err(e) => return report_store_error(bot, chat_id, message_id, e).await,
    }
    Ok(())
}

/// `InputValue`: consumes the admin's free-text replacement value.
///
/// Returns whether the message was claimed by the edit sub-flow. Called
/// only when the operator has no wizard session (arbitration precedence)
/// and passed the admin check.
pub async fn handle_edit_input(
    bot: &Bot,
    deps: &HandlerDeps,
    chat_id: ChatId,
    operator: i64,
    text: &str,
) -> ResponseResult<bool> {
    let Some((index, field)) = deps.sessions.edit_target(operator).await else {
        return Ok(false);
    };

    let value = match validate_field(field, text) {
        Ok(value) => value,
        Err(error) => {
            // Same-state re-prompt; the pointer stays armed for a retry.
            bot.send_message(chat_id, error.to_string()).await?;
            return Ok(true);
        }
    };

    // One update attempt per armed pointer, successful or not.
    deps.sessions.clear(operator).await;

    match deps.teams.update_field(index, field, value.clone()).await {
        Ok(Some(team)) => {
            bot.send_message(
                chat_id,
                format!(
                    "✅ Поле оновлено!\n\n\
                     Команда: {}\n\
                     Поле: {}\n\
                     Нове значення: {}",
                    team.team_name,
                    field.label(),
                    value
                ),
            )
            .reply_markup(back_to_admin())
            .await?;
        }
        Ok(None) => {
            bot.send_message(chat_id, "❌ Команду не знайдено. Поверніться до /admin")
                .reply_markup(back_to_admin())
                .await?;
        }
        Err(e) => {
            log::error!("Failed to update field {} of team {}: {}", field, index, e);
            bot.send_message(chat_id, "❌ Помилка оновлення. Спробуйте ще раз через /admin")
                .await?;
        }
    }
    Ok(true)
}
