//! Inline menus and static informational texts

use indoc::formatdoc;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, MessageId};
use url::Url;

use crate::core::config;

/// The main menu shown on /start.
pub fn main_menu() -> InlineKeyboardMarkup {
    let mut rows = vec![vec![InlineKeyboardButton::callback(
        "🎮 Зареєструвати команду",
        "menu:register",
    )]];

    // The group link comes from config and may be absent in dev setups.
    if let Ok(group) = Url::parse(&config::GROUP_LINK) {
        rows.push(vec![InlineKeyboardButton::url("📢 Наша група", group)]);
    }

    rows.push(vec![InlineKeyboardButton::callback(
        "ℹ️ Інформація про турнір",
        "menu:info",
    )]);
    rows.push(vec![InlineKeyboardButton::callback("🏆 Призи", "menu:prizes")]);
    rows.push(vec![InlineKeyboardButton::callback("📋 Правила", "menu:rules")]);

    InlineKeyboardMarkup::new(rows)
}

/// The administrator panel menu.
pub fn admin_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback("📊 Статистика", "admin:stats")],
        vec![InlineKeyboardButton::callback("📋 Всі команди (детально)", "admin:teams")],
        vec![InlineKeyboardButton::callback("✏️ Редагувати команду", "admin:edit")],
        vec![InlineKeyboardButton::callback("🗑 Видалити команду", "admin:delete")],
        vec![InlineKeyboardButton::callback("📢 Розсилка", "admin:broadcast")],
        vec![InlineKeyboardButton::callback("🎁 Розіграш", "admin:giveaway")],
        vec![InlineKeyboardButton::callback("◀️ Назад", "menu:back")],
    ])
}

/// Single back button to the main menu.
pub fn back_to_main() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback("◀️ Назад", "menu:back")]])
}

/// Single back button to the admin panel.
pub fn back_to_admin() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "◀️ До адмін-панелі",
        "admin:back",
    )]])
}

pub fn welcome_text(first_name: &str) -> String {
    formatdoc! {"
        🔥 Вітаю, {first_name}!

        Це офіційний бот турніру CS2
        💰 Призовий фонд: $200 + $50 MVP

        📅 Дата: Листопад 2025
        🎮 Формат: 5v5
        🇺🇦 Регіон: Україна
        🔞 Вік: 16+

        Оберіть дію з меню:"}
}

pub const ADMIN_PANEL_TEXT: &str = "🔧 АДМІН-ПАНЕЛЬ\n\nОберіть дію:";

pub fn register_hint_text() -> String {
    formatdoc! {"
        📝 РЕЄСТРАЦІЯ КОМАНДИ

        Щоб зареєструвати команду, використайте команду:
        /register

        Бот проведе вас через весь процес реєстрації крок за кроком."}
}

pub fn info_text() -> String {
    let mut text = formatdoc! {"
        ℹ️ ІНФОРМАЦІЯ ПРО ТУРНІР

        📅 Дата: Листопад 2025
        🎮 Гра: Counter-Strike 2
        👥 Формат: 5 на 5
        🇺🇦 Регіон: Україна
        🔞 Вік: 16+

        📍 Платформа: Online
        🎯 Система: Single Elimination / Swiss
        ⏰ Час матчів: За розкладом

        📢 Група турніру: {group}",
        group = config::GROUP_LINK.as_str()};
    if !config::CHANNEL_LINK.is_empty() {
        text.push_str(&format!("\n📣 Канал анонсів: {}", config::CHANNEL_LINK.as_str()));
    }
    text
}

pub fn prizes_text() -> String {
    formatdoc! {"
        🏆 ПРИЗИ

        💰 1 місце: $200
        ⭐ MVP турніру: $50

        Загальний призовий фонд: $250

        🎁 Додаткові призи:
        • Унікальні ролі в Discord
        • Фічер в соцмережах
        • Запрошення на майбутні турніри

        💳 Виплати через:
        • Monobank
        • PrivatBank
        • USDT (TRC20)"}
}

pub fn rules_text() -> String {
    formatdoc! {"
        📋 ПРАВИЛА ТУРНІРУ

        ✅ Загальні правила:
        • Офіційні правила CS2 Competitive
        • Анті-чіт обов'язковий
        • Заборонено використання читів
        • Тайм-аути: 4 паузи по 30 сек

        🎮 Налаштування:
        • MR12 (12 раундів до зміни)
        • Best of 1 (плей-офф: BO3)

        ⚠️ Штрафи:
        • Запізнення 15+ хв = поразка
        • Токсичність = дискваліфікація

        📢 Повні правила: {group}",
        group = config::GROUP_LINK.as_str()}
}

/// Routes the public `menu:*` button presses (stateless per-press
/// dispatch; no session is involved).
pub async fn handle_menu_callback(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    first_name: &str,
    data: &str,
) -> ResponseResult<()> {
    match data {
        "menu:back" => {
            bot.edit_message_text(chat_id, message_id, welcome_text(first_name))
                .reply_markup(main_menu())
                .await?;
        }
        "menu:register" => {
            bot.edit_message_text(chat_id, message_id, register_hint_text())
                .reply_markup(back_to_main())
                .await?;
        }
        "menu:info" => {
            bot.edit_message_text(chat_id, message_id, info_text())
                .reply_markup(back_to_main())
                .await?;
        }
        "menu:prizes" => {
            bot.edit_message_text(chat_id, message_id, prizes_text())
                .reply_markup(back_to_main())
                .await?;
        }
        "menu:rules" => {
            bot.edit_message_text(chat_id, message_id, rules_text())
                .reply_markup(back_to_main())
                .await?;
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_menu_has_every_action() {
        let menu = admin_menu();
        assert_eq!(menu.inline_keyboard.len(), 7);
    }

    #[test]
    fn welcome_mentions_the_operator() {
        let text = welcome_text("Олена");
        assert!(text.starts_with("🔥 Вітаю, Олена!"));
        assert!(text.contains("5v5"));
    }
}
