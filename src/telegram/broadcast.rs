//! Subscriber broadcast and the giveaway draw
//!
//! Fan-out treats each delivery independently: one failed recipient never
//! aborts the rest, and the initiator gets aggregate counts.

use rand::Rng;
use teloxide::prelude::*;

use crate::telegram::handlers::HandlerDeps;

/// `/broadcast <text>` — sends the text to every subscriber.
pub async fn handle_broadcast_command(
    bot: &Bot,
    deps: &HandlerDeps,
    chat_id: ChatId,
    message_text: &str,
) -> ResponseResult<()> {
    let message = message_text.strip_prefix("/broadcast").unwrap_or("").trim();
    if message.is_empty() {
        bot.send_message(chat_id, "Використання: /broadcast ваше повідомлення")
            .await?;
        return Ok(());
    }

    let subscribers = match deps.subscribers.load().await {
        Ok(subscribers) => subscribers,
        Err(e) => {
            log::error!("Broadcast aborted, store failure: {}", e);
            bot.send_message(chat_id, "❌ Помилка сховища даних, розсилку не розпочато")
                .await?;
            return Ok(());
        }
    };

    let text = format!("📢 {message}");
    let mut success: u32 = 0;
    let mut failed: u32 = 0;

    for user_id in subscribers {
        match bot.send_message(ChatId(user_id), &text).await {
            Ok(_) => success += 1,
            Err(e) => {
                log::warn!("Broadcast delivery to {} failed: {}", user_id, e);
                failed += 1;
            }
        }
    }

    log::info!("Broadcast done: {} delivered, {} failed", success, failed);
    bot.send_message(
        chat_id,
        format!("✅ Розсилка завершена\n\nУспішно: {success}\nПомилок: {failed}"),
    )
    .await?;
    Ok(())
}

/// `/giveaway` — picks a uniformly random subscriber, congratulates them
/// by direct message and reports the winner to the admin.
pub async fn handle_giveaway_command(bot: &Bot, deps: &HandlerDeps, chat_id: ChatId) -> ResponseResult<()> {
    let subscribers = match deps.subscribers.load().await {
        Ok(subscribers) => subscribers,
        Err(e) => {
            log::error!("Giveaway aborted, store failure: {}", e);
            bot.send_message(chat_id, "❌ Помилка сховища даних").await?;
            return Ok(());
        }
    };

    if subscribers.is_empty() {
        bot.send_message(chat_id, "❌ Немає підписників").await?;
        return Ok(());
    }

    let winner = subscribers[rand::thread_rng().gen_range(0..subscribers.len())];
    log::info!("Giveaway winner drawn: {}", winner);

    let congratulated = bot
        .send_message(
            ChatId(winner),
            "🎉 Вітаємо! Ви виграли розіграш! Організатори зв'яжуться з вами.",
        )
        .await;

    let report = match congratulated {
        Ok(_) => format!("🎁 Переможець розіграшу:\n\n🆔 ID: {winner}"),
        Err(e) => {
            log::warn!("Failed to message giveaway winner {}: {}", winner, e);
            format!("🎁 Переможець: ID {winner}\n⚠️ Не вдалося надіслати повідомлення переможцю")
        }
    };
    bot.send_message(chat_id, report).await?;
    Ok(())
}
