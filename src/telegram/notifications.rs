//! Best-effort administrator notifications

use teloxide::prelude::*;

use crate::core::config::admin::ADMIN_IDS;
use crate::core::types::TeamRecord;

/// Notifies every configured administrator about a freshly committed
/// registration.
///
/// Strictly best-effort: a delivery failure to one administrator is logged
/// and does not affect the others, and never the commit itself — the
/// record is already persisted when this runs.
pub async fn notify_admins_new_team(bot: &Bot, team: &TeamRecord, index: usize) {
    let text = format!("🆕 НОВА КОМАНДА!\n\n{}", team.format_full(index));

    for &admin_id in ADMIN_IDS.iter() {
        if let Err(e) = bot.send_message(ChatId(admin_id), &text).await {
            log::warn!("Failed to notify admin {} about new team: {}", admin_id, e);
        }
    }
}
