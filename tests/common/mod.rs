//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use turnir::core::types::{Field, FieldValue, TeamRecord};
use turnir::sessions::SessionTable;
use turnir::wizard::Advance;

/// One valid answer per wizard step, in order.
pub const ANSWERS: [&str; 25] = [
    "Львівські Леви",
    "lev",
    "lion_one",
    "Остап",
    "23",
    "76561198100000001",
    "lion#0001",
    "@lion_one",
    "lion_two",
    "Маркіян",
    "18",
    "76561198100000002",
    "lion_three",
    "Назар",
    "19",
    "76561198100000003",
    "lion_four",
    "Роман",
    "20",
    "76561198100000004",
    "lion_five",
    "Василь",
    "17",
    "76561198100000005",
    "їдемо з запасним гравцем",
];

/// Walks a fresh wizard session through every field step, stopping at the
/// confirm state.
pub async fn run_wizard_to_confirm(sessions: &SessionTable, operator: i64) {
    sessions.begin_wizard(operator).await;
    let last = ANSWERS.len() - 1;
    for (i, answer) in ANSWERS.iter().enumerate() {
        let outcome = sessions
            .advance_wizard(operator, answer)
            .await
            .unwrap_or_else(|| panic!("wizard lost at step {i}"));
        match outcome {
            Advance::Ask { .. } if i < last => {}
            Advance::AwaitConfirm { .. } if i == last => {}
            other => panic!("unexpected outcome at step {i}: {other:?}"),
        }
    }
}

/// Completes the wizard with an affirmative confirmation and returns the
/// accumulated answers.
pub async fn commit_wizard(sessions: &SessionTable, operator: i64) -> BTreeMap<Field, FieldValue> {
    run_wizard_to_confirm(sessions, operator).await;
    match sessions.advance_wizard(operator, "✅ Підтвердити").await {
        Some(Advance::Committed(answers)) => answers,
        other => panic!("expected commit, got {other:?}"),
    }
}

/// A distinct, fully populated record for store fixtures.
pub fn make_team(n: u32) -> TeamRecord {
    TeamRecord {
        team_name: format!("Команда {n}"),
        team_tag: format!("T{n:02}"),
        cap_nick: format!("cap{n}"),
        cap_name: "Капітан".to_string(),
        cap_age: 20 + n,
        cap_steam: format!("7656119800000{n:04}"),
        cap_discord: format!("cap{n}#000{n}"),
        cap_tg: format!("@cap{n}"),
        p2_nick: format!("p2_{n}"),
        p2_name: "Другий".to_string(),
        p2_age: 18,
        p2_steam: format!("7656119810000{n:04}"),
        p3_nick: format!("p3_{n}"),
        p3_name: "Третій".to_string(),
        p3_age: 19,
        p3_steam: format!("7656119820000{n:04}"),
        p4_nick: format!("p4_{n}"),
        p4_name: "Четвертий".to_string(),
        p4_age: 20,
        p4_steam: format!("7656119830000{n:04}"),
        p5_nick: format!("p5_{n}"),
        p5_name: "П'ятий".to_string(),
        p5_age: 21,
        p5_steam: format!("7656119840000{n:04}"),
        comments: "Без коментарів".to_string(),
        timestamp: Utc.with_ymd_and_hms(2025, 10, 1, 10, 0, 0).unwrap(),
        user_id: 1000 + i64::from(n),
    }
}
