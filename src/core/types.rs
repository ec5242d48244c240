//! Domain types: team roster fields and the persisted team record

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Every mutable field of a team record, in wizard order.
///
/// The strum snake_case form ("cap_nick", "p2_steam", …) is the stable key
/// used in callback data and matches the persisted JSON field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    TeamName,
    TeamTag,
    CapNick,
    CapName,
    CapAge,
    CapSteam,
    CapDiscord,
    CapTg,
    P2Nick,
    P2Name,
    P2Age,
    P2Steam,
    P3Nick,
    P3Name,
    P3Age,
    P3Steam,
    P4Nick,
    P4Name,
    P4Age,
    P4Steam,
    P5Nick,
    P5Name,
    P5Age,
    P5Steam,
    Comments,
}

/// Fields exposed in the admin edit menu: team identity plus the captain
/// block. Player rows are re-registered, not edited.
pub const EDITABLE_FIELDS: [Field; 8] = [
    Field::TeamName,
    Field::TeamTag,
    Field::CapNick,
    Field::CapName,
    Field::CapAge,
    Field::CapSteam,
    Field::CapDiscord,
    Field::CapTg,
];

impl Field {
    /// Human-readable field name for admin menus and confirmations
    pub fn label(self) -> &'static str {
        match self {
            Field::TeamName => "Назва команди",
            Field::TeamTag => "Тег команди",
            Field::CapNick => "Нікнейм капітана",
            Field::CapName => "Ім'я капітана",
            Field::CapAge => "Вік капітана",
            Field::CapSteam => "Steam ID капітана",
            Field::CapDiscord => "Discord капітана",
            Field::CapTg => "Telegram капітана",
            Field::P2Nick => "Нікнейм гравця 2",
            Field::P2Name => "Ім'я гравця 2",
            Field::P2Age => "Вік гравця 2",
            Field::P2Steam => "Steam ID гравця 2",
            Field::P3Nick => "Нікнейм гравця 3",
            Field::P3Name => "Ім'я гравця 3",
            Field::P3Age => "Вік гравця 3",
            Field::P3Steam => "Steam ID гравця 3",
            Field::P4Nick => "Нікнейм гравця 4",
            Field::P4Name => "Ім'я гравця 4",
            Field::P4Age => "Вік гравця 4",
            Field::P4Steam => "Steam ID гравця 4",
            Field::P5Nick => "Нікнейм гравця 5",
            Field::P5Name => "Ім'я гравця 5",
            Field::P5Age => "Вік гравця 5",
            Field::P5Steam => "Steam ID гравця 5",
            Field::Comments => "Коментарі",
        }
    }
}

/// A validated field value produced by the shared validator table.
///
/// Ages are carried as integers so the edit sub-flow writes the parsed
/// number, never the raw input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Age(u32),
}

impl FieldValue {
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Age(a) => a.to_string(),
        }
    }

    pub fn age(&self) -> Option<u32> {
        match self {
            FieldValue::Age(a) => Some(*a),
            FieldValue::Text(s) => s.parse().ok(),
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Age(a) => write!(f, "{a}"),
        }
    }
}

/// One registered team, persisted as an element of the registrations
/// document. Field names mirror the stored JSON.
///
/// `timestamp` and `user_id` are stamped once at wizard confirmation; the
/// edit sub-flow cannot address them (`Field` has no variant for either).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team_name: String,
    pub team_tag: String,
    pub cap_nick: String,
    pub cap_name: String,
    pub cap_age: u32,
    pub cap_steam: String,
    pub cap_discord: String,
    pub cap_tg: String,
    pub p2_nick: String,
    pub p2_name: String,
    pub p2_age: u32,
    pub p2_steam: String,
    pub p3_nick: String,
    pub p3_name: String,
    pub p3_age: u32,
    pub p3_steam: String,
    pub p4_nick: String,
    pub p4_name: String,
    pub p4_age: u32,
    pub p4_steam: String,
    pub p5_nick: String,
    pub p5_name: String,
    pub p5_age: u32,
    pub p5_steam: String,
    pub comments: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: i64,
}

impl TeamRecord {
    /// Assembles a record from the wizard's accumulated answers.
    ///
    /// Returns `None` if any field is missing — the linear wizard fills
    /// every field before reaching Confirm, so `None` indicates a bug, not
    /// a user error.
    pub fn from_answers(answers: &BTreeMap<Field, FieldValue>, user_id: i64, timestamp: DateTime<Utc>) -> Option<Self> {
        let text = |f: Field| answers.get(&f).cloned().map(FieldValue::into_text);
        let age = |f: Field| answers.get(&f).and_then(FieldValue::age);

        Some(Self {
            team_name: text(Field::TeamName)?,
            team_tag: text(Field::TeamTag)?,
            cap_nick: text(Field::CapNick)?,
            cap_name: text(Field::CapName)?,
            cap_age: age(Field::CapAge)?,
            cap_steam: text(Field::CapSteam)?,
            cap_discord: text(Field::CapDiscord)?,
            cap_tg: text(Field::CapTg)?,
            p2_nick: text(Field::P2Nick)?,
            p2_name: text(Field::P2Name)?,
            p2_age: age(Field::P2Age)?,
            p2_steam: text(Field::P2Steam)?,
            p3_nick: text(Field::P3Nick)?,
            p3_name: text(Field::P3Name)?,
            p3_age: age(Field::P3Age)?,
            p3_steam: text(Field::P3Steam)?,
            p4_nick: text(Field::P4Nick)?,
            p4_name: text(Field::P4Name)?,
            p4_age: age(Field::P4Age)?,
            p4_steam: text(Field::P4Steam)?,
            p5_nick: text(Field::P5Nick)?,
            p5_name: text(Field::P5Name)?,
            p5_age: age(Field::P5Age)?,
            p5_steam: text(Field::P5Steam)?,
            comments: text(Field::Comments)?,
            timestamp,
            user_id,
        })
    }

    /// Overwrites a single field with a validator-produced value.
    pub fn set_field(&mut self, field: Field, value: FieldValue) {
        match field {
            Field::TeamName => self.team_name = value.into_text(),
            Field::TeamTag => self.team_tag = value.into_text(),
            Field::CapNick => self.cap_nick = value.into_text(),
            Field::CapName => self.cap_name = value.into_text(),
            Field::CapAge => self.cap_age = value.age().unwrap_or(self.cap_age),
            Field::CapSteam => self.cap_steam = value.into_text(),
            Field::CapDiscord => self.cap_discord = value.into_text(),
            Field::CapTg => self.cap_tg = value.into_text(),
            Field::P2Nick => self.p2_nick = value.into_text(),
            Field::P2Name => self.p2_name = value.into_text(),
            Field::P2Age => self.p2_age = value.age().unwrap_or(self.p2_age),
            Field::P2Steam => self.p2_steam = value.into_text(),
            Field::P3Nick => self.p3_nick = value.into_text(),
            Field::P3Name => self.p3_name = value.into_text(),
            Field::P3Age => self.p3_age = value.age().unwrap_or(self.p3_age),
            Field::P3Steam => self.p3_steam = value.into_text(),
            Field::P4Nick => self.p4_nick = value.into_text(),
            Field::P4Name => self.p4_name = value.into_text(),
            Field::P4Age => self.p4_age = value.age().unwrap_or(self.p4_age),
            Field::P4Steam => self.p4_steam = value.into_text(),
            Field::P5Nick => self.p5_nick = value.into_text(),
            Field::P5Name => self.p5_name = value.into_text(),
            Field::P5Age => self.p5_age = value.age().unwrap_or(self.p5_age),
            Field::P5Steam => self.p5_steam = value.into_text(),
            Field::Comments => self.comments = value.into_text(),
        }
    }

    /// Player rows 2..5 as (number, nick, name, age, steam id)
    pub fn players(&self) -> [(u8, &str, &str, u32, &str); 4] {
        [
            (2, &self.p2_nick, &self.p2_name, self.p2_age, &self.p2_steam),
            (3, &self.p3_nick, &self.p3_name, self.p3_age, &self.p3_steam),
            (4, &self.p4_nick, &self.p4_name, self.p4_age, &self.p4_steam),
            (5, &self.p5_nick, &self.p5_name, self.p5_age, &self.p5_steam),
        ]
    }

    /// The full team card, as sent to admins in the team listing and in
    /// new-registration notifications. `index` is the current position in
    /// the registrations document.
    pub fn format_full(&self, index: usize) -> String {
        let mut text = format!(
            "━━━━━━━━━━━━━━━━━━━━\n\
             📋 КОМАНДА #{}\n\
             ━━━━━━━━━━━━━━━━━━━━\n\n\
             🏆 Назва: {}\n\
             🔖 Тег: [{}]\n\
             📅 Дата реєстрації: {}\n\
             👤 ID користувача: {}\n\n\
             👑 КАПІТАН:\n\
             ├ Нік: {}\n\
             ├ Ім'я: {}\n\
             ├ Вік: {} років\n\
             ├ Steam ID: {}\n\
             ├ Discord: {}\n\
             └ Telegram: {}\n",
            index + 1,
            self.team_name,
            self.team_tag,
            self.timestamp.format("%Y-%m-%d"),
            self.user_id,
            self.cap_nick,
            self.cap_name,
            self.cap_age,
            self.cap_steam,
            self.cap_discord,
            self.cap_tg,
        );

        for (n, nick, name, age, steam) in self.players() {
            text.push_str(&format!(
                "\n👥 ГРАВЕЦЬ {n}:\n├ Нік: {nick}\n├ Ім'я: {name}\n├ Вік: {age} років\n└ Steam ID: {steam}\n"
            ));
        }

        text.push_str(&format!("\n💬 Коментарі: {}\n━━━━━━━━━━━━━━━━━━━━", self.comments));
        text
    }
}
