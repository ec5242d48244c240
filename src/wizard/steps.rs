//! The registration wizard's step table
//!
//! The whole 25-question flow is data: one ordered list of step
//! descriptors consumed by the generic advance function in
//! [`super::session`]. Adding or reordering questions means editing this
//! table, not writing another handler.

use crate::core::types::{Field, FieldValue};

/// One wizard step: which field it fills and the question asked when the
/// step is entered.
pub struct StepDef {
    pub field: Field,
    pub prompt: &'static str,
}

/// Intro sent on `/register`, before the first step's prompt.
pub const REGISTRATION_INTRO: &str = "📝 РЕЄСТРАЦІЯ КОМАНДИ\n\nЯ буду ставити запитання, а ви відповідайте.\nДля скасування: /cancel";

/// Token whose presence in the confirm answer counts as affirmative.
pub const AFFIRMATIVE_TOKEN: &str = "✅";

/// Confirm-step reply keyboard labels.
pub const CONFIRM_BUTTON: &str = "✅ Підтвердити";
pub const DECLINE_BUTTON: &str = "❌ Скасувати";

/// Question re-shown when the session sits at the confirm step.
pub const CONFIRM_PROMPT: &str = "Підтвердити?";

pub const STEPS: [StepDef; 25] = [
    StepDef {
        field: Field::TeamName,
        prompt: "Введіть назву команди:",
    },
    StepDef {
        field: Field::TeamTag,
        prompt: "Введіть тег (2-5 символів):",
    },
    StepDef {
        field: Field::CapNick,
        prompt: "👑 КАПІТАН\n\nНікнейм (Steam):",
    },
    StepDef {
        field: Field::CapName,
        prompt: "Справжнє ім'я:",
    },
    StepDef {
        field: Field::CapAge,
        prompt: "Вік:",
    },
    StepDef {
        field: Field::CapSteam,
        prompt: "Steam ID (тільки цифри, мінімум 8):",
    },
    StepDef {
        field: Field::CapDiscord,
        prompt: "Discord капітана (формат: username#0000):",
    },
    StepDef {
        field: Field::CapTg,
        prompt: "Telegram капітана (@username):",
    },
    StepDef {
        field: Field::P2Nick,
        prompt: "👤 ГРАВЕЦЬ 2\n\nНікнейм:",
    },
    StepDef {
        field: Field::P2Name,
        prompt: "Справжнє ім'я:",
    },
    StepDef {
        field: Field::P2Age,
        prompt: "Вік:",
    },
    StepDef {
        field: Field::P2Steam,
        prompt: "Steam ID (тільки цифри):",
    },
    StepDef {
        field: Field::P3Nick,
        prompt: "👤 ГРАВЕЦЬ 3\n\nНікнейм:",
    },
    StepDef {
        field: Field::P3Name,
        prompt: "Справжнє ім'я:",
    },
    StepDef {
        field: Field::P3Age,
        prompt: "Вік:",
    },
    StepDef {
        field: Field::P3Steam,
        prompt: "Steam ID (тільки цифри):",
    },
    StepDef {
        field: Field::P4Nick,
        prompt: "👤 ГРАВЕЦЬ 4\n\nНікнейм:",
    },
    StepDef {
        field: Field::P4Name,
        prompt: "Справжнє ім'я:",
    },
    StepDef {
        field: Field::P4Age,
        prompt: "Вік:",
    },
    StepDef {
        field: Field::P4Steam,
        prompt: "Steam ID (тільки цифри):",
    },
    StepDef {
        field: Field::P5Nick,
        prompt: "👤 ГРАВЕЦЬ 5 (останній)\n\nНікнейм:",
    },
    StepDef {
        field: Field::P5Name,
        prompt: "Справжнє ім'я:",
    },
    StepDef {
        field: Field::P5Age,
        prompt: "Вік:",
    },
    StepDef {
        field: Field::P5Steam,
        prompt: "Steam ID (тільки цифри):",
    },
    StepDef {
        field: Field::Comments,
        prompt: "Є коментарі? (якщо ні - напишіть '-')",
    },
];

/// The acknowledgement line prepended to the next prompt after a value is
/// stored. Most steps advance silently; milestones echo progress.
pub fn ack_for(field: Field, value: &FieldValue) -> Option<String> {
    match field {
        Field::TeamName => Some(format!("✅ Команда: {value}")),
        Field::TeamTag => Some(format!("✅ Тег: [{value}]")),
        Field::CapTg => Some("✅ Капітан готово!".to_string()),
        Field::P2Steam => Some("✅ Гравець 2 готово!".to_string()),
        Field::P3Steam => Some("✅ Гравець 3 готово!".to_string()),
        Field::P4Steam => Some("✅ Гравець 4 готово!".to_string()),
        Field::P5Steam => Some("✅ Всі гравці готові!".to_string()),
        _ => None,
    }
}
