//! Per-operator ephemeral session state and free-text arbitration
//!
//! One table maps operator id → the single flow that owns the operator's
//! free-text messages. Holding a tagged union (instead of two independent
//! dictionaries) makes the arbitration rule structural: an operator can
//! never be in the wizard and the edit sub-flow at once, so a stale edit
//! pointer cannot intercept wizard input.
//!
//! Claiming and state transition happen under one lock per call; no
//! transport work is done while the lock is held.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::core::types::Field;
use crate::wizard::{Advance, WizardSession};

/// The admin edit pointer: which record slot, and — once a field button
/// was pressed — which field awaits its replacement value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSession {
    pub team_index: usize,
    pub field: Option<Field>,
}

#[derive(Debug, Clone)]
enum Session {
    Wizard(WizardSession),
    Edit(EditSession),
}

/// Session table, injected through `HandlerDeps` and shared by every
/// handler branch.
#[derive(Default)]
pub struct SessionTable {
    inner: Mutex<HashMap<i64, Session>>,
}

impl SessionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh wizard session, discarding any prior session of
    /// either kind for this operator.
    pub async fn begin_wizard(&self, operator: i64) {
        let mut table = self.inner.lock().await;
        table.insert(operator, Session::Wizard(WizardSession::new()));
    }

    /// True if the operator currently sits inside the wizard.
    pub async fn in_wizard(&self, operator: i64) -> bool {
        let table = self.inner.lock().await;
        matches!(table.get(&operator), Some(Session::Wizard(_)))
    }

    /// The question of the operator's current wizard step, if any — used
    /// to re-prompt after an ignored mid-wizard command.
    pub async fn wizard_prompt(&self, operator: i64) -> Option<&'static str> {
        let table = self.inner.lock().await;
        match table.get(&operator) {
            Some(Session::Wizard(session)) => Some(session.current_prompt()),
            _ => None,
        }
    }

    /// Offers a free-text message to the operator's wizard session.
    ///
    /// Returns `None` when no wizard session is active — the message is
    /// not claimed and may be offered to the edit sub-flow. A spent
    /// session (commit or decline) is removed before returning.
    pub async fn advance_wizard(&self, operator: i64, text: &str) -> Option<Advance> {
        let mut table = self.inner.lock().await;
        let Some(Session::Wizard(session)) = table.get_mut(&operator) else {
            return None;
        };
        let outcome = session.advance(text);
        if session.is_spent() {
            table.remove(&operator);
        }
        Some(outcome)
    }

    /// Enters the edit sub-flow at `SelectTeam`: remembers the chosen
    /// record slot, replacing any previous edit pointer.
    pub async fn begin_edit(&self, operator: i64, team_index: usize) {
        let mut table = self.inner.lock().await;
        table.insert(
            operator,
            Session::Edit(EditSession {
                team_index,
                field: None,
            }),
        );
    }

    /// `SelectField`: arms the pointer with the chosen field. Returns the
    /// target record index, or `None` if no edit session is active (e.g.
    /// the operator started a wizard in between).
    pub async fn select_edit_field(&self, operator: i64, field: Field) -> Option<usize> {
        let mut table = self.inner.lock().await;
        match table.get_mut(&operator) {
            Some(Session::Edit(edit)) => {
                edit.field = Some(field);
                Some(edit.team_index)
            }
            _ => None,
        }
    }

    /// The armed edit pointer, if the operator's edit session awaits its
    /// `InputValue` message. Does not clear the session: a validation
    /// failure keeps the pointer so the admin can retry.
    pub async fn edit_target(&self, operator: i64) -> Option<(usize, Field)> {
        let table = self.inner.lock().await;
        match table.get(&operator) {
            Some(Session::Edit(EditSession {
                team_index,
                field: Some(field),
            })) => Some((*team_index, *field)),
            _ => None,
        }
    }

    /// Discards whatever session the operator holds. Returns `true` if
    /// there was one.
    pub async fn clear(&self, operator: i64) -> bool {
        let mut table = self.inner.lock().await;
        table.remove(&operator).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn wizard_claims_text_before_edit() {
        let sessions = SessionTable::new();
        let op = 1;

        // stale edit pointer, then a wizard starts: the union replaces it
        sessions.begin_edit(op, 0).await;
        sessions.select_edit_field(op, Field::TeamName).await;
        sessions.begin_wizard(op).await;

        assert!(sessions.edit_target(op).await.is_none());
        assert!(sessions.advance_wizard(op, "Назва").await.is_some());
    }

    #[tokio::test]
    async fn text_without_any_session_is_unclaimed() {
        let sessions = SessionTable::new();
        assert!(sessions.advance_wizard(5, "привіт").await.is_none());
        assert!(sessions.edit_target(5).await.is_none());
    }

    #[tokio::test]
    async fn edit_pointer_arms_in_two_steps() {
        let sessions = SessionTable::new();
        let op = 9;

        sessions.begin_edit(op, 3).await;
        // SelectTeam done, field not chosen yet: input must not be claimed
        assert!(sessions.edit_target(op).await.is_none());

        assert_eq!(sessions.select_edit_field(op, Field::CapAge).await, Some(3));
        assert_eq!(sessions.edit_target(op).await, Some((3, Field::CapAge)));

        // target survives a failed validation (caller re-reads it)
        assert_eq!(sessions.edit_target(op).await, Some((3, Field::CapAge)));

        assert!(sessions.clear(op).await);
        assert!(sessions.edit_target(op).await.is_none());
    }

    #[tokio::test]
    async fn operators_are_isolated() {
        let sessions = SessionTable::new();
        sessions.begin_wizard(1).await;
        sessions.begin_edit(2, 0).await;

        assert!(sessions.in_wizard(1).await);
        assert!(!sessions.in_wizard(2).await);
        assert!(sessions.advance_wizard(2, "x").await.is_none());
    }

    #[tokio::test]
    async fn select_field_without_edit_session_is_refused() {
        let sessions = SessionTable::new();
        sessions.begin_wizard(7).await;
        assert!(sessions.select_edit_field(7, Field::TeamTag).await.is_none());
    }
}
