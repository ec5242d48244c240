//! Arbitration tests: which flow owns an operator's free-text messages
//!
//! Run with: cargo test --test arbitration_test
//!
//! The rules under test, in precedence order: an active wizard session
//! claims every text; otherwise an armed edit pointer claims it; otherwise
//! the text is unclaimed. One operator, one flow — never both.

mod common;

use common::{ANSWERS, run_wizard_to_confirm};
use turnir::core::types::Field;
use turnir::sessions::SessionTable;
use turnir::wizard::Advance;

#[tokio::test]
async fn active_wizard_shadows_any_edit_pointer() {
    let sessions = SessionTable::new();
    let operator = 1;

    // Admin armed an edit pointer, then started a registration: the wizard
    // replaces the pointer entirely, a stale pointer cannot linger.
    sessions.begin_edit(operator, 2).await;
    sessions.select_edit_field(operator, Field::CapSteam).await;
    sessions.begin_wizard(operator).await;

    assert!(sessions.edit_target(operator).await.is_none());

    // Free text is consumed by the wizard, not the edit sub-flow
    let outcome = sessions.advance_wizard(operator, "Назва Команди").await;
    assert!(matches!(outcome, Some(Advance::Ask { .. })));
}

#[tokio::test]
async fn edit_pointer_claims_text_only_when_armed() {
    let sessions = SessionTable::new();
    let operator = 2;

    // No session at all: nothing claims the message
    assert!(sessions.advance_wizard(operator, "вільний текст").await.is_none());
    assert!(sessions.edit_target(operator).await.is_none());

    // SelectTeam alone does not arm the pointer
    sessions.begin_edit(operator, 0).await;
    assert!(sessions.edit_target(operator).await.is_none());

    // SelectField arms it
    sessions.select_edit_field(operator, Field::TeamTag).await;
    assert_eq!(sessions.edit_target(operator).await, Some((0, Field::TeamTag)));

    // One attempt clears it (the handler clears after validation passes)
    sessions.clear(operator).await;
    assert!(sessions.edit_target(operator).await.is_none());
}

#[tokio::test]
async fn wizard_session_ends_exactly_at_confirm() {
    let sessions = SessionTable::new();
    let operator = 3;

    run_wizard_to_confirm(&sessions, operator).await;
    assert!(sessions.in_wizard(operator).await);

    // Decline spends the session; the very next text is unclaimed
    assert!(matches!(
        sessions.advance_wizard(operator, "❌ Скасувати").await,
        Some(Advance::Declined)
    ));
    assert!(!sessions.in_wizard(operator).await);
    assert!(sessions.advance_wizard(operator, "привіт").await.is_none());
}

#[tokio::test]
async fn operators_never_share_sessions() {
    let sessions = SessionTable::new();
    let registrant = 10;
    let admin = 11;

    sessions.begin_wizard(registrant).await;
    sessions.begin_edit(admin, 0).await;
    sessions.select_edit_field(admin, Field::CapAge).await;

    // The registrant's text advances only their wizard
    assert!(sessions.advance_wizard(registrant, ANSWERS[0]).await.is_some());
    // The admin's pointer is untouched by the registrant's traffic
    assert_eq!(sessions.edit_target(admin).await, Some((0, Field::CapAge)));
    // And the admin has no wizard
    assert!(sessions.advance_wizard(admin, "17").await.is_none());
}

#[tokio::test]
async fn starting_edit_mid_wizard_replaces_the_wizard() {
    // The admin menu is reachable only outside the wizard (the dispatcher
    // re-prompts on mid-wizard commands), but the table itself also keeps
    // the invariant: whichever flow starts last owns the operator.
    let sessions = SessionTable::new();
    let operator = 12;

    sessions.begin_wizard(operator).await;
    sessions.begin_edit(operator, 1).await;

    assert!(!sessions.in_wizard(operator).await);
    assert!(sessions.advance_wizard(operator, "текст").await.is_none());
    assert_eq!(sessions.select_edit_field(operator, Field::TeamName).await, Some(1));
    assert_eq!(sessions.edit_target(operator).await, Some((1, Field::TeamName)));
}

#[tokio::test]
async fn wizard_prompt_is_exposed_for_reprompts() {
    let sessions = SessionTable::new();
    let operator = 13;

    assert!(sessions.wizard_prompt(operator).await.is_none());

    sessions.begin_wizard(operator).await;
    let first = sessions.wizard_prompt(operator).await.unwrap();
    assert!(first.contains("назву команди"));

    sessions.advance_wizard(operator, "Команда").await.unwrap();
    let second = sessions.wizard_prompt(operator).await.unwrap();
    assert!(second.contains("тег"));
}
