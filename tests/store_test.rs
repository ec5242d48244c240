//! Integration tests for the whole-document record stores
//!
//! Run with: cargo test --test store_test

mod common;

use std::sync::Arc;

use common::make_team;
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use turnir::AppError;
use turnir::core::types::{Field, FieldValue};
use turnir::storage::{SubscriberStore, TeamStore};

fn store_in(dir: &TempDir) -> TeamStore {
    TeamStore::new(dir.path().join("registrations.json"))
}

// ============================================================================
// Load semantics
// ============================================================================

#[tokio::test]
async fn missing_document_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert!(store.load().await.unwrap().is_empty());

    let subs = SubscriberStore::new(dir.path().join("subscribers.json"));
    assert!(subs.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn corrupt_document_is_an_error_not_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("registrations.json");
    std::fs::write(&path, "[{\"team_name\": ").unwrap();

    let store = TeamStore::new(&path);
    assert!(matches!(store.load().await, Err(AppError::CorruptStore { .. })));

    // Mutations on top of a corrupt document must also refuse, loudly
    assert!(store.append(make_team(1)).await.is_err());
    assert!(store.delete(0).await.is_err());

    // The broken document is still on disk, untouched
    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw, "[{\"team_name\": ");
}

#[tokio::test]
async fn documents_round_trip_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("registrations.json");

    {
        let store = TeamStore::new(&path);
        store.append(make_team(1)).await.unwrap();
        store.append(make_team(2)).await.unwrap();
    }

    // A fresh store over the same file sees the same records
    let reopened = TeamStore::new(&path);
    let teams = reopened.load().await.unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0], make_team(1));
    assert_eq!(teams[1], make_team(2));
}

// ============================================================================
// Positional addressing
// ============================================================================

#[tokio::test]
async fn delete_compacts_and_shifts_later_indices() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    for n in 1..=4 {
        store.append(make_team(n)).await.unwrap();
    }

    let removed = store.delete(1).await.unwrap().unwrap();
    assert_eq!(removed, make_team(2));

    let teams = store.load().await.unwrap();
    assert_eq!(teams.len(), 3);
    // Every record after the hole moved down by exactly one
    assert_eq!(teams[0], make_team(1));
    assert_eq!(teams[1], make_team(3));
    assert_eq!(teams[2], make_team(4));

    // Former last index is out of range now
    assert!(store.get(3).await.unwrap().is_none());
    assert!(store.delete(3).await.unwrap().is_none());
}

#[tokio::test]
async fn update_field_touches_nothing_else() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    for n in 1..=3 {
        store.append(make_team(n)).await.unwrap();
    }
    let before = store.load().await.unwrap();

    let updated = store
        .update_field(1, Field::CapNick, FieldValue::Text("renamed".to_string()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.cap_nick, "renamed");

    let after = store.load().await.unwrap();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);

    // Only the one field of the one record differs
    let mut expected = before[1].clone();
    expected.cap_nick = "renamed".to_string();
    assert_eq!(after[1], expected);
}

#[tokio::test]
async fn whole_record_update_replaces_one_slot() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.append(make_team(1)).await.unwrap();
    store.append(make_team(2)).await.unwrap();

    store.update(0, make_team(9)).await.unwrap();

    let teams = store.load().await.unwrap();
    assert_eq!(teams[0], make_team(9));
    assert_eq!(teams[1], make_team(2));

    // A vanished slot is NotFound, not a silent no-op
    assert!(matches!(
        store.update(5, make_team(3)).await,
        Err(AppError::NotFound(5))
    ));
}

#[tokio::test]
async fn update_field_on_vanished_index_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.append(make_team(1)).await.unwrap();

    // Another admin deleted the record the pointer referenced
    store.delete(0).await.unwrap();

    let result = store
        .update_field(0, Field::TeamName, FieldValue::Text("пізно".to_string()))
        .await
        .unwrap();
    assert!(result.is_none());
}

// ============================================================================
// Concurrency: serialized mutations, no lost updates
// ============================================================================

#[tokio::test]
async fn concurrent_append_and_delete_both_land() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(store_in(&dir));
    store.append(make_team(1)).await.unwrap();
    store.append(make_team(2)).await.unwrap();

    // A registration commit and an admin delete race on disjoint targets
    let appender = {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.append(make_team(3)).await })
    };
    let deleter = {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.delete(1).await })
    };

    appender.await.unwrap().unwrap();
    let removed = deleter.await.unwrap().unwrap();

    let teams = store.load().await.unwrap();
    assert_eq!(teams.len(), 2, "one of the writers was lost");
    assert!(teams.contains(&make_team(1)));
    assert!(teams.contains(&make_team(3)), "append was dropped by the delete");
    // Whatever interleaving won, record 2 is the one that went away
    assert_eq!(removed, Some(make_team(2)));
    assert!(!teams.contains(&make_team(2)));
}

#[tokio::test]
async fn concurrent_appends_all_survive() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(store_in(&dir));

    let mut handles = Vec::new();
    for n in 1..=8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move { store.append(make_team(n)).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let teams = store.load().await.unwrap();
    assert_eq!(teams.len(), 8);
    for n in 1..=8 {
        assert!(teams.contains(&make_team(n)), "lost append of team {n}");
    }
}

#[tokio::test]
async fn concurrent_subscriber_adds_never_duplicate() {
    let dir = TempDir::new().unwrap();
    let subs = Arc::new(SubscriberStore::new(dir.path().join("subscribers.json")));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let subs = Arc::clone(&subs);
        handles.push(tokio::spawn(async move { subs.add_if_absent(42).await }));
    }

    let mut added = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap() {
            added += 1;
        }
    }

    assert_eq!(added, 1, "add_if_absent reported more than one insertion");
    assert_eq!(subs.load().await.unwrap(), vec![42]);
}
