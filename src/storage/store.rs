//! Whole-document JSON stores for registrations and subscribers
//!
//! Both collections live in single JSON files and are only ever read and
//! replaced as whole documents; record addressing is positional. Every
//! mutation is one read-modify-write critical section behind a
//! per-collection async mutex, so concurrent registrations and admin
//! actions cannot drop each other's writes. Replacement is atomic
//! (temp file + rename).
//!
//! A missing file is an empty collection. An unreadable file is
//! [`AppError::CorruptStore`] — corruption must surface, not silently
//! discard records.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::core::error::{AppError, AppResult};
use crate::core::types::{Field, FieldValue, TeamRecord};

async fn load_doc<T: DeserializeOwned>(path: &Path) -> AppResult<Option<T>> {
    let raw = match fs_err::tokio::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| AppError::CorruptStore {
            path: path.to_path_buf(),
            source,
        })
}

async fn save_doc<T: Serialize>(path: &Path, value: &T) -> AppResult<()> {
    let raw = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs_err::tokio::write(&tmp, raw.as_bytes()).await?;
    fs_err::tokio::rename(&tmp, path).await?;
    Ok(())
}

/// The registrations document: an ordered sequence of [`TeamRecord`].
///
/// Indices are positions in the current sequence, not stable identifiers;
/// deleting a record shifts every later index down by one.
pub struct TeamStore {
    path: PathBuf,
    mutation: Mutex<()>,
}

impl TeamStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mutation: Mutex::new(()),
        }
    }

    /// Reads the whole collection. Never fails on a missing file.
    pub async fn load(&self) -> AppResult<Vec<TeamRecord>> {
        Ok(load_doc(&self.path).await?.unwrap_or_default())
    }

    /// Replaces the whole collection.
    pub async fn save(&self, teams: &[TeamRecord]) -> AppResult<()> {
        save_doc(&self.path, &teams).await
    }

    pub async fn count(&self) -> AppResult<usize> {
        Ok(self.load().await?.len())
    }

    pub async fn get(&self, index: usize) -> AppResult<Option<TeamRecord>> {
        Ok(self.load().await?.into_iter().nth(index))
    }

    /// Appends a record, returning its index.
    pub async fn append(&self, team: TeamRecord) -> AppResult<usize> {
        let _guard = self.mutation.lock().await;
        let mut teams = self.load().await?;
        teams.push(team);
        self.save(&teams).await?;
        Ok(teams.len() - 1)
    }

    /// Replaces the record at `index` wholesale.
    pub async fn update(&self, index: usize, team: TeamRecord) -> AppResult<()> {
        let _guard = self.mutation.lock().await;
        let mut teams = self.load().await?;
        match teams.get_mut(index) {
            Some(slot) => {
                *slot = team;
                self.save(&teams).await
            }
            None => Err(AppError::NotFound(index)),
        }
    }

    /// Overwrites one field of the record at `index` inside a single
    /// critical section; every other field and record is untouched.
    /// Returns the updated record, or `None` if the index is gone.
    pub async fn update_field(&self, index: usize, field: Field, value: FieldValue) -> AppResult<Option<TeamRecord>> {
        let _guard = self.mutation.lock().await;
        let mut teams = self.load().await?;
        match teams.get_mut(index) {
            Some(team) => {
                team.set_field(field, value);
                let updated = team.clone();
                self.save(&teams).await?;
                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    /// Removes and returns the record at `index`, compacting the sequence.
    pub async fn delete(&self, index: usize) -> AppResult<Option<TeamRecord>> {
        let _guard = self.mutation.lock().await;
        let mut teams = self.load().await?;
        if index >= teams.len() {
            return Ok(None);
        }
        let removed = teams.remove(index);
        self.save(&teams).await?;
        Ok(Some(removed))
    }
}

/// The subscribers document: a list-encoded set of operator ids.
///
/// Ids are added at most once, on first contact, and never removed.
pub struct SubscriberStore {
    path: PathBuf,
    mutation: Mutex<()>,
}

impl SubscriberStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mutation: Mutex::new(()),
        }
    }

    pub async fn load(&self) -> AppResult<Vec<i64>> {
        Ok(load_doc(&self.path).await?.unwrap_or_default())
    }

    pub async fn save(&self, subscribers: &[i64]) -> AppResult<()> {
        save_doc(&self.path, &subscribers).await
    }

    pub async fn count(&self) -> AppResult<usize> {
        Ok(self.load().await?.len())
    }

    /// Adds `id` if not present. Returns whether it was added.
    pub async fn add_if_absent(&self, id: i64) -> AppResult<bool> {
        let _guard = self.mutation.lock().await;
        let mut subscribers = self.load().await?;
        if subscribers.contains(&id) {
            return Ok(false);
        }
        subscribers.push(id);
        self.save(&subscribers).await?;
        Ok(true)
    }
}
