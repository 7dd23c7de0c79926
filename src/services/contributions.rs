//! Tracked contribution store
//!
//! In-memory CRUD over tracked contribution records with per-user statistics.
//! The collection and its id counter live only for the process lifetime; a
//! restart resets both.

use chrono::Utc;
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{
    CreateContributionRequest, TrackedContribution, UpdateContributionRequest,
    UserContributionStats,
};

/// Number of records returned in a per-user summary
const RECENT_CONTRIBUTIONS: usize = 5;

/// Errors from contribution store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContributionError {
    #[error("Username, repository, and type are required")]
    MissingFields,
    #[error("Contribution not found")]
    NotFound,
}

struct StoreInner {
    records: Vec<TrackedContribution>,
    next_id: u64,
}

/// Owner of the tracked contribution collection.
///
/// Constructed once at process start and shared through the application state;
/// no other component touches the collection directly. Ids are assigned
/// sequentially starting at 1 and are never reused, even after deletes.
pub struct ContributionStore {
    inner: RwLock<StoreInner>,
}

impl ContributionStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a record. Username, repository and type must be non-empty.
    pub async fn create(
        &self,
        request: CreateContributionRequest,
    ) -> Result<TrackedContribution, ContributionError> {
        if request.username.is_empty() || request.repository.is_empty() || request.kind.is_empty() {
            return Err(ContributionError::MissingFields);
        }

        let now = Utc::now();
        let mut inner = self.inner.write().await;

        let record = TrackedContribution {
            id: inner.next_id,
            username: request.username,
            repository: request.repository,
            kind: request.kind,
            title: request.title.unwrap_or_default(),
            url: request.url.unwrap_or_default(),
            status: request
                .status
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "in_progress".to_string()),
            notes: request.notes.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        inner.next_id += 1;
        inner.records.push(record.clone());

        Ok(record)
    }

    /// All records in insertion order
    pub async fn list(&self) -> Vec<TrackedContribution> {
        self.inner.read().await.records.clone()
    }

    pub async fn get(&self, id: u64) -> Result<TrackedContribution, ContributionError> {
        self.inner
            .read()
            .await
            .records
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(ContributionError::NotFound)
    }

    /// Merge the supplied fields into the record.
    ///
    /// repository/type/status keep their prior value when the payload carries
    /// an empty string; title/url/notes overwrite whenever present. The empty
    /// string fallback is deliberate, recorded behavior of the update rule.
    pub async fn update(
        &self,
        id: u64,
        update: UpdateContributionRequest,
    ) -> Result<TrackedContribution, ContributionError> {
        let mut inner = self.inner.write().await;

        let record = inner
            .records
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ContributionError::NotFound)?;

        if let Some(repository) = update.repository.filter(|v| !v.is_empty()) {
            record.repository = repository;
        }
        if let Some(kind) = update.kind.filter(|v| !v.is_empty()) {
            record.kind = kind;
        }
        if let Some(status) = update.status.filter(|v| !v.is_empty()) {
            record.status = status;
        }
        if let Some(title) = update.title {
            record.title = title;
        }
        if let Some(url) = update.url {
            record.url = url;
        }
        if let Some(notes) = update.notes {
            record.notes = notes;
        }
        record.updated_at = Utc::now();

        Ok(record.clone())
    }

    pub async fn delete(&self, id: u64) -> Result<(), ContributionError> {
        let mut inner = self.inner.write().await;

        let index = inner
            .records
            .iter()
            .position(|c| c.id == id)
            .ok_or(ContributionError::NotFound)?;

        inner.records.remove(index);
        Ok(())
    }

    /// Summary over the records stored for `username`, computed fresh on each
    /// call
    pub async fn stats_for_user(&self, username: &str) -> UserContributionStats {
        let inner = self.inner.read().await;

        let mut by_type: Map<String, Value> = Map::new();
        let mut by_status: Map<String, Value> = Map::new();
        let mut user_records: Vec<TrackedContribution> = Vec::new();

        for record in inner.records.iter().filter(|c| c.username == username) {
            increment(&mut by_type, &record.kind);
            increment(&mut by_status, &record.status);
            user_records.push(record.clone());
        }

        let total = user_records.len();
        user_records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        user_records.truncate(RECENT_CONTRIBUTIONS);

        UserContributionStats {
            total,
            by_type,
            by_status,
            recent_contributions: user_records,
        }
    }
}

impl Default for ContributionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn increment(map: &mut Map<String, Value>, key: &str) {
    let entry = map.entry(key.to_string()).or_insert(Value::from(0u64));
    *entry = Value::from(entry.as_u64().unwrap_or(0) + 1);
}
