//! QueryCache - the client's local view of server data, keyed by query.
//!
//! Clone-friendly via Arc; every clone sees the same entries. The lock is
//! held only inside each method, never across an await.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use portfolio_types::{Profile, Project};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Profile,
    Projects,
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Profile => f.write_str("profile"),
            QueryKey::Projects => f.write_str("projects"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryData {
    Profile(Profile),
    Projects(Vec<Project>),
}

impl QueryData {
    pub fn key(&self) -> QueryKey {
        match self {
            QueryData::Profile(_) => QueryKey::Profile,
            QueryData::Projects(_) => QueryKey::Projects,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub data: QueryData,
    /// Set by `invalidate`; cleared by the next `set`.
    pub stale: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct QueryCache {
    entries: Arc<RwLock<HashMap<QueryKey, CacheEntry>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<QueryKey, CacheEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<QueryKey, CacheEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: QueryKey) -> Option<QueryData> {
        self.read().get(&key).map(|entry| entry.data.clone())
    }

    pub fn profile(&self) -> Option<Profile> {
        match self.get(QueryKey::Profile)? {
            QueryData::Profile(profile) => Some(profile),
            QueryData::Projects(_) => None,
        }
    }

    pub fn projects(&self) -> Option<Vec<Project>> {
        match self.get(QueryKey::Projects)? {
            QueryData::Projects(projects) => Some(projects),
            QueryData::Profile(_) => None,
        }
    }

    /// Point-in-time copy of the whole entry for `key`, staleness included.
    /// `None` means nothing was cached.
    pub fn snapshot(&self, key: QueryKey) -> Option<CacheEntry> {
        self.read().get(&key).cloned()
    }

    /// Stores `data` under its own key as a fresh entry.
    pub fn set(&self, data: QueryData) {
        let key = data.key();
        self.write().insert(
            key,
            CacheEntry {
                data,
                stale: false,
                updated_at: Utc::now(),
            },
        );
        debug!("cache set {key}");
    }

    /// Puts `key` back exactly as `snapshot` recorded it, removing the entry
    /// if nothing was cached when the snapshot was taken.
    pub fn restore(&self, key: QueryKey, snapshot: Option<CacheEntry>) {
        let mut entries = self.write();
        match snapshot {
            Some(entry) => {
                entries.insert(key, entry);
            }
            None => {
                entries.remove(&key);
            }
        }
        debug!("cache restored {key}");
    }

    /// Marks `key` stale, keeping its data readable. Returns whether an
    /// entry existed.
    pub fn invalidate(&self, key: QueryKey) -> bool {
        match self.write().get_mut(&key) {
            Some(entry) => {
                entry.stale = true;
                true
            }
            None => false,
        }
    }

    pub fn is_stale(&self, key: QueryKey) -> bool {
        self.read().get(&key).map(|e| e.stale).unwrap_or(false)
    }
}
