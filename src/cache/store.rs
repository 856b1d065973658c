// In-memory cache store for fetched users and repository lists.
// Entries live for the whole process; there is no expiry and no eviction.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::github::{RepositoryRecord, UserRecord};

use super::key::CacheKey;

/// Wrapper for cached data with metadata.
#[derive(Debug, Clone)]
pub struct CachedData<T> {
    /// The cached data.
    pub data: T,
    /// When the data was cached.
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    /// Create a new cached data entry stamped with the current time.
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }
}

/// Users and repository lists keyed by normalized username.
#[derive(Debug, Default)]
pub struct CacheStore {
    users: HashMap<CacheKey, CachedData<UserRecord>>,
    repos: HashMap<CacheKey, CachedData<Vec<RepositoryRecord>>>,
    /// User keys in first-insert order.
    user_order: Vec<CacheKey>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_user(&self, key: &CacheKey) -> Option<&UserRecord> {
        self.users.get(key).map(|entry| &entry.data)
    }

    /// Cached user together with its timestamp.
    pub fn get_user_entry(&self, key: &CacheKey) -> Option<&CachedData<UserRecord>> {
        self.users.get(key)
    }

    /// Store a user, replacing any previous entry. An overwrite keeps the key's position.
    pub fn put_user(&mut self, key: CacheKey, record: UserRecord) {
        if !self.users.contains_key(&key) {
            self.user_order.push(key.clone());
        }
        self.users.insert(key, CachedData::new(record));
    }

    pub fn get_repos(&self, key: &CacheKey) -> Option<&[RepositoryRecord]> {
        self.repos.get(key).map(|entry| entry.data.as_slice())
    }

    /// Store a repository list, replacing any previous entry.
    pub fn put_repos(&mut self, key: CacheKey, list: Vec<RepositoryRecord>) {
        self.repos.insert(key, CachedData::new(list));
    }

    /// Snapshot of cached users in insertion order.
    pub fn all_users(&self) -> Vec<&UserRecord> {
        self.user_order
            .iter()
            .filter_map(|key| self.get_user(key))
            .collect()
    }

    /// Keys of cached users in insertion order.
    pub fn user_keys(&self) -> impl Iterator<Item = &CacheKey> {
        self.user_order.iter()
    }

    /// Number of cached users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
