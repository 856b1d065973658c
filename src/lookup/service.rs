// Lookup service.
// Serves users and repositories from the cache, falling back to the source on a miss.

use tracing::{debug, info, warn};

use crate::cache::{CacheKey, CacheStore, CachedData};
use crate::error::{Error, Result};
use crate::github::{RepositoryRecord, UserRecord};

use super::source::UserSource;

/// Where a fetched value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cache,
    Network,
}

/// A resolved value and its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Fetched<T> {
    pub fn is_cache_hit(&self) -> bool {
        self.origin == Origin::Cache
    }
}

/// A repository found by name search, with the cache key of its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryMatch<'a> {
    pub owner: &'a CacheKey,
    pub repository: &'a RepositoryRecord,
}

/// Cache-first resolution of users and their repositories.
pub struct LookupService<S> {
    source: S,
    cache: CacheStore,
}

impl<S: UserSource> LookupService<S> {
    /// Create a service with an empty cache.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: CacheStore::new(),
        }
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve a user profile, fetching and caching it on a miss.
    ///
    /// A failed fetch leaves the cache untouched, so the next call retries.
    /// The source receives the username with surrounding whitespace trimmed
    /// but its casing unchanged.
    pub fn fetch_user(&mut self, username: &str) -> Result<Fetched<UserRecord>> {
        let username = validate_username(username)?;
        let key = CacheKey::new(username);

        if let Some(user) = self.cache.get_user(&key) {
            debug!(%key, "user cache hit");
            return Ok(Fetched {
                value: user.clone(),
                origin: Origin::Cache,
            });
        }

        debug!(%key, "user cache miss");
        let user = self.source.get_user(username).inspect_err(|e| {
            warn!(%key, error = %e, "failed to fetch user");
        })?;
        info!(%key, login = %user.login, "user fetched and cached");
        self.cache.put_user(key, user.clone());

        Ok(Fetched {
            value: user,
            origin: Origin::Network,
        })
    }

    /// Resolve a user's repository list, fetching and caching it on a miss.
    pub fn fetch_user_repositories(
        &mut self,
        username: &str,
    ) -> Result<Fetched<Vec<RepositoryRecord>>> {
        let username = validate_username(username)?;
        let key = CacheKey::new(username);

        if let Some(repos) = self.cache.get_repos(&key) {
            debug!(%key, "repositories cache hit");
            return Ok(Fetched {
                value: repos.to_vec(),
                origin: Origin::Cache,
            });
        }

        debug!(%key, "repositories cache miss");
        let repos = self
            .source
            .get_user_repositories(username)
            .inspect_err(|e| {
                warn!(%key, error = %e, "failed to fetch repositories");
            })?;
        info!(%key, count = repos.len(), "repositories fetched and cached");
        self.cache.put_repos(key, repos.clone());

        Ok(Fetched {
            value: repos,
            origin: Origin::Network,
        })
    }

    /// Cache-only user lookup.
    pub fn search_cached_user(&self, username: &str) -> Result<Option<&UserRecord>> {
        Ok(self.cached_user_entry(username)?.map(|entry| &entry.data))
    }

    /// Cache-only user lookup including when the entry was cached.
    pub fn cached_user_entry(&self, username: &str) -> Result<Option<&CachedData<UserRecord>>> {
        let key = CacheKey::new(validate_username(username)?);
        Ok(self.cache.get_user_entry(&key))
    }

    /// Cache-only repository list lookup.
    pub fn cached_repositories(&self, username: &str) -> Result<Option<&[RepositoryRecord]>> {
        let key = CacheKey::new(validate_username(username)?);
        Ok(self.cache.get_repos(&key))
    }

    /// All cached users in the order they were first cached.
    pub fn cached_users(&self) -> Vec<&UserRecord> {
        self.cache.all_users()
    }

    /// Case-insensitive substring search over every cached user's repositories.
    ///
    /// Users are visited in cache order and each list in its stored order.
    pub fn search_repositories_by_name(&self, substring: &str) -> Vec<RepositoryMatch<'_>> {
        let needle = substring.to_lowercase();

        self.cache
            .user_keys()
            .flat_map(|owner| {
                self.cache
                    .get_repos(owner)
                    .unwrap_or_default()
                    .iter()
                    .map(move |repository| RepositoryMatch { owner, repository })
            })
            .filter(|m| m.repository.name.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Reject usernames that cannot form a single URL path segment.
/// `.` and `..` are dot segments and would be collapsed out of the request path.
fn validate_username(username: &str) -> Result<&str> {
    let trimmed = username.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains('/')
        || trimmed.chars().any(char::is_whitespace)
    {
        return Err(Error::InvalidUsername(username.to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::testing::{ScriptedSource, repo, server_error, user};

    #[test]
    fn test_fetch_user_is_idempotent() {
        let source = ScriptedSource::default().user("Alice", Ok(user("alice")));
        let mut service = LookupService::new(source);

        let first = service.fetch_user("Alice").unwrap();
        let second = service.fetch_user("Alice").unwrap();

        assert_eq!(first.origin, Origin::Network);
        assert_eq!(second.origin, Origin::Cache);
        assert!(second.is_cache_hit());
        assert_eq!(first.value, second.value);
        assert_eq!(service.source().user_calls, vec!["Alice"]);
    }

    #[test]
    fn test_fetch_user_case_insensitive() {
        let source = ScriptedSource::default().user("Alice", Ok(user("alice")));
        let mut service = LookupService::new(source);

        service.fetch_user("Alice").unwrap();
        let again = service.fetch_user("ALICE").unwrap();

        assert!(again.is_cache_hit());
        assert_eq!(service.source().user_calls.len(), 1);
        assert_eq!(service.cache().len(), 1);
        let keys: Vec<_> = service.cache().user_keys().map(CacheKey::as_str).collect();
        assert_eq!(keys, vec!["alice"]);
    }

    #[test]
    fn test_source_receives_original_username() {
        let source = ScriptedSource::default()
            .user("MixedCase", Ok(user("MixedCase")))
            .repos("MixedCase", Ok(vec![]));
        let mut service = LookupService::new(source);

        service.fetch_user("MixedCase").unwrap();
        service.fetch_user_repositories("  MixedCase ").unwrap();

        assert_eq!(service.source().user_calls, vec!["MixedCase"]);
        assert_eq!(service.source().repo_calls, vec!["MixedCase"]);
    }

    #[test]
    fn test_failure_does_not_cache_and_retries() {
        let source = ScriptedSource::default()
            .user("dave", Err(server_error()))
            .user("dave", Ok(user("dave")));
        let mut service = LookupService::new(source);

        let err = service.fetch_user("dave").unwrap_err();
        assert!(err.is_transport());
        assert!(service.search_cached_user("dave").unwrap().is_none());

        let fetched = service.fetch_user("dave").unwrap();
        assert_eq!(fetched.origin, Origin::Network);
        assert_eq!(service.source().user_calls.len(), 2);
    }

    #[test]
    fn test_repo_failure_independent_of_user() {
        let source = ScriptedSource::default()
            .user("bob", Ok(user("bob")))
            .repos("bob", Err(server_error()));
        let mut service = LookupService::new(source);

        assert!(service.fetch_user_repositories("bob").is_err());
        let fetched = service.fetch_user("bob").unwrap();

        assert_eq!(fetched.value.login, "bob");
        assert!(service.cached_repositories("bob").unwrap().is_none());
    }

    #[test]
    fn test_user_failure_independent_of_repos() {
        let source = ScriptedSource::default()
            .user("bob", Err(server_error()))
            .repos("bob", Ok(vec![repo("tools")]));
        let mut service = LookupService::new(source);

        assert!(service.fetch_user("bob").is_err());
        let fetched = service.fetch_user_repositories("bob").unwrap();

        assert_eq!(fetched.value, vec![repo("tools")]);
        assert!(service.search_cached_user("bob").unwrap().is_none());
        assert_eq!(
            service.cached_repositories("BOB").unwrap(),
            Some(&[repo("tools")][..])
        );
    }

    #[test]
    fn test_repositories_served_from_cache() {
        let source = ScriptedSource::default().repos("erin", Ok(vec![repo("a"), repo("b")]));
        let mut service = LookupService::new(source);

        let first = service.fetch_user_repositories("erin").unwrap();
        let second = service.fetch_user_repositories("Erin").unwrap();

        assert_eq!(first.origin, Origin::Network);
        assert_eq!(second.origin, Origin::Cache);
        assert_eq!(first.value, second.value);
        assert_eq!(service.source().repo_calls.len(), 1);
    }

    #[test]
    fn test_invalid_username_never_reaches_source() {
        let mut service = LookupService::new(ScriptedSource::default());

        for bad in ["", "   ", "a/b", "two words", ".", "..", " .. "] {
            assert!(matches!(
                service.fetch_user(bad),
                Err(Error::InvalidUsername(_))
            ));
            assert!(matches!(
                service.fetch_user_repositories(bad),
                Err(Error::InvalidUsername(_))
            ));
            assert!(matches!(
                service.search_cached_user(bad),
                Err(Error::InvalidUsername(_))
            ));
        }
        assert!(service.source().user_calls.is_empty());
        assert!(service.source().repo_calls.is_empty());
    }

    #[test]
    fn test_search_cached_user_without_fetch_is_absent() {
        let source = ScriptedSource::default()
            .user("alice", Ok(user("alice")))
            .repos("carol", Ok(vec![repo("x")]));
        let mut service = LookupService::new(source);

        service.fetch_user("alice").unwrap();
        service.fetch_user_repositories("carol").unwrap();
        let _ = service.fetch_user("zed");
        let _ = service.search_repositories_by_name("x");

        assert!(service.search_cached_user("carol").unwrap().is_none());
    }

    #[test]
    fn test_search_repositories_by_name() {
        let source = ScriptedSource::default()
            .user("ann", Ok(user("ann")))
            .repos("ann", Ok(vec![repo("alpha-lib"), repo("Beta")]))
            .user("ben", Ok(user("ben")))
            .repos("ben", Ok(vec![repo("gamma-Alpha")]));
        let mut service = LookupService::new(source);

        for name in ["ann", "ben"] {
            service.fetch_user(name).unwrap();
            service.fetch_user_repositories(name).unwrap();
        }

        let found = service.search_repositories_by_name("alpha");
        let names: Vec<_> = found
            .iter()
            .map(|m| (m.owner.as_str(), m.repository.name.as_str()))
            .collect();
        assert_eq!(names, vec![("ann", "alpha-lib"), ("ben", "gamma-Alpha")]);

        let upper = service.search_repositories_by_name("ALPHA");
        assert_eq!(upper, found);
    }

    #[test]
    fn test_search_repositories_empty_cache() {
        let source = ScriptedSource::default().user("ann", Ok(user("ann")));
        let mut service = LookupService::new(source);

        assert!(service.search_repositories_by_name("x").is_empty());

        service.fetch_user("ann").unwrap();
        assert!(service.search_repositories_by_name("x").is_empty());
    }

    #[test]
    fn test_empty_substring_matches_everything() {
        let source = ScriptedSource::default()
            .user("ann", Ok(user("ann")))
            .repos("ann", Ok(vec![repo("one"), repo("two")]));
        let mut service = LookupService::new(source);
        service.fetch_user("ann").unwrap();
        service.fetch_user_repositories("ann").unwrap();

        assert_eq!(service.search_repositories_by_name("").len(), 2);
    }

    #[test]
    fn test_end_to_end_torvalds() {
        let torvalds = UserRecord {
            login: "torvalds".to_string(),
            followers_count: 100000,
            following_count: 5,
            created_at: "2011-09-03".to_string(),
            public_repo_count: 10,
        };
        let source = ScriptedSource::default().user("torvalds", Ok(torvalds.clone()));
        let mut service = LookupService::new(source);

        let fetched = service.fetch_user("torvalds").unwrap();
        assert_eq!(fetched.value, torvalds);
        assert_eq!(service.search_cached_user("TORVALDS").unwrap(), Some(&torvalds));
        assert_eq!(service.cached_users(), vec![&torvalds]);
    }
}
