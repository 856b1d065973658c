// Source of user and repository records for the lookup service.

use crate::error::Result;
use crate::github::{RepositoryRecord, UserRecord};

/// Fetches records by username, blocking until the result is available.
///
/// Implementations receive the username exactly as the caller typed it.
pub trait UserSource {
    fn get_user(&mut self, username: &str) -> Result<UserRecord>;

    fn get_user_repositories(&mut self, username: &str) -> Result<Vec<RepositoryRecord>>;
}
