// GitHub API endpoint functions.
// Provides typed methods for the user and repository endpoints.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{RepositoryRecord, UserRecord};

impl GitHubClient {
    /// Get a user's public profile.
    pub async fn get_user(&mut self, username: &str) -> Result<UserRecord> {
        let response = self.get(&["users", username]).await?;
        let bytes = response.bytes().await?;
        let user: UserRecord = serde_json::from_slice(&bytes)?;
        Ok(user)
    }

    /// Get a user's public repositories (first page, API default ordering).
    pub async fn get_user_repos(&mut self, username: &str) -> Result<Vec<RepositoryRecord>> {
        let response = self.get(&["users", username, "repos"]).await?;
        let bytes = response.bytes().await?;
        let repos: Vec<RepositoryRecord> = serde_json::from_slice(&bytes)?;
        Ok(repos)
    }
}
