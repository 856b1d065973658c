// GitHub API response types.
// Defines the user and repository records decoded from the REST API.

use serde::{Deserialize, Serialize};

/// GitHub user profile from `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Login as returned by the API (original casing).
    pub login: String,
    #[serde(rename = "followers")]
    pub followers_count: u64,
    #[serde(rename = "following")]
    pub following_count: u64,
    /// Account creation time, kept verbatim.
    pub created_at: String,
    #[serde(rename = "public_repos")]
    pub public_repo_count: u64,
}

/// Repository from `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "html_url")]
    pub url: String,
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}
