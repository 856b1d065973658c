// GitHub API module.
// Provides the async client, a blocking adapter, and record types for the REST API.

pub mod blocking;
pub mod client;
pub mod endpoints;
pub mod types;

pub use blocking::BlockingGitHub;
pub use client::GitHubClient;
pub use types::*;
