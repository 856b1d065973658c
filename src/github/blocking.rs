// Blocking adapter over the async client.
// Drives each request to completion on a private current-thread runtime.

use tokio::runtime::{Builder, Runtime};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::lookup::UserSource;

use super::client::GitHubClient;
use super::types::{RateLimit, RepositoryRecord, UserRecord};

/// Synchronous GitHub source for the lookup service.
pub struct BlockingGitHub {
    client: GitHubClient,
    runtime: Runtime,
}

impl BlockingGitHub {
    /// Build the client and its runtime from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Runtime(e.to_string()))?;
        let client = GitHubClient::new(config)?;
        Ok(Self { client, runtime })
    }

    /// Rate limit as of the last response.
    pub fn rate_limit(&self) -> &RateLimit {
        self.client.rate_limit()
    }
}

impl UserSource for BlockingGitHub {
    fn get_user(&mut self, username: &str) -> Result<UserRecord> {
        self.runtime.block_on(self.client.get_user(username))
    }

    fn get_user_repositories(&mut self, username: &str) -> Result<Vec<RepositoryRecord>> {
        self.runtime.block_on(self.client.get_user_repos(username))
    }
}
