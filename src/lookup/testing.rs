// Scripted source and record fixtures shared by unit tests.

use std::collections::{HashMap, VecDeque};

use reqwest::StatusCode;

use crate::error::{Error, Result};
use crate::github::{RepositoryRecord, UserRecord};

use super::source::UserSource;

/// Source that replays scripted responses and records every call.
/// Unscripted usernames answer with `Error::NotFound`.
#[derive(Default)]
pub struct ScriptedSource {
    users: HashMap<String, VecDeque<Result<UserRecord>>>,
    repos: HashMap<String, VecDeque<Result<Vec<RepositoryRecord>>>>,
    pub user_calls: Vec<String>,
    pub repo_calls: Vec<String>,
}

impl ScriptedSource {
    pub fn user(mut self, username: &str, result: Result<UserRecord>) -> Self {
        self.users
            .entry(username.to_string())
            .or_default()
            .push_back(result);
        self
    }

    pub fn repos(mut self, username: &str, result: Result<Vec<RepositoryRecord>>) -> Self {
        self.repos
            .entry(username.to_string())
            .or_default()
            .push_back(result);
        self
    }
}

impl UserSource for ScriptedSource {
    fn get_user(&mut self, username: &str) -> Result<UserRecord> {
        self.user_calls.push(username.to_string());
        self.users
            .get_mut(username)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(Error::NotFound(format!("/users/{}", username))))
    }

    fn get_user_repositories(&mut self, username: &str) -> Result<Vec<RepositoryRecord>> {
        self.repo_calls.push(username.to_string());
        self.repos
            .get_mut(username)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(Error::NotFound(format!("/users/{}/repos", username))))
    }
}

pub fn user(login: &str) -> UserRecord {
    UserRecord {
        login: login.to_string(),
        followers_count: 1,
        following_count: 2,
        created_at: "2015-05-05T00:00:00Z".to_string(),
        public_repo_count: 3,
    }
}

pub fn repo(name: &str) -> RepositoryRecord {
    RepositoryRecord {
        name: name.to_string(),
        description: Some(format!("{} description", name)),
        language: Some("Rust".to_string()),
        url: format!("https://github.com/someone/{}", name),
    }
}

pub fn server_error() -> Error {
    Error::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: "oops".to_string(),
    }
}
