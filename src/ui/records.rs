// Rendering for user profiles and repository lists.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use crossterm::style::Stylize;

use crate::github::{RepositoryRecord, UserRecord};
use crate::lookup::RepositoryMatch;

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Write the profile block for a user.
pub fn write_user(out: &mut impl Write, user: &UserRecord) -> io::Result<()> {
    let lines = [
        format!(" Username: {}", user.login),
        format!(" Followers: {}", user.followers_count),
        format!(" Following: {}", user.following_count),
        format!(" Account Created: {}", user.created_at),
        format!(" Public Repositories: {}", user.public_repo_count),
    ];
    for line in lines {
        writeln!(out, "{}", line.cyan())?;
    }
    Ok(())
}

/// Write one line per repository, with its description underneath when present.
pub fn write_repositories(out: &mut impl Write, repos: &[RepositoryRecord]) -> io::Result<()> {
    for repo in repos {
        let language = repo.language.as_deref().unwrap_or("-");
        writeln!(
            out,
            "{}",
            format!("  {} [{}] {}", repo.name, language, repo.url).cyan()
        )?;
        if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(out, "{}", format!("      {}", description).dark_grey())?;
        }
    }
    Ok(())
}

/// Write repository search hits as `owner/name - url`.
pub fn write_matches(out: &mut impl Write, matches: &[RepositoryMatch<'_>]) -> io::Result<()> {
    for m in matches {
        writeln!(
            out,
            "{}",
            format!(" {}/{} - {}", m.owner, m.repository.name, m.repository.url).cyan()
        )?;
    }
    Ok(())
}
