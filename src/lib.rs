// ghfetch: fetch GitHub user profiles and repositories, cache them in memory,
// and browse the cache from a text menu.

pub mod app;
pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod lookup;
pub mod ui;

pub use error::{Error, Result};
