// Lookup module.
// Cache-first resolution of GitHub users and repositories behind a synchronous API.

pub mod service;
pub mod source;

#[cfg(test)]
pub(crate) mod testing;

pub use service::{Fetched, LookupService, Origin, RepositoryMatch};
pub use source::UserSource;
