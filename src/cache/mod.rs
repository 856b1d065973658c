// Cache module for fetched GitHub data.
// Holds user profiles and repository lists in memory for the lifetime of the process.

pub mod key;
pub mod store;

pub use key::CacheKey;
pub use store::{CacheStore, CachedData};
