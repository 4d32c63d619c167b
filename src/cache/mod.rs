//! Cache Module
//!
//! Provides in-memory caching with per-entry TTL and lazy eviction.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::AgedEntry;
pub use stats::CacheStats;
pub use store::AgedCache;
