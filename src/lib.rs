//! Aged Cache - An in-memory key-value cache with per-entry TTL
//!
//! Every entry carries its own retention and is lazily evicted when a
//! read or size query touches the cache; there is no background sweep.
//! Time is abstracted behind an injectable [`Clock`] so expiry can be
//! tested deterministically.
//!
//! # Example
//! ```
//! use aged_cache::AgedCache;
//!
//! let cache = AgedCache::new();
//! cache.put("session:42", "alice", 60_000).unwrap();
//! assert_eq!(cache.get("session:42"), Some("alice".to_string()));
//! ```

pub mod cache;
pub mod clock;
pub mod error;

pub use cache::{AgedCache, AgedEntry, CacheStats};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CacheError, Result};
