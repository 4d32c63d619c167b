//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with per-entry TTL.

use crate::clock::Clock;

// == Aged Entry ==
/// Represents a single cache entry with its key, value and expiry instant.
#[derive(Debug, Clone)]
pub struct AgedEntry {
    /// The entry key
    pub key: String,
    /// The stored value
    pub value: String,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl AgedEntry {
    // == Constructor ==
    /// Creates a new entry whose expiry is fixed at creation time.
    ///
    /// # Arguments
    /// * `key` - The entry key
    /// * `value` - The value to store
    /// * `retention_ms` - Lifetime in milliseconds from now
    /// * `clock` - Time source used to stamp the expiry
    pub fn new(key: String, value: String, retention_ms: u64, clock: &dyn Clock) -> Self {
        Self {
            key,
            value,
            expires_at: clock.now_millis() + retention_ms,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired against the given clock.
    ///
    /// Boundary condition: an entry is expired only when the current time
    /// is strictly greater than the expiration time, so it is still live
    /// at the exact millisecond its retention elapses.
    pub fn is_expired(&self, clock: &dyn Clock) -> bool {
        clock.now_millis() > self.expires_at
    }

    // == Refresh ==
    /// Overwrites the value and restamps the expiry from the current
    /// clock reading. Used on upsert of an existing key.
    pub fn refresh(&mut self, value: String, retention_ms: u64, clock: &dyn Clock) {
        self.value = value;
        self.expires_at = clock.now_millis() + retention_ms;
    }

    // == Time To Live ==
    /// Returns the remaining lifetime in milliseconds, saturating at 0
    /// once the entry has expired. Useful for debugging and diagnostics.
    pub fn ttl_remaining_ms(&self, clock: &dyn Clock) -> u64 {
        self.expires_at.saturating_sub(clock.now_millis())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn test_entry_creation_stamps_expiry() {
        let clock = ManualClock::new(1_000);
        let entry = AgedEntry::new("k".to_string(), "v".to_string(), 250, &clock);

        assert_eq!(entry.key, "k");
        assert_eq!(entry.value, "v");
        assert_eq!(entry.expires_at, 1_250);
        assert!(!entry.is_expired(&clock));
    }

    #[test]
    fn test_entry_live_at_exact_expiry_instant() {
        let clock = ManualClock::new(0);
        let entry = AgedEntry::new("k".to_string(), "v".to_string(), 100, &clock);

        clock.set(100);
        assert!(!entry.is_expired(&clock));

        clock.set(101);
        assert!(entry.is_expired(&clock));
    }

    #[test]
    fn test_entry_expiry_fixed_at_creation() {
        let clock = ManualClock::new(500);
        let entry = AgedEntry::new("k".to_string(), "v".to_string(), 100, &clock);

        // Advancing the clock must not move the stamped expiry.
        clock.advance(1_000);
        assert_eq!(entry.expires_at, 600);
    }

    #[test]
    fn test_refresh_updates_value_and_expiry() {
        let clock = ManualClock::new(0);
        let mut entry = AgedEntry::new("k".to_string(), "v1".to_string(), 100, &clock);

        clock.set(80);
        entry.refresh("v2".to_string(), 100, &clock);

        assert_eq!(entry.value, "v2");
        assert_eq!(entry.expires_at, 180);
        assert_eq!(entry.key, "k");
    }

    #[test]
    fn test_ttl_remaining_counts_down() {
        let clock = ManualClock::new(0);
        let entry = AgedEntry::new("k".to_string(), "v".to_string(), 100, &clock);

        assert_eq!(entry.ttl_remaining_ms(&clock), 100);
        clock.advance(60);
        assert_eq!(entry.ttl_remaining_ms(&clock), 40);
    }

    #[test]
    fn test_ttl_remaining_saturates_when_expired() {
        let clock = ManualClock::new(0);
        let entry = AgedEntry::new("k".to_string(), "v".to_string(), 100, &clock);

        clock.advance(5_000);
        assert_eq!(entry.ttl_remaining_ms(&clock), 0);
    }
}
