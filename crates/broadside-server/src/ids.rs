//! Ship id allocation for connecting participants.
//!
//! Ids are drawn from a process-wide monotonic counter seeded from the
//! wall clock at startup, so they never collide with each other or with
//! the low-numbered AI fleet.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use broadside_core::types::ShipId;

static NEXT_SHIP_ID: OnceLock<AtomicU64> = OnceLock::new();

/// Allocate a fresh ship id, unique for the process lifetime.
pub fn allocate_ship_id() -> ShipId {
    let counter = NEXT_SHIP_ID.get_or_init(|| {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        // Keep well clear of the reserved AI id range.
        AtomicU64::new(seed | 0x1000)
    });
    ShipId(counter.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::allocate_ship_id;

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let a = allocate_ship_id();
        let b = allocate_ship_id();
        assert!(b.0 > a.0);
        assert!(a.0 >= 0x1000);
    }
}
