//! Locally generated identifiers for client-side list entries.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generate a unique time-based token for a list entry.
///
/// The millisecond timestamp keeps ids roughly sortable; the process-wide
/// counter keeps them unique even for entries created in the same
/// millisecond.
pub fn fresh_id() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), seq)
}
