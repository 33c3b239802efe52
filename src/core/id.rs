//! Slide id generation
//!
//! SHA-256 over (process counter, wall clock), truncated to 12 hex chars.
//! The counter makes ids unique within a process; the clock spreads them
//! across runs.

use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Hex characters kept from the digest
pub const SLIDE_ID_LEN: usize = 12;

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Next slide id
pub fn next_slide_id() -> String {
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(seq.to_le_bytes());
    hasher.update(nanos.to_le_bytes());
    let digest: [u8; 32] = hasher.finalize().into();

    digest
        .iter()
        .take(SLIDE_ID_LEN / 2)
        .map(|b| format!("{:02x}", b))
        .collect()
}
