//! TTL cache for detected level sets
//!
//! Level detection runs over three months of bars; within one scan cycle the
//! result barely moves, so callers read through this cache and refresh on
//! miss. The cache is the only shared mutable state in the scanner.

use crate::models::levels::LevelSet;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct CacheEntry {
    levels: LevelSet,
    stored_at: Instant,
}

pub struct LevelCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl LevelCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fresh entry for `symbol`, or None on miss/staleness.
    pub fn get(&self, symbol: &str) -> Option<LevelSet> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let entry = entries.get(symbol)?;
        if entry.stored_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entry.levels.clone())
    }

    pub fn insert(&self, symbol: &str, levels: LevelSet) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            symbol.to_string(),
            CacheEntry {
                levels,
                stored_at: Instant::now(),
            },
        );
    }
}
