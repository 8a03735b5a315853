//! Rendered page cache
//!
//! In-process implementation of the PageCache port.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use chatbots::PageCache;

/// Rendered pages keyed by route path
pub struct RenderCache {
    pages: DashMap<String, String>,
    /// Bumped by every invalidation, on any path
    generation: AtomicU64,
    enabled: bool,
}

impl RenderCache {
    pub fn new() -> Self {
        Self {
            pages: DashMap::new(),
            generation: AtomicU64::new(0),
            enabled: true,
        }
    }

    /// A cache that never stores anything
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCache for RenderCache {
    fn get(&self, path: &str) -> Option<String> {
        self.pages.get(path).map(|entry| entry.value().clone())
    }

    fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn put(&self, path: &str, html: String, generation: u64) {
        if !self.enabled {
            return;
        }

        // checked under the shard lock: a racing invalidate bumps the
        // generation before it removes
        let entry = self.pages.entry(path.to_string());
        if self.generation() == generation {
            entry.insert(html);
        } else {
            tracing::debug!("Discarded stale rendering of {}", path);
        }
    }

    fn invalidate(&self, path: &str) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if self.pages.remove(path).is_some() {
            tracing::debug!("Invalidated cached page {}", path);
        }
    }
}
