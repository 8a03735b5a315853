//! Page Cache Port
//!
//! Rendered admin pages are cached by route path. Writes invalidate the
//! path so the next request renders fresh data.

/// Route of the chatbot settings page
pub const CHATBOTS_ADMIN_PATH: &str = "/admin/settings/chatbots";

/// Cache of rendered pages keyed by route path
pub trait PageCache: Send + Sync {
    /// Cached rendering for a path, if any
    fn get(&self, path: &str) -> Option<String>;

    /// Current invalidation generation. Read it before loading the data a
    /// rendering is built from.
    fn generation(&self) -> u64;

    /// Store a rendering built from data read at `generation`.
    /// Dropped when an invalidation happened since then.
    fn put(&self, path: &str, html: String, generation: u64);

    /// Drop any rendering for a path
    fn invalidate(&self, path: &str);
}
