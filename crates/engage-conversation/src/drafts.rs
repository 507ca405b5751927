//! In-memory comment draft cache.
//!
//! Avoids redundant round-trips for draft text keyed by a client-local id
//! during a single session. MVP semantics: drafts shorter than the minimum
//! are stored as the empty string, which keeps "seen but too short" distinct
//! from "never seen". No eviction, no bound, process lifetime only.

use std::collections::HashMap;

use engage_config::DEFAULT_COMMENT_MIN_LENGTH;

pub struct DraftCache {
    min_len: usize,
    entries: HashMap<String, String>,
}

impl DraftCache {
    pub fn new(min_len: usize) -> Self {
        Self {
            min_len,
            entries: HashMap::new(),
        }
    }

    /// Store `text` under `id`, or an empty string when it is too short to
    /// bother caching.
    pub fn update(&mut self, id: impl Into<String>, text: &str) {
        let stored = if text.chars().count() >= self.min_len {
            text.to_string()
        } else {
            String::new()
        };
        self.entries.insert(id.into(), stored);
    }

    pub fn remove(&mut self, id: &str) {
        self.entries.remove(id);
    }

    /// The cached draft, or an empty string when nothing is cached.
    pub fn text(&self, id: &str) -> &str {
        self.entries.get(id).map(String::as_str).unwrap_or("")
    }

    /// Whether `id` has ever been cached, including as "too short".
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }
}

impl Default for DraftCache {
    fn default() -> Self {
        Self::new(DEFAULT_COMMENT_MIN_LENGTH)
    }
}
