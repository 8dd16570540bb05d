//! Navigation history collaborator.
//!
//! The router only ever calls `push`, `replace` and (at startup) `current`.
//! Browser hosts implement [`History`] over the session history API;
//! [`MemoryHistory`] serves tests, the CLI and headless hosts.

use serde::{Deserialize, Serialize};

/// How a navigation affects the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Append a new entry.
    #[default]
    Push,
    /// Overwrite the current entry.
    Replace,
    /// Resolve the current location without recording it.
    Initial,
}

/// A transient navigation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: String,
    pub mode: NavigationMode,
}

impl NavigationRequest {
    pub fn push(path: impl Into<String>) -> Self {
        Self { path: path.into(), mode: NavigationMode::Push }
    }

    pub fn replace(path: impl Into<String>) -> Self {
        Self { path: path.into(), mode: NavigationMode::Replace }
    }

    pub fn initial(path: impl Into<String>) -> Self {
        Self { path: path.into(), mode: NavigationMode::Initial }
    }
}

/// External history stack.
pub trait History {
    fn push(&mut self, path: &str);
    fn replace(&mut self, path: &str);
    fn current(&self) -> String;
}

/// In-memory history: a stack of entries and a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    /// Start with a single entry at `location`.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            entries: vec![location.into()],
            index: 0,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move back one entry. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Move forward one entry. Returns false at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn push(&mut self, path: &str) {
        // Pushing discards any forward entries.
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        self.index += 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.index] = path.to_string();
    }

    fn current(&self) -> String {
        self.entries[self.index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_replace() {
        let mut h = MemoryHistory::default();
        h.push("/login");
        assert_eq!(h.current(), "/login");
        h.replace("/register");
        assert_eq!(h.entries(), &["/".to_string(), "/register".to_string()]);
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut h = MemoryHistory::new("/");
        h.push("/a");
        h.push("/b");
        assert!(h.back());
        assert!(h.back());
        assert!(!h.back());
        h.push("/c");
        assert_eq!(h.entries(), &["/".to_string(), "/c".to_string()]);
        assert!(!h.forward());
    }

    #[test]
    fn test_mode_deserializes_lowercase() {
        let mode: NavigationMode = serde_json::from_str("\"replace\"").unwrap();
        assert_eq!(mode, NavigationMode::Replace);
    }
}
