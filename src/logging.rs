//! Runtime diagnostics.
//!
//! Every message goes to `tracing`. When enabled, a [`DebugLog`] additionally
//! keeps the most recent entries in a bounded ring so a running application
//! (or a test) can inspect what the runtime complained about.

use std::collections::VecDeque;
use std::fmt;

/// Default number of entries a [`DebugLog`] retains.
pub const DEFAULT_LOG_CAPACITY: usize = 256;

/// Severity of a logged entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        })
    }
}

/// One retained message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub level: Level,
    pub message: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// Bounded ring of recent diagnostics, owned by the runtime.
#[derive(Debug, Clone)]
pub struct DebugLog {
    entries: VecDeque<Entry>,
    capacity: usize,
    enabled: bool,
}

impl DebugLog {
    /// A log retaining up to `capacity` entries while `enabled`.
    pub fn new(capacity: usize, enabled: bool) -> Self {
        Self { entries: VecDeque::with_capacity(capacity.min(64)), capacity, enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{message}");
        self.record(Level::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.record(Level::Warn, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{message}");
        self.record(Level::Error, message);
    }

    fn record(&mut self, level: Level, message: String) {
        if !self.enabled || self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Entry { level, message });
    }

    /// Retained entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.level == Level::Warn)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.level == Level::Error)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY, false)
    }
}
