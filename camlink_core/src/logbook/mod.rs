use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use log::info;

/// One ordered, immutable text record of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub sequence: u64,
    pub text: String,
}

struct Inner {
    entries: Vec<LogEntry>,
    next_sequence: u64,
    max_entries: Option<usize>,
}

impl Inner {
    fn push(&mut self, text: String) {
        self.entries.push(LogEntry {
            sequence: self.next_sequence,
            text,
        });
        self.next_sequence += 1;
        if let Some(cap) = self.max_entries {
            // Oldest-first eviction; the cap bounds memory, sequence
            // numbers keep counting.
            while self.entries.len() > cap {
                self.entries.remove(0);
            }
        }
    }
}

/// An append-only, in-memory event log.
///
/// Cloning yields another handle to the same log; appends from
/// concurrent callers are mutually excluded, so sequence numbers and
/// insertion order always agree.
#[derive(Clone)]
pub struct LogBook {
    inner: Arc<Mutex<Inner>>,
}

impl Default for LogBook {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBook {
    /// A new log seeded with its header line.
    pub fn new() -> Self {
        let book = Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: Vec::new(),
                next_sequence: 0,
                max_entries: None,
            })),
        };
        book.append("Log output:");
        book
    }

    /// A new log that keeps at most `cap` entries, evicting oldest-first.
    pub fn with_max_entries(cap: usize) -> Self {
        let book = Self::new();
        book.inner.lock().unwrap().max_entries = Some(cap);
        book
    }

    /// Append a message with the next sequence number. Never fails.
    pub fn append(&self, message: &str) {
        self.inner.lock().unwrap().push(message.to_string());
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries concatenated in sequence order, one per line.
    /// Idempotent; does not mutate state.
    pub fn contents(&self) -> String {
        let inner = self.inner.lock().unwrap();
        let lines: Vec<&str> = inner.entries.iter().map(|e| e.text.as_str()).collect();
        lines.join("\n")
    }

    /// Snapshot of the entries for inspection.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.inner.lock().unwrap().entries.clone()
    }

    /// Write the current contents to `path`. The write captures the log
    /// at call time; later appends do not affect it.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let snapshot = self.contents();
        fs::write(path, snapshot)?;
        info!("Log saved to {}", path.display());
        Ok(())
    }
}
