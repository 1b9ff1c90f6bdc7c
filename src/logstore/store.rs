use super::entry::LogEntry;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

struct Inner {
    entries: VecDeque<LogEntry>,
    next_sequence: u64,
}

/// Append-only, capacity-bounded in-memory log.
///
/// Appenders include the tracing capture layer, whose callbacks are
/// synchronous, so this uses a sync `Mutex` rather than the async locks
/// used elsewhere. Critical sections are short and never await.
pub struct LogStore {
    capacity: usize,
    inner: Mutex<Inner>,
}

impl LogStore {
    /// Create a store retaining at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            // A zero capacity would drop every entry on arrival
            capacity: capacity.max(1),
            inner: Mutex::new(Inner {
                entries: VecDeque::new(),
                next_sequence: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Recover the guard even if an appender panicked mid-call; entries
        // are only ever pushed whole, so the data stays consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a log line, evicting the oldest entry first when full.
    ///
    /// Returns the sequence number assigned to the new entry.
    pub fn append(&self, category: impl Into<String>, message: impl Into<String>) -> u64 {
        let mut inner = self.lock();

        while inner.entries.len() >= self.capacity {
            inner.entries.pop_front();
        }

        let sequence = inner.next_sequence;
        inner.next_sequence += 1;

        inner.entries.push_back(LogEntry {
            sequence,
            timestamp: Utc::now(),
            category: category.into(),
            message: message.into(),
        });

        sequence
    }

    /// Read entries in insertion order.
    ///
    /// `filter`, when present, restricts the result to entries whose
    /// category or message contains it as a case-insensitive substring.
    /// `skip`/`take` window the filtered result; an out-of-range `skip`
    /// yields an empty vec and `take` past the end returns what is left.
    pub fn query(&self, skip: usize, take: usize, filter: Option<&str>) -> Vec<LogEntry> {
        let filter = filter.map(str::to_lowercase);
        let inner = self.lock();

        inner
            .entries
            .iter()
            .filter(|entry| filter.as_deref().map_or(true, |f| entry_matches(entry, f)))
            .skip(skip)
            .take(take)
            .cloned()
            .collect()
    }

    /// Same as [`query`](Self::query), rendered as newline-joined text for
    /// the logs endpoint.
    pub fn query_text(&self, skip: usize, take: usize, filter: Option<&str>) -> String {
        self.query(skip, take, filter)
            .iter()
            .map(|entry| entry.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of entries currently retained
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Configured retention bound
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

// `filter` must already be lowercased
fn entry_matches(entry: &LogEntry, filter: &str) -> bool {
    entry.category.to_lowercase().contains(filter)
        || entry.message.to_lowercase().contains(filter)
}
