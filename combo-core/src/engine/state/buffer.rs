//! Input retention buffer

use crate::engine::{TimedToken, Token};
use crate::error::{Error, Result};

/// Ordered, time-bounded queue of timed tokens, oldest-first
///
/// Invariant: immediately after any mutation, every stored entry satisfies
/// `now - entry.timestamp <= retention`. Eviction is always by elapsed time
/// relative to the caller-supplied "now", never by count.
#[derive(Debug, Clone)]
pub struct InputBuffer {
    entries: Vec<TimedToken>,
    retention: f64,
}

impl InputBuffer {
    /// Creates an empty buffer with the given retention duration in seconds
    pub fn new(retention: f64) -> Self {
        Self {
            entries: Vec::new(),
            retention,
        }
    }

    /// Appends a token, then evicts entries older than the retention window
    ///
    /// Rejects a timestamp earlier than the last stored one with
    /// [`Error::OutOfOrderInput`], leaving the buffer unchanged, so the
    /// buffer stays time-ordered at all times.
    pub fn push(&mut self, token: impl Into<Token>, timestamp: f64) -> Result<()> {
        let token = token.into();
        if let Some(last) = self.entries.last() {
            if timestamp < last.timestamp {
                return Err(Error::OutOfOrderInput {
                    token,
                    timestamp,
                    last: last.timestamp,
                });
            }
        }
        self.entries.push(TimedToken { token, timestamp });
        self.evict(timestamp);
        Ok(())
    }

    /// Evicts from the front all entries with `now - timestamp > retention`
    pub fn evict(&mut self, now: f64) {
        let stale = self
            .entries
            .iter()
            .take_while(|entry| now - entry.timestamp > self.retention)
            .count();
        if stale > 0 {
            self.entries.drain(..stale);
        }
    }

    /// Current contents, oldest-first
    pub fn as_slice(&self) -> &[TimedToken] {
        &self.entries
    }

    /// Returns an owned copy of the current contents; never mutates
    pub fn snapshot(&self) -> Vec<TimedToken> {
        self.entries.clone()
    }

    /// Timestamp of the newest entry
    pub fn last_timestamp(&self) -> Option<f64> {
        self.entries.last().map(|entry| entry.timestamp)
    }

    /// Number of buffered tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes the oldest `n` tokens, clamped to the buffer length
    pub fn consume_first(&mut self, n: usize) {
        let n = n.min(self.entries.len());
        self.entries.drain(..n);
    }

    /// Removes the newest `n` tokens, clamped to the buffer length
    pub fn consume_last(&mut self, n: usize) {
        let n = n.min(self.entries.len());
        let keep = self.entries.len() - n;
        self.entries.truncate(keep);
    }

    /// Removes a contiguous run of up to `len` tokens starting at `start`,
    /// clamped to the buffer bounds
    pub fn consume_range(&mut self, start: usize, len: usize) {
        let total = self.entries.len();
        if start >= total {
            return;
        }
        let end = start.saturating_add(len).min(total);
        self.entries.drain(start..end);
    }

    /// Empties the buffer
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The configured retention duration in seconds
    pub fn retention(&self) -> f64 {
        self.retention
    }
}
