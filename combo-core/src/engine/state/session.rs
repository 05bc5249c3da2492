//! Cross-tick matcher state
//!
//! The matcher is a pure function of (snapshot, graph, now) except for the
//! extension window, which needs to remember the previous evaluation's
//! withheld candidate. That state lives here, per engine, so independent
//! engines (one per player) never interfere and tests can drive ticks
//! deterministically.

/// A candidate found but withheld while the extension window is open
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCandidate {
    pub combo_id: String,
    pub length: usize,
    /// Evaluation time at which the candidate was first found
    pub discovered_at: f64,
}

/// Mutable matcher state carried across evaluations
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pending: Option<PendingCandidate>,
}

impl SessionState {
    /// Creates a fresh session with no pending candidate
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently withheld candidate, if any
    pub fn pending(&self) -> Option<&PendingCandidate> {
        self.pending.as_ref()
    }

    /// Records a withheld candidate
    pub fn set_pending(&mut self, pending: PendingCandidate) {
        self.pending = Some(pending);
    }

    /// Drops any withheld candidate
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }
}
