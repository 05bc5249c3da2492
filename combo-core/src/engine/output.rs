//! Output representation for the combo engine

use super::TimedToken;

/// Result of a confirmed match, produced fresh per evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Id of the matched combo pattern
    pub combo_id: String,
    /// Start index of the matched run in the buffer at evaluation time
    pub start: usize,
    /// Number of tokens the match consumed
    pub length: usize,
    /// The consumed tokens, in input order
    pub consumed: Vec<TimedToken>,
    /// Evaluation time at which this candidate was first found; earlier
    /// than the confirmation time when the match sat in the extension
    /// window. Exposed so a host can apply a cooldown policy.
    pub discovered_at: f64,
}
