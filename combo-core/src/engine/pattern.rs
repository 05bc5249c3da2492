//! Combo pattern declarations

use super::Token;

/// A named ordered sequence of tokens with optional per-step timing limits
///
/// Immutable after declaration. Many patterns may share prefixes; the
/// [`MatchGraph`] collapses those into shared paths.
///
/// [`MatchGraph`]: super::MatchGraph
#[derive(Debug, Clone, PartialEq)]
pub struct ComboPattern {
    /// Identifier reported when this pattern matches
    pub id: String,
    /// The token sequence, in input order
    pub sequence: Vec<Token>,
    /// Per-step max-delta overrides; either empty or one entry per step.
    /// Entry `i` bounds the gap before token `i`; entry 0 is never
    /// consulted since the first consumed token of a walk is unconstrained.
    pub step_max_delta: Vec<Option<f64>>,
}

impl ComboPattern {
    /// Creates a pattern with no timing overrides
    pub fn new<I, T>(id: impl Into<String>, sequence: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        Self {
            id: id.into(),
            sequence: sequence.into_iter().map(Into::into).collect(),
            step_max_delta: Vec::new(),
        }
    }

    /// Sets a max-delta override for the gap before step `index`
    ///
    /// Allocates the override list on first use.
    pub fn with_step_delta(mut self, index: usize, max_delta: f64) -> Self {
        if self.step_max_delta.is_empty() {
            self.step_max_delta = vec![None; self.sequence.len()];
        }
        if index < self.step_max_delta.len() {
            self.step_max_delta[index] = Some(max_delta);
        }
        self
    }

    /// Number of steps in the sequence
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Checks if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
