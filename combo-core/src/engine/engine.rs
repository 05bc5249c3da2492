use super::state::{InputBuffer, PendingCandidate, SessionState};
use super::{matcher, ComboPattern, EngineConfig, MatchGraph, MatchResult, Result, Token};

/// The combo recognition engine
///
/// Owns the input buffer and the cross-tick session state; the match graph
/// is built once at construction and read-only thereafter. Driven by a
/// host-supplied tick loop: each tick the host pushes zero or more tokens,
/// calls [`evaluate`], and acts on the result. Nothing here blocks; the
/// extension window is realized by returning no match until enough time has
/// elapsed between ticks.
///
/// [`evaluate`]: ComboEngine::evaluate
pub struct ComboEngine {
    config: EngineConfig,
    graph: MatchGraph,
    buffer: InputBuffer,
    session: SessionState,
}

impl ComboEngine {
    /// Creates an engine over a pattern library
    ///
    /// Fails with a configuration error if the library declares an empty
    /// pattern, a duplicate sequence, or mismatched step overrides.
    pub fn new(config: EngineConfig, patterns: &[ComboPattern]) -> Result<Self> {
        let graph = MatchGraph::build(patterns)?;
        let buffer = InputBuffer::new(config.retention);
        Ok(Self {
            config,
            graph,
            buffer,
            session: SessionState::new(),
        })
    }

    /// Appends an input token at the given timestamp
    ///
    /// Evicts stale entries as a side effect. Rejects out-of-order
    /// timestamps without touching buffer state.
    pub fn push_token(&mut self, token: impl Into<Token>, timestamp: f64) -> Result<()> {
        self.buffer.push(token, timestamp)
    }

    /// Runs one matcher evaluation at time `now`
    ///
    /// Evicts stale buffer entries, searches for the best candidate, and
    /// applies extension-window arbitration: a candidate whose terminal
    /// node can still be extended into a longer pattern is withheld until
    /// the window has elapsed since the newest buffered token. The search
    /// is re-run in full on every call, so a withheld candidate is
    /// replaced the moment new input changes the best match.
    ///
    /// A confirmed match is returned but not consumed; the host decides
    /// how to consume (see [`consume_match`], [`consume_last`], [`clear`]).
    ///
    /// [`consume_match`]: ComboEngine::consume_match
    /// [`consume_last`]: ComboEngine::consume_last
    /// [`clear`]: ComboEngine::clear
    pub fn evaluate(&mut self, now: f64) -> Option<MatchResult> {
        self.buffer.evict(now);
        let snapshot = self.buffer.as_slice();

        let candidate = match matcher::find_best(
            &self.graph,
            snapshot,
            self.config.default_max_delta,
            self.config.strategy,
        ) {
            Some(candidate) => candidate,
            None => {
                self.session.clear_pending();
                return None;
            }
        };

        // Keep the discovery time stable while the same candidate waits out
        // the extension window
        let discovered_at = match self.session.pending() {
            Some(p) if p.combo_id == candidate.combo_id && p.length == candidate.length => {
                p.discovered_at
            }
            _ => now,
        };

        let newest = snapshot.last().map(|t| t.timestamp).unwrap_or(now);
        if self.graph.is_extendable(candidate.node)
            && now - newest < self.config.extension_window
        {
            self.session.set_pending(PendingCandidate {
                combo_id: candidate.combo_id.to_string(),
                length: candidate.length,
                discovered_at,
            });
            return None;
        }

        self.session.clear_pending();
        Some(MatchResult {
            combo_id: candidate.combo_id.to_string(),
            start: candidate.start,
            length: candidate.length,
            consumed: snapshot[candidate.start..candidate.start + candidate.length].to_vec(),
            discovered_at,
        })
    }

    /// Removes exactly the tokens a confirmed match consumed
    pub fn consume_match(&mut self, result: &MatchResult) {
        self.buffer.consume_range(result.start, result.length);
        self.session.clear_pending();
    }

    /// Removes the newest `n` tokens, clamped to the buffer length
    pub fn consume_last(&mut self, n: usize) {
        self.buffer.consume_last(n);
        self.session.clear_pending();
    }

    /// Removes the oldest `n` tokens, clamped to the buffer length
    pub fn consume_first(&mut self, n: usize) {
        self.buffer.consume_first(n);
        self.session.clear_pending();
    }

    /// Empties the buffer and cancels any pending candidate
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.session.clear_pending();
    }

    /// The input buffer
    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    /// The withheld candidate, if an extension window is open
    pub fn pending(&self) -> Option<&PendingCandidate> {
        self.session.pending()
    }

    /// The compiled match graph
    pub fn graph(&self) -> &MatchGraph {
        &self.graph
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
