//! Engine configuration

/// Maximum age a token may reach before eviction from the buffer, in seconds
pub const DEFAULT_RETENTION: f64 = 1.2;

/// Maximum allowed gap between two consecutive combo steps, in seconds
pub const DEFAULT_MAX_DELTA: f64 = 0.45;

/// Grace period before confirming a match that a longer pattern extends
pub const DEFAULT_EXTENSION_WINDOW: f64 = 0.15;

/// Search strategy used by the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// Canonical mode: a candidate is eligible only if its last consumed
    /// token is the buffer's final element, so the match always represents
    /// the most recent input.
    #[default]
    EndAnchored,
    /// Fallback mode: candidates may end anywhere in the buffer; the
    /// longest one wins, ties keep the first discovered.
    Unanchored,
}

/// Host-supplied configuration, fixed for the engine's lifetime
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Buffer retention duration in seconds
    pub retention: f64,
    /// Default max gap between consecutive steps when an edge declares none
    pub default_max_delta: f64,
    /// Extension window duration in seconds
    pub extension_window: f64,
    /// Matcher search strategy
    pub strategy: MatchStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            retention: DEFAULT_RETENTION,
            default_max_delta: DEFAULT_MAX_DELTA,
            extension_window: DEFAULT_EXTENSION_WINDOW,
            strategy: MatchStrategy::EndAnchored,
        }
    }
}
