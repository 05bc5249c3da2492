pub mod error;
pub mod engine;

// Re-export commonly used types
pub use engine::{
    ComboEngine, ComboPattern, EngineConfig, InputBuffer, MatchGraph, MatchResult,
    MatchStrategy, PendingCandidate, TimedToken, Token,
};
pub use error::{Error, Result};
