//! Combo recognition engine
//!
//! This module provides the engine for recognizing timed token sequences
//! against a declared combo pattern library.

mod config;
mod engine;
mod graph;
mod input;
mod matcher;
mod output;
mod pattern;
mod state;

pub use config::{EngineConfig, MatchStrategy};
pub use engine::ComboEngine;
pub use graph::{MatchGraph, NodeId};
pub use input::{TimedToken, Token};
pub use output::MatchResult;
pub use pattern::ComboPattern;
pub use state::{InputBuffer, PendingCandidate, SessionState};

// Re-export error types
pub use crate::error::{Error, Result};
