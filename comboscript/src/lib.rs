pub mod error;
pub mod lexer;
pub mod parser;
pub mod trace;

pub use combo_core::{
    ComboEngine, ComboPattern, EngineConfig, MatchGraph, MatchResult, MatchStrategy,
};
pub use error::ScriptError;

use std::fs::read_to_string;
use std::path::Path;

/// A compiled combo library: engine configuration plus pattern declarations
#[derive(Debug, Clone)]
pub struct ComboScript {
    pub config: EngineConfig,
    pub patterns: Vec<ComboPattern>,
}

impl ComboScript {
    /// Builds an engine over this library
    pub fn into_engine(self) -> Result<ComboEngine, ScriptError> {
        Ok(ComboEngine::new(self.config, &self.patterns)?)
    }
}

/// Compiles combo script source text
///
/// The pattern library is validated by building a match graph once, so a
/// script that compiles is guaranteed to construct an engine.
pub fn compile_script(source: &str) -> Result<ComboScript, ScriptError> {
    let mut parser = parser::Parser::new(source);
    let script = parser.parse()?;

    // Surface duplicate/empty-pattern errors at compile time
    MatchGraph::build(&script.patterns)?;

    Ok(script)
}

/// Compiles a combo script file
pub fn compile_script_file(path: &Path) -> Result<ComboScript, ScriptError> {
    let source = read_to_string(path)?;
    compile_script(&source)
}
