use combo_core::{ComboEngine, ComboPattern, EngineConfig};

/// Creates a pattern with no timing overrides
#[allow(dead_code)]
pub fn pattern(id: &str, sequence: &[&str]) -> ComboPattern {
    ComboPattern::new(id, sequence.iter().copied())
}

/// Creates an engine with the default configuration
#[allow(dead_code)]
pub fn engine(patterns: &[ComboPattern]) -> ComboEngine {
    ComboEngine::new(EngineConfig::default(), patterns).unwrap()
}

/// Creates an engine with a custom configuration
#[allow(dead_code)]
pub fn engine_with(config: EngineConfig, patterns: &[ComboPattern]) -> ComboEngine {
    ComboEngine::new(config, patterns).unwrap()
}

/// Pushes a sequence of (token, timestamp) events
#[allow(dead_code)]
pub fn push_all(engine: &mut ComboEngine, events: &[(&str, f64)]) {
    for (token, timestamp) in events {
        engine.push_token(*token, *timestamp).unwrap();
    }
}
