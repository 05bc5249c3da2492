//! Timed input traces
//!
//! A trace is the host side of the engine contract flattened into text:
//! one `<timestamp> <token>` pair per line, `#` comments, timestamps in
//! seconds. Replaying a trace drives one evaluation per event, then one
//! final evaluation after the extension window to flush a pending match.

use combo_core::{ComboEngine, MatchResult};

use crate::error::ScriptError;

/// One input event of a trace
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEvent {
    pub timestamp: f64,
    pub token: String,
}

/// A confirmed match together with the tick that confirmed it
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayMatch {
    pub confirmed_at: f64,
    pub result: MatchResult,
}

/// Consumer-level replay policy, applied outside the core engine
#[derive(Debug, Clone, Default)]
pub struct ReplayOptions {
    /// Minimum time between two confirmed matches; matches confirmed
    /// earlier are reported by the engine but skipped by the replay
    pub cooldown: Option<f64>,
    /// Clear the whole buffer after each confirmed match, in addition to
    /// precise consumption
    pub clear_on_match: bool,
}

/// Parses trace text
pub fn parse_trace(source: &str) -> Result<Vec<TraceEvent>, ScriptError> {
    let mut events = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let (Some(time), Some(token), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ScriptError::Parse {
                line: index + 1,
                message: format!("Expected '<timestamp> <token>', got '{}'", line),
            });
        };
        let timestamp = time.parse::<f64>().map_err(|_| ScriptError::Parse {
            line: index + 1,
            message: format!("Invalid timestamp: '{}'", time),
        })?;

        events.push(TraceEvent {
            timestamp,
            token: token.to_string(),
        });
    }

    Ok(events)
}

/// Replays events through an engine, returning the confirmed matches
///
/// Out-of-order events are dropped with a warning to stderr; the buffer is
/// never corrupted. On each confirmed match the matched tokens are consumed
/// precisely, then [`ReplayOptions::clear_on_match`] may clear the rest.
pub fn replay(
    engine: &mut ComboEngine,
    events: &[TraceEvent],
    options: &ReplayOptions,
) -> Vec<ReplayMatch> {
    let mut matches = Vec::new();
    let mut last_time = 0.0_f64;

    for event in events {
        if let Err(err) = engine.push_token(event.token.as_str(), event.timestamp) {
            eprintln!("warning: dropped input: {}", err);
            continue;
        }
        last_time = last_time.max(event.timestamp);
        confirm(engine, event.timestamp, options, &mut matches);
    }

    // Flush a candidate still waiting out the extension window
    if engine.pending().is_some() {
        let flush_at = last_time + engine.config().extension_window;
        confirm(engine, flush_at, options, &mut matches);
    }

    matches
}

fn confirm(
    engine: &mut ComboEngine,
    now: f64,
    options: &ReplayOptions,
    matches: &mut Vec<ReplayMatch>,
) {
    let Some(result) = engine.evaluate(now) else {
        return;
    };

    if let Some(cooldown) = options.cooldown {
        if let Some(last) = matches.last() {
            if now - last.confirmed_at < cooldown {
                return;
            }
        }
    }

    engine.consume_match(&result);
    if options.clear_on_match {
        engine.clear();
    }
    matches.push(ReplayMatch {
        confirmed_at: now,
        result,
    });
}
