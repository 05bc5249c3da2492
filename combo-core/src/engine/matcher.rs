//! Core sequence matching logic

use super::{MatchGraph, MatchStrategy, NodeId, TimedToken};

/// A terminal reached by a walk over the buffer
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Candidate<'g> {
    pub combo_id: &'g str,
    /// Terminal node, kept so the caller can check extendability
    pub node: NodeId,
    /// Start index of the matched run in the buffer snapshot
    pub start: usize,
    pub length: usize,
}

/// Finds the best candidate in the buffer snapshot
///
/// Walks are contiguous: once a walk has consumed its first token, every
/// subsequent buffer token must extend the match or the walk ends. Skipping
/// happens only through the choice of start index.
pub(crate) fn find_best<'g>(
    graph: &'g MatchGraph,
    buffer: &[TimedToken],
    default_max_delta: f64,
    strategy: MatchStrategy,
) -> Option<Candidate<'g>> {
    match strategy {
        MatchStrategy::EndAnchored => find_end_anchored(graph, buffer, default_max_delta),
        MatchStrategy::Unanchored => find_unanchored(graph, buffer, default_max_delta),
    }
}

/// Canonical strategy: the match must end on the buffer's final element.
///
/// Start indices are tried oldest-first; since every eligible candidate
/// ends at the same position, the first hit is the longest one.
fn find_end_anchored<'g>(
    graph: &'g MatchGraph,
    buffer: &[TimedToken],
    default_max_delta: f64,
) -> Option<Candidate<'g>> {
    let len = buffer.len();
    let start_min = len.saturating_sub(graph.max_pattern_len());

    for start in start_min..len {
        if let Some((node, combo_id)) = walk_to_end(graph, buffer, start, default_max_delta) {
            return Some(Candidate {
                combo_id,
                node,
                start,
                length: len - start,
            });
        }
    }

    None
}

/// Walks from the root consuming `buffer[start..]`; succeeds only if every
/// token is consumed and the final node is terminal
fn walk_to_end<'g>(
    graph: &'g MatchGraph,
    buffer: &[TimedToken],
    start: usize,
    default_max_delta: f64,
) -> Option<(NodeId, &'g str)> {
    let mut node = MatchGraph::ROOT;

    for pos in start..buffer.len() {
        let (target, max_delta) = graph.step(node, &buffer[pos].token)?;
        if pos > start {
            let delta = buffer[pos].timestamp - buffer[pos - 1].timestamp;
            if delta > max_delta.unwrap_or(default_max_delta) {
                return None;
            }
        }
        node = target;
    }

    graph.terminal(node).map(|combo_id| (node, combo_id))
}

/// Fallback strategy: candidates may end anywhere; longest wins, ties keep
/// the first discovered (smallest start index)
fn find_unanchored<'g>(
    graph: &'g MatchGraph,
    buffer: &[TimedToken],
    default_max_delta: f64,
) -> Option<Candidate<'g>> {
    let mut best: Option<Candidate<'g>> = None;

    for start in 0..buffer.len() {
        let mut node = MatchGraph::ROOT;
        for pos in start..buffer.len() {
            let Some((target, max_delta)) = graph.step(node, &buffer[pos].token) else {
                break;
            };
            if pos > start {
                let delta = buffer[pos].timestamp - buffer[pos - 1].timestamp;
                if delta > max_delta.unwrap_or(default_max_delta) {
                    break;
                }
            }
            node = target;

            if let Some(combo_id) = graph.terminal(node) {
                let length = pos - start + 1;
                if best.as_ref().map_or(true, |b| length > b.length) {
                    best = Some(Candidate {
                        combo_id,
                        node,
                        start,
                        length,
                    });
                }
            }
        }
    }

    best
}
