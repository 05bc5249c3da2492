//! Match graph construction
//!
//! The pattern library is compiled once into a rooted trie stored as an
//! arena of nodes addressed by index. Shared prefixes collapse to shared
//! paths. The graph is immutable after build and safe to share read-only
//! across matcher sessions.

use std::collections::HashMap;

use super::{ComboPattern, Token};
use crate::error::{Error, Result};

/// Index of a node in the graph arena
pub type NodeId = usize;

/// A token-labeled transition to a child node
#[derive(Debug, Clone)]
struct MatchEdge {
    target: NodeId,
    /// Max gap allowed before the target step; `None` falls back to the
    /// engine's default at evaluation time
    max_delta: Option<f64>,
}

/// One node of partial-sequence progress
#[derive(Debug, Clone, Default)]
struct MatchNode {
    edges: HashMap<Token, MatchEdge>,
    /// Combo id, for nodes completing exactly one declared pattern
    terminal: Option<String>,
}

/// Trie over the declared pattern library
#[derive(Debug, Clone)]
pub struct MatchGraph {
    nodes: Vec<MatchNode>,
    max_pattern_len: usize,
}

impl MatchGraph {
    /// The root node, representing zero consumed tokens
    pub const ROOT: NodeId = 0;

    /// Builds the graph from a pattern library
    ///
    /// Fails if a pattern is empty, declares a mismatched number of step
    /// overrides, or repeats a sequence another pattern already claimed.
    /// When two patterns share a prefix edge, the first declaration's
    /// timing override wins.
    pub fn build(patterns: &[ComboPattern]) -> Result<Self> {
        let mut graph = Self {
            nodes: vec![MatchNode::default()],
            max_pattern_len: 0,
        };

        for pattern in patterns {
            graph.insert(pattern)?;
        }

        Ok(graph)
    }

    fn insert(&mut self, pattern: &ComboPattern) -> Result<()> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern(pattern.id.clone()));
        }
        if !pattern.step_max_delta.is_empty() && pattern.step_max_delta.len() != pattern.len() {
            return Err(Error::StepOverrideMismatch {
                id: pattern.id.clone(),
                steps: pattern.len(),
                overrides: pattern.step_max_delta.len(),
            });
        }

        let mut node = Self::ROOT;
        for (step, token) in pattern.sequence.iter().enumerate() {
            let existing = self.nodes[node].edges.get(token).map(|edge| edge.target);
            node = match existing {
                Some(target) => target,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(MatchNode::default());
                    let max_delta = pattern.step_max_delta.get(step).copied().flatten();
                    self.nodes[node]
                        .edges
                        .insert(token.clone(), MatchEdge { target: child, max_delta });
                    child
                }
            };
        }

        if let Some(existing) = &self.nodes[node].terminal {
            return Err(Error::DuplicatePattern {
                existing: existing.clone(),
                duplicate: pattern.id.clone(),
            });
        }
        self.nodes[node].terminal = Some(pattern.id.clone());
        self.max_pattern_len = self.max_pattern_len.max(pattern.len());

        Ok(())
    }

    /// Follows the edge labeled `token` out of `from`, if one exists
    ///
    /// Returns the child node and the max gap allowed before it (`None`
    /// meaning the engine default applies).
    pub fn step(&self, from: NodeId, token: &Token) -> Option<(NodeId, Option<f64>)> {
        self.nodes[from]
            .edges
            .get(token)
            .map(|edge| (edge.target, edge.max_delta))
    }

    /// Combo id completed at `node`, if it is terminal
    pub fn terminal(&self, node: NodeId) -> Option<&str> {
        self.nodes[node].terminal.as_deref()
    }

    /// Checks whether `node` has outgoing edges, i.e. whether the sequence
    /// reaching it is a strict prefix of a longer declared pattern
    pub fn is_extendable(&self, node: NodeId) -> bool {
        !self.nodes[node].edges.is_empty()
    }

    /// Length of the longest declared pattern
    pub fn max_pattern_len(&self) -> usize {
        self.max_pattern_len
    }

    /// Total node count, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
