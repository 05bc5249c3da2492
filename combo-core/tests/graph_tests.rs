mod common;

use combo_core::{ComboPattern, Error, MatchGraph, Token};
use common::pattern;
use pretty_assertions::assert_eq;

#[test]
fn test_shared_prefixes_collapse_to_shared_paths() {
    let patterns = [pattern("ABC", &["A", "B", "C"]), pattern("ABD", &["A", "B", "D"])];
    let graph = MatchGraph::build(&patterns).unwrap();

    // root + A + B + C + D
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.max_pattern_len(), 3);
}

#[test]
fn test_walk_reaches_terminal() {
    let patterns = [pattern("RLP", &["Right", "LP"])];
    let graph = MatchGraph::build(&patterns).unwrap();

    let (node, _) = graph.step(MatchGraph::ROOT, &Token::new("Right")).unwrap();
    assert_eq!(graph.terminal(node), None);

    let (node, _) = graph.step(node, &Token::new("LP")).unwrap();
    assert_eq!(graph.terminal(node), Some("RLP"));
    assert!(!graph.is_extendable(node));
}

#[test]
fn test_short_pattern_terminal_is_extendable_by_longer() {
    let patterns = [
        pattern("Short", &["A", "B"]),
        pattern("Long", &["A", "B", "C"]),
    ];
    let graph = MatchGraph::build(&patterns).unwrap();

    let (node, _) = graph.step(MatchGraph::ROOT, &Token::new("A")).unwrap();
    let (node, _) = graph.step(node, &Token::new("B")).unwrap();
    assert_eq!(graph.terminal(node), Some("Short"));
    assert!(graph.is_extendable(node));
}

#[test]
fn test_duplicate_sequence_is_rejected() {
    let patterns = [
        pattern("First", &["A", "B"]),
        pattern("Second", &["A", "B"]),
    ];
    let err = MatchGraph::build(&patterns).unwrap_err();
    match err {
        Error::DuplicatePattern { existing, duplicate } => {
            assert_eq!(existing, "First");
            assert_eq!(duplicate, "Second");
        }
        other => panic!("expected DuplicatePattern, got {:?}", other),
    }
}

#[test]
fn test_same_id_on_different_sequences_is_allowed() {
    // Alternate motions for the same move
    let patterns = [
        pattern("Fireball", &["Down", "Right", "LP"]),
        pattern("Fireball", &["Down", "Right", "HP"]),
    ];
    assert!(MatchGraph::build(&patterns).is_ok());
}

#[test]
fn test_empty_pattern_is_rejected() {
    let patterns = [pattern("Empty", &[])];
    let err = MatchGraph::build(&patterns).unwrap_err();
    assert!(matches!(err, Error::EmptyPattern(id) if id == "Empty"));
}

#[test]
fn test_step_override_length_mismatch_is_rejected() {
    let patterns = [ComboPattern {
        id: "Bad".to_string(),
        sequence: vec![Token::new("A"), Token::new("B")],
        step_max_delta: vec![Some(0.3)],
    }];
    let err = MatchGraph::build(&patterns).unwrap_err();
    match err {
        Error::StepOverrideMismatch { id, steps, overrides } => {
            assert_eq!(id, "Bad");
            assert_eq!(steps, 2);
            assert_eq!(overrides, 1);
        }
        other => panic!("expected StepOverrideMismatch, got {:?}", other),
    }
}

#[test]
fn test_edge_override_comes_from_pattern_declaration() {
    let patterns = [pattern("AB", &["A", "B"]).with_step_delta(1, 0.2)];
    let graph = MatchGraph::build(&patterns).unwrap();

    let (node, delta) = graph.step(MatchGraph::ROOT, &Token::new("A")).unwrap();
    assert_eq!(delta, None);
    let (_, delta) = graph.step(node, &Token::new("B")).unwrap();
    assert_eq!(delta, Some(0.2));
}

#[test]
fn test_first_declared_override_wins_on_shared_edge() {
    let patterns = [
        pattern("Tight", &["A", "B"]).with_step_delta(1, 0.1),
        pattern("Loose", &["A", "B", "C"]),
    ];
    let graph = MatchGraph::build(&patterns).unwrap();

    let (node, _) = graph.step(MatchGraph::ROOT, &Token::new("A")).unwrap();
    let (_, delta) = graph.step(node, &Token::new("B")).unwrap();
    assert_eq!(delta, Some(0.1));
}

#[test]
fn test_empty_library_builds_root_only() {
    let graph = MatchGraph::build(&[]).unwrap();
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.max_pattern_len(), 0);
    assert!(!graph.is_extendable(MatchGraph::ROOT));
}
