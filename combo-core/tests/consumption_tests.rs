mod common;

use combo_core::TimedToken;
use common::*;
use pretty_assertions::assert_eq;

#[test]
fn test_match_consumes_exactly_its_tokens() {
    let mut engine = engine(&[pattern("RLP", &["Right", "LP"])]);
    push_all(
        &mut engine,
        &[("Down", 0.0), ("Down", 0.1), ("Right", 0.2), ("LP", 0.3)],
    );

    let before = engine.buffer().len();
    let result = engine.evaluate(0.3).unwrap();
    engine.consume_match(&result);

    assert_eq!(engine.buffer().len(), before - result.length);
    assert_eq!(
        engine.buffer().snapshot(),
        vec![TimedToken::new("Down", 0.0), TimedToken::new("Down", 0.1)]
    );
}

#[test]
fn test_consume_last_clamps_at_zero() {
    let mut engine = engine(&[pattern("AB", &["A", "B"])]);
    push_all(&mut engine, &[("A", 0.0)]);

    engine.consume_last(10);
    assert!(engine.buffer().is_empty());
}

#[test]
fn test_full_clear_is_separate_from_precise_consumption() {
    let mut engine = engine(&[pattern("RLP", &["Right", "LP"])]);
    push_all(
        &mut engine,
        &[("Down", 0.0), ("Right", 0.1), ("LP", 0.2)],
    );

    let result = engine.evaluate(0.2).unwrap();

    // Precise consumption leaves the unmatched prefix in place
    engine.consume_match(&result);
    assert_eq!(
        engine.buffer().snapshot(),
        vec![TimedToken::new("Down", 0.0)]
    );

    // A caller-requested full clear is an explicit additional step
    engine.clear();
    assert!(engine.buffer().is_empty());
}

#[test]
fn test_consume_first_removes_oldest_run() {
    let mut engine = engine(&[pattern("AB", &["A", "B"])]);
    push_all(&mut engine, &[("X", 0.0), ("A", 0.1), ("B", 0.2)]);

    engine.consume_first(1);
    assert_eq!(
        engine.buffer().snapshot(),
        vec![TimedToken::new("A", 0.1), TimedToken::new("B", 0.2)]
    );
}
