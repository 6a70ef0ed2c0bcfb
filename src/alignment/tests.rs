use super::diagnostics::{AlignmentEvent, CollectedDiagnostics, NoDiagnostics};
use super::matcher::{count_matches, TokenMatcher};
use crate::config::MatchConfig;
use crate::types::Direction;

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn align_collect(
    truth: &[&str],
    pred: &[&str],
) -> (crate::AlignmentOutcome, CollectedDiagnostics) {
    let mut sink = CollectedDiagnostics::new();
    let outcome = TokenMatcher::default().align(&tokens(truth), &tokens(pred), &mut sink);
    (outcome, sink)
}

fn resync_shifts(sink: &CollectedDiagnostics) -> Vec<(Direction, isize)> {
    sink.events
        .iter()
        .filter_map(|event| match event {
            AlignmentEvent::Resynchronized {
                direction, shift, ..
            } => Some((*direction, *shift)),
            _ => None,
        })
        .collect()
}

#[test]
fn identical_sequences_match_fully() {
    let words = ["The", "cat", "sat", "."];
    let (outcome, sink) = align_collect(&words, &words);
    assert_eq!(outcome.matches, 4);
    assert_eq!(outcome.offset, 0);
    assert!(outcome.is_full_match());
    assert!(!outcome.exhausted);
    assert!(sink.events.is_empty());
}

#[test]
fn identity_holds_for_longer_sequences() {
    let words: Vec<String> = (0..200).map(|n| format!("w{}", n % 7)).collect();
    let mut sink = CollectedDiagnostics::new();
    let outcome = TokenMatcher::default().align(&words, &words, &mut sink);
    assert_eq!(outcome.matches, words.len());
    assert_eq!(outcome.offset, 0);
    assert!(sink.events.is_empty());
}

#[test]
fn empty_truth_yields_zero_matches() {
    let (outcome, sink) = align_collect(&[], &["a"]);
    assert_eq!(outcome.matches, 0);
    assert!(outcome.is_full_match());
    assert!(sink.events.is_empty());
}

#[test]
fn punctuation_truth_token_counts_without_moving_offset() {
    let (outcome, sink) =
        align_collect(&["The", "cat", ".", "sat"], &["The", "cat", "dog", "sat"]);
    assert_eq!(outcome.matches, 4);
    assert_eq!(outcome.offset, 0);
    assert!(sink
        .events
        .contains(&AlignmentEvent::PunctuationSkipped { truth_index: 2 }));
}

#[test]
fn punctuation_truth_token_matches_regardless_of_prediction() {
    let (outcome, _) = align_collect(&["…", "«"], &["totally", "different"]);
    assert_eq!(outcome.matches, 2);
    assert_eq!(outcome.offset, 0);
}

#[test]
fn inserted_prediction_token_shifts_offset_forward() {
    let (outcome, sink) = align_collect(&["A", "B", "C", "D"], &["A", "X", "B", "C", "D"]);
    assert_eq!(outcome.matches, 4);
    assert_eq!(outcome.offset, 1);
    assert_eq!(resync_shifts(&sink), vec![(Direction::Forward, 1)]);
}

#[test]
fn missing_prediction_token_shifts_offset_backward() {
    // Prediction merged "B" away: truth C at i=2 is found one step back.
    let (outcome, sink) = align_collect(&["A", "B", "C", "D"], &["A", "C", "D"]);
    assert_eq!(resync_shifts(&sink), vec![(Direction::Backward, -1)]);
    assert_eq!(outcome.offset, -1);
    // "B" is unresolved, C and D re-synchronize.
    assert_eq!(outcome.matches, 3);
    assert_eq!(outcome.missing(), 1);
    assert_eq!(sink.unresolved().count(), 1);
}

#[test]
fn recovers_from_insertion_within_window() {
    let truth: Vec<&str> = vec!["a", "b", "c", "d", "e", "f", "g", "h"];
    for inserted in 1..=8 {
        let mut pred = vec!["a"];
        pred.extend(std::iter::repeat("junk").take(inserted));
        pred.extend(&truth[1..]);
        let (outcome, _) = align_collect(&truth, &pred);
        assert_eq!(outcome.matches, truth.len(), "inserted={inserted}");
        assert_eq!(outcome.offset, inserted as isize, "inserted={inserted}");
    }
}

#[test]
fn drift_beyond_window_leaves_token_unmatched() {
    let mut pred = vec!["a"];
    pred.extend(std::iter::repeat("junk").take(10));
    pred.push("b");
    let (outcome, sink) = align_collect(&["a", "b"], &pred);
    assert_eq!(outcome.matches, 1);
    assert_eq!(outcome.offset, 0);
    assert!(outcome.missing() >= 1);
    let unresolved: Vec<_> = sink.unresolved().collect();
    assert_eq!(
        unresolved,
        vec![&AlignmentEvent::Unresolved {
            truth_index: 1,
            predicted_index: 1,
            truth: "b".to_string(),
            predicted: "junk".to_string(),
        }]
    );
}

#[test]
fn unresolved_mismatch_keeps_offset_for_next_token() {
    let (outcome, _) = align_collect(&["a", "zzz", "c"], &["a", "yyy", "c"]);
    assert_eq!(outcome.matches, 2);
    assert_eq!(outcome.offset, 0);
}

#[test]
fn stops_when_prediction_is_exhausted() {
    let (outcome, sink) = align_collect(&["A", "B"], &["A"]);
    assert_eq!(outcome.matches, 1);
    assert_eq!(outcome.missing(), 1);
    assert!(outcome.exhausted);
    assert_eq!(
        sink.events,
        vec![AlignmentEvent::PredictionExhausted {
            truth_index: 1,
            predicted_len: 1,
        }]
    );
}

#[test]
fn shorter_matching_prediction_consumes_all_predictions() {
    let truth = tokens(&["a", "b", "c", "d", "e"]);
    let pred = tokens(&["a", "b", "c"]);
    assert_eq!(count_matches(&truth, &pred), pred.len());
}

#[test]
fn empty_prediction_matches_nothing() {
    let (outcome, _) = align_collect(&["a", "b"], &[]);
    assert_eq!(outcome.matches, 0);
    assert!(outcome.exhausted);
}

#[test]
fn nearer_forward_shift_beats_farther_backward_shift() {
    // i=0: "q" found at +1. i=1: candidate 2 holds "x"; "b" is at +1 and -2.
    let (outcome, sink) = align_collect(&["q", "b"], &["b", "q", "x", "b"]);
    assert_eq!(
        resync_shifts(&sink),
        vec![(Direction::Forward, 1), (Direction::Forward, 1)]
    );
    assert_eq!(outcome.offset, 2);
    assert_eq!(outcome.matches, 2);
}

#[test]
fn tie_between_directions_resolves_forward() {
    // Candidate for "b" is index 2; "b" sits at 1 and 3.
    let (outcome, sink) = align_collect(&["x", "y", "b"], &["x", "b", "z", "b"]);
    assert_eq!(resync_shifts(&sink), vec![(Direction::Forward, 1)]);
    assert_eq!(outcome.offset, 1);
    assert_eq!(outcome.matches, 2);
}

#[test]
fn smaller_backward_shift_beats_larger_forward_shift() {
    // Candidate for "b" is index 3; backward match at 2 (-1), forward at 6 (+3).
    let (outcome, sink) = align_collect(
        &["a", "c", "d", "b"],
        &["a", "c", "b", "q", "r", "s", "b"],
    );
    assert_eq!(resync_shifts(&sink), vec![(Direction::Backward, -1)]);
    assert_eq!(outcome.offset, -1);
    assert_eq!(outcome.matches, 3);
}

#[test]
fn oscillating_shifts_can_reuse_a_prediction_index() {
    // The backward shift re-reads pred[1], which an earlier truth token already
    // matched; both truth tokens are counted.
    let (outcome, sink) = align_collect(&["a", "b", "b"], &["a", "b", "x"]);
    assert_eq!(resync_shifts(&sink), vec![(Direction::Backward, -1)]);
    assert_eq!(outcome.offset, -1);
    assert_eq!(outcome.matches, 3);
}

#[test]
fn custom_window_size_narrows_search() {
    let config = MatchConfig {
        window_size: 2,
        ..MatchConfig::default()
    };
    let matcher = TokenMatcher::new(&config);
    let truth = tokens(&["a", "b"]);

    let near = tokens(&["a", "x", "b"]);
    assert_eq!(matcher.align(&truth, &near, &mut NoDiagnostics).matches, 2);

    let far = tokens(&["a", "x", "y", "b"]);
    assert_eq!(matcher.align(&truth, &far, &mut NoDiagnostics).matches, 1);
}

#[test]
fn custom_punctuation_changes_comparison() {
    let config = MatchConfig {
        punctuation: ".".to_string(),
        ..MatchConfig::default()
    };
    let matcher = TokenMatcher::new(&config);
    let truth = tokens(&["(a)", "b."]);
    let pred = tokens(&["a", "b"]);
    let outcome = matcher.align(&truth, &pred, &mut NoDiagnostics);
    assert_eq!(outcome.matches, 1);
}

#[test]
fn matches_never_exceed_truth_length() {
    let truth = tokens(&[".", ",", "a", "b", "c"]);
    let pred = tokens(&["a", "b", "c", "a", "b", "c", "a"]);
    let outcome = TokenMatcher::default().align(&truth, &pred, &mut NoDiagnostics);
    assert!(outcome.matches <= truth.len());
}
