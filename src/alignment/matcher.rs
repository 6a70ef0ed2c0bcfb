use crate::alignment::comparison::PunctuationSet;
use crate::alignment::diagnostics::{AlignmentEvent, DiagnosticsSink, NoDiagnostics};
use crate::alignment::window::find_shifted_match;
use crate::config::MatchConfig;
use crate::types::{AlignmentOutcome, AlignmentState, Direction};

/// Drift-tolerant one-to-one matcher between truth and predicted tokens.
///
/// Walks the truth tokens in order, comparing each against the prediction at
/// `i + offset`. On a mismatch it searches a bounded window on both sides of
/// that index and, when the truth token turns up, moves `offset` by the
/// smallest shift found. The moved offset applies to every later truth token.
#[derive(Debug, Clone)]
pub struct TokenMatcher {
    window_size: usize,
    punctuation: PunctuationSet,
}

impl TokenMatcher {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            window_size: config.window_size,
            punctuation: PunctuationSet::from_config(config),
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn punctuation(&self) -> &PunctuationSet {
        &self.punctuation
    }

    pub fn align(
        &self,
        truth: &[String],
        predicted: &[String],
        sink: &mut dyn DiagnosticsSink,
    ) -> AlignmentOutcome {
        let mut state = AlignmentState::default();
        let mut exhausted = false;

        for (truth_index, truth_text) in truth.iter().enumerate() {
            // The prediction running out ends the pass; the rest stays unmatched.
            let Some(candidate) = truth_index
                .checked_add_signed(state.offset)
                .filter(|&index| index < predicted.len())
            else {
                sink.record(&AlignmentEvent::PredictionExhausted {
                    truth_index,
                    predicted_len: predicted.len(),
                });
                exhausted = true;
                break;
            };

            let predicted_text = &predicted[candidate];
            if self.punctuation.text_matches(truth_text, predicted_text) {
                state.matches += 1;
                continue;
            }

            sink.record(&AlignmentEvent::Mismatch {
                truth_index,
                predicted_index: candidate,
                truth: truth_text.clone(),
                predicted: predicted_text.clone(),
            });
            self.resolve_mismatch(truth_index, candidate, truth_text, predicted, &mut state, sink);
        }

        AlignmentOutcome {
            matches: state.matches,
            truth_len: truth.len(),
            predicted_len: predicted.len(),
            offset: state.offset,
            exhausted,
        }
    }

    fn resolve_mismatch(
        &self,
        truth_index: usize,
        candidate: usize,
        truth_text: &str,
        predicted: &[String],
        state: &mut AlignmentState,
        sink: &mut dyn DiagnosticsSink,
    ) {
        if self.punctuation.is_only_punctuation(truth_text) {
            sink.record(&AlignmentEvent::PunctuationSkipped { truth_index });
            state.matches += 1;
            return;
        }

        // min_by_key keeps the first minimum, so forward wins a tie.
        let best = Direction::BOTH
            .into_iter()
            .filter_map(|direction| {
                find_shifted_match(
                    predicted,
                    candidate,
                    truth_text,
                    direction,
                    self.window_size,
                    &self.punctuation,
                )
                .map(|shift| (direction, shift))
            })
            .min_by_key(|&(_, shift)| shift.unsigned_abs());

        match best {
            Some((direction, shift)) => {
                state.offset += shift;
                state.matches += 1;
                sink.record(&AlignmentEvent::Resynchronized {
                    truth_index,
                    direction,
                    shift,
                    offset: state.offset,
                });
            }
            None => sink.record(&AlignmentEvent::Unresolved {
                truth_index,
                predicted_index: candidate,
                truth: truth_text.to_string(),
                predicted: predicted[candidate].clone(),
            }),
        }
    }
}

impl Default for TokenMatcher {
    fn default() -> Self {
        Self::new(&MatchConfig::default())
    }
}

/// Match count under the default window and punctuation set.
pub fn count_matches(truth: &[String], predicted: &[String]) -> usize {
    TokenMatcher::default()
        .align(truth, predicted, &mut NoDiagnostics)
        .matches
}
