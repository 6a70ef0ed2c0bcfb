use crate::types::Direction;

/// Something noteworthy that happened while aligning one document pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignmentEvent {
    Mismatch {
        truth_index: usize,
        predicted_index: usize,
        truth: String,
        predicted: String,
    },
    /// A punctuation-only truth token was counted without a real comparison.
    PunctuationSkipped { truth_index: usize },
    Resynchronized {
        truth_index: usize,
        direction: Direction,
        shift: isize,
        offset: isize,
    },
    /// No shifted match inside the window; the truth token stays unmatched.
    Unresolved {
        truth_index: usize,
        predicted_index: usize,
        truth: String,
        predicted: String,
    },
    PredictionExhausted {
        truth_index: usize,
        predicted_len: usize,
    },
}

pub trait DiagnosticsSink {
    fn record(&mut self, event: &AlignmentEvent);
}

impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for &mut S {
    fn record(&mut self, event: &AlignmentEvent) {
        (**self).record(event);
    }
}

impl<A: DiagnosticsSink, B: DiagnosticsSink> DiagnosticsSink for (A, B) {
    fn record(&mut self, event: &AlignmentEvent) {
        self.0.record(event);
        self.1.record(event);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl DiagnosticsSink for NoDiagnostics {
    fn record(&mut self, _event: &AlignmentEvent) {}
}

/// Emits every event through `tracing`; unresolved mismatches at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn record(&mut self, event: &AlignmentEvent) {
        match event {
            AlignmentEvent::Mismatch {
                truth_index,
                predicted_index,
                truth,
                predicted,
            } => tracing::debug!(
                truth_index,
                predicted_index,
                truth = truth.as_str(),
                predicted = predicted.as_str(),
                "tags did not match"
            ),
            AlignmentEvent::PunctuationSkipped { truth_index } => {
                tracing::debug!(truth_index, "ignoring punctuation-only truth tag")
            }
            AlignmentEvent::Resynchronized {
                truth_index,
                direction,
                shift,
                offset,
            } => tracing::debug!(
                truth_index,
                direction = direction.as_str(),
                shift,
                offset,
                "found shifted match; offset moved"
            ),
            AlignmentEvent::Unresolved {
                truth_index,
                predicted_index,
                truth,
                predicted,
            } => tracing::error!(
                truth_index,
                predicted_index,
                truth = truth.as_str(),
                predicted = predicted.as_str(),
                "could not resolve mismatch"
            ),
            AlignmentEvent::PredictionExhausted {
                truth_index,
                predicted_len,
            } => tracing::debug!(
                truth_index,
                predicted_len,
                "reached end of predicted tags; stopping"
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollectedDiagnostics {
    pub events: Vec<AlignmentEvent>,
}

impl CollectedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &AlignmentEvent> {
        self.events
            .iter()
            .filter(|event| matches!(event, AlignmentEvent::Unresolved { .. }))
    }
}

impl DiagnosticsSink for CollectedDiagnostics {
    fn record(&mut self, event: &AlignmentEvent) {
        self.events.push(event.clone());
    }
}
