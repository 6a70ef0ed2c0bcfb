use crate::alignment::diagnostics::DiagnosticsSink;
use crate::document::ExtractionMode;
use crate::error::AlignmentError;
use crate::types::{AlignmentOutcome, TokenSequence};

pub trait TokenExtractor: Send + Sync {
    /// `label` names the source in error messages.
    fn extract(
        &self,
        label: &str,
        source: &str,
        mode: ExtractionMode,
    ) -> Result<TokenSequence, AlignmentError>;

    fn document_id(&self, source: &str) -> Option<String>;

    fn count_tags(&self, source: &str) -> usize;
}

pub trait SequenceAligner: Send + Sync {
    fn align(
        &self,
        truth: &TokenSequence,
        predicted: &TokenSequence,
        sink: &mut dyn DiagnosticsSink,
    ) -> AlignmentOutcome;
}
