use crate::alignment::diagnostics::DiagnosticsSink;
use crate::alignment::matcher::TokenMatcher;
use crate::config::MatchConfig;
use crate::document::{count_closing_tags, extract_document_id, extract_tokens, ExtractionMode};
use crate::error::AlignmentError;
use crate::pipeline::traits::{SequenceAligner, TokenExtractor};
use crate::types::{AlignmentOutcome, TokenSequence};

pub struct TeiTokenExtractor;

impl TokenExtractor for TeiTokenExtractor {
    fn extract(
        &self,
        label: &str,
        source: &str,
        mode: ExtractionMode,
    ) -> Result<TokenSequence, AlignmentError> {
        extract_tokens(source, mode).map_err(|e| AlignmentError::xml(format!("parse {label}"), e))
    }

    fn document_id(&self, source: &str) -> Option<String> {
        extract_document_id(source)
    }

    fn count_tags(&self, source: &str) -> usize {
        count_closing_tags(source)
    }
}

pub struct WindowedSequenceAligner {
    matcher: TokenMatcher,
}

impl WindowedSequenceAligner {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            matcher: TokenMatcher::new(config),
        }
    }
}

impl SequenceAligner for WindowedSequenceAligner {
    fn align(
        &self,
        truth: &TokenSequence,
        predicted: &TokenSequence,
        sink: &mut dyn DiagnosticsSink,
    ) -> AlignmentOutcome {
        self.matcher
            .align(truth.as_slice(), predicted.as_slice(), sink)
    }
}
