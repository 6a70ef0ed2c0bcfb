use serde::Serialize;

use crate::alignment::diagnostics::{AlignmentEvent, CollectedDiagnostics};
use crate::types::AlignmentOutcome;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub schema_version: u32,
    pub meta: Meta,
    pub documents: Vec<DocumentReport>,
    pub summary: RunSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub generated_at: String,
    pub truth_dir: String,
    pub predicted_dir: String,
    pub truth_plaintext: bool,
    pub window_size: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub file: String,
    pub document_id: Option<String>,
    /// Absent only when one of the two sources could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple: Option<TagCountComparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced: Option<AdvancedComparison>,
    pub notes: Vec<String>,
}

/// Raw `</w>` + `</pc>` counts on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagCountComparison {
    pub predicted_tags: usize,
    pub truth_tags: usize,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvancedComparison {
    pub truth_tokens: usize,
    pub predicted_tokens: usize,
    pub matches: usize,
    pub missing: usize,
    pub full_match: bool,
    pub final_offset: isize,
    pub prediction_exhausted: bool,
    pub unresolved: Vec<UnresolvedMismatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedMismatch {
    pub truth_index: usize,
    pub predicted_index: usize,
    pub truth: String,
    pub predicted: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total_files: usize,
    pub simple_matches: usize,
    pub advanced_matches: usize,
    pub failed: usize,
}

impl TagCountComparison {
    pub fn new(predicted_tags: usize, truth_tags: usize) -> Self {
        Self {
            predicted_tags,
            truth_tags,
            matched: predicted_tags == truth_tags,
        }
    }
}

impl AdvancedComparison {
    pub fn from_outcome(outcome: &AlignmentOutcome, diagnostics: &CollectedDiagnostics) -> Self {
        let unresolved = diagnostics
            .unresolved()
            .filter_map(|event| match event {
                AlignmentEvent::Unresolved {
                    truth_index,
                    predicted_index,
                    truth,
                    predicted,
                } => Some(UnresolvedMismatch {
                    truth_index: *truth_index,
                    predicted_index: *predicted_index,
                    truth: truth.clone(),
                    predicted: predicted.clone(),
                }),
                _ => None,
            })
            .collect();

        Self {
            truth_tokens: outcome.truth_len,
            predicted_tokens: outcome.predicted_len,
            matches: outcome.matches,
            missing: outcome.missing(),
            full_match: outcome.is_full_match(),
            final_offset: outcome.offset,
            prediction_exhausted: outcome.exhausted,
            unresolved,
        }
    }
}

impl DocumentReport {
    /// Report for a document whose analysis could not complete.
    pub fn failed(file: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self {
            file: file.into(),
            document_id: None,
            simple: None,
            advanced: None,
            notes: vec![format!("analysis_failed: {reason}")],
        }
    }

    pub fn is_failed(&self) -> bool {
        self.advanced.is_none()
    }

    pub fn is_simple_match(&self) -> bool {
        self.simple.is_some_and(|simple| simple.matched)
    }

    pub fn is_full_match(&self) -> bool {
        self.advanced
            .as_ref()
            .is_some_and(|advanced| advanced.full_match)
    }

    pub fn document_id_or_default(&self) -> &str {
        self.document_id.as_deref().unwrap_or("No ID")
    }
}

/// Tag counts do not depend on token extraction, so a failed document still
/// counts as a simple match when both sides were read and their counts agree.
pub fn summarize(documents: &[DocumentReport]) -> RunSummary {
    let mut summary = RunSummary {
        total_files: documents.len(),
        ..RunSummary::default()
    };
    for document in documents {
        if document.is_failed() {
            summary.failed += 1;
        }
        if document.is_simple_match() {
            summary.simple_matches += 1;
        }
        if document.is_full_match() {
            summary.advanced_matches += 1;
        }
    }
    summary
}
