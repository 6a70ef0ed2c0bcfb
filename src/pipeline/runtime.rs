use std::path::{Path, PathBuf};

use crate::alignment::diagnostics::{CollectedDiagnostics, TracingDiagnostics};
use crate::alignment::report::{AdvancedComparison, DocumentReport, TagCountComparison};
use crate::document::ExtractionMode;
use crate::error::AlignmentError;
use crate::pipeline::traits::{SequenceAligner, TokenExtractor};

/// Compares every predicted document in one folder with its namesake in the
/// truth folder.
pub struct TagAnalyser {
    truth_dir: PathBuf,
    predicted_dir: PathBuf,
    truth_plaintext: bool,
    extractor: Box<dyn TokenExtractor>,
    sequence_aligner: Box<dyn SequenceAligner>,
}

pub(crate) struct TagAnalyserParts {
    pub truth_dir: PathBuf,
    pub predicted_dir: PathBuf,
    pub truth_plaintext: bool,
    pub extractor: Box<dyn TokenExtractor>,
    pub sequence_aligner: Box<dyn SequenceAligner>,
}

impl TagAnalyser {
    pub(crate) fn from_parts(parts: TagAnalyserParts) -> Self {
        Self {
            truth_dir: parts.truth_dir,
            predicted_dir: parts.predicted_dir,
            truth_plaintext: parts.truth_plaintext,
            extractor: parts.extractor,
            sequence_aligner: parts.sequence_aligner,
        }
    }

    pub fn truth_dir(&self) -> &Path {
        &self.truth_dir
    }

    pub fn predicted_dir(&self) -> &Path {
        &self.predicted_dir
    }

    pub fn truth_plaintext(&self) -> bool {
        self.truth_plaintext
    }

    /// Names of the regular files directly inside the predicted folder, sorted.
    pub fn list_documents(&self) -> Result<Vec<String>, AlignmentError> {
        let context = || format!("list {}", self.predicted_dir.display());
        let entries =
            std::fs::read_dir(&self.predicted_dir).map_err(|e| AlignmentError::io(context(), e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| AlignmentError::io(context(), e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => files.push(name),
                Err(raw) => tracing::warn!(
                    file = %raw.to_string_lossy(),
                    "skipping file with non UTF-8 name"
                ),
            }
        }
        files.sort();
        Ok(files)
    }

    /// Reads both sides of `file` and analyses them.
    ///
    /// Failures become a failed report that keeps whatever was already known:
    /// the predicted document id once the prediction is read, and the tag
    /// counts once both sides are read.
    pub fn analyse_document(&self, file: &str) -> DocumentReport {
        let predicted = match read_source(&self.predicted_dir.join(file)) {
            Ok(source) => source,
            Err(err) => return failed_report(file, None, None, err),
        };
        let document_id = self.extractor.document_id(&predicted);
        match read_source(&self.truth_dir.join(file)) {
            Ok(truth) => self.analyse_sources(file, &predicted, &truth),
            Err(err) => failed_report(file, document_id, None, err),
        }
    }

    /// Runs the tag-count and alignment checks on documents already in memory.
    pub fn analyse_sources(&self, file: &str, predicted: &str, truth: &str) -> DocumentReport {
        let document_id = self.extractor.document_id(predicted);
        let simple = TagCountComparison::new(
            self.extractor.count_tags(predicted),
            self.extractor.count_tags(truth),
        );
        tracing::info!(
            file,
            predicted_tags = simple.predicted_tags,
            truth_tags = simple.truth_tags,
            "simple analysis"
        );

        let advanced = match self.advanced_analysis(file, predicted, truth) {
            Ok(advanced) => advanced,
            Err(err) => return failed_report(file, document_id, Some(simple), err),
        };

        let mut notes = Vec::new();
        if !simple.matched {
            notes.push(format!(
                "tag_count_mismatch:pred={} truth={}",
                simple.predicted_tags, simple.truth_tags
            ));
        }
        if advanced.prediction_exhausted {
            notes.push("prediction_exhausted".to_string());
        }

        DocumentReport {
            file: file.to_string(),
            document_id,
            simple: Some(simple),
            advanced: Some(advanced),
            notes,
        }
    }

    fn advanced_analysis(
        &self,
        file: &str,
        predicted: &str,
        truth: &str,
    ) -> Result<AdvancedComparison, AlignmentError> {
        let predicted_label = self.predicted_dir.join(file).display().to_string();
        let truth_label = self.truth_dir.join(file).display().to_string();
        let truth_mode = if self.truth_plaintext {
            ExtractionMode::Plaintext
        } else {
            ExtractionMode::Structured
        };
        let predicted_tokens =
            self.extractor
                .extract(&predicted_label, predicted, ExtractionMode::Structured)?;
        let truth_tokens = self.extractor.extract(&truth_label, truth, truth_mode)?;
        tracing::debug!(
            file,
            predicted_tokens = predicted_tokens.len(),
            truth_tokens = truth_tokens.len(),
            "advanced analysis: extracted tokens"
        );

        let mut collected = CollectedDiagnostics::new();
        let outcome = self.sequence_aligner.align(
            &truth_tokens,
            &predicted_tokens,
            &mut (TracingDiagnostics, &mut collected),
        );
        tracing::info!(
            file,
            matches = outcome.matches,
            truth_tokens = outcome.truth_len,
            "advanced analysis"
        );
        Ok(AdvancedComparison::from_outcome(&outcome, &collected))
    }

    pub fn analyse_all(&self) -> Result<Vec<DocumentReport>, AlignmentError> {
        let files = self.list_documents()?;
        Ok(self.analyse_documents(&files, |_| {}))
    }

    /// Analyses `files` in order, calling `on_document` after each one.
    ///
    /// Per-document failures become failed reports and never stop the run.
    pub fn analyse_documents(
        &self,
        files: &[String],
        mut on_document: impl FnMut(&DocumentReport),
    ) -> Vec<DocumentReport> {
        let mut reports = Vec::with_capacity(files.len());
        for file in files {
            let report = self.analyse_document(file);
            on_document(&report);
            reports.push(report);
        }
        reports
    }
}

fn failed_report(
    file: &str,
    document_id: Option<String>,
    simple: Option<TagCountComparison>,
    err: AlignmentError,
) -> DocumentReport {
    tracing::error!(file, error = %err, "document analysis failed");
    DocumentReport {
        document_id,
        simple,
        ..DocumentReport::failed(file, err)
    }
}

fn read_source(path: &Path) -> Result<String, AlignmentError> {
    std::fs::read_to_string(path)
        .map_err(|e| AlignmentError::io(format!("read {}", path.display()), e))
}
