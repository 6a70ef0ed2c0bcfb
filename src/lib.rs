pub mod alignment;
pub mod config;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod types;

pub use alignment::diagnostics::{
    AlignmentEvent, CollectedDiagnostics, DiagnosticsSink, NoDiagnostics, TracingDiagnostics,
};
pub use alignment::matcher::{count_matches, TokenMatcher};
pub use alignment::report::{
    summarize, AdvancedComparison, DocumentReport, Meta, Report, RunSummary, TagCountComparison,
    UnresolvedMismatch,
};
pub use config::{AnalyserConfig, MatchConfig};
pub use document::ExtractionMode;
pub use error::AlignmentError;
pub use pipeline::builder::TagAnalyserBuilder;
pub use pipeline::runtime::TagAnalyser;
pub use pipeline::traits::{SequenceAligner, TokenExtractor};
pub use types::{AlignmentOutcome, AlignmentState, Direction, TokenSequence};
