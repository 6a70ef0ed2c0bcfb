use std::path::Path;

use crate::config::AnalyserConfig;
use crate::error::AlignmentError;
use crate::pipeline::defaults::{TeiTokenExtractor, WindowedSequenceAligner};
use crate::pipeline::runtime::{TagAnalyser, TagAnalyserParts};
use crate::pipeline::traits::{SequenceAligner, TokenExtractor};

pub struct TagAnalyserBuilder {
    config: AnalyserConfig,
    extractor: Option<Box<dyn TokenExtractor>>,
    sequence_aligner: Option<Box<dyn SequenceAligner>>,
}

impl TagAnalyserBuilder {
    pub fn new(config: AnalyserConfig) -> Self {
        Self {
            config,
            extractor: None,
            sequence_aligner: None,
        }
    }

    pub fn with_extractor(mut self, extractor: Box<dyn TokenExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    pub fn with_sequence_aligner(mut self, sequence_aligner: Box<dyn SequenceAligner>) -> Self {
        self.sequence_aligner = Some(sequence_aligner);
        self
    }

    pub fn build(self) -> Result<TagAnalyser, AlignmentError> {
        self.config.matching.validate()?;
        require_dir(&self.config.truth_dir, "truth")?;
        require_dir(&self.config.predicted_dir, "predicted")?;

        let matching = self.config.matching;
        Ok(TagAnalyser::from_parts(TagAnalyserParts {
            truth_dir: self.config.truth_dir,
            predicted_dir: self.config.predicted_dir,
            truth_plaintext: self.config.truth_plaintext,
            extractor: self
                .extractor
                .unwrap_or_else(|| Box::new(TeiTokenExtractor)),
            sequence_aligner: self
                .sequence_aligner
                .unwrap_or_else(|| Box::new(WindowedSequenceAligner::new(&matching))),
        }))
    }
}

fn require_dir(path: &Path, role: &str) -> Result<(), AlignmentError> {
    if path.is_dir() {
        return Ok(());
    }
    Err(AlignmentError::invalid_input(format!(
        "{role} folder does not exist: {}",
        path.display()
    )))
}
