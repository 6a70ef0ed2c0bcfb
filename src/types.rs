use serde::Serialize;

/// Ordered token texts of one document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenSequence {
    pub tokens: Vec<String>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Which side of the current candidate index a shifted match is searched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const BOTH: [Self; 2] = [Self::Forward, Self::Backward];

    pub fn sign(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Running state of one alignment pass.
///
/// At truth index `i` the prediction index under the current hypothesis is
/// `i + offset`. Only mismatch resolution moves `offset`, and it is never reset
/// within a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlignmentState {
    pub offset: isize,
    pub matches: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentOutcome {
    /// Truth tokens judged to have a counterpart, in `[0, truth_len]`.
    pub matches: usize,
    pub truth_len: usize,
    pub predicted_len: usize,
    /// Drift hypothesis when the pass ended.
    pub offset: isize,
    /// The pass stopped early because the prediction ran out.
    pub exhausted: bool,
}

impl AlignmentOutcome {
    pub fn missing(&self) -> usize {
        self.truth_len.saturating_sub(self.matches)
    }

    pub fn is_full_match(&self) -> bool {
        self.matches == self.truth_len
    }
}
