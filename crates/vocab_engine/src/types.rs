use std::fmt;
use std::path::PathBuf;

/// Sequential stages of one harvest run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Reading,
    Decoding,
    Tokenizing,
    Writing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Reading => write!(f, "reading"),
            Stage::Decoding => write!(f, "decoding"),
            Stage::Tokenizing => write!(f, "tokenizing"),
            Stage::Writing => write!(f, "writing"),
            Stage::Done => write!(f, "done"),
        }
    }
}

/// Everything a caller may want to report about one completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub source: PathBuf,
    pub artifact_path: PathBuf,
    pub manifest_path: Option<PathBuf>,
    pub encoding_label: String,
    pub bytes_read: u64,
    pub distinct_words: usize,
    pub total_occurrences: u64,
}
