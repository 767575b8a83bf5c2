//! Vocabulary engine: decoding, tokenization and word-table persistence.
mod artifact;
mod decode;
mod filename;
mod persist;
mod pipeline;
mod tokenize;
mod types;
mod vocab;

pub use artifact::{ArtifactError, WordTable};
pub use decode::{decode_text, DecodedText};
pub use filename::{artifact_filename, ARTIFACT_EXTENSION};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use pipeline::{harvest_vocabulary, HarvestError, HarvestOptions};
pub use tokenize::{tokenize, StripSetCleaner, TokenCleaner, STRIP_SET};
pub use types::{RunSummary, Stage};
pub use vocab::Vocabulary;
