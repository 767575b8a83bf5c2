use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use thiserror::Error;
use vocab_logging::{vocab_debug, vocab_info, vocab_warn};

use crate::artifact::{ArtifactError, WordTable};
use crate::decode::decode_text;
use crate::filename::artifact_filename;
use crate::persist::{AtomicFileWriter, PersistError};
use crate::tokenize::StripSetCleaner;
use crate::types::{RunSummary, Stage};
use crate::vocab::Vocabulary;

#[derive(Debug, Clone)]
pub struct HarvestOptions {
    /// Artifact filename; derived from the source path when `None`.
    pub artifact_filename: Option<String>,
    /// Manifest filename; no manifest is written when `None`.
    pub manifest_filename: Option<String>,
    /// RFC 3339 timestamp recorded in the manifest, supplied by the caller.
    pub generated_utc: Option<String>,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            artifact_filename: None,
            manifest_filename: Some("manifest.json".to_string()),
            generated_utc: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("failed to read input {path:?}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Run the whole pipeline sequentially: read the input file, decode it,
/// tokenize and count, then persist the sorted unique words.
///
/// Nothing is written unless every prior stage succeeded; the input file
/// being missing or unreadable is fatal. An empty input yields an empty
/// word table, not an error.
pub fn harvest_vocabulary(
    input: &Path,
    output_dir: &Path,
    options: &HarvestOptions,
) -> Result<RunSummary, HarvestError> {
    vocab_info!("[{}] {:?}", Stage::Reading, input);
    let bytes = fs::read(input).map_err(|source| HarvestError::Input {
        path: input.to_path_buf(),
        source,
    })?;

    vocab_debug!("[{}] {} bytes", Stage::Decoding, bytes.len());
    let decoded = decode_text(&bytes);
    if decoded.had_replacements {
        vocab_warn!(
            "Input {:?} contained bytes invalid for {}; they were replaced",
            input,
            decoded.encoding_label
        );
    }

    vocab_debug!("[{}] encoding {}", Stage::Tokenizing, decoded.encoding_label);
    let mut vocabulary = Vocabulary::new();
    vocabulary.ingest(&decoded.text, &StripSetCleaner);
    let distinct_words = vocabulary.distinct_words();
    let total_occurrences = vocabulary.total_occurrences();

    let table = WordTable::from_sorted_words(vocabulary.into_sorted_words());
    let payload = table.to_bytes()?;

    let filename = options
        .artifact_filename
        .clone()
        .unwrap_or_else(|| artifact_filename(input));
    vocab_info!("[{}] {} -> {:?}", Stage::Writing, filename, output_dir);
    let writer = AtomicFileWriter::new(output_dir.to_path_buf());
    let artifact_path = writer.write(&filename, &payload)?;

    let manifest_path = match &options.manifest_filename {
        Some(name) => {
            let manifest = json!({
                "source": input.display().to_string(),
                "artifact": filename,
                "encoding": decoded.encoding_label,
                "bytes_read": bytes.len() as u64,
                "distinct_words": distinct_words,
                "total_occurrences": total_occurrences,
                "generated_utc": options.generated_utc,
            });
            Some(writer.write(name, manifest.to_string().as_bytes())?)
        }
        None => None,
    };

    vocab_info!(
        "[{}] {} distinct words ({} occurrences) from {:?}",
        Stage::Done,
        distinct_words,
        total_occurrences,
        input
    );
    Ok(RunSummary {
        source: input.to_path_buf(),
        artifact_path,
        manifest_path,
        encoding_label: decoded.encoding_label,
        bytes_read: bytes.len() as u64,
        distinct_words,
        total_occurrences,
    })
}
