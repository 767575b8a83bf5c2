use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The persisted artifact: a one-column table of sorted unique words,
/// serialized as MessagePack. No schema version, no compression.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTable {
    pub words: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to encode word table: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("failed to decode word table: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}

impl WordTable {
    /// Wrap an already-sorted word list. Callers sort; the table stores.
    pub fn from_sorted_words(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        Ok(rmp_serde::to_vec(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        Ok(rmp_serde::from_slice(bytes)?)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
