use super::Configuration;
use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A validated configuration frozen into a compact binary artifact.
///
/// Embedding applications render the same tool many times; caching the
/// converted configuration skips wire-format parsing and validation on
/// every render after the first. Round-tripping an artifact preserves
/// rule-evaluation behaviour exactly.
#[derive(Serialize, Deserialize, Debug)]
pub struct ToolArtifact {
    pub configuration: Configuration,
}

impl ToolArtifact {
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }

    pub fn into_configuration(self) -> Configuration {
        self.configuration
    }

    /// Encodes the artifact using the bincode format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard()).map_err(|e| ArtifactError::Encode(e.to_string()))
    }

    /// Decodes an artifact from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(artifact, _)| artifact) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArtifactError::Decode(e.to_string()))
    }

    /// Saves the artifact to a file.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads an artifact from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }
}
