//! Persisted index file format (`index.json`).
//!
//! The on-disk record is versioned. Anything that fails to parse,
//! carries another version, or violates the snapshot invariants is
//! reported as [`IlmifyError::CorruptIndex`]; the store treats that
//! as a cold start.
//!
//! Saves go through a temp file in the same directory followed by a
//! rename, so a failed save never leaves a truncated index behind.

use crate::core::error::{IlmifyError, Result};
use crate::core::search::Vocabulary;
use crate::core::storage::VectorIndex;
use crate::core::types::{DocumentChunk, IndexStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Current index file format version
pub const INDEX_VERSION: &str = "2.0";

/// Serialized form of a [`VectorIndex`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRecord {
    pub version: String,
    pub timestamp: String,
    pub vocabulary: Vec<String>,
    pub idf: BTreeMap<String, f64>,
    pub documents: Vec<DocumentChunk>,
    pub file_hashes: BTreeMap<String, String>,
    pub stats: IndexStats,
}

impl IndexRecord {
    pub fn from_index(index: &VectorIndex) -> Self {
        let timestamp = index.built_at().unwrap_or_else(Utc::now).to_rfc3339();

        Self {
            version: INDEX_VERSION.to_string(),
            timestamp,
            vocabulary: index.vocabulary().terms().to_vec(),
            idf: index.vocabulary().idf_map(),
            documents: index.documents().to_vec(),
            file_hashes: index.file_hashes().clone(),
            stats: index.stats(),
        }
    }

    /// Validate and convert into a snapshot
    pub fn into_index(self) -> Result<VectorIndex> {
        if self.version != INDEX_VERSION {
            return Err(IlmifyError::CorruptIndex(format!(
                "unsupported index version '{}' (expected '{}'), rebuild with --force",
                self.version, INDEX_VERSION
            )));
        }

        let vocabulary = Vocabulary::from_parts(self.vocabulary, &self.idf)?;
        let built_at = DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|t| t.with_timezone(&Utc));

        let index = VectorIndex::new(vocabulary, self.documents, self.file_hashes, built_at);
        index.check_invariants()?;
        Ok(index)
    }
}

/// Load a persisted index.
///
/// Returns `Ok(None)` when no index file exists yet.
pub fn load(path: &Path) -> Result<Option<VectorIndex>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let record: IndexRecord = serde_json::from_str(&contents)
        .map_err(|e| IlmifyError::CorruptIndex(format!("{path:?}: {e}")))?;

    let index = record.into_index()?;
    tracing::info!(
        "Loaded index from {:?}: {} chunks, {} terms",
        path,
        index.documents().len(),
        index.vocabulary().len()
    );

    Ok(Some(index))
}

/// Atomically replace the index file at `path`
pub fn save(path: &Path, index: &VectorIndex) -> Result<()> {
    let tmp = temp_path(path);

    write_temp(&tmp, path, index).map_err(|e| {
        // Best effort; the temp file may not exist
        let _ = fs::remove_file(&tmp);
        IlmifyError::Persistence(format!("{path:?}: {e}"))
    })?;

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        IlmifyError::Persistence(format!("{path:?}: {e}"))
    })?;

    tracing::info!(
        "Saved index to {:?}: {} chunks, {} files",
        path,
        index.documents().len(),
        index.file_hashes().len()
    );
    Ok(())
}

fn write_temp(tmp: &Path, path: &Path, index: &VectorIndex) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let record = IndexRecord::from_index(index);
    let file = File::create(tmp)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &record)?;
    writer.flush()?;

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index.json".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}
