//! Configuration management for the Ilmify search core.
//!
//! This module handles loading configuration from TOML files and
//! environment variables. Defaults suit a content bundle laid out
//! the way the offline portal scanner writes it.

use crate::core::error::{IlmifyError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the persisted vector index inside `storage.index_dir`
pub const INDEX_FILE_NAME: &str = "index.json";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Indexing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Target characters per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Overlap budget in characters; carried forward as `overlap / 5` words
    #[serde(default = "default_overlap")]
    pub overlap: usize,

    /// Maximum PDF pages read per document
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Resources yielding fewer extracted characters are skipped
    #[serde(default = "default_min_text_chars")]
    pub min_text_chars: usize,

    /// Characters of chunk text stored as the result snippet
    #[serde(default = "default_snippet_chars")]
    pub snippet_chars: usize,

    /// Tokens kept per chunk for incremental vocabulary rebuilds
    #[serde(default = "default_reference_tokens")]
    pub reference_tokens: usize,
}

/// Vocabulary configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VocabularyConfig {
    /// Number of vector dimensions (most frequent terms kept)
    #[serde(default = "default_max_terms")]
    pub max_terms: usize,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_k")]
    pub default_k: usize,

    /// Maximum results per query
    #[serde(default = "default_max_k")]
    pub max_k: usize,

    /// Results scoring at or below this are dropped
    #[serde(default = "default_min_score")]
    pub min_score: f64,

    /// Maximum query string length
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Content catalog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Directory resource `filepath`s are relative to
    #[serde(default = "default_content_root")]
    pub root: PathBuf,

    /// Catalog JSON; relative paths resolve against `root`
    #[serde(default = "default_catalog_file")]
    pub catalog_file: PathBuf,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the persisted index
    #[serde(default = "default_index_dir")]
    pub index_dir: PathBuf,
}

fn default_chunk_size() -> usize {
    500
}

fn default_overlap() -> usize {
    100
}

fn default_max_pages() -> usize {
    100
}

fn default_min_text_chars() -> usize {
    100
}

fn default_snippet_chars() -> usize {
    1000
}

fn default_reference_tokens() -> usize {
    50
}

fn default_max_terms() -> usize {
    300
}

fn default_k() -> usize {
    5
}

fn default_max_k() -> usize {
    100
}

fn default_min_score() -> f64 {
    0.05
}

fn default_max_query_length() -> usize {
    500
}

fn default_content_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_catalog_file() -> PathBuf {
    PathBuf::from("portal/data/metadata.json")
}

fn default_index_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
            max_pages: default_max_pages(),
            min_text_chars: default_min_text_chars(),
            snippet_chars: default_snippet_chars(),
            reference_tokens: default_reference_tokens(),
        }
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            max_terms: default_max_terms(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_k: default_k(),
            max_k: default_max_k(),
            min_score: default_min_score(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_content_root(),
            catalog_file: default_catalog_file(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            index_dir: default_index_dir(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| IlmifyError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. ILMIFY_CONFIG env var
    /// 2. XDG config file (~/.config/ilmify/config.toml)
    /// 3. Legacy ./ilmify.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("ILMIFY_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("ilmify.toml").exists() {
                Self::from_file("ilmify.toml")?
            } else {
                Self::default()
            }
        };

        // Untouched default index dir moves under the XDG data dir
        if config.storage.index_dir == default_index_dir() {
            config.storage.index_dir = xdg.vectors_dir();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(chunk_size) = env::var("ILMIFY_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse() {
                self.indexing.chunk_size = size;
            }
        }
        if let Ok(overlap) = env::var("ILMIFY_OVERLAP") {
            if let Ok(o) = overlap.parse() {
                self.indexing.overlap = o;
            }
        }
        if let Ok(max_pages) = env::var("ILMIFY_MAX_PAGES") {
            if let Ok(pages) = max_pages.parse() {
                self.indexing.max_pages = pages;
            }
        }

        if let Ok(max_terms) = env::var("ILMIFY_MAX_TERMS") {
            if let Ok(terms) = max_terms.parse() {
                self.vocabulary.max_terms = terms;
            }
        }

        if let Ok(default_k) = env::var("ILMIFY_DEFAULT_K") {
            if let Ok(k) = default_k.parse() {
                self.search.default_k = k;
            }
        }
        if let Ok(max_k) = env::var("ILMIFY_MAX_K") {
            if let Ok(k) = max_k.parse() {
                self.search.max_k = k;
            }
        }

        if let Ok(root) = env::var("ILMIFY_CONTENT_ROOT") {
            self.content.root = PathBuf::from(root);
        }
        if let Ok(catalog) = env::var("ILMIFY_CATALOG_FILE") {
            self.content.catalog_file = PathBuf::from(catalog);
        }
        if let Ok(index_dir) = env::var("ILMIFY_INDEX_DIR") {
            self.storage.index_dir = PathBuf::from(index_dir);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.indexing.chunk_size == 0 {
            return Err(IlmifyError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        if self.indexing.overlap >= self.indexing.chunk_size {
            return Err(IlmifyError::ConfigError(
                "Overlap must be less than chunk size".to_string(),
            ));
        }

        if self.indexing.max_pages == 0 {
            return Err(IlmifyError::ConfigError(
                "Max pages must be non-zero".to_string(),
            ));
        }

        if self.vocabulary.max_terms == 0 {
            return Err(IlmifyError::ConfigError(
                "Vocabulary size must be non-zero".to_string(),
            ));
        }

        if self.search.default_k == 0 {
            return Err(IlmifyError::ConfigError(
                "Default k must be non-zero".to_string(),
            ));
        }

        if self.search.default_k > self.search.max_k {
            return Err(IlmifyError::ConfigError(
                "Default k cannot exceed max k".to_string(),
            ));
        }

        if !(0.0..1.0).contains(&self.search.min_score) {
            return Err(IlmifyError::ConfigError(
                "Min score must be in [0, 1)".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(IlmifyError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolved location of the catalog JSON
    pub fn catalog_path(&self) -> PathBuf {
        if self.content.catalog_file.is_absolute() {
            self.content.catalog_file.clone()
        } else {
            self.content.root.join(&self.content.catalog_file)
        }
    }

    /// Resolved location of the persisted index
    pub fn index_file(&self) -> PathBuf {
        self.storage.index_dir.join(INDEX_FILE_NAME)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Chunk size: {} chars", self.indexing.chunk_size);
        tracing::info!("  Overlap: {} chars", self.indexing.overlap);
        tracing::info!("  Max pages: {}", self.indexing.max_pages);
        tracing::info!("  Vocabulary size: {} terms", self.vocabulary.max_terms);
        tracing::info!("  Default k: {}", self.search.default_k);
        tracing::info!("  Max k: {}", self.search.max_k);
        tracing::info!("  Min score: {}", self.search.min_score);
        tracing::info!("  Content root: {:?}", self.content.root);
        tracing::info!("  Catalog: {:?}", self.catalog_path());
        tracing::info!("  Index file: {:?}", self.index_file());
    }
}
