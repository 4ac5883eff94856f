// Test fixtures for integration testing

use ilmify::core::config::Config;
use ilmify::core::error::{IlmifyError, Result};
use ilmify::core::indexer::TextExtractor;
use ilmify::core::types::{Resource, ResourceId};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

/// Catalog location relative to the content root (matches the default config)
pub const CATALOG_FILE: &str = "portal/data/metadata.json";

#[allow(dead_code)] // Used in integration tests
pub const HISTORY_TEXT: &str = "The history of the subcontinent is a history of empires. \
    Historians trace history through coins, inscriptions and monuments. \
    Every empire left its history written in stone and in the memory of villages.";

#[allow(dead_code)] // Used in integration tests
pub const GEOGRAPHY_TEXT: &str = "Geography explains rivers, mountains and plains. \
    Rivers begin in the mountains and carry silt down to fertile plains. \
    The plains feed millions of people who farm along the rivers.";

#[allow(dead_code)] // Used in integration tests
pub const HEALTH_TEXT: &str = "Clean water prevents cholera and typhoid. \
    Boil drinking water for one minute and store water in covered containers. \
    Wash hands with soap before eating and after using the latrine.";

/// Reads "PDF" files as plain UTF-8 text so tests need no real PDFs
#[derive(Debug, Default)]
pub struct PlainTextExtractor {
    calls: AtomicUsize,
    delay: Option<Duration>,
}

#[allow(dead_code)] // Used in integration tests
impl PlainTextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep before every extraction (keeps a build running long enough to observe)
    pub fn slow(delay: Duration) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delay: Some(delay),
        }
    }

    /// Number of files extracted so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, path: &Path, _max_pages: usize) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
        fs::read_to_string(path).map_err(|e| IlmifyError::Extraction {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Content root with "PDF" files and a catalog
#[allow(dead_code)] // Used in integration tests
pub struct TestCorpus {
    pub dir: TempDir,
    resources: Vec<Resource>,
}

#[allow(dead_code)] // Used in integration tests
impl TestCorpus {
    /// Empty corpus (no files, empty catalog written)
    pub fn new() -> Self {
        let corpus = Self {
            dir: TempDir::new().unwrap(),
            resources: Vec::new(),
        };
        corpus.write_catalog();
        corpus
    }

    /// Corpus of `(title, text)` documents, one file each
    pub fn with_documents(documents: &[(&str, &str)]) -> Self {
        let mut corpus = Self::new();
        for (title, text) in documents {
            corpus.add_document(title, text);
        }
        corpus
    }

    /// History, geography and health documents (ids 1, 2, 3)
    pub fn sample() -> Self {
        Self::with_documents(&[
            ("History of the Subcontinent", HISTORY_TEXT),
            ("Physical Geography", GEOGRAPHY_TEXT),
            ("Clean Water Guide", HEALTH_TEXT),
        ])
    }

    /// Add a PDF resource, write its file and refresh the catalog
    pub fn add_document(&mut self, title: &str, text: &str) -> String {
        let id = self.resources.len() as u64 + 1;
        let filepath = format!("content/textbooks/doc-{id}.pdf");
        self.write_file(&filepath, text);

        self.resources.push(Resource {
            id: ResourceId::Number(id),
            title: title.to_string(),
            category: "textbooks".to_string(),
            filepath: filepath.clone(),
            format: "pdf".to_string(),
        });
        self.write_catalog();
        filepath
    }

    /// Add a catalog entry without touching any file
    pub fn add_resource(&mut self, resource: Resource) {
        self.resources.push(resource);
        self.write_catalog();
    }

    /// Drop a catalog entry (the file stays on disk)
    pub fn remove_resource(&mut self, filepath: &str) {
        self.resources.retain(|r| r.filepath != filepath);
        self.write_catalog();
    }

    pub fn write_file(&self, relative: &str, text: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, text).unwrap();
    }

    pub fn remove_file(&self, relative: &str) {
        fs::remove_file(self.root().join(relative)).unwrap();
    }

    pub fn write_catalog(&self) {
        let path = self.root().join(CATALOG_FILE);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, serde_json::to_string_pretty(&self.resources).unwrap()).unwrap();
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn source_path(&self, relative: &str) -> String {
        self.root().join(relative).to_string_lossy().into_owned()
    }

    pub fn index_dir(&self) -> PathBuf {
        self.root().join("vectors")
    }

    pub fn index_file(&self) -> PathBuf {
        self.index_dir().join("index.json")
    }

    /// Default config rooted at this corpus
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.content.root = self.root().to_path_buf();
        config.storage.index_dir = self.index_dir();
        config
    }
}
