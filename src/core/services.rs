//! Unified service container for Ilmify
//!
//! Constructed once from a [`Config`] and passed to every caller;
//! there is no process-wide index state.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::indexer::{Catalog, PdfTextExtractor, TextExtractor};
use crate::core::search::SearchService;
use crate::core::storage::{IndexBuilder, IndexStore};
use crate::core::types::{BuildStats, IndexStats, IndexStatus, Resource, SearchResult};
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Published index snapshot and build serialization
    pub store: Arc<IndexStore>,

    /// Similarity search over the store
    pub search: Arc<SearchService>,

    /// Build pass assembly (extraction, chunking, vectorization)
    pub builder: Arc<IndexBuilder>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services that extract text with `pdf-extract`
    pub fn new(config: Config) -> Self {
        Self::with_extractor(config, Arc::new(PdfTextExtractor::new()))
    }

    /// Create services with a custom text extractor
    pub fn with_extractor(config: Config, extractor: Arc<dyn TextExtractor>) -> Self {
        let store = Arc::new(IndexStore::new(config.index_file()));
        let search = Arc::new(SearchService::new(Arc::clone(&store), &config.search));
        let builder = Arc::new(IndexBuilder::new(&config, extractor));

        Self {
            store,
            search,
            builder,
            config: Arc::new(config),
        }
    }

    /// Load the configured content catalog
    pub fn load_catalog(&self) -> Result<Catalog> {
        Catalog::load(&self.config.catalog_path())
    }

    /// Build from the configured catalog.
    ///
    /// `stats.chunks_created` is the number of newly created chunks.
    pub fn build(&self, force: bool) -> Result<BuildStats> {
        let catalog = self.load_catalog()?;
        self.build_from(catalog.resources(), force)
    }

    /// Build from an explicit resource list
    pub fn build_from(&self, resources: &[Resource], force: bool) -> Result<BuildStats> {
        self.store.build(&self.builder, resources, force)
    }

    /// Top `top_k` chunks for `query` (default and clamp from config)
    pub fn search(&self, query: &str, top_k: Option<usize>) -> Result<Vec<SearchResult>> {
        Ok(self.search.search(query, top_k)?.results)
    }

    pub fn stats(&self) -> Result<IndexStats> {
        self.store.stats()
    }

    pub fn status(&self) -> Result<IndexStatus> {
        self.store.status()
    }
}
