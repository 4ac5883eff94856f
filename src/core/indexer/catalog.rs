//! Content catalog loading.
//!
//! The catalog is a JSON array of resources produced by the content
//! scanner (`metadata.json`). Only the loading side lives here.

use crate::core::error::{IlmifyError, Result};
use crate::core::types::Resource;
use std::fs;
use std::path::Path;

/// Ordered list of catalog resources
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    resources: Vec<Resource>,
}

impl Catalog {
    /// Read a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IlmifyError::CatalogNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let resources: Vec<Resource> = serde_json::from_str(&contents)?;

        tracing::info!(
            "Loaded catalog {:?}: {} resources ({} pdf)",
            path,
            resources.len(),
            resources.iter().filter(|r| r.is_pdf()).count()
        );

        Ok(Self { resources })
    }

    pub fn from_resources(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// PDF resources in catalog order
    pub fn pdf_resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter().filter(|r| r.is_pdf())
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
