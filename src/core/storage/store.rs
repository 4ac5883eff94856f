//! Index store: owns the published snapshot and runs builds.
//!
//! Readers take an `Arc` of the current [`VectorIndex`] and score
//! against it without holding any lock. A build assembles a complete
//! new snapshot, persists it, and only then swaps it in; a failed
//! save leaves both memory and disk untouched.
//!
//! Builds are serialized. A second build request blocks until the
//! running one has published, then runs against the new snapshot.

use crate::core::error::Result;
use crate::core::storage::{index_file, IndexBuilder, VectorIndex};
use crate::core::types::{BuildStats, IndexState, IndexStats, IndexStatus, Resource};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

enum Slot {
    /// Nothing read from disk yet
    Unloaded,
    /// No usable index (missing or corrupt file)
    Empty,
    Ready(Arc<VectorIndex>),
}

/// Clears the building flag when a build ends, successful or not
struct BuildingGuard<'a>(&'a AtomicBool);

impl Drop for BuildingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Holder of the current index snapshot
pub struct IndexStore {
    path: PathBuf,
    slot: RwLock<Slot>,
    build_lock: Mutex<()>,
    building: AtomicBool,
}

impl IndexStore {
    /// Create a store backed by the index file at `path`.
    ///
    /// Nothing is read until the first snapshot is requested.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            slot: RwLock::new(Slot::Unloaded),
            build_lock: Mutex::new(()),
            building: AtomicBool::new(false),
        }
    }

    pub fn index_path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> IndexState {
        if self.building.load(Ordering::SeqCst) {
            return IndexState::Building;
        }
        match *self.slot.read().unwrap_or_else(PoisonError::into_inner) {
            Slot::Ready(_) => IndexState::Ready,
            Slot::Unloaded | Slot::Empty => IndexState::Empty,
        }
    }

    /// Current snapshot, loading it from disk on first use.
    ///
    /// A corrupt index file yields an empty snapshot (cold start).
    /// Other I/O failures are returned and retried on the next call.
    pub fn snapshot(&self) -> Result<Arc<VectorIndex>> {
        {
            let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
            match &*slot {
                Slot::Ready(index) => return Ok(Arc::clone(index)),
                Slot::Empty => return Ok(Arc::new(VectorIndex::empty())),
                Slot::Unloaded => {}
            }
        }

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        // Another reader may have loaded it meanwhile
        if let Slot::Unloaded = *slot {
            *slot = self.load_slot()?;
        }

        Ok(match &*slot {
            Slot::Ready(index) => Arc::clone(index),
            Slot::Unloaded | Slot::Empty => Arc::new(VectorIndex::empty()),
        })
    }

    pub fn stats(&self) -> Result<IndexStats> {
        Ok(self.snapshot()?.stats())
    }

    pub fn status(&self) -> Result<IndexStatus> {
        let snapshot = self.snapshot()?;
        Ok(IndexStatus {
            state: self.state(),
            stats: snapshot.stats(),
            built_at: snapshot.built_at(),
            index_path: self.path.clone(),
        })
    }

    /// Run one build pass and publish the result.
    ///
    /// Without `force`, files whose content hash matches the current
    /// snapshot are not extracted again.
    pub fn build(
        &self,
        builder: &IndexBuilder,
        resources: &[Resource],
        force: bool,
    ) -> Result<BuildStats> {
        let _serial = self.build_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.building.store(true, Ordering::SeqCst);
        let _flag = BuildingGuard(&self.building);

        tracing::info!(
            "Starting {} build over {} resources",
            if force { "full" } else { "incremental" },
            resources.len()
        );

        let previous = if force {
            Arc::new(VectorIndex::empty())
        } else {
            self.snapshot()?
        };

        let (index, stats) = builder.assemble(&previous, resources, force);
        index_file::save(&self.path, &index)?;

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Slot::Ready(Arc::new(index));

        Ok(stats)
    }

    fn load_slot(&self) -> Result<Slot> {
        match index_file::load(&self.path) {
            Ok(Some(index)) => Ok(Slot::Ready(Arc::new(index))),
            Ok(None) => {
                tracing::info!("No index at {:?}, starting empty", self.path);
                Ok(Slot::Empty)
            }
            Err(e) if e.is_corrupt_index() => {
                tracing::warn!("Ignoring unusable index {:?}: {}", self.path, e);
                Ok(Slot::Empty)
            }
            Err(e) => Err(e),
        }
    }
}
