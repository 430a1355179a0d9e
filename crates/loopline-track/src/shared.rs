//! Shared access to a path for hosts that evaluate on worker threads.

use std::sync::{Arc, RwLock};

use loopline_core::{LoopError, Result};
use loopline_spline::Path;

/// A path behind a single-writer/multiple-reader lock.
///
/// Readers either evaluate under the read lock or take a [`snapshot`] and
/// evaluate without holding it.
///
/// [`snapshot`]: SharedTrack::snapshot
#[derive(Debug, Clone, Default)]
pub struct SharedTrack {
    inner: Arc<RwLock<Path>>,
}

impl SharedTrack {
    pub fn new(path: Path) -> Self {
        Self {
            inner: Arc::new(RwLock::new(path)),
        }
    }

    /// Run `f` with shared read access.
    pub fn read<R>(&self, f: impl FnOnce(&Path) -> R) -> Result<R> {
        let guard = self
            .inner
            .read()
            .map_err(|e| LoopError::Poisoned(e.to_string()))?;
        Ok(f(&guard))
    }

    /// Run `f` with exclusive write access.
    pub fn write<R>(&self, f: impl FnOnce(&mut Path) -> R) -> Result<R> {
        let mut guard = self
            .inner
            .write()
            .map_err(|e| LoopError::Poisoned(e.to_string()))?;
        Ok(f(&mut guard))
    }

    /// Owned copy of the current path.
    pub fn snapshot(&self) -> Result<Path> {
        self.read(Path::clone)
    }
}
