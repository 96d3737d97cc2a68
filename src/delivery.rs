//! Temporary storage for rendered documents awaiting download.
//!
//! A rendered PDF is parked in a [BlobStore] under a [BlobHandle] until the
//! user saves it. Every blob is released [RELEASE_DELAY] after it was
//! created whether or not it was ever saved, so an abandoned download can't
//! hold on to its bytes forever. Expired blobs are dropped whenever a new
//! one is created, and [BlobStore::release_expired] can be polled to drop
//! them sooner. Releasing a blob twice is harmless.
//!
//! # Example
//!
//! ```
//! use grid_paper::delivery::{BlobStore, RELEASE_DELAY};
//! use std::time::Instant;
//!
//! let mut store = BlobStore::default();
//! let now = Instant::now();
//! let handle = store.create_at("grid.pdf", b"%PDF-1.7".to_vec(), now);
//!
//! assert_eq!(store.release_expired(now), 0);
//! assert_eq!(store.release_expired(now + RELEASE_DELAY), 1);
//! assert!(!store.revoke(handle));
//! ```

use crate::error::GridError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// How long a blob stays available after it was created
pub const RELEASE_DELAY: Duration = Duration::from_secs(60);

/// Refers to a blob in a [BlobStore]. Handles are never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BlobHandle(u64);

#[derive(Debug)]
struct Blob {
    filename: String,
    bytes: Vec<u8>,
    release_at: Instant,
}

#[derive(Debug, Default)]
pub struct BlobStore {
    blobs: HashMap<BlobHandle, Blob>,
    next_handle: u64,
}

impl BlobStore {
    /// Park a payload for download, scheduling its release
    pub fn create<S: ToString>(&mut self, filename: S, bytes: Vec<u8>) -> BlobHandle {
        self.create_at(filename, bytes, Instant::now())
    }

    /// Like [BlobStore::create], with an explicit creation time
    pub fn create_at<S: ToString>(
        &mut self,
        filename: S,
        bytes: Vec<u8>,
        now: Instant,
    ) -> BlobHandle {
        self.release_expired(now);
        let handle = BlobHandle(self.next_handle);
        self.next_handle += 1;
        self.blobs.insert(
            handle,
            Blob {
                filename: filename.to_string(),
                bytes,
                release_at: now + RELEASE_DELAY,
            },
        );
        handle
    }

    /// The payload behind a handle, if it hasn't been released yet
    pub fn get(&self, handle: BlobHandle) -> Option<&[u8]> {
        self.blobs.get(&handle).map(|blob| blob.bytes.as_slice())
    }

    pub fn filename(&self, handle: BlobHandle) -> Option<&str> {
        self.blobs.get(&handle).map(|blob| blob.filename.as_str())
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    /// Release a blob ahead of its schedule. Returns `false` if it was
    /// already gone.
    pub fn revoke(&mut self, handle: BlobHandle) -> bool {
        self.blobs.remove(&handle).is_some()
    }

    /// Release every blob whose release time is at or before `now`,
    /// returning how many were released
    pub fn release_expired(&mut self, now: Instant) -> usize {
        let before = self.blobs.len();
        self.blobs.retain(|_, blob| blob.release_at > now);
        let released = before - self.blobs.len();
        if released > 0 {
            tracing::debug!(released, remaining = self.blobs.len(), "released blobs");
        }
        released
    }

    /// Write a blob into `dir` under its filename, returning the path written
    pub fn save(&self, handle: BlobHandle, dir: impl AsRef<Path>) -> Result<PathBuf, GridError> {
        let blob = self.blobs.get(&handle).ok_or(GridError::BlobReleased)?;
        let path = dir.as_ref().join(&blob.filename);
        std::fs::write(&path, &blob.bytes)?;
        tracing::debug!(path = %path.display(), bytes = blob.bytes.len(), "saved blob");
        Ok(path)
    }
}
