use crate::backend::{Storage, StorageError};
use log::warn;

/// Storage key holding the JSON-encoded list of viewed course ids
pub const VIEWED_COURSES_KEY: &str = "viewedCourses";

/// Tracks which courses the user has opened, in first-viewed order
///
/// The set grows monotonically within a session and survives restarts
/// through the backing [`Storage`]. Malformed stored content is treated
/// as the empty set.
pub struct ViewedCourses<S: Storage> {
    storage: S,
    ids: Vec<String>,
}

impl<S: Storage> ViewedCourses<S> {
    /// Reads the viewed set from storage; absent or unparseable content
    /// yields the empty set
    pub fn load(storage: S) -> Self {
        let ids = Self::read(&storage);
        Self { storage, ids }
    }

    fn read(storage: &S) -> Vec<String> {
        match storage.get(VIEWED_COURSES_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Discarding malformed viewed-course data: {e}");
                Vec::new()
            }),
            None => Vec::new(),
        }
    }

    /// Marks a course as viewed and writes the full set back to storage.
    /// Marking an already-viewed id is a no-op. Returns whether the set
    /// changed.
    pub fn mark_viewed(&mut self, id: &str) -> Result<bool, StorageError> {
        if self.contains(id) {
            return Ok(false);
        }

        self.ids.push(id.to_string());
        let encoded = serde_json::to_string(&self.ids)?;
        self.storage.set(VIEWED_COURSES_KEY, &encoded)?;

        Ok(true)
    }

    /// Re-reads the set from storage, picking up out-of-band writes
    pub fn refresh(&mut self) {
        self.ids = Self::read(&self.storage);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|viewed| viewed == id)
    }

    /// The viewed ids, in first-viewed order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
