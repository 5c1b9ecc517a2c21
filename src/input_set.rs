//! The ordered set of candidate files feeding a batch run.
//!
//! All operations are synchronous bookkeeping over an in-memory list; the
//! only I/O is the size lookup during `add`. No operation can leave the
//! collection in an inconsistent state. Concurrent batches over one set are
//! not supported; callers serialize access themselves.

use std::path::{Path, PathBuf};

use crate::file::check_source;

/// One admitted candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub size: u64,
}

/// Ordered collection of files selected for encryption.
#[derive(Debug, Default)]
pub struct InputSet {
    entries: Vec<Candidate>,
}

impl InputSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and admits candidates.
    ///
    /// Every valid candidate is appended in the order given, even when
    /// siblings are rejected; the returned list holds one error string per
    /// rejected candidate (empty file, over the size ceiling, unreadable).
    pub async fn add<P: AsRef<Path>>(&mut self, paths: &[P]) -> Vec<String> {
        let mut rejections = Vec::new();

        for path in paths {
            let path = path.as_ref();
            match check_source(path).await {
                Ok(size) => self.entries.push(Candidate { path: path.to_path_buf(), size }),
                Err(err) => rejections.push(err.to_string()),
            }
        }

        rejections
    }

    /// Removes the candidate at `index`, preserving the order of the rest.
    /// Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    /// Moves the candidate at `from` to position `to`, preserving the
    /// relative order of all other candidates.
    ///
    /// Callers must pass in-range indices; out-of-range input is a contract
    /// violation and the call does nothing.
    pub fn reorder(&mut self, from: usize, to: usize) {
        let len = self.entries.len();
        if from >= len || to >= len || from == to {
            return;
        }

        let candidate = self.entries.remove(from);
        self.entries.insert(to, candidate);
    }

    /// Drops every candidate.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.entries
    }

    /// Paths in batch order, the shape the orchestrator consumes.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|c| c.path.clone()).collect()
    }

    /// Total size of all admitted candidates in bytes.
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|c| c.size).sum()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    async fn populated_set(dir: &tempfile::TempDir, names: &[&str]) -> InputSet {
        let mut set = InputSet::new();
        let mut paths = Vec::new();
        for name in names {
            let path = dir.path().join(name);
            std::fs::write(&path, name.as_bytes()).unwrap();
            paths.push(path);
        }
        assert!(set.add(&paths).await.is_empty());
        set
    }

    fn names(set: &InputSet) -> Vec<String> {
        set.candidates().iter().map(|c| c.path.file_name().unwrap().to_string_lossy().into_owned()).collect()
    }

    #[tokio::test]
    async fn test_add_admits_valid_rejects_invalid() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let empty = dir.path().join("empty.txt");
        std::fs::write(&good, b"content").unwrap();
        std::fs::write(&empty, b"").unwrap();
        let missing = dir.path().join("missing.txt");

        let mut set = InputSet::new();
        let rejections = set.add(&[good, empty, missing]).await;

        assert_eq!(set.len(), 1);
        assert_eq!(rejections.len(), 2);
        assert!(rejections[0].contains("empty"));
        assert!(rejections[1].contains("not found"));
    }

    #[tokio::test]
    async fn test_add_preserves_given_order() {
        let dir = tempdir().unwrap();
        let set = populated_set(&dir, &["one", "two", "three"]).await;
        assert_eq!(names(&set), ["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_remove_preserves_relative_order() {
        let dir = tempdir().unwrap();
        let mut set = populated_set(&dir, &["a", "b", "c"]).await;

        set.remove(1);
        assert_eq!(names(&set), ["a", "c"]);

        set.remove(99); // ignored
        assert_eq!(set.len(), 2);
    }

    #[tokio::test]
    async fn test_reorder_moves_and_preserves_others() {
        let dir = tempdir().unwrap();
        let mut set = populated_set(&dir, &["a", "b", "c", "d"]).await;

        set.reorder(0, 2);
        assert_eq!(names(&set), ["b", "c", "a", "d"]);

        set.reorder(3, 0);
        assert_eq!(names(&set), ["d", "b", "c", "a"]);
    }

    #[tokio::test]
    async fn test_reorder_out_of_range_is_noop() {
        let dir = tempdir().unwrap();
        let mut set = populated_set(&dir, &["a", "b"]).await;

        set.reorder(5, 0);
        set.reorder(0, 5);
        assert_eq!(names(&set), ["a", "b"]);
    }

    #[tokio::test]
    async fn test_clear() {
        let dir = tempdir().unwrap();
        let mut set = populated_set(&dir, &["a", "b"]).await;

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.total_size(), 0);
    }

    #[tokio::test]
    async fn test_total_size() {
        let dir = tempdir().unwrap();
        let set = populated_set(&dir, &["one", "three"]).await;
        assert_eq!(set.total_size(), 8);
    }
}
