//! Candidate discovery for the interactive wizard.
//!
//! Walks a directory tree and splits regular files into plain sources and
//! `.ag` containers. Hidden entries are pruned by name. Eligibility here is
//! by name only; size and content checks happen when a candidate is
//! actually used.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::file::naming::is_container_file;

/// Files the wizard can offer for one direction: containers when
/// `want_containers` is set, plain sources otherwise.
pub fn find_candidates(root: &Path, want_containers: bool) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        // Depth 0 is the root itself; its name must not prune the walk.
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| is_container_file(path) == want_containers)
        .collect()
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
