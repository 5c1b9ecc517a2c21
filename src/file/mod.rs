//! File-side helpers: candidate discovery, validated whole-file reads,
//! output naming, and MIME guessing for container metadata.

pub mod discovery;
pub mod mime;
pub mod naming;
pub mod operations;

pub use discovery::find_candidates;
pub use mime::guess_mime;
pub use naming::{encrypted_name, is_container_file, sanitize_name};
pub use operations::{check_source, read_source, source_size};
