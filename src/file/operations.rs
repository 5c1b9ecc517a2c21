use std::path::Path;

use bytesize::ByteSize;

use crate::config::MAX_FILE_SIZE;
use crate::error::{Result, VaultError};

/// Returns the size of a file on disk.
///
/// # Errors
///
/// [`VaultError::Validation`] when the path does not exist or is not a
/// regular file.
pub async fn source_size(path: &Path) -> Result<u64> {
    let meta = tokio::fs::metadata(path)
        .await
        .map_err(|_| VaultError::validation(format!("file not found: {}", path.display())))?;

    if !meta.is_file() {
        return Err(VaultError::validation(format!("not a regular file: {}", path.display())));
    }

    Ok(meta.len())
}

/// Checks a candidate file against the empty/oversized policy.
///
/// # Errors
///
/// [`VaultError::Validation`] for a missing, empty, or oversized file.
pub async fn check_source(path: &Path) -> Result<u64> {
    let size = source_size(path).await?;

    if size == 0 {
        return Err(VaultError::validation(format!("file \"{}\" is empty and cannot be encrypted", path.display())));
    }

    if size > MAX_FILE_SIZE {
        return Err(VaultError::validation(format!(
            "file \"{}\" ({}) exceeds the {} limit",
            path.display(),
            ByteSize(size),
            ByteSize(MAX_FILE_SIZE)
        )));
    }

    Ok(size)
}

/// Reads a whole source file into memory after validating it.
///
/// No streaming mode exists: the size ceiling makes whole-file reads the
/// simpler and sufficient choice.
pub async fn read_source(path: &Path) -> Result<Vec<u8>> {
    check_source(path).await?;
    Ok(tokio::fs::read(path).await?)
}
