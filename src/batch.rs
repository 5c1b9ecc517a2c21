//! Multi-file batch encryption.
//!
//! Drives the single-file pipeline over an ordered set of files under one
//! password, one progress aggregation, and one failure policy. Files are
//! processed strictly sequentially; output order always matches input
//! order. There is no decrypt counterpart: a decrypted batch's outputs are
//! unrelated by construction, so decryption stays single-file.

use std::path::PathBuf;

use rand::{CryptoRng, RngCore};

use crate::config::PASSWORD_MIN_LENGTH;
use crate::error::{Result, VaultError};
use crate::file::sanitize_name;
use crate::pipeline::{self, EncryptedOutput};
use crate::secret::Password;

/// Lifecycle of one file within a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Pending,
    InProgress,
    Done,
    Failed,
}

/// Per-file tracking state, owned by the batch run from start to finish.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub path: PathBuf,
    /// Position in the input list; also the output position on success.
    pub index: usize,
    pub status: ItemStatus,
    /// Last reported progress within this file, 0 to 100.
    pub progress: u8,
    /// Failure detail, present exactly when `status` is `Failed`.
    pub error: Option<String>,
}

impl BatchItem {
    fn pending(path: PathBuf, index: usize) -> Self {
        Self { path, index, status: ItemStatus::Pending, progress: 0, error: None }
    }
}

/// What to do when an individual file fails.
///
/// The lenient mode matches the historical behavior of skipping bad files
/// and returning whatever succeeded; callers that need all-or-nothing
/// semantics ask for them explicitly instead of pre-validating by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Record the failure on the item and continue with the next file.
    SkipFailed,
    /// Abort the whole batch on the first per-file failure.
    AllOrNothing,
}

/// One progress tick during a batch run.
#[derive(Debug, Clone, Copy)]
pub struct BatchProgress {
    pub file_index: usize,
    pub total_files: usize,
    /// Progress within the current file, 0 to 100.
    pub file_progress: u8,
    /// Aggregate batch progress, non-decreasing over the run.
    pub overall: u8,
}

/// Everything a completed batch run produced.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Successful outputs, in input order.
    pub outputs: Vec<EncryptedOutput>,
    /// Sanitized caller-supplied label for the output group.
    pub group_name: String,
    /// Final per-file state, including failures.
    pub items: Vec<BatchItem>,
}

/// Encrypts an ordered list of files under one password.
///
/// The password is checked against the minimum length once for the whole
/// batch. Under [`BatchPolicy::SkipFailed`] a per-file failure is recorded
/// on its item and siblings continue; the batch as a whole fails only when
/// zero files succeed. Under [`BatchPolicy::AllOrNothing`] the first
/// per-file failure aborts the run and is returned as the batch error.
/// On success the final progress tick always reports an overall of 100,
/// even when trailing files were skipped.
///
/// # Errors
///
/// [`VaultError::Validation`] for a too-short password, an empty input
/// list, or a run with zero successes; under the strict policy, whatever
/// error the failing file produced.
pub async fn encrypt_batch<R, F>(
    paths: &[PathBuf],
    password: &Password,
    group_name: &str,
    policy: BatchPolicy,
    rng: &mut R,
    mut on_progress: F,
) -> Result<BatchOutcome>
where
    R: RngCore + CryptoRng,
    F: FnMut(BatchProgress),
{
    if password.expose_secret().chars().count() < PASSWORD_MIN_LENGTH {
        return Err(VaultError::validation(format!("password must be at least {PASSWORD_MIN_LENGTH} characters long")));
    }

    if paths.is_empty() {
        return Err(VaultError::validation("no files to encrypt"));
    }

    let total = paths.len();
    let group_name = sanitize_name(group_name);
    let mut items: Vec<BatchItem> = paths.iter().enumerate().map(|(i, p)| BatchItem::pending(p.clone(), i)).collect();
    let mut outputs = Vec::with_capacity(total);

    for index in 0..total {
        items[index].status = ItemStatus::InProgress;
        on_progress(BatchProgress { file_index: index, total_files: total, file_progress: 0, overall: overall(index, total, 0) });

        let mut file_progress = 0u8;
        let result = pipeline::encrypt_file(&paths[index], password, rng, |p| {
            file_progress = p;
            on_progress(BatchProgress { file_index: index, total_files: total, file_progress: p, overall: overall(index, total, p) });
        })
        .await;

        items[index].progress = file_progress;

        match result {
            Ok(output) => {
                items[index].status = ItemStatus::Done;
                items[index].progress = 100;
                outputs.push(output);
            }
            Err(err) => {
                items[index].status = ItemStatus::Failed;
                items[index].error = Some(err.to_string());

                if policy == BatchPolicy::AllOrNothing {
                    return Err(err);
                }
            }
        }
    }

    if outputs.is_empty() {
        return Err(VaultError::validation("no files were successfully encrypted"));
    }

    // A skipped trailing file would otherwise leave the last emitted tick
    // short of 100 even though the run is over.
    on_progress(BatchProgress { file_index: total - 1, total_files: total, file_progress: items[total - 1].progress, overall: 100 });

    Ok(BatchOutcome { outputs, group_name, items })
}

/// Aggregate progress: files before the current one count as fully done,
/// the current file contributes its own percentage, all scaled by the
/// batch size. Recomputed on every tick, never cached.
fn overall(completed: usize, total: usize, current: u8) -> u8 {
    debug_assert!(total > 0);
    u8::try_from((completed * 100 + current as usize) / total).unwrap_or(100)
}
