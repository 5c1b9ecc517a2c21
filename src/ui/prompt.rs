//! Interactive prompts for passwords, wizard selections, and confirmations.

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use inquire::{Confirm, MultiSelect, Password, PasswordDisplayMode, Select, Text};

use crate::config::{DEFAULT_GROUP_NAME, PASSWORD_MIN_LENGTH};
use crate::password;
use crate::secret::Password as SecretPassword;

/// What the wizard has been asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    EncryptOne,
    DecryptOne,
    EncryptBatch,
}

/// Asks which operation the wizard should run.
pub fn wizard_action() -> Result<WizardAction> {
    let choice = Select::new(
        "What would you like to do?",
        vec!["Encrypt a file", "Decrypt a container", "Encrypt several files together"],
    )
    .prompt()
    .context("operation selection failed")?;

    Ok(match choice {
        "Encrypt a file" => WizardAction::EncryptOne,
        "Decrypt a container" => WizardAction::DecryptOne,
        _ => WizardAction::EncryptBatch,
    })
}

/// Asks the user to pick one file from the discovered candidates.
pub fn select_file(files: &[PathBuf]) -> Result<PathBuf> {
    ensure!(!files.is_empty(), "no files available for selection");

    let names: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
    let selected = Select::new("Select a file", names).raw_prompt().context("file selection failed")?;
    Ok(files[selected.index].clone())
}

/// Asks the user to pick one or more files for a batch run.
pub fn select_files(files: &[PathBuf]) -> Result<Vec<PathBuf>> {
    ensure!(!files.is_empty(), "no files available for selection");

    let names: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
    let selected = MultiSelect::new("Select files to encrypt", names).raw_prompt().context("file selection failed")?;
    ensure!(!selected.is_empty(), "no files selected");

    Ok(selected.into_iter().map(|option| files[option.index].clone()).collect())
}

/// Asks for the batch group label.
pub fn group_label() -> Result<String> {
    Text::new("Group name").with_default(DEFAULT_GROUP_NAME).prompt().context("group name prompt failed")
}

/// Prompts for an encryption password with confirmation.
///
/// Typos here are unrecoverable later, so the password is entered twice and
/// the strength tier is echoed back before proceeding.
pub fn encryption_password() -> Result<SecretPassword> {
    let entered = prompt_password("Enter encryption password")?;

    let report = password::assess(&entered);
    ensure!(report.is_valid, "password must be at least {PASSWORD_MIN_LENGTH} characters long");

    println!("  password strength: {}", report.strength.label());

    let confirmation = prompt_password("Confirm password")?;
    ensure!(entered == confirmation, "passwords do not match");

    Ok(SecretPassword::from_string(entered))
}

/// Prompts for a decryption password.
///
/// No confirmation and no strength gate: the only judge of a decryption
/// password is the authentication tag.
pub fn decryption_password() -> Result<SecretPassword> {
    let entered = prompt_password("Enter decryption password")?;
    ensure!(!entered.is_empty(), "password cannot be empty");
    Ok(SecretPassword::from_string(entered))
}

fn prompt_password(message: &str) -> Result<String> {
    Password::new(message)
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("password prompt failed")
}

/// Asks whether an existing file may be overwritten.
pub fn confirm_overwrite(path: &std::path::Path) -> Result<bool> {
    Confirm::new(&format!("\"{}\" already exists. Overwrite?", path.display()))
        .with_default(false)
        .prompt()
        .context("confirmation prompt failed")
}
