use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::batch::{self, BatchPolicy};
use crate::config::PASSWORD_MIN_LENGTH;
use crate::error::VaultError;
use crate::file::discovery;
use crate::input_set::InputSet;
use crate::password;
use crate::pipeline;
use crate::secret::Password;
use crate::ui::prompt::WizardAction;
use crate::ui::{self, PercentBar};

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a single file into a .ag container.
    Encrypt {
        /// Input file path.
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (defaults to the input path plus .ag).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Password (prompted for when omitted).
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Decrypt a .ag container back into the original file.
    Decrypt {
        /// Input container path.
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (defaults to the name stored in the container).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Password (prompted for when omitted).
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Encrypt several files in one run under a single password.
    Batch {
        /// Input file paths, processed in the order given.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Label for the output group; becomes the output directory name.
        #[arg(short, long)]
        group: Option<String>,

        /// Directory the group directory is created in.
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Password (prompted for when omitted).
        #[arg(short, long)]
        password: Option<String>,

        /// Abort the whole batch on the first failing file instead of
        /// skipping it.
        #[arg(long)]
        strict: bool,
    },

    /// Run the guided wizard (also the default when no subcommand is given).
    Interactive,
}

#[derive(Parser)]
#[command(
    name = "agvault-rs",
    version,
    about = "Encrypt files into password-protected .ag containers using PBKDF2 and AES-256-GCM."
)]
pub struct App {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl App {
    pub fn init() -> Result<Self> {
        let subscriber = tracing_subscriber::fmt().with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(Self::parse())
    }

    pub async fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Encrypt { input, output, password }) => Self::run_encrypt(&input, output, password).await,
            Some(Commands::Decrypt { input, output, password }) => Self::run_decrypt(&input, output, password).await,
            Some(Commands::Batch { inputs, group, output_dir, password, strict }) => {
                Self::run_batch(&inputs, group.as_deref().unwrap_or_default(), &output_dir, password, strict).await
            }
            Some(Commands::Interactive) | None => Self::run_interactive().await,
        }
    }

    /// The guided mode: banner, operation selection, candidate discovery
    /// under the current directory, then the same paths the subcommands
    /// take, with every input prompted for instead of parsed.
    async fn run_interactive() -> Result<()> {
        ui::print_banner();

        match ui::prompt::wizard_action()? {
            WizardAction::EncryptOne => {
                let files = discovery::find_candidates(Path::new("."), false);
                if files.is_empty() {
                    bail!("no files eligible for encryption under the current directory");
                }
                let input = ui::prompt::select_file(&files)?;
                Self::run_encrypt(&input, None, None).await
            }
            WizardAction::DecryptOne => {
                let files = discovery::find_candidates(Path::new("."), true);
                if files.is_empty() {
                    bail!("no encrypted containers under the current directory");
                }
                let input = ui::prompt::select_file(&files)?;
                Self::run_decrypt(&input, None, None).await
            }
            WizardAction::EncryptBatch => {
                let files = discovery::find_candidates(Path::new("."), false);
                if files.is_empty() {
                    bail!("no files eligible for encryption under the current directory");
                }
                let inputs = ui::prompt::select_files(&files)?;
                let group = ui::prompt::group_label()?;
                Self::run_batch(&inputs, &group, Path::new("."), None, false).await
            }
        }
    }

    async fn run_encrypt(input: &Path, output: Option<PathBuf>, password: Option<String>) -> Result<()> {
        let password = match password {
            Some(p) => validated_password(p)?,
            None => ui::prompt::encryption_password()?,
        };

        let bar = PercentBar::new("Encrypting");
        let mut rng = rand::rng();
        let encrypted = pipeline::encrypt_file(input, &password, &mut rng, |p| bar.set(p)).await?;
        bar.finish();

        let output = output.unwrap_or_else(|| sibling_path(input, &encrypted.file_name));
        write_output(&output, &encrypted.bytes).await?;

        ui::show_success("Encrypted", &output);
        Ok(())
    }

    async fn run_decrypt(input: &Path, output: Option<PathBuf>, password: Option<String>) -> Result<()> {
        let password = match password {
            Some(p) => Password::from_string(p),
            None => ui::prompt::decryption_password()?,
        };

        let bar = PercentBar::new("Decrypting");
        let decrypted = pipeline::decrypt_file(input, &password, |p| bar.set(p)).await.map_err(friendly_decrypt_error)?;
        bar.finish();

        tracing::debug!(mime = %decrypted.mime_type, "recovered container metadata");

        // The output name comes from the container, not from the artifact's
        // on-disk name.
        let output = output.unwrap_or_else(|| sibling_path(input, &decrypted.file_name));
        write_output(&output, &decrypted.bytes).await?;

        ui::show_success("Decrypted", &output);
        Ok(())
    }

    async fn run_batch(inputs: &[PathBuf], group: &str, output_dir: &Path, password: Option<String>, strict: bool) -> Result<()> {
        let mut set = InputSet::new();
        let rejections = set.add(inputs).await;
        ui::show_rejections(&rejections);

        if set.is_empty() {
            bail!("none of the given files can be encrypted");
        }

        ui::show_selection(&set);

        let password = match password {
            Some(p) => validated_password(p)?,
            None => ui::prompt::encryption_password()?,
        };

        let policy = if strict { BatchPolicy::AllOrNothing } else { BatchPolicy::SkipFailed };

        let bar = PercentBar::new("Encrypting batch");
        let total = set.len();
        let mut rng = rand::rng();
        let outcome = batch::encrypt_batch(&set.paths(), &password, group, policy, &mut rng, |p| {
            bar.set_message(&format!("Encrypting file {}/{total}", p.file_index + 1));
            bar.set(p.overall);
        })
        .await?;
        bar.finish();

        let group_dir = output_dir.join(&outcome.group_name);
        tokio::fs::create_dir_all(&group_dir).await.with_context(|| format!("failed to create {}", group_dir.display()))?;

        for output in &outcome.outputs {
            write_output(&group_dir.join(&output.file_name), &output.bytes).await?;
        }

        ui::show_batch_summary(&outcome);
        Ok(())
    }
}

/// Checks a password given on the command line against the same policy the
/// interactive prompt enforces.
fn validated_password(raw: String) -> Result<Password> {
    let report = password::assess(&raw);
    if !report.is_valid {
        bail!("password must be at least {PASSWORD_MIN_LENGTH} characters long");
    }
    Ok(Password::from_string(raw))
}

/// Places `name` next to `reference` in the same directory.
fn sibling_path(reference: &Path, name: &str) -> PathBuf {
    reference.parent().map_or_else(|| PathBuf::from(name), |dir| dir.join(name))
}

async fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if path.exists() && !ui::prompt::confirm_overwrite(path)? {
        bail!("operation canceled");
    }

    tokio::fs::write(path, bytes).await.with_context(|| format!("failed to write {}", path.display()))
}

/// Presentation-layer phrasing for decrypt failures. The core reports one
/// undifferentiated authentication error; the guidance text here is a
/// convenience for users, not a diagnosis the cipher can actually make.
fn friendly_decrypt_error(err: VaultError) -> anyhow::Error {
    match err {
        VaultError::Authentication => anyhow!("invalid password, or the container has been tampered with"),
        VaultError::Format(detail) => anyhow!("this file is not a valid container (it may be corrupted): {detail}"),
        other => other.into(),
    }
}
