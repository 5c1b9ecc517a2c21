//! AgVault - password-protected file containers.
//!
//! Turns any file into a self-contained encrypted `.ag` container and back:
//! - PBKDF2-HMAC-SHA256 (100,000 iterations) for key derivation
//! - AES-256-GCM for authenticated encryption
//! - a fixed little-endian container format carrying the original
//!   filename and MIME type alongside the per-encryption salt and nonce
//! - sequential batch encryption with per-file progress and
//!   partial-failure tolerance

pub mod app;
pub mod batch;
pub mod config;
pub mod container;
pub mod crypto;
pub mod error;
pub mod file;
pub mod input_set;
pub mod password;
pub mod pipeline;
pub mod secret;
pub mod ui;
