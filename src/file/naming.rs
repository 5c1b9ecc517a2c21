use std::path::Path;

use crate::config::{DEFAULT_GROUP_NAME, FILE_EXTENSION};

/// Output name for an encrypted file: the source name with `.ag` appended.
pub fn encrypted_name(source_name: &str) -> String {
    format!("{source_name}{FILE_EXTENSION}")
}

/// True when the path carries the container extension.
///
/// A hint only; the decode step is the authoritative check.
pub fn is_container_file(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().ends_with(FILE_EXTENSION)
}

/// Plain file name of a path, lossily decoded.
pub fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(|| path.to_string_lossy().into_owned(), |n| n.to_string_lossy().into_owned())
}

/// Sanitizes a caller-supplied group or file name to a filesystem-safe
/// character set. Empty or all-invalid input falls back to the default
/// group name.
pub fn sanitize_name(name: &str) -> String {
    const INVALID: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

    let cleaned: String = name.chars().map(|c| if INVALID.contains(&c) || c.is_control() { '_' } else { c }).collect();

    let cleaned = cleaned.trim().to_string();
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '_' || c == '.') {
        DEFAULT_GROUP_NAME.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypted_name_appends_extension() {
        assert_eq!(encrypted_name("report.pdf"), "report.pdf.ag");
        assert_eq!(encrypted_name("no_extension"), "no_extension.ag");
    }

    #[test]
    fn test_is_container_file() {
        assert!(is_container_file(Path::new("photo.jpg.ag")));
        assert!(!is_container_file(Path::new("photo.jpg")));
        assert!(!is_container_file(Path::new("archive.tar.gz")));
    }

    #[test]
    fn test_sanitize_replaces_invalid_characters() {
        assert_eq!(sanitize_name("my/secret:files"), "my_secret_files");
        assert_eq!(sanitize_name("  padded  "), "padded");
    }

    #[test]
    fn test_sanitize_falls_back_on_empty() {
        assert_eq!(sanitize_name(""), DEFAULT_GROUP_NAME);
        assert_eq!(sanitize_name("///"), DEFAULT_GROUP_NAME);
    }

    #[test]
    fn test_sanitize_keeps_ordinary_names() {
        assert_eq!(sanitize_name("vacation_photos-2024"), "vacation_photos-2024");
    }
}
