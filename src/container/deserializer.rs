//! Container decoding.
//!
//! Reads fields in the same fixed order the serializer writes them,
//! re-deriving every slice boundary from its length prefix. Decoding is
//! all-or-nothing: either a fully populated [`EncryptedContainer`] comes
//! back or a [`VaultError::Format`] does, with no partial state.

use crate::config::{CONTAINER_VERSION, MAX_FILENAME_LENGTH, NONCE_SIZE, SALT_SIZE};
use crate::container::EncryptedContainer;
use crate::error::{Result, VaultError};

/// Decodes a wire-format byte sequence into a container.
///
/// # Errors
///
/// Returns [`VaultError::Format`] when:
/// - fewer bytes remain than a length prefix declares,
/// - the version field is anything but the single supported version,
/// - the salt or nonce length prefix disagrees with the fixed 16/12 sizes,
/// - the filename or MIME bytes are not valid UTF-8,
/// - bytes remain after the last field (trailing garbage).
pub fn decode(bytes: &[u8]) -> Result<EncryptedContainer> {
    let mut reader = FieldReader::new(bytes);

    let version = reader.read_u32()?;
    if version != CONTAINER_VERSION {
        return Err(VaultError::format(format!(
            "unsupported version {version}, expected {CONTAINER_VERSION}"
        )));
    }

    let original_filename = read_text(&mut reader, "filename", MAX_FILENAME_LENGTH)?;
    let original_mime_type = read_text(&mut reader, "mime type", MAX_FILENAME_LENGTH)?;

    let salt: [u8; SALT_SIZE] = reader
        .read_field()?
        .try_into()
        .map_err(|_| VaultError::format(format!("salt is not {SALT_SIZE} bytes")))?;

    let nonce: [u8; NONCE_SIZE] = reader
        .read_field()?
        .try_into()
        .map_err(|_| VaultError::format(format!("nonce is not {NONCE_SIZE} bytes")))?;

    let encrypted_content = reader.read_field()?.to_vec();

    reader.finish()?;

    Ok(EncryptedContainer { version, original_filename, original_mime_type, salt, nonce, encrypted_content })
}

fn read_text(reader: &mut FieldReader<'_>, label: &str, max_len: usize) -> Result<String> {
    let raw = reader.read_field()?;
    if raw.len() > max_len {
        return Err(VaultError::format(format!("{label} exceeds {max_len} bytes")));
    }

    String::from_utf8(raw.to_vec()).map_err(|_| VaultError::format(format!("{label} is not valid UTF-8")))
}

/// Cursor over the input that tracks how many bytes have been consumed.
struct FieldReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> FieldReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn read_u32(&mut self) -> Result<u32> {
        let raw = self.take(4)?;
        Ok(u32::from_le_bytes(raw.try_into().expect("slice of length 4")))
    }

    /// Reads a u32 length prefix followed by that many raw bytes.
    fn read_field(&mut self) -> Result<&'a [u8]> {
        let len = self.read_u32()? as usize;
        self.take(len)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .offset
            .checked_add(len)
            .filter(|&end| end <= self.bytes.len())
            .ok_or_else(|| {
                VaultError::format(format!(
                    "truncated: need {len} bytes at offset {}, have {}",
                    self.offset,
                    self.bytes.len().saturating_sub(self.offset)
                ))
            })?;

        let slice = &self.bytes[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    /// Fails unless every input byte was consumed.
    fn finish(&self) -> Result<()> {
        if self.offset == self.bytes.len() {
            Ok(())
        } else {
            Err(VaultError::format(format!("{} trailing bytes after container", self.bytes.len() - self.offset)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{encode, sample_container};

    #[test]
    fn test_roundtrip() {
        let container = sample_container();
        let decoded = decode(&encode(&container)).unwrap();
        assert_eq!(decoded, container);
    }

    #[test]
    fn test_rejects_wrong_version() {
        let mut container = sample_container();
        container.version = 2;
        let err = decode(&encode(&container)).unwrap_err();
        assert!(matches!(err, VaultError::Format(_)), "got {err:?}");
    }

    #[test]
    fn test_rejects_version_zero() {
        let mut bytes = encode(&sample_container());
        bytes[0..4].copy_from_slice(&0u32.to_le_bytes());
        assert!(matches!(decode(&bytes), Err(VaultError::Format(_))));
    }

    #[test]
    fn test_rejects_truncation_at_every_boundary() {
        let bytes = encode(&sample_container());
        for len in 0..bytes.len() {
            let err = decode(&bytes[..len]).unwrap_err();
            assert!(matches!(err, VaultError::Format(_)), "prefix of {len} bytes: {err:?}");
        }
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        let mut bytes = encode(&sample_container());
        bytes.push(0);
        let err = decode(&bytes).unwrap_err();
        assert!(err.to_string().contains("trailing"));
    }

    #[test]
    fn test_rejects_oversized_length_prefix() {
        let mut bytes = encode(&sample_container());
        // inflate the filename length prefix beyond the available input
        bytes[4..8].copy_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(decode(&bytes), Err(VaultError::Format(_))));
    }

    #[test]
    fn test_rejects_bad_salt_length() {
        let mut container = sample_container();
        container.original_filename.clear();
        container.original_mime_type.clear();
        let mut bytes = encode(&container);
        // salt length prefix sits right after version + two empty text fields
        bytes[12..16].copy_from_slice(&8u32.to_le_bytes());
        assert!(matches!(decode(&bytes), Err(VaultError::Format(_))));
    }

    #[test]
    fn test_rejects_invalid_utf8_filename() {
        let container = sample_container();
        let mut bytes = encode(&container);
        bytes[8] = 0xFF;
        bytes[9] = 0xFE;
        let err = decode(&bytes).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_empty_input_is_truncated() {
        assert!(matches!(decode(&[]), Err(VaultError::Format(_))));
    }
}
