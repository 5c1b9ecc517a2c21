//! Container encoding.

use crate::container::EncryptedContainer;

/// Encodes a container into its wire form.
///
/// Deterministic and total: field order is fixed (version, filename, mime,
/// salt, nonce, content), every variable-length field carries a little-endian
/// u32 length prefix, and the output length always equals
/// [`EncryptedContainer::encoded_len`]. Field sizes are bounded well below
/// `u32::MAX` by the 1 GiB input ceiling, so the length casts cannot truncate.
pub fn encode(container: &EncryptedContainer) -> Vec<u8> {
    let mut out = Vec::with_capacity(container.encoded_len());

    out.extend_from_slice(&container.version.to_le_bytes());

    put_field(&mut out, container.original_filename.as_bytes());
    put_field(&mut out, container.original_mime_type.as_bytes());
    put_field(&mut out, &container.salt);
    put_field(&mut out, &container.nonce);
    put_field(&mut out, &container.encrypted_content);

    out
}

#[inline]
fn put_field(out: &mut Vec<u8>, field: &[u8]) {
    out.extend_from_slice(&u32::try_from(field.len()).expect("field within u32 range").to_le_bytes());
    out.extend_from_slice(field);
}
