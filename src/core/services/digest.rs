use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};

/// Length in bytes of a raw SHA-256 digest.
pub const SHA256_LEN: usize = 32;

/// Compute `base64(sha256(data))` using the standard padded alphabet.
pub fn sha256_base64(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    STANDARD.encode(hasher.finalize())
}

/// Whether `value` hashes to `expected`. Exact string comparison.
pub fn matches(value: &str, expected: &str) -> bool {
    sha256_base64(value.as_bytes()) == expected
}

/// Whether `digest` is a well-formed base64 SHA-256 digest.
pub fn is_well_formed(digest: &str) -> bool {
    STANDARD
        .decode(digest)
        .map(|bytes| bytes.len() == SHA256_LEN)
        .unwrap_or(false)
}
