//! Content fingerprint of raw input.

use sha2::{Digest, Sha256};

/// SHA-256 of raw input bytes as 64 lowercase hex digits.
pub fn fingerprint(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
