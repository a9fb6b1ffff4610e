use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of a byte slice.
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}
