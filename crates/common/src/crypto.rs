//! Password digest utilities
//!
//! Accounts store the SHA-256 of the UTF-8 password as lowercase hex. This
//! is a placeholder scheme, not a credential-grade KDF; it must stay
//! byte-for-byte identical so digests already stored in the `useraccount`
//! collection keep verifying.

use sha2::{Digest, Sha256};

/// Digest a plaintext password: lowercase hex of `sha256(utf8(password))`.
pub fn hash_password(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compare a candidate password against a stored digest in constant time.
pub fn verify_password(candidate: &str, stored_digest: &str) -> bool {
    let candidate_digest = hash_password(candidate);
    let candidate = candidate_digest.as_bytes();
    let stored = stored_digest.as_bytes();

    if candidate.len() != stored.len() {
        return false;
    }

    let mut result = 0u8;
    for (a, b) in candidate.iter().zip(stored.iter()) {
        result |= a ^ b;
    }
    result == 0
}
