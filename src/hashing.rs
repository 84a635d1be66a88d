//! The two SHA-512 compositions prescribed by RFC 8032
//!
//! Signing and verification both hash the same `R || A || M` challenge;
//! routing every hash through this module keeps the two sides from
//! drifting apart. Ed25519 (the pure variant) uses the identity prehash
//! and an empty dom2 string, so no domain separator is ever prepended.

use curve25519_dalek::scalar::Scalar;
use sha2::{Digest, Sha512};

/// `SHA-512(prefix || M)` reduced to a scalar (RFC 8032 section 5.1.6
/// step 2). The result is the secret nonce `r`.
pub(crate) fn nonce_scalar(prefix: &[u8; 32], message: &[u8]) -> Scalar {
    let mut h = Sha512::new();
    h.update(prefix);
    h.update(message);
    wide_scalar(h)
}

/// `SHA-512(R || A || M)` reduced to a scalar (RFC 8032 section 5.1.6
/// step 4 and section 5.1.7 step 2).
pub(crate) fn challenge_scalar(r_enc: &[u8; 32], a_enc: &[u8; 32], message: &[u8]) -> Scalar {
    let mut h = Sha512::new();
    h.update(r_enc);
    h.update(a_enc);
    h.update(message);
    wide_scalar(h)
}

fn wide_scalar(h: Sha512) -> Scalar {
    let mut wide = [0u8; 64];
    wide.copy_from_slice(h.finalize().as_slice());
    Scalar::from_bytes_mod_order_wide(&wide)
}
