//! Ed25519 private key material: the seed and its expanded form

use curve25519_dalek::constants::ED25519_BASEPOINT_TABLE;
use curve25519_dalek::scalar::Scalar;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};
use zeroize::Zeroize;

use crate::constants::SECRET_KEY_SIZE;
use crate::error::{Error, Result};
use crate::hashing;
use crate::public::Ed25519PublicKey;
use crate::signature::Ed25519Signature;

/// An Ed25519 private key: a 32-byte seed
///
/// Every 32-byte string is a valid seed. The seed is never used as a
/// scalar directly; it is only ever an input to SHA-512. Input and
/// output bytes are copied defensively so callers cannot alias the
/// stored material.
#[derive(Clone)]
pub struct Ed25519PrivateKey {
    seed: [u8; SECRET_KEY_SIZE],
}

impl Ed25519PrivateKey {
    /// Generate a new private key from a cryptographically secure RNG
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut seed = [0u8; SECRET_KEY_SIZE];
        rng.fill_bytes(&mut seed);
        Ed25519PrivateKey { seed }
    }

    /// Construct a private key from a 32-byte seed
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SECRET_KEY_SIZE {
            return Err(Error::InvalidSeed {
                expected: SECRET_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut seed = [0u8; SECRET_KEY_SIZE];
        seed.copy_from_slice(bytes);
        Ok(Ed25519PrivateKey { seed })
    }

    /// Export the seed. This is what should be persisted; treat the
    /// returned bytes as secret key material.
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_SIZE] {
        self.seed
    }

    /// Expand this seed into signing material (RFC 8032 section 5.1.5)
    ///
    /// Hashes the seed with SHA-512, prunes the lower half into the
    /// secret scalar `s`, keeps the upper half as the nonce prefix, and
    /// derives the public key `A = [s]B`. This costs one hash and one
    /// fixed-base scalar multiplication; expand once per seed and reuse
    /// the result.
    pub fn expand(&self) -> Ed25519ExpandedPrivateKey {
        let mut digest = [0u8; 64];
        digest.copy_from_slice(Sha512::digest(self.seed).as_slice());

        let mut lower = [0u8; 32];
        let mut prefix = [0u8; 32];
        lower.copy_from_slice(&digest[..32]);
        prefix.copy_from_slice(&digest[32..]);
        digest.zeroize();

        // Prune the lower half (RFC 8032 section 5.1.5 step 2).
        lower[0] &= 248; // Clear bits 0, 1, 2
        lower[31] &= 127; // Clear bit 255
        lower[31] |= 64; // Set bit 254

        let s = Scalar::from_bytes_mod_order(lower);
        lower.zeroize();

        let public = Ed25519PublicKey::from_point(ED25519_BASEPOINT_TABLE * &s);

        Ed25519ExpandedPrivateKey { s, prefix, public }
    }
}

impl Zeroize for Ed25519PrivateKey {
    fn zeroize(&mut self) {
        self.seed.zeroize();
    }
}

impl Drop for Ed25519PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl core::fmt::Debug for Ed25519PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed25519PrivateKey")
            .field("algorithm", &"Ed25519")
            .finish()
    }
}

/// An Ed25519 expanded private key: the secret scalar `s`, the nonce
/// prefix, and the cached public key `A = [s]B`
///
/// The public key is computed during expansion and can never be
/// substituted by a caller: signing with an attacker-chosen `A` lets two
/// signatures over the same message recover the secret scalar, so no
/// such parameter exists.
#[derive(Clone)]
pub struct Ed25519ExpandedPrivateKey {
    s: Scalar,
    prefix: [u8; 32],
    public: Ed25519PublicKey,
}

impl Ed25519ExpandedPrivateKey {
    /// The public key derived from this key's secret scalar
    pub fn public_key(&self) -> &Ed25519PublicKey {
        &self.public
    }

    /// Sign a message with this expanded private key (RFC 8032 section
    /// 5.1.6)
    ///
    /// Deterministic: the same key and message always produce the same
    /// signature. Only constant-time primitives touch the secret
    /// scalar and prefix.
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        // r = SHA-512(prefix || M), R = [r]B (steps 2-3).
        let r = hashing::nonce_scalar(&self.prefix, message);
        let r_point = (ED25519_BASEPOINT_TABLE * &r).compress();

        // k = SHA-512(R || A || M) (step 4). A is always the cached
        // public key.
        let k = hashing::challenge_scalar(r_point.as_bytes(), self.public.as_bytes(), message);

        // S = (r + k * s) mod L (step 5).
        let s = r + k * self.s;

        Ed25519Signature::from_parts(r_point, s)
    }
}

impl Zeroize for Ed25519ExpandedPrivateKey {
    fn zeroize(&mut self) {
        self.s.zeroize();
        self.prefix.zeroize();
    }
}

impl Drop for Ed25519ExpandedPrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl core::fmt::Debug for Ed25519ExpandedPrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed25519ExpandedPrivateKey")
            .field("algorithm", &"Ed25519")
            .finish()
    }
}
