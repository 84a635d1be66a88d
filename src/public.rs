//! The Ed25519 public key type and signature verification

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use subtle::ConstantTimeEq;

use crate::constants::PUBLIC_KEY_SIZE;
use crate::error::{Error, Result};
use crate::hashing;
use crate::signature::Ed25519Signature;

/// An Ed25519 public key
///
/// Holds both the decompressed Edwards point and its canonical 32-byte
/// compression, so verification never pays the decompression cost and
/// encoding is a plain copy. Equality is defined on the compressed
/// encoding.
#[derive(Clone)]
pub struct Ed25519PublicKey {
    point: EdwardsPoint,
    compressed: CompressedEdwardsY,
}

impl Ed25519PublicKey {
    /// Decode a public key from its canonical 32-byte compressed form
    ///
    /// Fails if the input is not exactly 32 bytes or does not
    /// decompress to a point on the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(Error::InvalidPublicKey(format!(
                "invalid key size: expected {}, got {}",
                PUBLIC_KEY_SIZE,
                bytes.len()
            )));
        }

        let mut enc = [0u8; PUBLIC_KEY_SIZE];
        enc.copy_from_slice(bytes);
        let compressed = CompressedEdwardsY(enc);

        let point = compressed.decompress().ok_or_else(|| {
            Error::InvalidPublicKey("bytes do not encode a curve point".to_string())
        })?;

        Ok(Ed25519PublicKey { point, compressed })
    }

    pub(crate) fn from_point(point: EdwardsPoint) -> Self {
        let compressed = point.compress();
        Ed25519PublicKey { point, compressed }
    }

    /// Encode this public key to its compressed 32-byte form
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.compressed.to_bytes()
    }

    /// Borrow the compressed 32-byte form
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        self.compressed.as_bytes()
    }

    /// Verify a signature over a message with this public key
    ///
    /// Implements RFC 8032 section 5.1.7: recomputes the challenge
    /// `k = SHA-512(R || A || M)` and checks the group equation
    /// `[S]B = R + [k]A`, evaluated as `R' = [k](-A) + [S]B` with a
    /// variable-time double-scalar multiplication (all inputs here are
    /// public). The check compares the compressed encoding of `R'`
    /// byte-for-byte against the `R` stored in the signature, so a
    /// non-canonical or off-curve `R` never verifies.
    ///
    /// Returns `false` for any invalid signature; this function never
    /// errors and never panics.
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> bool {
        let k = hashing::challenge_scalar(signature.r_bytes(), self.compressed.as_bytes(), message);

        let minus_a = -self.point;
        let r_prime = EdwardsPoint::vartime_double_scalar_mul_basepoint(&k, &minus_a, signature.s());

        r_prime.compress().as_bytes().ct_eq(signature.r_bytes()).into()
    }
}

impl PartialEq for Ed25519PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.compressed == other.compressed
    }
}

impl Eq for Ed25519PublicKey {}

impl core::hash::Hash for Ed25519PublicKey {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.compressed.as_bytes().hash(state);
    }
}

impl core::fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed25519PublicKey")
            .field("compressed", self.compressed.as_bytes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_rejects_wrong_length() {
        assert!(matches!(
            Ed25519PublicKey::from_bytes(&[0u8; 31]),
            Err(Error::InvalidPublicKey(_))
        ));
        assert!(matches!(
            Ed25519PublicKey::from_bytes(&[0u8; 33]),
            Err(Error::InvalidPublicKey(_))
        ));
    }

    #[test]
    fn test_from_bytes_rejects_non_curve_point() {
        // y = 2 has no corresponding x on edwards25519.
        let mut enc = [0u8; 32];
        enc[0] = 0x02;
        assert!(matches!(
            Ed25519PublicKey::from_bytes(&enc),
            Err(Error::InvalidPublicKey(_))
        ));
    }

    #[test]
    fn test_round_trip() {
        // y = 1 encodes the identity element, which decompresses fine.
        let mut enc = [0u8; 32];
        enc[0] = 0x01;
        let key = Ed25519PublicKey::from_bytes(&enc).unwrap();
        assert_eq!(key.to_bytes(), enc);

        let again = Ed25519PublicKey::from_bytes(&key.to_bytes()).unwrap();
        assert_eq!(key, again);
    }
}
