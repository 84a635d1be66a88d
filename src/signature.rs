//! The Ed25519 signature type and its 64-byte wire codec

use curve25519_dalek::edwards::CompressedEdwardsY;
use curve25519_dalek::scalar::Scalar;

use crate::constants::SIGNATURE_SIZE;
use crate::error::{Error, Result};

/// An Ed25519 signature: a compressed point `R` and a scalar `S`
///
/// `S` is always a canonical scalar below the group order, which makes
/// stored signatures non-malleable. `R` is kept as its 32-byte encoding
/// and is only interpreted as a point during verification, so a
/// signature with an invalid `R` can be decoded but will never verify.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Signature {
    r: CompressedEdwardsY,
    s: Scalar,
}

impl Ed25519Signature {
    /// Decode a signature from its 64-byte `R || S` encoding
    ///
    /// The first 32 bytes become `R` without point validation (RFC 8032
    /// section 5.1.7 step 1 only splits the input; point validity
    /// surfaces as a verification failure). The last 32 bytes must be a
    /// canonical scalar in `[0, L)`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIGNATURE_SIZE {
            return Err(Error::MalformedSignature(format!(
                "invalid signature size: expected {}, got {}",
                SIGNATURE_SIZE,
                bytes.len()
            )));
        }

        let mut r_enc = [0u8; 32];
        let mut s_enc = [0u8; 32];
        r_enc.copy_from_slice(&bytes[..32]);
        s_enc.copy_from_slice(&bytes[32..]);

        Ok(Ed25519Signature {
            r: CompressedEdwardsY(r_enc),
            s: check_canonical_scalar(s_enc)?,
        })
    }

    /// Encode this signature as `R` (32 bytes) followed by the
    /// little-endian encoding of `S` (32 bytes)
    ///
    /// Because `S < L < 2^253`, the three most significant bits of the
    /// final byte are always zero.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes[..32].copy_from_slice(self.r.as_bytes());
        bytes[32..].copy_from_slice(self.s.as_bytes());
        bytes
    }

    pub(crate) fn from_parts(r: CompressedEdwardsY, s: Scalar) -> Self {
        Ed25519Signature { r, s }
    }

    pub(crate) fn r_bytes(&self) -> &[u8; 32] {
        self.r.as_bytes()
    }

    pub(crate) fn s(&self) -> &Scalar {
        &self.s
    }
}

impl core::fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed25519Signature")
            .field("R", self.r.as_bytes())
            .field("S", self.s.as_bytes())
            .finish()
    }
}

impl core::hash::Hash for Ed25519Signature {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.to_bytes().hash(state);
    }
}

/// Load a 32-byte string as a scalar iff its value is below the group
/// order `L`.
///
/// If the top four bits of the final byte are clear the value is below
/// `2^252 < L` and the range check can be skipped. This is an
/// optimization only; the slow path performs the full comparison.
fn check_canonical_scalar(bytes: [u8; 32]) -> Result<Scalar> {
    if bytes[31] & 0xf0 == 0 {
        return Ok(Scalar::from_bytes_mod_order(bytes));
    }
    Option::<Scalar>::from(Scalar::from_canonical_bytes(bytes))
        .ok_or_else(|| Error::MalformedSignature("S is not a canonical scalar".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // The group order L, little-endian.
    const L: [u8; 32] = [
        0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9,
        0xde, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x10,
    ];

    #[test]
    fn test_from_bytes_accepts_invalid_r() {
        // Validation of R happens during signature verification.
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&[0xff; 32]);
        Ed25519Signature::from_bytes(&bytes).expect("invalid R must decode");
    }

    #[test]
    fn test_from_bytes_rejects_short_input() {
        let result = Ed25519Signature::from_bytes(&[0u8; 1]);
        assert!(matches!(result, Err(Error::MalformedSignature(_))));
    }

    #[test]
    fn test_from_bytes_rejects_long_input() {
        let result = Ed25519Signature::from_bytes(&[0u8; 65]);
        assert!(matches!(result, Err(Error::MalformedSignature(_))));
    }

    #[test]
    fn test_from_bytes_rejects_non_canonical_s() {
        let bytes = [0xffu8; 64];
        let result = Ed25519Signature::from_bytes(&bytes);
        assert!(matches!(result, Err(Error::MalformedSignature(_))));
    }

    #[test]
    fn test_from_bytes_rejects_s_equal_to_group_order() {
        let mut bytes = [0u8; 64];
        bytes[32..].copy_from_slice(&L);
        let result = Ed25519Signature::from_bytes(&bytes);
        assert!(matches!(result, Err(Error::MalformedSignature(_))));
    }

    #[test]
    fn test_from_bytes_accepts_s_just_below_group_order() {
        // L - 1 is canonical but above the fast-path bound, exercising
        // the full range check.
        let mut s = L;
        s[0] -= 1;
        let mut bytes = [0u8; 64];
        bytes[32..].copy_from_slice(&s);
        let sig = Ed25519Signature::from_bytes(&bytes).expect("L - 1 is canonical");
        assert_eq!(sig.to_bytes()[32..], s);
    }

    #[test]
    fn test_from_bytes_accepts_fast_path_s() {
        // All bits below 2^252 set: the largest value the fast path can
        // accept, still below L.
        let mut bytes = [0xffu8; 64];
        bytes[63] = 0x0f;
        let sig = Ed25519Signature::from_bytes(&bytes).expect("fast-path S must decode");
        assert_eq!(sig.to_bytes(), bytes);
    }

    #[test]
    fn test_round_trip() {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&[0xab; 32]);
        bytes[32..48].copy_from_slice(&[0x12; 16]);
        let sig = Ed25519Signature::from_bytes(&bytes).unwrap();
        assert_eq!(sig.to_bytes(), bytes);
        assert_eq!(Ed25519Signature::from_bytes(&sig.to_bytes()).unwrap(), sig);
    }

    #[test]
    fn test_debug_output_is_structured() {
        let sig = Ed25519Signature::from_bytes(&[0u8; 64]).unwrap();
        let debug = format!("{:?}", sig);
        assert!(debug.contains("Ed25519Signature"));
    }
}
