//! Error types for Ed25519 operations
//!
//! Verification failure is deliberately not an error: [`verify`] returns
//! a boolean so that internal detail never reaches a caller (or an
//! attacker) through the failure path.
//!
//! [`verify`]: crate::Ed25519PublicKey::verify

use core::fmt;

/// Errors that can occur while decoding Ed25519 key and signature material
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Signature decoding received input that is not a valid encoding:
    /// the wrong length, or an `S` half at or above the group order
    MalformedSignature(String),

    /// Public key decoding received input that is not a valid encoding:
    /// the wrong length, or bytes that do not decompress to a curve point
    InvalidPublicKey(String),

    /// Seed construction received input of the wrong length
    InvalidSeed { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedSignature(msg) => write!(f, "Malformed signature: {}", msg),
            Error::InvalidPublicKey(msg) => write!(f, "Invalid public key: {}", msg),
            Error::InvalidSeed { expected, actual } => {
                write!(f, "Invalid seed: expected {} bytes, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
