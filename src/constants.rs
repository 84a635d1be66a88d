//! Sizes of the Ed25519 wire formats

/// Size of an Ed25519 private key seed in bytes
pub const SECRET_KEY_SIZE: usize = 32;

/// Size of a compressed Ed25519 public key in bytes
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of an Ed25519 signature in bytes (R || S)
pub const SIGNATURE_SIZE: usize = 64;
