//! Ed25519 signing and verification
//!
//! This crate implements the pure (PureEdDSA) variant of the Ed25519
//! signature scheme from RFC 8032 on top of the edwards25519 arithmetic
//! provided by `curve25519-dalek` and the SHA-512 implementation from
//! `sha2`.
//!
//! # Design
//!
//! - The expanded private key caches the public key it derived; there
//!   is no way to sign under a caller-supplied public key.
//! - Signature decoding enforces a canonical `S` below the group order,
//!   so accepted signatures are non-malleable.
//! - Verification uses the cheap group equation `[S]B = R + [k]A` with
//!   a byte-exact comparison of the recomputed `R`, returning a
//!   boolean and never an error.
//! - Signing touches secrets only through constant-time primitives;
//!   the variable-time double-scalar multiplication is reserved for
//!   verification, where every input is public.
//!
//! The prehashed (Ed25519ph) and context (Ed25519ctx) variants are not
//! implemented.
//!
//! # Example
//!
//! ```
//! use ed25519_sign::Ed25519PrivateKey;
//! use rand::rngs::OsRng;
//!
//! let key = Ed25519PrivateKey::generate(&mut OsRng);
//! let expanded = key.expand();
//!
//! let message = b"Hello, Ed25519!";
//! let signature = expanded.sign(message);
//!
//! assert!(expanded.public_key().verify(message, &signature));
//! ```

pub mod constants;
pub mod error;

mod hashing;
mod private;
mod public;
mod signature;

pub use error::{Error, Result};
pub use private::{Ed25519ExpandedPrivateKey, Ed25519PrivateKey};
pub use public::Ed25519PublicKey;
pub use signature::Ed25519Signature;
