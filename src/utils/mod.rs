//! Utility functions and helpers
//!
//! Hashing and hex encoding shared by the chain ID derivation and the
//! command-line byte collectors.

pub mod crypto;

pub use crypto::{hex_decode, hex_encode, sha256_digest, SHA256_LEN};
