use ring::digest::{Context, SHA256};

use crate::error::Result;
use data_encoding::HEXLOWER;

/// Length in bytes of a SHA-256 digest
pub const SHA256_LEN: usize = 32;

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

pub fn hex_encode(data: &[u8]) -> String {
    HEXLOWER.encode(data)
}

/// Decode a hex string, accepting either letter case
pub fn hex_decode(data: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(data)?)
}
