use ring::digest::{Context, SHA256};
use std::fmt;

use crate::utils::{hex_encode, sha256_digest, SHA256_LEN};

/// Identifier of a chain, derived from its ordered name components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId([u8; SHA256_LEN]);

impl ChainId {
    /// Derive a chain ID from its name components.
    ///
    /// Each component is hashed on its own and the 32-byte digest is folded
    /// into a running SHA-256, so `["ab"]` and `["a", "b"]` name different
    /// chains. An empty name yields the digest of the empty stream.
    pub fn from_name<I, T>(components: I) -> ChainId
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let mut context = Context::new(&SHA256);
        for component in components {
            context.update(&sha256_digest(component.as_ref()));
        }
        let mut id = [0u8; SHA256_LEN];
        id.copy_from_slice(context.finish().as_ref());
        ChainId(id)
    }

    pub fn as_bytes(&self) -> &[u8; SHA256_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex_encode(&self.0)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Hex-rendered chain ID for the given name components
pub fn derive_chain_id<T: AsRef<[u8]>>(components: &[T]) -> String {
    ChainId::from_name(components).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_empty_name_is_hash_of_nothing() {
        let empty: [&[u8]; 0] = [];
        assert_eq!(derive_chain_id(&empty), EMPTY_SHA256);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let name = [b"my".to_vec(), b"chain".to_vec()];
        let first = derive_chain_id(&name);
        let second = derive_chain_id(&name);
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_derivation_matches_manual_two_level_hash() {
        let mut folded = sha256_digest(b"a");
        folded.extend(sha256_digest(b"b"));
        let expected = hex_encode(&sha256_digest(&folded));
        assert_eq!(derive_chain_id(&["a", "b"]), expected);
    }

    #[test]
    fn test_order_matters() {
        assert_ne!(derive_chain_id(&["a", "b"]), derive_chain_id(&["b", "a"]));
    }

    #[test]
    fn test_component_boundaries_matter() {
        assert_ne!(derive_chain_id(&["ab"]), derive_chain_id(&["a", "b"]));
        assert_ne!(derive_chain_id(&["", "ab"]), derive_chain_id(&["ab"]));
    }

    #[test]
    fn test_ascii_and_hex_inputs_agree() {
        let ascii = derive_chain_id(&["a", "b"]);
        let decoded = [hex::decode("61").unwrap(), hex::decode("62").unwrap()];
        assert_eq!(derive_chain_id(&decoded), ascii);
    }

    #[test]
    fn test_display_matches_hex() {
        let id = ChainId::from_name(["x"]);
        assert_eq!(id.to_string(), id.to_hex());
        assert_eq!(id.as_bytes().len(), SHA256_LEN);
    }
}
