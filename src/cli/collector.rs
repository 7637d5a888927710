use std::fmt;

use crate::error::Result;
use crate::utils::hex_decode;

/// Ordered byte strings gathered from repeated command-line flags.
///
/// External IDs and chain name components are both given either as plain
/// text or as hex. Insertion order is kept since a chain's ID depends on the
/// order of its name components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteCollector {
    inputs: Vec<String>,
    items: Vec<Vec<u8>>,
}

impl ByteCollector {
    pub fn new() -> ByteCollector {
        ByteCollector::default()
    }

    /// Append the bytes of `s` as given
    pub fn push_ascii(&mut self, s: &str) {
        self.inputs.push(s.to_string());
        self.items.push(s.as_bytes().to_vec());
    }

    /// Append the hex-decoded bytes of `s`; nothing is added if `s` is not hex
    pub fn push_hex(&mut self, s: &str) -> Result<()> {
        let bytes = hex_decode(s)?;
        self.inputs.push(s.to_string());
        self.items.push(bytes);
        Ok(())
    }

    pub fn items(&self) -> &[Vec<u8>] {
        &self.items
    }

    /// The arguments as they were typed
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn into_items(self) -> Vec<Vec<u8>> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for ByteCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.inputs.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AckError;

    #[test]
    fn test_push_and_render() {
        let test_hex = "761dc23d4fdd8be932107d6a03cead5a3edb69685c8b1f6641fb98608b22b4d6";
        let mut collector = ByteCollector::new();
        collector.push_hex(test_hex).unwrap();
        assert_eq!(collector.to_string(), format!("[{test_hex}]"));
        assert_eq!(collector.items()[0].len(), 32);

        let mut names = ByteCollector::new();
        names.push_ascii("123test");
        assert_eq!(names.to_string(), "[123test]");
        assert_eq!(names.items()[0], b"123test".to_vec());
    }

    #[test]
    fn test_invalid_hex_adds_nothing() {
        let mut collector = ByteCollector::new();
        collector.push_ascii("a");
        let err = collector.push_hex("zz").unwrap_err();
        assert!(matches!(err, AckError::InvalidEncoding(_)));
        assert_eq!(collector.len(), 1);
        assert_eq!(collector.inputs(), ["a".to_string()]);
    }

    #[test]
    fn test_order_is_kept_across_encodings() {
        let mut collector = ByteCollector::new();
        collector.push_ascii("a");
        collector.push_hex("62").unwrap();
        collector.push_ascii("c");
        assert_eq!(
            collector.into_items(),
            vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]
        );
    }

    #[test]
    fn test_empty() {
        let collector = ByteCollector::new();
        assert!(collector.is_empty());
        assert_eq!(collector.to_string(), "[]");
    }
}
