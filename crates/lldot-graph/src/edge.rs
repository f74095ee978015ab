use std::fmt;

/// What an edge matches on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EdgeKey {
    /// Return code of an embedded callback.
    Code(i32),
    /// Literal input bytes. Never empty; a single byte is a plain byte match.
    Bytes(Vec<u8>),
}

impl EdgeKey {
    /// The byte of a one-byte key.
    pub fn single_byte(&self) -> Option<u8> {
        match self {
            EdgeKey::Bytes(bytes) if bytes.len() == 1 => Some(bytes[0]),
            _ => None,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, EdgeKey::Code(_))
    }
}

impl From<u8> for EdgeKey {
    fn from(byte: u8) -> Self {
        EdgeKey::Bytes(vec![byte])
    }
}

impl From<&[u8]> for EdgeKey {
    fn from(bytes: &[u8]) -> Self {
        EdgeKey::Bytes(bytes.to_vec())
    }
}

impl From<i32> for EdgeKey {
    fn from(code: i32) -> Self {
        EdgeKey::Code(code)
    }
}

/// A transition to `target`.
///
/// `key` is `None` only for the otherwise edge of a node. `no_advance` is set
/// when taking the edge leaves the input position untouched.
pub struct Edge<'g, N> {
    pub target: &'g N,
    pub key: Option<EdgeKey>,
    pub no_advance: bool,
}

impl<'g, N> Edge<'g, N> {
    pub fn new(target: &'g N, key: impl Into<EdgeKey>, no_advance: bool) -> Self {
        Self {
            target,
            key: Some(key.into()),
            no_advance,
        }
    }

    /// Keyless edge for a node's otherwise slot.
    pub fn otherwise(target: &'g N, no_advance: bool) -> Self {
        Self {
            target,
            key: None,
            no_advance,
        }
    }
}

impl<N> Clone for Edge<'_, N> {
    fn clone(&self) -> Self {
        Self {
            target: self.target,
            key: self.key.clone(),
            no_advance: self.no_advance,
        }
    }
}

// Targets are left out: graphs are cyclic.
impl<N> fmt::Debug for Edge<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("target", &(self.target as *const N))
            .field("key", &self.key)
            .field("no_advance", &self.no_advance)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_only_for_one_byte_keys() {
        assert_eq!(EdgeKey::from(b'a').single_byte(), Some(b'a'));
        assert_eq!(EdgeKey::from(&b"ab"[..]).single_byte(), None);
        assert_eq!(EdgeKey::Code(1).single_byte(), None);
        assert!(EdgeKey::from(7).is_code());
    }

    #[test]
    fn otherwise_edge_has_no_key() {
        let target = 0u8;
        let edge = Edge::otherwise(&target, true);
        assert!(edge.key.is_none());
        assert!(edge.no_advance);

        let copy = edge.clone();
        assert!(std::ptr::eq(copy.target, &target));
    }
}
