//! The raw byte string used for tag names and String payloads, and the
//! hasher that lets it key a compound's map.

use std::borrow::Cow;
use std::hash::{Hash, Hasher};

/// A raw NBT string: an opaque byte sequence.
///
/// NBT never length-limits or validates string content beyond the length
/// prefix, and real files contain names that are not valid UTF-8 (the
/// conventional encoding is Java's CESU-8). The decoder therefore keeps the
/// exact wire bytes, and equality is byte-exact. Interpretation as text only
/// happens on demand via [`to_text`][NbtString::to_text].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct NbtString(Vec<u8>);

impl NbtString {
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the bytes as text: CESU-8 decoded where possible, lossy UTF-8
    /// otherwise.
    pub fn to_text(&self) -> Cow<'_, str> {
        match cesu8::from_java_cesu8(&self.0) {
            Ok(s) => s,
            Err(_) => String::from_utf8_lossy(&self.0),
        }
    }
}

impl Hash for NbtString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Feed exactly the content bytes, no length prefix, so the hash is
        // the plain byte-stream hash of the name.
        state.write(&self.0);
    }
}

impl std::fmt::Debug for NbtString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.to_text())
    }
}

impl From<&str> for NbtString {
    fn from(s: &str) -> Self {
        Self(cesu8::to_java_cesu8(s).into_owned())
    }
}

impl From<Vec<u8>> for NbtString {
    fn from(data: Vec<u8>) -> Self {
        Self(data)
    }
}

impl From<&[u8]> for NbtString {
    fn from(data: &[u8]) -> Self {
        Self(data.to_vec())
    }
}

const OFFSET_BIAS: u64 = 14695981039346656037;
const PRIME: u64 = 1099511628211;

/// The streaming name hash: a 64-bit FNV-style fold, multiply by the prime
/// then xor the byte in. Deterministic within a run, order-sensitive, never
/// persisted.
pub struct Fnv(u64);

impl Default for Fnv {
    fn default() -> Self {
        Fnv(OFFSET_BIAS)
    }
}

impl Hasher for Fnv {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for b in bytes {
            self.0 = self.0.wrapping_mul(PRIME);
            self.0 ^= *b as u64;
        }
    }
}
