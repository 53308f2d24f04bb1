//! SHA-256 digest computation for document content
//!
//! Every revision carries the digest of its own raw content bytes.
//! No salting and no chaining to the previous revision: an adversary who can
//! rewrite stored content *and* supply a matching fresh digest defeats
//! detection entirely. Verification only catches divergence between a locally
//! cached expectation and locally recomputed reality.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest as _, Sha256};
use subtle::ConstantTimeEq;

/// Number of bytes in a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

/// A SHA-256 digest over document content.
///
/// Rendered as 64 lowercase hex characters on the wire. Equality is
/// constant-time.
#[derive(Debug, Clone, Copy)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Computes the digest of the given content bytes.
    ///
    /// Deterministic: the same input always produces the same output.
    pub fn compute(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);
        Self(hasher.finalize().into())
    }

    /// Returns the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Renders the digest as lowercase hex.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(DIGEST_LEN * 2);
        for byte in self.0 {
            out.push_str(&format!("{:02x}", byte));
        }
        out
    }

    /// Parses a 64-character hex string back into a digest.
    ///
    /// Returns `None` if the length or any character is invalid.
    pub fn parse(hex: &str) -> Option<Self> {
        if hex.len() != DIGEST_LEN * 2 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let mut bytes = [0u8; DIGEST_LEN];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(chunk).ok()?;
            bytes[i] = u8::from_str_radix(pair, 16).ok()?;
        }
        Some(Self(bytes))
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        // Constant-time comparison for all digest checks
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for Digest {}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Digest::parse(&hex)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid digest hex: {}", hex)))
    }
}
