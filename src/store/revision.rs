//! Immutable revision records

use serde::{Deserialize, Serialize};

use crate::digest::Digest;

/// One immutable entry in the document's history.
///
/// A revision is never mutated after creation; `digest` is always the
/// SHA-256 of `content`, computed by the store at append time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    /// Raw content bytes of the document at this revision.
    #[serde(with = "content_utf8")]
    pub content: Vec<u8>,

    /// SHA-256 digest of `content`.
    pub digest: Digest,

    /// Zero-based position in history. `history[i].sequence == i`.
    pub sequence: u64,
}

impl Revision {
    /// Constructs a revision, computing the digest over the content.
    pub(crate) fn new(content: Vec<u8>, sequence: u64) -> Self {
        let digest = Digest::compute(&content);
        Self {
            content,
            digest,
            sequence,
        }
    }

    /// Content as UTF-8 text, replacing invalid sequences.
    pub fn content_text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

/// Serializes content as a UTF-8 string to match the JSON wire layout
/// (`{content, digest, sequence}` with text content).
mod content_utf8 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(content: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(content))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(text.into_bytes())
    }
}
