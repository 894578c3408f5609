/*!

# Tag Digests

The registry identifies a tag by a 128-bit XXH3 digest of its bytes. Which hash
backs the digest is decided here and nowhere else, so switching it out touches one
file.

Two tags are treated as equal when their full 128-bit digests are equal. The
lookup table itself only needs 64 bits to pick a bucket; [`bucket`] takes the low
half.

*/

use std::hash::Hasher;

use twox_hash::XxHash3_128;

pub type TagDigest = u128;

/// A [`Hasher`] producing XXH3-128 digests. `finish` returns the low 64 bits.
pub struct TagHasher(XxHash3_128);

impl Default for TagHasher {
    fn default() -> Self {
        Self(XxHash3_128::new())
    }
}

impl Hasher for TagHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.0.write(bytes);
    }

    fn finish(&self) -> u64 {
        bucket(self.0.finish_128())
    }
}

impl TagHasher {
    pub fn finish_128(&self) -> TagDigest {
        self.0.finish_128()
    }
}

/// Digest of the raw tag bytes. Unlike going through `Hash for str`, no
/// terminator byte is mixed in.
pub fn digest(tag: &str) -> TagDigest {
    let mut hasher = TagHasher::default();
    hasher.write(tag.as_bytes());
    hasher.finish_128()
}

/// The part of a digest the hash table buckets on.
pub fn bucket(digest: TagDigest) -> u64 {
    digest as u64
}
