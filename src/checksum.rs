//! Merkle-style checksum of a sorted word list.
//!
//! The checksum is a binary hash tree over the canonical word order: a leaf
//! is the SHA-1 of one word, an interior node is the SHA-1 of its two
//! children's digests interleaved by a byte-wise ascending merge. The
//! verifier recomputes it from the lexicon it reconstructs out of the
//! encoded binary; bit-equality with the input checksum is the acceptance
//! criterion for a build. This is a sanity check, not authentication.

use sha1::{Digest, Sha1};

use crate::wordlist::Word;

/// Length in bytes of one digest.
pub const CHECKSUM_LEN: usize = 20;

/// A 20-byte SHA-1 digest.
pub type Checksum = [u8; CHECKSUM_LEN];

/// Computes the checksum of a word list in canonical order.
///
/// The empty list hashes to the SHA-1 of the empty byte string, so an empty
/// input and the empty lexicon reconstructed from its binary agree.
pub fn word_list_checksum(words: &[Word]) -> Checksum {
    if words.is_empty() {
        return sha1_bytes(&[]);
    }
    checksum_range(words)
}

fn checksum_range(words: &[Word]) -> Checksum {
    if words.len() == 1 {
        return sha1_bytes(&words[0]);
    }
    let mid = words.len() / 2;
    let left = checksum_range(&words[..mid]);
    let right = checksum_range(&words[mid..]);

    let mut merged = [0u8; CHECKSUM_LEN * 2];
    sorted_merge(&left, &right, &mut merged);
    sha1_bytes(&merged)
}

/// Two-pointer merge of two digests into `out`, byte-wise ascending with
/// ties taken from `left`. The digests are treated as already-sorted
/// sequences; they are not re-sorted internally.
fn sorted_merge(left: &Checksum, right: &Checksum, out: &mut [u8; CHECKSUM_LEN * 2]) {
    let mut i = 0;
    let mut j = 0;
    for slot in out.iter_mut() {
        let take_right = i == CHECKSUM_LEN || (j < CHECKSUM_LEN && right[j] < left[i]);
        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}

fn sha1_bytes(data: &[u8]) -> Checksum {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hasher.finalize().into()
}
