//! Traversal over a decoded node array.

use crate::codec::node4::{decode_words, Node4};
use crate::codec::packed::unpack;
use crate::error::Result;
use crate::wordlist::Word;

/// A decoded DAWG index: the node-word array with slot 0 reserved.
///
/// Answers membership and enumeration queries directly against the encoded
/// layout; no graph structure is rebuilt. Construct it from either on-disk
/// image.
///
/// # Examples
///
/// ```
/// use dawgen::codec::Dawg;
/// use dawgen::pipeline::generate;
/// use dawgen::wordlist::parse_word_list;
///
/// let artifacts = generate(&parse_word_list("CAR CARS")).unwrap();
/// let dawg = Dawg::from_dat(&artifacts.dat).unwrap();
/// assert!(dawg.contains(b"CAR"));
/// assert!(dawg.contains(b"CARS"));
/// assert!(!dawg.contains(b"CA"));
/// ```
pub struct Dawg {
    nodes: Vec<u32>,
}

impl Dawg {
    /// Decodes the 4-byte file image.
    pub fn from_dat(bytes: &[u8]) -> Result<Self> {
        Ok(Dawg {
            nodes: decode_words(bytes)?,
        })
    }

    /// Decodes the variable-bit-width file image.
    pub fn from_packed(bytes: &[u8]) -> Result<Self> {
        Self::from_dat(&unpack(bytes)?)
    }

    /// Node count including the reserved zero slot.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True when `word` is in the lexicon.
    ///
    /// Walks one sibling run per input byte; memory use is constant.
    pub fn contains(&self, word: &[u8]) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut position = 1usize;
        for (index, &value) in word.iter().enumerate() {
            loop {
                let Some(&word_bits) = self.nodes.get(position) else {
                    return false;
                };
                let node = Node4::from_word(word_bits);
                if node.value == value {
                    if index == word.len() - 1 {
                        return node.end_of_word;
                    }
                    if node.first_child_index == 0 {
                        return false;
                    }
                    position = node.first_child_index as usize;
                    break;
                }
                if node.end_of_list {
                    return false;
                }
                position += 1;
            }
        }
        false
    }

    /// Enumerates the full lexicon in traversal order: within a sibling
    /// run, each node emits its own word ending, then its subtree, then
    /// yields to its right neighbour.
    pub fn words(&self) -> Vec<Word> {
        let mut out = Vec::new();
        if self.nodes.len() > 1 {
            let mut prefix = Vec::new();
            self.collect(1, &mut prefix, &mut out);
        }
        out
    }

    fn collect(&self, start: usize, prefix: &mut Vec<u8>, out: &mut Vec<Word>) {
        let mut position = start;
        loop {
            let Some(&word_bits) = self.nodes.get(position) else {
                return;
            };
            let node = Node4::from_word(word_bits);
            if node.end_of_word {
                let mut word = prefix.clone();
                word.push(node.value);
                out.push(word);
            }
            if node.first_child_index != 0 {
                prefix.push(node.value);
                self.collect(node.first_child_index as usize, prefix, out);
                prefix.pop();
            }
            if node.end_of_list {
                return;
            }
            position += 1;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn dat_image(words: &[u32]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&(words.len() as u32 + 1).to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        for &word in words {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn empty_index_has_no_words() {
        let dawg = Dawg::from_dat(&dat_image(&[])).unwrap();
        assert_eq!(dawg.node_count(), 1);
        assert!(dawg.words().is_empty());
        assert!(!dawg.contains(b"A"));
        assert!(!dawg.contains(b""));
    }

    #[test]
    fn single_word_index() {
        let dawg = Dawg::from_dat(&dat_image(&[0x3000_0041])).unwrap();
        assert_eq!(dawg.words(), vec![b"A".to_vec()]);
        assert!(dawg.contains(b"A"));
        assert!(!dawg.contains(b"B"));
        assert!(!dawg.contains(b"AA"));
    }

    #[test]
    fn sibling_run_enumeration() {
        // The AR/AB reference image: A heads a run of R then B.
        let dawg =
            Dawg::from_dat(&dat_image(&[0x1000_0241, 0x2000_0052, 0x3000_0042])).unwrap();
        assert_eq!(dawg.words(), vec![b"AR".to_vec(), b"AB".to_vec()]);
        assert!(dawg.contains(b"AR"));
        assert!(dawg.contains(b"AB"));
        assert!(!dawg.contains(b"A"));
        assert!(!dawg.contains(b"ARB"));
    }

    #[test]
    fn children_visited_before_right_siblings() {
        // Two root siblings A (child X) and B: A's subtree comes first.
        let dawg = Dawg::from_dat(&dat_image(&[
            0x2000_0341, // A, end of word, first child 3
            0x3000_0042, // B, end of word, end of list
            0x3000_0058, // X, end of word, end of list
        ]))
        .unwrap();
        assert_eq!(
            dawg.words(),
            vec![b"A".to_vec(), b"AX".to_vec(), b"B".to_vec()]
        );
    }

    #[test]
    fn from_packed_matches_from_dat() {
        let dat = dat_image(&[0x1000_0241, 0x2000_0052, 0x3000_0042]);
        let packed = crate::codec::packed::pack(&dat).unwrap();
        let via_packed = Dawg::from_packed(&packed).unwrap();
        let via_dat = Dawg::from_dat(&dat).unwrap();
        assert_eq!(via_packed.words(), via_dat.words());
    }
}
