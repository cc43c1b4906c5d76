//! The full generation pipeline.
//!
//! Stages run strictly in sequence on one thread; each consumes its
//! predecessor's output in full. Nothing here touches the filesystem —
//! callers feed the word list in and write the returned images out, so a
//! failing run can never leave a truncated binary behind.

use crate::checksum::{word_list_checksum, Checksum};
use crate::codec::{node4, packed};
use crate::error::Result;
use crate::graph::{
    assign_indices, build_trie, fingerprint_graph, mark_sibling_lists, minimize,
};
use crate::verify::verify;
use crate::wordlist::Word;

/// Everything one run produces.
pub struct Artifacts {
    /// The 4-byte-per-node file image.
    pub dat: Vec<u8>,
    /// The variable-bit-width file image.
    pub packed: Vec<u8>,
    /// Merkle checksum of the canonical input list.
    pub checksum: Checksum,
    /// Node count stored in both headers: indexed nodes plus the reserved
    /// zero slot.
    pub node_count: u32,
}

/// Builds, minimizes, encodes and verifies the index for a word list.
///
/// `words` must be in canonical order — length ascending then lexicographic,
/// without duplicates — as produced by
/// [`parse_word_list`](crate::wordlist::parse_word_list). The returned
/// images have already been round-trip verified against the input checksum.
pub fn generate(words: &[Word]) -> Result<Artifacts> {
    tracing::info!(words = words.len(), "computing input checksum");
    let checksum = word_list_checksum(words);

    tracing::info!("building trie");
    let mut graph = build_trie(words);
    tracing::debug!(nodes = graph.len() - 1, "trie complete");

    mark_sibling_lists(&mut graph);

    tracing::info!("fingerprinting nodes");
    fingerprint_graph(&mut graph);

    tracing::info!("merging equivalent suffixes");
    let max_depth = words.last().map_or(0, |w| w.len().saturating_sub(1) as u32);
    minimize(&mut graph, max_depth)?;

    let indexed = assign_indices(&mut graph)?;
    tracing::info!(nodes = indexed.len(), "assigned final node indices");

    tracing::info!("encoding graph");
    let dat = node4::encode_graph(&graph, &indexed)?;

    tracing::info!("verifying encoded graph against input checksum");
    verify(&dat, &checksum)?;

    let packed_image = packed::pack(&dat)?;
    tracing::info!(
        dat_bytes = dat.len(),
        packed_bytes = packed_image.len(),
        "encoding complete"
    );

    Ok(Artifacts {
        dat,
        packed: packed_image,
        checksum,
        node_count: indexed.len() as u32 + 1,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::codec::node4::decode_words;
    use crate::codec::{Dawg, Node4};
    use crate::wordlist::{length_then_lex, parse_word_list};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sorted(mut words: Vec<Word>) -> Vec<Word> {
        words.sort_unstable_by(|a, b| length_then_lex(a, b));
        words
    }

    fn random_word_list(rng: &mut StdRng) -> Vec<Word> {
        let count = rng.gen_range(0..60);
        let mut words: Vec<Word> = (0..count)
            .map(|_| {
                let len = rng.gen_range(1..=10);
                (0..len).map(|_| rng.gen_range(b'A'..=b'F')).collect()
            })
            .collect();
        words.sort_unstable_by(|a, b| length_then_lex(a, b));
        words.dedup();
        words
    }

    /// Every sibling run reachable from a child pointer must terminate at
    /// an end-of-list flag inside the array, and each node's run of
    /// children must be contiguous.
    fn check_layout(dat: &[u8]) {
        let nodes = decode_words(dat).unwrap();
        let count = nodes.len();
        if count == 1 {
            return;
        }
        assert!(Node4::from_word(nodes[count - 1]).end_of_list);

        let mut run_starts = vec![1usize];
        for &word in &nodes[1..] {
            let child = Node4::from_word(word).first_child_index as usize;
            if child != 0 {
                assert!(child < count, "child index out of range");
                run_starts.push(child);
            }
        }
        for start in run_starts {
            let mut position = start;
            loop {
                assert!(position < count, "sibling run overran the array");
                if Node4::from_word(nodes[position]).end_of_list {
                    break;
                }
                position += 1;
            }
        }
    }

    #[test]
    fn empty_input_yields_sentinel_only() {
        let artifacts = generate(&[]).unwrap();
        assert_eq!(artifacts.node_count, 1);
        assert_eq!(artifacts.dat, vec![1, 0, 0, 0, 0, 0, 0, 0]);
        assert!(Dawg::from_dat(&artifacts.dat).unwrap().words().is_empty());
    }

    #[test]
    fn single_letter_word() {
        let artifacts = generate(&parse_word_list("A")).unwrap();
        assert_eq!(artifacts.node_count, 2);
        let nodes = decode_words(&artifacts.dat).unwrap();
        let node = Node4::from_word(nodes[1]);
        assert_eq!(node.value, b'A');
        assert!(node.end_of_word);
        assert!(node.end_of_list);
        assert_eq!(node.first_child_index, 0);
    }

    #[test]
    fn matches_reference_image_for_ar_ab() {
        let artifacts = generate(&parse_word_list("AR AB")).unwrap();
        let expected = [
            0x04, 0x00, 0x00, 0x00, // node count
            0x00, 0x00, 0x00, 0x00, // reserved slot
            0x41, 0x02, 0x00, 0x10, // A, first child 2, end of list
            0x52, 0x00, 0x00, 0x20, // R, end of word
            0x42, 0x00, 0x00, 0x30, // B, end of word, end of list
        ];
        assert_eq!(artifacts.dat, expected);
        assert_eq!(
            artifacts.packed,
            vec![0x04, 0x00, 0x00, 0x00, 0x00, 0x60, 0x90, 0x49, 0xB1, 0x10]
        );
    }

    #[test]
    fn word_boundary_inside_longer_word() {
        let artifacts = generate(&parse_word_list("CAR CARS")).unwrap();
        let dawg = Dawg::from_dat(&artifacts.dat).unwrap();
        assert_eq!(
            sorted(dawg.words()),
            vec![b"CAR".to_vec(), b"CARS".to_vec()]
        );
        // The R node both accepts and continues into S.
        let nodes = decode_words(&artifacts.dat).unwrap();
        let r = nodes[1..]
            .iter()
            .map(|&w| Node4::from_word(w))
            .find(|n| n.value == b'R')
            .unwrap();
        assert!(r.end_of_word);
        let s = Node4::from_word(nodes[r.first_child_index as usize]);
        assert_eq!(s.value, b'S');
        assert!(s.end_of_word);
    }

    #[test]
    fn shared_suffix_stored_once() {
        let artifacts = generate(&parse_word_list("CITIES PITIES")).unwrap();
        // C and P plus a single I-T-I-E-S chain, plus the reserved slot.
        assert_eq!(artifacts.node_count, 8);
        let dawg = Dawg::from_dat(&artifacts.dat).unwrap();
        assert_eq!(
            sorted(dawg.words()),
            vec![b"CITIES".to_vec(), b"PITIES".to_vec()]
        );
    }

    #[test]
    fn packed_body_size_follows_node_count() {
        let artifacts = generate(&parse_word_list("AR AB")).unwrap();
        // node_count = 4: 12 bits per node, 4 entries, 6 bytes of body.
        assert_eq!(artifacts.packed.len(), 10);
    }

    #[test]
    fn input_order_is_irrelevant_after_canonicalization() {
        use itertools::Itertools;
        let reference = generate(&parse_word_list("CAB CAR CARS")).unwrap();
        for permutation in ["CAB", "CAR", "CARS"].iter().permutations(3) {
            let text = permutation
                .into_iter()
                .copied()
                .collect::<Vec<&str>>()
                .join(" ");
            let artifacts = generate(&parse_word_list(&text)).unwrap();
            assert_eq!(artifacts.dat, reference.dat);
        }
    }

    #[test]
    fn deterministic_output() {
        let words = parse_word_list("BAKE CAKE FAKE LAKE MAKE CAR CARS");
        let first = generate(&words).unwrap();
        let second = generate(&words).unwrap();
        assert_eq!(first.dat, second.dat);
        assert_eq!(first.packed, second.packed);
        assert_eq!(first.checksum, second.checksum);
    }

    #[test]
    fn random_lexicons_round_trip() {
        let mut rng = StdRng::seed_from_u64(0xDA06);
        for _ in 0..40 {
            let words = random_word_list(&mut rng);
            let artifacts = generate(&words).unwrap();

            let via_dat = Dawg::from_dat(&artifacts.dat).unwrap();
            assert_eq!(sorted(via_dat.words()), words);

            let via_packed = Dawg::from_packed(&artifacts.packed).unwrap();
            assert_eq!(sorted(via_packed.words()), words);

            check_layout(&artifacts.dat);
        }
    }

    #[test]
    fn minimization_never_adds_nodes() {
        let mut rng = StdRng::seed_from_u64(0xDA07);
        for _ in 0..20 {
            let words = random_word_list(&mut rng);
            let trie_nodes = build_trie(&words).len() - 1;
            let artifacts = generate(&words).unwrap();
            assert!(artifacts.node_count as usize - 1 <= trie_nodes);
        }
    }

    #[test]
    fn shared_suffixes_reduce_strictly() {
        // Two words sharing a suffix of length two or more must come out
        // smaller than their trie.
        let words = parse_word_list("CITIES PITIES");
        let trie_nodes = build_trie(&words).len() - 1;
        let artifacts = generate(&words).unwrap();
        assert!((artifacts.node_count as usize - 1) < trie_nodes);
    }

    #[test]
    fn membership_queries_agree_with_the_word_set() {
        let mut rng = StdRng::seed_from_u64(0xDA08);
        let words = random_word_list(&mut rng);
        let artifacts = generate(&words).unwrap();
        let dawg = Dawg::from_packed(&artifacts.packed).unwrap();
        for word in &words {
            assert!(dawg.contains(word));
        }
        for _ in 0..200 {
            let len = rng.gen_range(1..=10);
            let probe: Word = (0..len).map(|_| rng.gen_range(b'A'..=b'G')).collect();
            assert_eq!(dawg.contains(&probe), words.contains(&probe));
        }
    }

    #[test]
    fn pack_unpack_identity_on_generated_images() {
        let artifacts = generate(&parse_word_list("CAR CARS CITIES PITIES")).unwrap();
        assert_eq!(
            crate::codec::packed::unpack(&artifacts.packed).unwrap(),
            artifacts.dat
        );
    }

    #[test]
    fn suffix_spliced_lists_still_enumerate_correctly() {
        // The mid-list survivor case: C's children list becomes a suffix of
        // the root's run.
        let artifacts = generate(&parse_word_list("AB CAB")).unwrap();
        assert_eq!(artifacts.node_count, 4);
        let dawg = Dawg::from_dat(&artifacts.dat).unwrap();
        assert_eq!(sorted(dawg.words()), vec![b"AB".to_vec(), b"CAB".to_vec()]);
        check_layout(&artifacts.dat);
    }
}
