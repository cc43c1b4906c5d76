//! # dawgen
//!
//! Builds a [DAWG](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton)
//! (Directed Acyclic Word Graph) from a word list and serializes it into a
//! compact binary index suitable for constant-memory membership queries.
//!
//! The pipeline is offline and single-threaded: a word list is sorted into
//! canonical order, loaded into a trie, every node is fingerprinted with a
//! SHA-1 over its subtree and right-sibling context, equivalent sibling
//! suffixes are merged depth group by depth group, and the surviving graph
//! is linearized into a 4-byte-per-node image plus a further bit-packed
//! image. Before anything is handed back, the lexicon is reconstructed from
//! the encoded bytes and checked against a Merkle checksum of the input.
//!
//! ## Quick start
//!
//! ```
//! use dawgen::codec::Dawg;
//! use dawgen::pipeline::generate;
//! use dawgen::wordlist::parse_word_list;
//!
//! let words = parse_word_list("CAR CARS CITIES PITIES");
//! let artifacts = generate(&words).unwrap();
//!
//! let dawg = Dawg::from_packed(&artifacts.packed).unwrap();
//! assert!(dawg.contains(b"CITIES"));
//! assert!(dawg.contains(b"CAR"));
//! assert!(!dawg.contains(b"CITY"));
//! ```
//!
//! ## On-disk formats
//!
//! Both images open with a little-endian `u32` node count. The 4-byte image
//! follows with one word per node: an 8-bit edge character, a 20-bit first
//! child index, an end-of-word flag and an end-of-list flag. The packed
//! image re-emits the same nodes with the index field shrunk to
//! `ceil(log2(node_count))` bits. See [`codec`] for the exact layouts.

#![warn(missing_docs)]

/// Merkle checksum of a sorted word list.
pub mod checksum;
/// On-disk formats: 4-byte nodes, bit-packed nodes, traversal.
pub mod codec;
/// The pipeline error taxonomy.
pub mod error;
/// In-memory graph: trie building, fingerprinting, minimization, indexing.
pub mod graph;
/// Stage sequencing from word list to verified images.
pub mod pipeline;
/// Round-trip verification.
pub mod verify;
/// Word list parsing and canonical ordering.
pub mod wordlist;

pub use codec::Dawg;
pub use error::{Error, Result};
pub use pipeline::{generate, Artifacts};
