//! The 4-byte-per-node format.
//!
//! File image: a little-endian `u32` node count (surviving nodes plus the
//! reserved slot 0), one all-zero word for slot 0, then one word per node
//! in index order. A node's first child index addresses words in this same
//! image, so slot arithmetic and file offsets agree.

use crate::codec::{
    CHILD_INDEX_MASK, CHILD_INDEX_SHIFT, END_OF_LIST_FLAG, END_OF_WORD_FLAG, MAX_CHILD_INDEX,
    VALUE_MASK,
};
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// One decoded node word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node4 {
    /// The edge character.
    pub value: u8,
    /// The path into this node spells an accepted word.
    pub end_of_word: bool,
    /// This node terminates its sibling list.
    pub end_of_list: bool,
    /// Index of the first child, 0 when the node has none.
    pub first_child_index: u32,
}

impl Node4 {
    /// Packs the node into its 32-bit word.
    pub fn to_word(self) -> u32 {
        debug_assert!(self.first_child_index <= MAX_CHILD_INDEX);
        let mut word = (self.first_child_index << CHILD_INDEX_SHIFT) | u32::from(self.value);
        if self.end_of_word {
            word |= END_OF_WORD_FLAG;
        }
        if self.end_of_list {
            word |= END_OF_LIST_FLAG;
        }
        word
    }

    /// Unpacks a 32-bit word. Bits 31 and 30 are ignored.
    pub fn from_word(word: u32) -> Self {
        Node4 {
            value: (word & VALUE_MASK) as u8,
            end_of_word: word & END_OF_WORD_FLAG != 0,
            end_of_list: word & END_OF_LIST_FLAG != 0,
            first_child_index: (word & CHILD_INDEX_MASK) >> CHILD_INDEX_SHIFT,
        }
    }
}

/// Encodes an indexed graph into the 4-byte file image.
pub fn encode_graph(graph: &Graph, indexed: &[NodeId]) -> Result<Vec<u8>> {
    let node_count = indexed.len() as u32 + 1;
    let mut out = Vec::with_capacity(4 * (indexed.len() + 2));
    out.extend_from_slice(&node_count.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    for &id in indexed {
        out.extend_from_slice(&encode_node(graph, id)?.to_le_bytes());
    }
    Ok(out)
}

fn encode_node(graph: &Graph, id: NodeId) -> Result<u32> {
    let node = graph.node(id);
    debug_assert!(node.dawg_index.is_some(), "encoding an unindexed node");
    let first_child_index = match node.children.first() {
        Some(&child) => graph.node(child).dawg_index.ok_or(
            Error::MalformedInternalState("child of an encoded node was never indexed"),
        )?,
        None => 0,
    };
    Ok(Node4 {
        value: node.value,
        end_of_word: node.end_of_word,
        end_of_list: node.is_last_child,
        first_child_index,
    }
    .to_word())
}

/// Decodes a 4-byte file image into its node-word array.
///
/// The returned vector is addressed by `dawg_index`: slot 0 holds the
/// reserved zero word.
pub fn decode_words(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() < 4 {
        return Err(Error::MalformedInternalState(
            "node stream shorter than its header",
        ));
    }
    let node_count = u32::from_le_bytes(bytes[..4].try_into().expect("4-byte slice")) as usize;
    let body = &bytes[4..];
    if body.len() != node_count * 4 {
        return Err(Error::MalformedInternalState(
            "node stream length disagrees with its header",
        ));
    }
    Ok(body
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes(chunk.try_into().expect("4-byte chunk")))
        .collect())
}
