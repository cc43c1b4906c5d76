//! Structural fingerprints.
//!
//! A node's fingerprint hashes its entire subtree, its own edge character
//! and acceptance bit, and the fingerprints of every sibling to its right.
//! Equal fingerprints therefore certify equal continuation languages *and*
//! equal sibling tails. Both are needed before two nodes may merge: merging
//! a node splices the whole tail of its sibling list, so a subtree hash
//! alone would merge nodes whose neighbours disagree.

use sha1::{Digest, Sha1};

use crate::graph::node::{Graph, NodeId};

/// 20-byte SHA-1 digest of subtree shape plus right-sibling context.
pub type Fingerprint = [u8; 20];

/// Computes fingerprints for every node reachable from the root, post-order.
///
/// Runs on the trie, where each node still has exactly one parent, so every
/// node is hashed exactly once.
pub fn fingerprint_graph(graph: &mut Graph) {
    hash_node(graph, Graph::ROOT, &[]);
}

/// Hashes one node. `brothers` carries the concatenated fingerprints of the
/// node's already-hashed right siblings. Children are visited right to
/// left, which lets the running input buffer double as each child's
/// `brothers` argument.
fn hash_node(graph: &mut Graph, id: NodeId, brothers: &[u8]) {
    let children: Vec<NodeId> = graph.node(id).children.to_vec();
    let mut input: Vec<u8> = Vec::new();
    for &child in children.iter().rev() {
        hash_node(graph, child, &input);
        input.extend_from_slice(&graph.node(child).fingerprint);
    }

    let node = graph.node(id);
    input.push(node.value);
    input.push(node.end_of_word as u8);
    input.extend_from_slice(brothers);

    let mut hasher = Sha1::new();
    hasher.update(&input);
    graph.node_mut(id).fingerprint = hasher.finalize().into();
}
