//! Trie construction and sibling-list marking.

use mark_last::MarkLastIterator;

use crate::graph::node::{Graph, NodeId};
use crate::wordlist::Word;

/// Builds the uncompressed trie from a word list in canonical order.
///
/// Insertion walks the list in reverse, longest words first. A node's
/// `depth_group` is the length of the suffix remaining below it at the
/// moment it is created, so inserting deep words first pins every shared
/// prefix node to its distance from the deepest accepting descendant;
/// shorter words reuse those nodes without shadowing the recorded depth.
pub fn build_trie(words: &[Word]) -> Graph {
    let mut graph = Graph::new();
    for word in words.iter().rev() {
        insert_word(&mut graph, word);
    }
    graph
}

fn insert_word(graph: &mut Graph, word: &[u8]) {
    debug_assert!(!word.is_empty(), "the word list never yields empty tokens");
    let mut current = Graph::ROOT;
    for (position, &value) in word.iter().enumerate() {
        let remaining = (word.len() - 1 - position) as u32;
        current = match graph.find_child(current, value) {
            Some(child) => child,
            None => graph.add_child(current, value, remaining),
        };
    }
    graph.node_mut(current).end_of_word = true;
}

/// Marks the head and tail of every sibling list.
///
/// Runs on the finished trie, before fingerprinting: the first-child flag
/// participates in the merge ordering and the last-child flag becomes the
/// end-of-list bit on disk.
pub fn mark_sibling_lists(graph: &mut Graph) {
    for id in graph.ids() {
        let children: Vec<NodeId> = graph.node(id).children.to_vec();
        if children.is_empty() {
            continue;
        }
        graph.node_mut(children[0]).is_first_child = true;
        for (last, child) in children.into_iter().mark_last() {
            graph.node_mut(child).is_last_child = last;
        }
    }
}
