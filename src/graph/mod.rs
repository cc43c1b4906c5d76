/// Structural fingerprints over subtrees and sibling tails.
pub mod fingerprint;
/// Linear index assignment for the encoded layout.
pub mod index;
/// Depth-stratified merging of equivalent suffixes.
pub mod minimize;
/// Arena-backed node and graph storage.
pub mod node;
/// Trie construction and sibling-list marking.
pub mod trie;

pub use fingerprint::fingerprint_graph;
pub use index::assign_indices;
pub use minimize::minimize;
pub use node::{Graph, Node, NodeId};
pub use trie::{build_trie, mark_sibling_lists};

#[cfg(test)]
mod test {
    use super::*;
    use crate::wordlist::parse_word_list;

    /// Runs every in-memory stage and returns the graph with its index
    /// order.
    fn through_indexing(text: &str) -> (Graph, Vec<NodeId>) {
        let words = parse_word_list(text);
        let max_depth = words.last().map_or(0, |w| w.len() as u32 - 1);
        let mut graph = build_trie(&words);
        mark_sibling_lists(&mut graph);
        fingerprint_graph(&mut graph);
        minimize(&mut graph, max_depth).unwrap();
        let order = assign_indices(&mut graph).unwrap();
        (graph, order)
    }

    #[test]
    fn contained_suffix_word_adds_no_nodes() {
        // "TOP" re-enters "STOP" at its T; the merged graph is exactly the
        // chain for the longer word.
        let (_, longest_only) = through_indexing("STOP");
        let (_, with_subword) = through_indexing("TOP STOP");
        assert_eq!(longest_only.len(), 4);
        assert_eq!(with_subword.len(), longest_only.len());
    }

    #[test]
    fn word_boundary_inside_a_longer_word() {
        // "CAR" ends on the node that continues into "CARS".
        let (graph, _) = through_indexing("CAR CARS");
        let r = graph
            .find_child(Graph::ROOT, b'C')
            .and_then(|c| graph.find_child(c, b'A'))
            .and_then(|a| graph.find_child(a, b'R'))
            .unwrap();
        assert!(graph.node(r).end_of_word);
        let s = graph.node(r).children[0];
        assert_eq!(graph.node(s).value, b'S');
        assert!(graph.node(s).end_of_word);
        assert!(graph.node(s).is_last_child);
    }
}
