//! Linear index assignment.

use crate::codec::MAX_CHILD_INDEX;
use crate::error::{Error, Result};
use crate::graph::node::{Graph, NodeId};

/// Assigns a `dawg_index` to every surviving node and returns the nodes in
/// index order.
///
/// A children list is assigned as one contiguous run, exactly once. The
/// single-assignment discipline is detected at the list head: only a
/// first-child head that is still unindexed triggers assignment. A list
/// whose head is a spliced-in mid-list node is a suffix of some longer run
/// and gets its indices when that run's owner is visited, so one
/// first-child-index field per node is enough to address any list.
///
/// Index 0 stays reserved as the no-children sentinel; assignment starts
/// at 1 with the root's first child.
pub fn assign_indices(graph: &mut Graph) -> Result<Vec<NodeId>> {
    let mut indexed = Vec::new();
    index_children(graph, Graph::ROOT, &mut indexed);
    if indexed.len() > MAX_CHILD_INDEX as usize {
        return Err(Error::CapacityExceeded(indexed.len()));
    }
    Ok(indexed)
}

fn index_children(graph: &mut Graph, id: NodeId, indexed: &mut Vec<NodeId>) {
    let children: Vec<NodeId> = graph.node(id).children.to_vec();
    let Some(&head) = children.first() else {
        return;
    };
    if !graph.node(head).is_first_child || graph.node(head).dawg_index.is_some() {
        return;
    }
    for &child in &children {
        graph.node_mut(child).dawg_index = Some(indexed.len() as u32 + 1);
        indexed.push(child);
    }
    for &child in &children {
        index_children(graph, child, indexed);
    }
}
