//! Depth-stratified graph minimization.
//!
//! Depth groups are processed from the deepest down to 0. Within a group,
//! nodes sort by fingerprint, then by first-child status with non-first
//! children ordering earlier, then by allocation order. A survivor absorbs
//! every later node with the same fingerprint that heads its own sibling
//! list; absorbing a head re-points all of its parents at the survivor's
//! sibling tail, which displaces the head's right siblings along with it.
//!
//! A non-first-child survivor never absorbs another non-first child: such a
//! node sits mid-list in its parents, where no tail splice can reach it.
//! Its whole list disappears instead when the list's head is absorbed at
//! the head's own depth.

use std::collections::BTreeSet;

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::graph::fingerprint::Fingerprint;
use crate::graph::node::{Graph, NodeId};

/// Sort key of one sweep entry: fingerprint bytes, first-child flag with
/// `false` ordering first, allocation order as the stable tiebreaker.
type SweepKey = (Fingerprint, bool, NodeId);

fn sweep_key(graph: &Graph, id: NodeId) -> SweepKey {
    let node = graph.node(id);
    (node.fingerprint, node.is_first_child, id)
}

/// Merges equivalent sibling suffixes, converting the trie into a DAWG.
///
/// `max_depth` is the deepest `depth_group` in the graph (longest word
/// length minus one). Every merge strictly reduces the reachable node
/// count and each depth is visited once, so the pass is finite.
pub fn minimize(graph: &mut Graph, max_depth: u32) -> Result<()> {
    for depth in (0..=max_depth).rev() {
        let mut sweep = BTreeSet::new();
        collect_at_depth(graph, Graph::ROOT, depth, &mut sweep);
        tracing::debug!(depth, nodes = sweep.len(), "sweeping depth group");
        if sweep.len() > 1 {
            merge_depth_group(graph, sweep)?;
        }
    }
    Ok(())
}

/// Collects every reachable node whose `depth_group` equals `depth`.
///
/// Descent prunes at nodes shallower than `depth`: a node's descendants
/// always sit in strictly shallower groups. Nodes displaced at deeper
/// sweeps are unreachable from the root and are never collected again.
fn collect_at_depth(graph: &Graph, id: NodeId, depth: u32, sweep: &mut BTreeSet<SweepKey>) {
    for &child in &graph.node(id).children {
        let group = graph.node(child).depth_group;
        if depth <= group {
            if depth == group {
                sweep.insert(sweep_key(graph, child));
            }
            collect_at_depth(graph, child, depth, sweep);
        }
    }
}

fn merge_depth_group(graph: &mut Graph, sweep: BTreeSet<SweepKey>) -> Result<()> {
    let order: Vec<SweepKey> = sweep.into_iter().collect();
    let mut erased: HashSet<NodeId> = HashSet::new();

    let mut cursor = 0;
    while cursor < order.len() {
        let (fingerprint, survivor_is_first, survivor) = order[cursor];
        cursor += 1;
        if erased.contains(&survivor) {
            continue;
        }

        // Mid-list nodes with the survivor's fingerprint are not
        // replaceable by a mid-list survivor; step over them.
        if !survivor_is_first {
            while cursor < order.len() && order[cursor].0 == fingerprint && !order[cursor].1 {
                cursor += 1;
            }
        }

        while cursor < order.len() && order[cursor].0 == fingerprint {
            let old = order[cursor].2;
            cursor += 1;
            if erased.contains(&old) {
                continue;
            }
            splice_out(graph, old, survivor, &mut erased)?;
            erased.insert(old);
        }
    }
    Ok(())
}

/// Replaces `old` and its right siblings with the corresponding tail of
/// `survivor`'s sibling list.
///
/// Every parent of a displaced node is recorded on its replacement, and a
/// parent whose first child was displaced has its entire children list
/// swapped for the survivor tail from that position onward. Displaced right
/// siblings land in `erased`; `old` itself is erased by the caller.
fn splice_out(
    graph: &mut Graph,
    old: NodeId,
    survivor: NodeId,
    erased: &mut HashSet<NodeId>,
) -> Result<()> {
    let old_tail = sibling_tail(graph, old)?;
    let new_tail = sibling_tail(graph, survivor)?;
    if old_tail.len() != new_tail.len() {
        return Err(Error::MalformedInternalState(
            "equal fingerprints imply equal sibling-tail lengths",
        ));
    }

    for position in (0..old_tail.len()).rev() {
        let displaced = old_tail[position];
        let replacement = new_tail[position];
        let parents: SmallVec<[NodeId; 2]> = graph.node(displaced).parents.clone();
        for parent in parents {
            graph.node_mut(replacement).parents.push(parent);
            if graph.node(parent).children.first() == Some(&displaced) {
                graph.node_mut(parent).children = new_tail[position..].iter().copied().collect();
            }
        }
    }

    for &displaced in &old_tail[1..] {
        erased.insert(displaced);
    }
    Ok(())
}

/// The tail of `id`'s sibling list from `id` to the end, read through the
/// node's first recorded parent.
fn sibling_tail(graph: &Graph, id: NodeId) -> Result<Vec<NodeId>> {
    let parent = *graph
        .node(id)
        .parents
        .first()
        .ok_or(Error::MalformedInternalState("non-root node with no parent"))?;
    let siblings = &graph.node(parent).children;
    let start = siblings
        .iter()
        .position(|&sibling| sibling == id)
        .ok_or(Error::MalformedInternalState(
            "node missing from its first parent's children list",
        ))?;
    Ok(siblings[start..].to_vec())
}
