//! Reachable-node discovery.

use std::collections::HashSet;

use lldot_graph::{NodeRef, StateNode};

/// Every node reachable from `root`, each exactly once, in first-visit order.
///
/// Follows regular edges and the otherwise edge. The work list is a stack,
/// so the order is depth-first-ish but only guaranteed to start with `root`
/// and to be the same for repeated calls on the same graph.
pub fn enumerate_nodes<'g, N: StateNode<'g>>(root: &'g N) -> Vec<&'g N> {
    let mut queue = vec![root];
    let mut seen: HashSet<NodeRef<'g, N>> = HashSet::new();
    let mut nodes = Vec::new();

    while let Some(node) = queue.pop() {
        if !seen.insert(NodeRef(node)) {
            continue;
        }
        nodes.push(node);

        for edge in node.edges() {
            queue.push(edge.target);
        }
        if let Some(otherwise) = node.otherwise_edge() {
            queue.push(otherwise.target);
        }
    }

    nodes
}
