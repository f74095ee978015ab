use std::hash::{Hash, Hasher};

use crate::Edge;

/// Read-only view of a state-machine node.
///
/// This is everything a consumer of the graph may ask: the display name,
/// the regular edges in insertion order, and the optional otherwise edge.
/// Implementors own storage; consumers never mutate the graph.
pub trait StateNode<'g>: Sized + 'g {
    /// Display name. Several nodes may share one.
    fn name(&self) -> &str;

    /// Regular outgoing edges, in insertion order.
    fn edges(&self) -> Vec<Edge<'g, Self>>;

    /// The edge taken when no regular edge matches.
    fn otherwise_edge(&self) -> Option<Edge<'g, Self>>;
}

/// A node reference compared and hashed by address.
///
/// Names are not unique, so maps and sets over graph nodes key on identity.
pub struct NodeRef<'g, N>(pub &'g N);

impl<'g, N> NodeRef<'g, N> {
    pub fn get(self) -> &'g N {
        self.0
    }
}

impl<N> Clone for NodeRef<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for NodeRef<'_, N> {}

impl<N> PartialEq for NodeRef<'_, N> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl<N> Eq for NodeRef<'_, N> {}

impl<N> Hash for NodeRef<'_, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.0, state)
    }
}

impl<N> std::fmt::Debug for NodeRef<'_, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeRef({:p})", self.0)
    }
}
