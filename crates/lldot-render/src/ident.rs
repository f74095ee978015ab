//! Node identifiers.

use std::collections::{HashMap, HashSet};

use lldot_graph::{NodeRef, StateNode};

use crate::dot::escape;

/// Unique identifier per node for one render.
///
/// The display name is used as is when free. Later nodes with a taken name
/// get the first free `name_0`, `name_1`, ... .
pub struct Identifiers<'g, N> {
    cache: HashMap<NodeRef<'g, N>, String>,
    namespace: HashSet<String>,
}

impl<'g, N: StateNode<'g>> Identifiers<'g, N> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            namespace: HashSet::new(),
        }
    }

    /// Escaped identifier of `node`, assigning one on first use.
    pub fn id(&mut self, node: &'g N) -> String {
        if let Some(id) = self.cache.get(&NodeRef(node)) {
            return id.clone();
        }

        let name = node.name();
        let mut candidate = name.to_string();
        if self.namespace.contains(&candidate) {
            let bound = self.namespace.len();
            let mut suffix = 0usize;
            candidate = loop {
                let probe = format!("{name}_{suffix}");
                if !self.namespace.contains(&probe) {
                    break probe;
                }
                suffix += 1;
            };
            debug_assert!(suffix <= bound);
        }

        let id = escape(&candidate);
        self.namespace.insert(candidate);
        self.cache.insert(NodeRef(node), id.clone());
        id
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.namespace.clear();
    }
}

impl<'g, N: StateNode<'g>> Default for Identifiers<'g, N> {
    fn default() -> Self {
        Self::new()
    }
}
