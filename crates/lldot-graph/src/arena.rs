//! Arena-backed state-machine graph.
//!
//! Nodes are allocated in a [`GraphArena`] and linked by plain references,
//! so cycles need no reference counting. Edges are added after allocation
//! through interior mutability:
//!
//! ```rust
//! use lldot_graph::GraphArena;
//!
//! let arena = GraphArena::new();
//! let root = arena.node("root");
//! let body = arena.node("body");
//!
//! root.match_any(b"0123456789", root)
//!     .match_bytes(b"hello", body)?
//!     .skip_to(root)?;
//! body.otherwise(root)?;
//! # Ok::<(), lldot_graph::Error>(())
//! ```

use std::cell::RefCell;
use std::fmt;

use typed_arena::Arena;

use crate::{Edge, EdgeKey, Error, Result, StateNode};

type NodeEdge<'g> = Edge<'g, ArenaNode<'g>>;

/// Owner of every node of one graph.
#[derive(Default)]
pub struct GraphArena<'g> {
    nodes: Arena<ArenaNode<'g>>,
}

impl<'g> GraphArena<'g> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node with no edges.
    pub fn node(&'g self, name: impl Into<String>) -> &'g ArenaNode<'g> {
        self.nodes.alloc(ArenaNode {
            name: name.into(),
            edges: RefCell::default(),
            otherwise: RefCell::default(),
        })
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for GraphArena<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphArena")
            .field("nodes", &self.len())
            .finish()
    }
}

/// A node of an arena graph.
///
/// Builder methods return `&Self` so calls chain; the ones that can reject
/// their input return `Result<&Self>`.
pub struct ArenaNode<'g> {
    name: String,
    edges: RefCell<Vec<NodeEdge<'g>>>,
    otherwise: RefCell<Option<NodeEdge<'g>>>,
}

impl<'g> ArenaNode<'g> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn edge_count(&self) -> usize {
        self.edges.borrow().len()
    }

    pub fn has_otherwise(&self) -> bool {
        self.otherwise.borrow().is_some()
    }

    /// Append a raw edge. The key is not checked.
    pub fn edge(&self, edge: NodeEdge<'g>) -> &Self {
        tracing::trace!(
            node = %self.name,
            to = %edge.target.name,
            key = ?edge.key,
            no_advance = edge.no_advance,
            "add edge"
        );
        self.edges.borrow_mut().push(edge);
        self
    }

    /// Consume `byte` and move to `target`.
    pub fn match_byte(&self, byte: u8, target: &'g ArenaNode<'g>) -> &Self {
        self.edge(Edge::new(target, byte, false))
    }

    /// One single-byte edge per element of `bytes`, in the given order.
    pub fn match_any(&self, bytes: &[u8], target: &'g ArenaNode<'g>) -> &Self {
        for &byte in bytes {
            self.match_byte(byte, target);
        }
        self
    }

    /// Consume the literal `bytes` and move to `target`.
    pub fn match_bytes(&self, bytes: &[u8], target: &'g ArenaNode<'g>) -> Result<&Self> {
        if bytes.is_empty() {
            return Err(Error::invalid_argument("match key must not be empty")
                .with_operation("graph::match_bytes")
                .with_context("node", self.name.clone()));
        }
        Ok(self.edge(Edge::new(target, EdgeKey::from(bytes), false)))
    }

    /// Move to `target` on `byte` without consuming it.
    pub fn peek(&self, byte: u8, target: &'g ArenaNode<'g>) -> &Self {
        self.edge(Edge::new(target, byte, true))
    }

    /// Move to `target` when the embedded callback returns `code`.
    pub fn invoke_code(&self, code: i32, target: &'g ArenaNode<'g>) -> &Self {
        self.edge(Edge::new(target, code, true))
    }

    /// Move to `target` without consuming input when nothing else matches.
    pub fn otherwise(&self, target: &'g ArenaNode<'g>) -> Result<&Self> {
        self.set_otherwise(Edge::otherwise(target, true))
    }

    /// Consume one byte and move to `target` when nothing else matches.
    pub fn skip_to(&self, target: &'g ArenaNode<'g>) -> Result<&Self> {
        self.set_otherwise(Edge::otherwise(target, false))
    }

    fn set_otherwise(&self, edge: NodeEdge<'g>) -> Result<&Self> {
        let mut slot = self.otherwise.borrow_mut();
        if slot.is_some() {
            return Err(
                Error::graph_build_failed("node already has an otherwise edge")
                    .with_operation("graph::set_otherwise")
                    .with_context("node", self.name.clone()),
            );
        }
        tracing::trace!(
            node = %self.name,
            to = %edge.target.name,
            no_advance = edge.no_advance,
            "set otherwise"
        );
        *slot = Some(edge);
        Ok(self)
    }
}

impl<'g> StateNode<'g> for ArenaNode<'g> {
    fn name(&self) -> &str {
        &self.name
    }

    fn edges(&self) -> Vec<Edge<'g, Self>> {
        self.edges.borrow().clone()
    }

    fn otherwise_edge(&self) -> Option<Edge<'g, Self>> {
        self.otherwise.borrow().clone()
    }
}

impl fmt::Debug for ArenaNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaNode")
            .field("name", &self.name)
            .field("edges", &self.edge_count())
            .field("otherwise", &self.has_otherwise())
            .finish()
    }
}
