//! Per-node edge classification.
//!
//! Regular edges of a node are split by advance kind, then grouped by
//! target, then split by key shape. Targets keep the order in which they
//! were first seen; edges keep their order inside a group.

use std::collections::HashMap;

use lldot_error::{Error, Result};
use lldot_graph::{Edge, EdgeKey, NodeRef, StateNode};
use strum_macros::{Display, IntoStaticStr};

use crate::dot::Color;

/// Visual kind of a rendered edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum EdgeKind {
    Advance,
    NoAdvance,
    Invoke,
}

impl EdgeKind {
    pub fn from_no_advance(no_advance: bool) -> Self {
        if no_advance {
            EdgeKind::NoAdvance
        } else {
            EdgeKind::Advance
        }
    }

    pub fn color(self) -> Color {
        match self {
            EdgeKind::Advance => Color::Black,
            EdgeKind::NoAdvance => Color::Blue,
            EdgeKind::Invoke => Color::Green,
        }
    }
}

/// All edges of one bucket that lead to `target`.
pub struct TargetGroup<'g, N> {
    pub target: &'g N,
    pub edges: Vec<Edge<'g, N>>,
}

/// Target -> edges, iterated in first-seen target order.
pub struct EdgeMap<'g, N> {
    groups: Vec<TargetGroup<'g, N>>,
    index: HashMap<NodeRef<'g, N>, usize>,
}

impl<'g, N> EdgeMap<'g, N> {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn push(&mut self, edge: Edge<'g, N>) {
        let slot = *self
            .index
            .entry(NodeRef(edge.target))
            .or_insert(self.groups.len());
        if slot == self.groups.len() {
            self.groups.push(TargetGroup {
                target: edge.target,
                edges: Vec::new(),
            });
        }
        self.groups[slot].edges.push(edge);
    }

    pub fn groups(&self) -> &[TargetGroup<'g, N>] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<N> Default for EdgeMap<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// A node's outgoing edges, bucketed by advance kind.
pub struct ClassifiedEdges<'g, N> {
    pub advance: EdgeMap<'g, N>,
    pub no_advance: EdgeMap<'g, N>,
    pub otherwise: Option<Edge<'g, N>>,
}

impl<'g, N> ClassifiedEdges<'g, N> {
    /// Buckets in output order.
    pub fn buckets(&self) -> [(EdgeKind, &EdgeMap<'g, N>); 2] {
        [
            (EdgeKind::Advance, &self.advance),
            (EdgeKind::NoAdvance, &self.no_advance),
        ]
    }
}

pub fn classify_node<'g, N: StateNode<'g>>(node: &N) -> ClassifiedEdges<'g, N> {
    let mut advance = EdgeMap::new();
    let mut no_advance = EdgeMap::new();
    for edge in node.edges() {
        if edge.no_advance {
            no_advance.push(edge);
        } else {
            advance.push(edge);
        }
    }

    ClassifiedEdges {
        advance,
        no_advance,
        otherwise: node.otherwise_edge(),
    }
}

/// Keys of one target group, split by shape.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyShapes {
    /// One-byte keys, in edge order.
    pub singles: Vec<u8>,
    /// Keys of two or more bytes.
    pub sequences: Vec<Vec<u8>>,
    /// Callback return codes.
    pub codes: Vec<i32>,
}

/// Split the keys of `group`, an edge group of `source`.
///
/// A keyless edge here means the graph stored an otherwise edge among the
/// regular ones; that is a bug in whatever built the graph.
pub fn split_keys<'g, N: StateNode<'g>>(
    source: &N,
    group: &TargetGroup<'g, N>,
) -> Result<KeyShapes> {
    let mut shapes = KeyShapes::default();
    for (position, edge) in group.edges.iter().enumerate() {
        match &edge.key {
            None => {
                return Err(
                    Error::invariant_violation("regular edge without a key")
                        .with_operation("render::split_keys")
                        .with_context("node", source.name())
                        .with_context("target", group.target.name())
                        .with_context("position", position.to_string()),
                );
            }
            Some(EdgeKey::Code(code)) => shapes.codes.push(*code),
            Some(EdgeKey::Bytes(bytes)) if bytes.len() == 1 => shapes.singles.push(bytes[0]),
            Some(EdgeKey::Bytes(bytes)) => shapes.sequences.push(bytes.clone()),
        }
    }
    Ok(shapes)
}
