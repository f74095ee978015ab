//! DOT rendering for compiled parser state machines.
//!
//! Turns a rooted state-machine graph into a Graphviz document for manual
//! inspection. Every edge group that shares a source, a target and an
//! advance kind is drawn as one edge whose label lists all of its keys.
//!
//! # Module Structure
//!
//! - [`enumerate`]: reachable-node discovery
//! - [`classify`]: edge bucketing by advance kind, target and key shape
//! - [`range`]: single-byte key compression into byte ranges
//! - [`label`]: label text for bytes, ranges, sequences and codes
//! - [`ident`]: unique per-node identifiers
//! - [`dot`]: DOT format utilities and the document builder

pub mod classify;
pub mod dot;
pub mod enumerate;
pub mod ident;
pub mod label;
mod options;
pub mod range;

use std::time::Instant;

use lldot_error::Result;
use lldot_graph::StateNode;

use classify::{EdgeKind, EdgeMap, classify_node, split_keys};
use ident::Identifiers;
use label::{code_label, join_labels, otherwise_label, sequence_label};

pub use dot::{Color, DotBuilder};
pub use options::{DEFAULT_RANK_SEPARATION, DotOptions};

// ============================================================================
// Public API
// ============================================================================

/// Render the graph reachable from `root` with default options.
pub fn render<'g, N: StateNode<'g>>(root: &'g N) -> Result<String> {
    Dot::new().build(root)
}

/// Render the graph reachable from `root` with custom options.
pub fn render_with_options<'g, N: StateNode<'g>>(
    root: &'g N,
    options: DotOptions,
) -> Result<String> {
    Dot::with_options(options).build(root)
}

/// The edge statements of one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeBlock {
    /// Escaped identifier of the source node.
    pub id: String,
    /// Edge statements, possibly empty.
    pub body: String,
}

/// Renderer state for one graph.
///
/// Holds the identifier tables of the current render. `build` resets them,
/// so a value can be reused, but never share one between concurrent renders.
pub struct Dot<'g, N> {
    options: DotOptions,
    ids: Identifiers<'g, N>,
}

impl<'g, N: StateNode<'g>> Default for Dot<'g, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g, N: StateNode<'g>> Dot<'g, N> {
    pub fn new() -> Self {
        Self::with_options(DotOptions::default())
    }

    pub fn with_options(options: DotOptions) -> Self {
        Self {
            options,
            ids: Identifiers::new(),
        }
    }

    pub fn options(&self) -> &DotOptions {
        &self.options
    }

    /// Identifier of `node` in the current render.
    pub fn id(&mut self, node: &'g N) -> String {
        self.ids.id(node)
    }

    /// Render the whole document.
    ///
    /// Fails only when a regular edge has no key; nothing is returned in
    /// that case.
    pub fn build(&mut self, root: &'g N) -> Result<String> {
        let start = Instant::now();
        let blocks = self.build_blocks(root)?;

        let estimated_size = blocks.iter().map(|b| b.body.len()).sum::<usize>() + 200;
        let mut builder = DotBuilder::new();
        if self.options.left_to_right {
            builder.attr("rankdir", "LR");
        }
        if let Some(ranksep) = &self.options.rank_separation {
            builder.attr("ranksep", ranksep);
        }
        builder
            .attr("overlap", "false")
            .attr("splines", "true")
            .attr("concentrate", "true");

        let mut body = String::with_capacity(estimated_size);
        for block in &blocks {
            body.push_str(&block.body);
        }
        builder.raw(&body);
        let output = builder.build();

        tracing::debug!(
            nodes = blocks.len(),
            bytes = output.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "rendered graph"
        );
        Ok(output)
    }

    /// One block per node reachable from `root`, in enumeration order.
    ///
    /// Identifiers are assigned in the same order before any block is
    /// built, so the root keeps its bare name.
    pub fn build_blocks(&mut self, root: &'g N) -> Result<Vec<NodeBlock>> {
        self.ids.clear();
        let nodes = enumerate::enumerate_nodes(root);
        for &node in &nodes {
            self.ids.id(node);
        }

        let mut blocks = Vec::with_capacity(nodes.len());
        for node in nodes {
            let id = self.ids.id(node);
            let body = match self.build_node(node, &id) {
                Ok(body) => body,
                Err(err) => {
                    tracing::error!(node = %id, error = %err, "render aborted");
                    return Err(err.with_operation("render::build_blocks"));
                }
            };
            tracing::trace!(node = %id, bytes = body.len(), "node block");
            blocks.push(NodeBlock { id, body });
        }
        Ok(blocks)
    }

    fn build_node(&mut self, node: &'g N, id: &str) -> Result<String> {
        let mut out = String::new();
        let classified = classify_node(node);

        for (kind, map) in classified.buckets() {
            self.build_edge_map(&mut out, node, id, map, kind)?;
        }

        if let Some(otherwise) = &classified.otherwise {
            let target = self.ids.id(otherwise.target);
            let kind = EdgeKind::from_no_advance(otherwise.no_advance);
            dot::write_edge(
                &mut out,
                id,
                &target,
                otherwise_label(otherwise.no_advance),
                kind.color(),
            );
        }

        Ok(out)
    }

    fn build_edge_map(
        &mut self,
        out: &mut String,
        node: &'g N,
        id: &str,
        map: &EdgeMap<'g, N>,
        kind: EdgeKind,
    ) -> Result<()> {
        for group in map.groups() {
            let shapes = split_keys(node, group)?;
            let target = self.ids.id(group.target);

            let mut labels: Vec<String> = range::compress(group.target, &shapes.singles)
                .iter()
                .map(range::Range::label)
                .collect();
            labels.extend(shapes.sequences.iter().map(|seq| sequence_label(seq)));
            if !labels.is_empty() {
                dot::write_edge(out, id, &target, &join_labels(&labels), kind.color());
            }

            if !shapes.codes.is_empty() {
                let codes: Vec<String> = shapes.codes.iter().map(|&c| code_label(c)).collect();
                dot::write_edge(
                    out,
                    id,
                    &target,
                    &join_labels(&codes),
                    EdgeKind::Invoke.color(),
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lldot_error::ErrorKind;
    use lldot_graph::{Edge, GraphArena};
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN_HEADER: &str =
        "digraph {\n  overlap=\"false\";\n  splines=\"true\";\n  concentrate=\"true\";\n";

    fn plain<'g>(root: &'g lldot_graph::ArenaNode<'g>) -> String {
        render_with_options(root, DotOptions::plain()).unwrap()
    }

    #[test]
    fn default_header_is_left_to_right() {
        let arena = GraphArena::new();
        let root = arena.node("root");

        assert_eq!(
            render(root).unwrap(),
            "digraph {\n  rankdir=\"LR\";\n  ranksep=\"1.0 equally\";\n  overlap=\"false\";\n  \
             splines=\"true\";\n  concentrate=\"true\";\n}\n"
        );
    }

    #[test]
    fn plain_options_drop_orientation() {
        let arena = GraphArena::new();
        let root = arena.node("root");

        assert_eq!(plain(root), format!("{PLAIN_HEADER}}}\n"));
    }

    #[test]
    fn custom_rank_separation() {
        let arena = GraphArena::new();
        let root = arena.node("root");
        let options = DotOptions::plain().with_rank_separation(Some("2.5".to_string()));

        let out = render_with_options(root, options).unwrap();
        assert!(out.contains("  ranksep=\"2.5\";\n"));
        assert!(!out.contains("rankdir"));
    }

    #[test]
    fn one_edge_per_kind_and_target() {
        let arena = GraphArena::new();
        let root = arena.node("root");
        let next = arena.node("next");
        root.match_any(b"abc", next)
            .match_bytes(b"if", next)
            .unwrap()
            .match_byte(b'z', next)
            .peek(b'q', next);

        assert_eq!(
            plain(root),
            format!(
                "{PLAIN_HEADER}  \"root\" -> \"next\" [label=\"'a':'c'|'z'|'if'\" color=\"black\"];\n  \
                 \"root\" -> \"next\" [label=\"'q'\" color=\"blue\"];\n}}\n"
            )
        );
    }

    #[test]
    fn invoke_edges_get_their_own_statement() {
        let arena = GraphArena::new();
        let call = arena.node("call");
        let done = arena.node("done");
        let fail = arena.node("fail");
        call.invoke_code(0, done)
            .invoke_code(1, done)
            .peek(b'x', done)
            .otherwise(fail)
            .unwrap();

        let out = plain(call);
        assert!(out.contains("  \"call\" -> \"done\" [label=\"'x'\" color=\"blue\"];\n"));
        assert!(out.contains("  \"call\" -> \"done\" [label=\"code=0|code=1\" color=\"green\"];\n"));
        assert!(out.contains("  \"call\" -> \"fail\" [label=\"otherwise\" color=\"blue\"];\n"));
    }

    #[test]
    fn skip_to_is_drawn_as_advancing() {
        let arena = GraphArena::new();
        let root = arena.node("root");
        root.skip_to(root).unwrap();

        assert!(plain(root).contains("  \"root\" -> \"root\" [label=\"skipTo\" color=\"black\"];\n"));
    }

    #[test]
    fn labels_are_escaped() {
        let arena = GraphArena::new();
        let root = arena.node("root");
        root.match_byte(b'"', root).match_byte(b'\\', root);

        // '"' (0x22) and '\' (0x5c) are not adjacent, so two ranges.
        assert!(plain(root).contains(r#"[label="'\"'|'\\'" color="black"]"#));
    }

    #[test]
    fn node_without_edges_has_empty_block() {
        let arena = GraphArena::new();
        let root = arena.node("root");
        let leaf = arena.node("leaf");
        root.match_byte(b'a', leaf);

        let blocks = Dot::new().build_blocks(root).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1], NodeBlock { id: "leaf".to_string(), body: String::new() });
    }

    #[test]
    fn missing_key_aborts_render() {
        let arena = GraphArena::new();
        let root = arena.node("root");
        let next = arena.node("next");
        root.match_byte(b'a', next);
        next.edge(Edge::otherwise(root, true));

        let err = render(root).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        assert_eq!(err.operation(), "render::build_blocks");
        assert_eq!(err.context_value("called"), Some("render::split_keys"));
        assert_eq!(err.context_value("node"), Some("next"));
    }

    #[test]
    fn reused_renderer_starts_fresh() {
        let arena = GraphArena::new();
        let first = arena.node("state");
        let second = arena.node("state");
        first.match_byte(b'a', second);

        let mut dot = Dot::new();
        let once = dot.build(first).unwrap();
        let twice = dot.build(first).unwrap();
        assert_eq!(once, twice);

        // Rendering from the other node flips which one keeps the bare name.
        dot.build(second).unwrap();
        assert_eq!(dot.id(second), "state");
    }
}
