//! Graph description files.
//!
//! A description is a TOML document naming the root node and listing every
//! node with its edges. Node `id`s are unique keys inside the file; the
//! optional `name` is what gets rendered and may repeat.
//!
//! ```toml
//! root = "start"
//!
//! [[nodes]]
//! id = "start"
//! skip_to = "start"
//!
//! [[nodes.edges]]
//! target = "body"
//! any_of = "0123456789"
//!
//! [[nodes]]
//! id = "body"
//! name = "start"
//! otherwise = "start"
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use lldot_error::{Error, ErrorKind, Result};
use lldot_graph::{ArenaNode, Edge, EdgeKey, GraphArena};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDescription {
    /// Id of the node rendering starts from.
    pub root: String,
    #[serde(default)]
    pub nodes: Vec<NodeDescription>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDescription {
    pub id: String,
    /// Display name, defaults to `id`.
    pub name: Option<String>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
    /// Target of a non-advancing otherwise edge.
    pub otherwise: Option<String>,
    /// Target of an advancing otherwise edge.
    pub skip_to: Option<String>,
}

/// One edge entry. Exactly one of `match`, `any_of`, `bytes` and `code`
/// must be given.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeDescription {
    pub target: String,
    /// Literal text to match.
    #[serde(rename = "match")]
    pub literal: Option<String>,
    /// One single-byte edge per byte of this text.
    pub any_of: Option<String>,
    /// Literal raw bytes to match.
    pub bytes: Option<Vec<u8>>,
    /// Callback return code.
    pub code: Option<i32>,
    /// Do not consume the matched input. Not allowed with `code`, whose
    /// edges never consume input.
    #[serde(default)]
    pub peek: bool,
}

impl EdgeDescription {
    /// Keys of this entry; `any_of` expands to several.
    fn keys(&self) -> Result<Vec<EdgeKey>> {
        let given = [
            self.literal.is_some(),
            self.any_of.is_some(),
            self.bytes.is_some(),
            self.code.is_some(),
        ]
        .into_iter()
        .filter(|&set| set)
        .count();
        if given != 1 {
            return Err(Error::config_invalid(
                "edge needs exactly one of `match`, `any_of`, `bytes`, `code`",
            ));
        }

        if let Some(code) = self.code {
            if self.peek {
                return Err(Error::config_invalid(
                    "`peek` does not apply to `code` edges, they never consume input",
                ));
            }
            return Ok(vec![EdgeKey::Code(code)]);
        }
        if let Some(any_of) = &self.any_of {
            if any_of.is_empty() {
                return Err(Error::config_invalid("`any_of` must not be empty"));
            }
            return Ok(any_of.bytes().map(EdgeKey::from).collect());
        }

        let bytes = match (&self.literal, &self.bytes) {
            (Some(text), _) => text.as_bytes().to_vec(),
            (_, Some(bytes)) => bytes.clone(),
            _ => Vec::new(),
        };
        if bytes.is_empty() {
            return Err(Error::config_invalid("match key must not be empty"));
        }
        Ok(vec![EdgeKey::Bytes(bytes)])
    }
}

impl GraphDescription {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| {
            Error::new(ErrorKind::DeserializationFailed, err.message().to_string())
                .with_operation("description::from_toml")
                .set_source(err)
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            Error::from(err)
                .with_operation("description::load")
                .with_context("path", path.display().to_string())
        })?;
        Self::from_toml(&text).map_err(|err| err.with_context("path", path.display().to_string()))
    }

    /// Allocate the described graph in `arena` and return its root.
    ///
    /// `root` overrides the description's own root id.
    pub fn build<'g>(
        &self,
        arena: &'g GraphArena<'g>,
        root: Option<&str>,
    ) -> Result<&'g ArenaNode<'g>> {
        let mut by_id: HashMap<&str, &'g ArenaNode<'g>> = HashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let name = node.name.as_deref().unwrap_or(node.id.as_str());
            if by_id.insert(node.id.as_str(), arena.node(name)).is_some() {
                return Err(Error::config_invalid("duplicate node id")
                    .with_operation("description::build")
                    .with_context("node", node.id.clone()));
            }
        }

        let lookup = |id: &str| {
            by_id
                .get(id)
                .copied()
                .ok_or_else(|| Error::node_not_found(id).with_operation("description::build"))
        };

        for node in &self.nodes {
            let source = lookup(node.id.as_str())?;
            for (index, edge) in node.edges.iter().enumerate() {
                let annotate = |err: Error| {
                    err.with_operation("description::build")
                        .with_context("node", node.id.clone())
                        .with_context("edge", index.to_string())
                };
                let target = lookup(edge.target.as_str()).map_err(annotate)?;
                for key in edge.keys().map_err(annotate)? {
                    match key {
                        EdgeKey::Code(code) => source.invoke_code(code, target),
                        key => source.edge(Edge::new(target, key, edge.peek)),
                    };
                }
            }

            match (&node.otherwise, &node.skip_to) {
                (Some(_), Some(_)) => {
                    return Err(Error::config_invalid(
                        "node has both `otherwise` and `skip_to`",
                    )
                    .with_operation("description::build")
                    .with_context("node", node.id.clone()));
                }
                (Some(id), None) => {
                    source.otherwise(lookup(id.as_str())?)?;
                }
                (None, Some(id)) => {
                    source.skip_to(lookup(id.as_str())?)?;
                }
                (None, None) => {}
            }
        }

        let root = root.unwrap_or(self.root.as_str());
        tracing::debug!(nodes = arena.len(), root, "graph description built");
        lookup(root)
    }
}

#[cfg(test)]
mod tests {
    use lldot_graph::StateNode;
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = r#"
        root = "start"

        [[nodes]]
        id = "start"
        skip_to = "start"

        [[nodes.edges]]
        target = "body"
        any_of = "012"

        [[nodes.edges]]
        target = "body"
        match = "GET"
        peek = true

        [[nodes]]
        id = "body"
        name = "start"
        otherwise = "start"

        [[nodes.edges]]
        target = "start"
        code = 3

        [[nodes.edges]]
        target = "start"
        bytes = [0, 255]
    "#;

    #[test]
    fn parses_and_builds_sample() {
        let description = GraphDescription::from_toml(SAMPLE).unwrap();
        assert_eq!(description.nodes.len(), 2);

        let arena = GraphArena::new();
        let root = description.build(&arena, None).unwrap();
        assert_eq!(root.name(), "start");
        assert_eq!(arena.len(), 2);

        let edges = root.edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].key, Some(EdgeKey::Bytes(b"GET".to_vec())));
        assert!(edges[3].no_advance);
        assert!(!root.otherwise_edge().unwrap().no_advance);

        let body = edges[0].target;
        assert_eq!(body.name(), "start");
        assert_eq!(body.edges()[0].key, Some(EdgeKey::Code(3)));
        assert_eq!(body.edges()[1].key, Some(EdgeKey::Bytes(vec![0, 255])));
        assert!(body.otherwise_edge().unwrap().no_advance);
    }

    #[test]
    fn root_override() {
        let description = GraphDescription::from_toml(SAMPLE).unwrap();
        let arena = GraphArena::new();
        let root = description.build(&arena, Some("body")).unwrap();
        assert_eq!(root.edge_count(), 2);
    }

    #[test]
    fn unknown_target_is_reported_with_location() {
        let description = GraphDescription::from_toml(
            r#"
            root = "a"
            [[nodes]]
            id = "a"
            [[nodes.edges]]
            target = "nowhere"
            match = "x"
            "#,
        )
        .unwrap();

        let arena = GraphArena::new();
        let err = description.build(&arena, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NodeNotFound);
        assert_eq!(err.context_value("node"), Some("nowhere"));
        assert_eq!(err.context_value("edge"), Some("0"));
    }

    #[test]
    fn unknown_root_is_rejected() {
        let description = GraphDescription::from_toml("root = \"missing\"").unwrap();
        let arena = GraphArena::new();
        let err = description.build(&arena, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NodeNotFound);
    }

    #[test]
    fn edge_key_forms_are_exclusive() {
        let description = GraphDescription::from_toml(
            r#"
            root = "a"
            [[nodes]]
            id = "a"
            [[nodes.edges]]
            target = "a"
            match = "x"
            code = 1
            "#,
        )
        .unwrap();

        let arena = GraphArena::new();
        let err = description.build(&arena, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn empty_keys_are_rejected() {
        for key in ["match = \"\"", "any_of = \"\"", "bytes = []"] {
            let text = format!(
                "root = \"a\"\n[[nodes]]\nid = \"a\"\n[[nodes.edges]]\ntarget = \"a\"\n{key}\n"
            );
            let description = GraphDescription::from_toml(&text).unwrap();
            let arena = GraphArena::new();
            let err = description.build(&arena, None).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ConfigInvalid, "{key}");
        }
    }

    #[test]
    fn peek_is_rejected_on_code_edges() {
        let description = GraphDescription::from_toml(
            r#"
            root = "a"
            [[nodes]]
            id = "a"
            [[nodes.edges]]
            target = "a"
            code = 2
            peek = true
            "#,
        )
        .unwrap();

        let arena = GraphArena::new();
        let err = description.build(&arena, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(err.context_value("node"), Some("a"));
        assert_eq!(err.context_value("edge"), Some("0"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let description = GraphDescription::from_toml(
            "root = \"a\"\n[[nodes]]\nid = \"a\"\n[[nodes]]\nid = \"a\"\n",
        )
        .unwrap();
        let arena = GraphArena::new();
        let err = description.build(&arena, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn otherwise_and_skip_to_conflict() {
        let description = GraphDescription::from_toml(
            "root = \"a\"\n[[nodes]]\nid = \"a\"\notherwise = \"a\"\nskip_to = \"a\"\n",
        )
        .unwrap();
        let arena = GraphArena::new();
        let err = description.build(&arena, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn syntax_errors_are_deserialization_failures() {
        let err = GraphDescription::from_toml("root = ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DeserializationFailed);
        assert!(err.source_ref().is_some());

        let err = GraphDescription::from_toml("root = \"a\"\ncolor = \"red\"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DeserializationFailed);
    }
}
