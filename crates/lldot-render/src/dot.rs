//! DOT format utilities for graph rendering.

use std::fmt::Write;

use strum_macros::{Display, IntoStaticStr};

/// Edge colors of the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    /// Edges that consume a byte.
    Black,
    /// Edges that leave the input position untouched.
    Blue,
    /// Callback return-code edges.
    Green,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Escape a string for use inside a double-quoted DOT string.
///
/// Only `\` and `"` are special there; everything else is kept verbatim.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// Write one edge statement.
///
/// `from` and `to` must already be escaped identifiers; `label` is escaped
/// here.
pub fn write_edge(output: &mut String, from: &str, to: &str, label: &str, color: Color) {
    write_indent(output, 1);
    let _ = writeln!(
        output,
        "\"{from}\" -> \"{to}\" [label=\"{}\" color=\"{color}\"];",
        escape(label)
    );
}

/// A DOT graph builder for the document frame: header attributes, raw
/// node blocks, closing brace.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Start an anonymous `digraph`.
    pub fn new() -> Self {
        let mut output = String::with_capacity(4096);
        output.push_str("digraph {\n");
        Self { output, indent: 1 }
    }

    /// Add a graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}=\"{}\";", key, escape(value));
        self
    }

    /// Append pre-rendered statements.
    pub fn raw(&mut self, statements: &str) -> &mut Self {
        self.output.push_str(statements);
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

impl Default for DotBuilder {
    fn default() -> Self {
        Self::new()
    }
}
