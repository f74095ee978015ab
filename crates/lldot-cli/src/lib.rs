//! lldot command-line interface.
//!
//! Loads a TOML graph description, builds it into an arena and renders it
//! as DOT.
pub mod description;
pub mod options;
pub mod output;

use std::path::PathBuf;

use lldot_error::Result;
use lldot_graph::GraphArena;
use lldot_render::DotOptions;

pub use description::{EdgeDescription, GraphDescription, NodeDescription};
pub use options::LayoutOptions;

/// Options for running lldot.
pub struct LldotOptions {
    pub input: PathBuf,
    /// Overrides the description's `root`.
    pub root: Option<String>,
    pub output: Option<String>,
    pub dot: DotOptions,
}

/// Main entry point
pub fn run_main(opts: &LldotOptions) -> Result<String> {
    let description = GraphDescription::load(&opts.input)?;
    tracing::debug!(
        path = %opts.input.display(),
        nodes = description.nodes.len(),
        "description loaded"
    );

    let arena = GraphArena::new();
    let root = description.build(&arena, opts.root.as_deref())?;
    output::generate_dot_output(root, &opts.dot)
}
