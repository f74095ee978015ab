//! Output generation and writing.

use std::time::Instant;

use tracing::info;

use lldot_error::{Error, Result};
use lldot_graph::StateNode;
use lldot_render::{DotOptions, render_with_options};

/// Render the graph reachable from `root`.
pub fn generate_dot_output<'g, N: StateNode<'g>>(
    root: &'g N,
    options: &DotOptions,
) -> Result<String> {
    let render_start = Instant::now();
    let result = render_with_options(root, options.clone())?;

    info!(
        "Graph rendering: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );

    Ok(result)
}

/// Write a rendered document to `path`.
pub fn write_output(path: &str, output: &str) -> Result<()> {
    std::fs::write(path, output).map_err(|err| {
        Error::from(err)
            .with_operation("output::write_output")
            .with_context("path", path)
    })?;
    info!(path, bytes = output.len(), "output written");
    Ok(())
}
