use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use lldot_cli::output::write_output;
use lldot_cli::{LayoutOptions, LldotOptions, run_main};
use lldot_error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "lldot",
    about = "lldot: draw parser state machines as Graphviz DOT",
    version
)]
pub struct Cli {
    /// Graph description file (TOML)
    #[arg(value_name = "GRAPH")]
    input: PathBuf,

    /// Node id to start rendering from, instead of the description's `root`
    #[arg(long, value_name = "ID")]
    root: Option<String>,

    #[command(flatten)]
    layout: LayoutOptions,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = LldotOptions {
        input: args.input,
        root: args.root,
        output: args.output,
        dot: args.layout.dot_options(),
    };

    let output = match run_main(&opts) {
        Ok(output) => output,
        Err(e) => {
            tracing::error!(error = %e, "execution failed");
            return Err(e);
        }
    };

    if let Some(ref path) = opts.output {
        write_output(path, &output)?;
    } else {
        print!("{output}");
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
