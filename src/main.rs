use anyhow::{Context, Result};
use clap::Parser;
use mk2zig::{cli::Cli, line_source::LineSource, pipeline::Pipeline};
use std::io::{self, BufWriter};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = args.to_config()?;
    tracing::debug!(?config, "resolved configuration");

    let pipeline = Pipeline::new(config);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut diagnostics = io::stderr();

    match args.input_path() {
        Some(path) => {
            let source = LineSource::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            pipeline.run(source, &mut out, &mut diagnostics)?;
        }
        None => {
            pipeline.run(LineSource::stdin(), &mut out, &mut diagnostics)?;
        }
    }

    Ok(())
}
