//! `gradebook`: interactive student result manager on stdin/stdout.

use std::io;

use anyhow::{Context, Result};
use gradebook::args::USAGE;
use gradebook::{Args, GradebookConfig, Session};

fn main() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("usage: {}", USAGE);
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => GradebookConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => GradebookConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(config.level()?)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config.build_store(), stdin.lock(), stdout.lock());
    session.run().context("console session failed")?;

    Ok(())
}
