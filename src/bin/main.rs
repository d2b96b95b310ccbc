use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use jstub::{generate_file, Config};

#[derive(Parser)]
#[command(name = "jstub")]
#[command(about = "Generates a stripped down version of a Java factory file")]
#[command(version)]
struct Cli {
    /// Input java file path
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// Output java file path
    #[arg(long, value_name = "FILE")]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = Config::from_env().context("invalid JSTUB_* configuration")?;
    generate_file(&cli.input, &cli.output, &config)
        .with_context(|| format!("failed to strip {}", cli.input.display()))?;

    Ok(())
}
