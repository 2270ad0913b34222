use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ebpf_tools::{c_array, listing, render_listing};

#[derive(Parser, Debug)]
#[command(author, version, about = "Utilities for ebpf-asm object files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print each file as a C byte array literal for embedding
    Bin2array {
        /// Object files to render
        #[arg(value_name = "BINFILE", required = true)]
        inputs: Vec<PathBuf>,
        /// Array identifier
        #[arg(long, default_value = "prog")]
        name: String,
    },
    /// List the records of an object file as source text
    Dis {
        #[arg(value_name = "BINFILE")]
        input: PathBuf,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Bin2array { inputs, name } => {
            for path in inputs {
                let bytes = std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
                debug!(path = %path.display(), len = bytes.len(), "bin2array");
                println!("{}", c_array(&name, &bytes));
            }
        }
        Command::Dis { input, format, out } => {
            let bytes = std::fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
            let lines = listing(&bytes)?;
            let buf = match format {
                OutputFormat::Text => render_listing(&lines),
                OutputFormat::Json => serde_json::to_string_pretty(&lines)?,
            };
            if let Some(path) = out { std::fs::write(path, buf)?; } else { print!("{}", buf); }
        }
    }
    Ok(())
}
