use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ebpf_asm::{emit, AsmConfig, Assembler};

#[derive(Parser, Debug)]
#[command(author, version, about = "Assemble eBPF-style mnemonics into 8-byte records")]
struct Opts {
    /// Source file to assemble
    #[arg(value_name = "SOURCE")]
    source: PathBuf,
    /// Object file to write (default: <SOURCE>.o)
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,
    /// Dump the hex rendering to standard output instead of writing a file
    #[arg(short = 't', long)]
    stdout: bool,
    /// Dump the assembled program (records and labels) as JSON to standard output
    #[arg(long, conflicts_with_all = ["output", "stdout"])]
    json: bool,
    /// Let a later label declaration replace an earlier one instead of failing
    #[arg(long)]
    allow_label_redefinition: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let cfg = if opts.allow_label_redefinition {
        AsmConfig::overwrite_labels()
    } else {
        AsmConfig::default()
    };

    let text = std::fs::read_to_string(&opts.source)
        .with_context(|| format!("reading {}", opts.source.display()))?;
    let program = Assembler::new(cfg).assemble(&text)?;

    if opts.json {
        println!("{}", emit::to_json(&program)?);
        return Ok(());
    }
    if opts.stdout {
        info!(source = %opts.source.display(), "compiling to stdout");
        println!("{}", emit::to_hex(&program));
        return Ok(());
    }

    let out = opts.output.unwrap_or_else(|| {
        let mut p = opts.source.clone().into_os_string();
        p.push(".o");
        PathBuf::from(p)
    });
    info!(source = %opts.source.display(), output = %out.display(), "compiling");
    let file = File::create(&out).with_context(|| format!("creating {}", out.display()))?;
    emit::write_binary(&program, BufWriter::new(file))?;
    info!(records = program.len(), "done");
    Ok(())
}
