use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use markdown_docset::{build_docset, docset_name};

#[derive(Parser)]
#[command(version, about = "Convert a Markdown document into a Dash docset", long_about = None)]
struct Cli {
    /// Path to the Markdown input file
    #[arg(value_name = "FILE")]
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let name = docset_name(&cli.input)?;
    println!("Parsing {} into {name}.docset", cli.input.display());

    let outcome = build_docset(&cli.input, Path::new("."))
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;

    println!(
        "Indexed {} of {} headings in {}",
        outcome.indexed,
        outcome.headings,
        outcome.bundle_dir.display()
    );

    Ok(())
}
