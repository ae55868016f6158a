#![warn(clippy::pedantic)]
//! ** custom-ident **
//! Build a CSS `<custom-ident>` from command-line values or a JSON document.

mod input;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

#[derive(Parser)]
#[command(author, version, about = "Build a CSS <custom-ident> from mixed values.")]
struct Cli {
    /// Parse each value as a JSON document instead of a plain string.
    #[arg(long)]
    json: bool,
    /// Read extra arguments from a JSON array in this file (`-` for stdin).
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
    /// Values to join into the ident.
    values: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut args = input::from_values(&cli.values, cli.json)?;
    if let Some(path) = &cli.file {
        let extra = input::from_file(path)?;
        info!("{} argument(s) loaded from {}", extra.len(), path.display());
        args.extend(extra);
    }
    debug!("building ident from {} argument(s)", args.len());

    let ident = custom_ident::custom_ident(&args).context("while building custom ident")?;
    println!("{ident}");
    Ok(())
}
