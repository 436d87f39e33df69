//! Development tasks for fzf-preview.
//!
//! Usage: `cargo run -p xtask -- man [--out-dir DIR]`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for fzf-preview")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for every preview binary
    Man {
        /// Directory the pages are written to
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Cli::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    for command in fzf_preview::cli::commands() {
        let path = out_dir.join(format!("{}.1", command.get_name()));
        let mut page = Vec::new();
        clap_mangen::Man::new(command)
            .render(&mut page)
            .context("Failed to render man page")?;
        fs::write(&path, page).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Generated {}", path.display());
    }
    Ok(())
}
