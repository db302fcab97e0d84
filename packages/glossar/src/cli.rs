//! Command-line interface for the glossary scraper.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{resolve_output_path, validate_glossary_url, validate_output_dir, Settings};
use crate::error::Result;
use crate::export::save_csv;
use crate::harvester::{harvest_glossary, Progress};

/// KOFAM Glossar - Export the KOFAM glossary as a CSV file.
#[derive(Parser)]
#[command(name = "kofam-glossar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape all glossary terms and write them to a CSV file.
    Scrape {
        /// Config file (default: config.yaml in the working directory, if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Glossary index URL (overrides the config file)
        #[arg(short, long)]
        url: Option<String>,

        /// Output file template; [TIMESTAMP] is replaced by the current time
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape {
            config,
            url,
            output,
        } => scrape_command(config.as_deref(), url, output),
    }
}

/// Execute the scrape command.
fn scrape_command(config: Option<&Path>, url: Option<String>, output: Option<String>) -> Result<()> {
    let settings = Settings::load(config)?.with_overrides(url, output);

    // Validate before making HTTP requests
    validate_glossary_url(&settings.glossary_url)?;
    validate_output_dir(&settings.output)?;

    println!(
        "{} {}",
        style("Scraping").bold(),
        style(&settings.glossary_url).cyan()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Reading glossary index...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let mut letters = 0;
    let result = harvest_glossary(&settings, |event| match event {
        Progress::Letters(total) => letters = total,
        Progress::Letter {
            letter,
            index,
            total,
        } => pb.set_message(format!("Collecting letter {letter} ({}/{total})...", index + 1)),
        Progress::Item { name, index, total } => {
            pb.set_message(format!("Fetching details {}/{total}: {name}", index + 1));
        }
    });

    let items = match result {
        Ok(items) => items,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    let missing = items.iter().filter(|i| i.is_partial()).count();
    println!("  Letters: {letters}");
    println!("  Terms: {}", items.len());
    if missing > 0 {
        println!("  Without details: {}", style(missing).yellow().bold());
    }

    // Timestamp is resolved at write time
    pb.set_message("Saving CSV...");
    let output_path = resolve_output_path(&settings.output, chrono::Local::now().naive_local());

    let saved = match save_csv(&items, &output_path) {
        Ok(path) => path,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!();
    println!("{} {}", style("Saved to:").green().bold(), saved.display());

    Ok(())
}
