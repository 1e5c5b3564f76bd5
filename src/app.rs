// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::OutputGenerator;
use self::models::{FileFormat, FileRecord, RuntimeConfig};
use self::scanner::Scanner;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration (defaults, path and store validation)
    let config = resolve_config(args)?;

    // 3. Scan Directory
    let scanner = Scanner::new(&config);
    let records = scanner.scan();

    if records.is_empty() {
        log::warn!(
            "⚠️ No files larger than {} {} under {}",
            config.size,
            config.unit,
            config.root.display()
        );
        return Ok(());
    }
    log::info!(
        "{} file(s) larger than {} {}",
        records.len(),
        config.size,
        config.unit
    );

    // 4. Generate Output
    let body = render(&records, &config);

    // 5. Deliver to Stdout or File
    match &config.destination {
        None => println!("{}", body),
        Some(destination) => {
            if destination.exists() {
                log::warn!(
                    "{} already exists and will be overwritten",
                    destination.display()
                );
            }
            log::info!("Writing results to {}", destination.display());
            let mut contents = body;
            contents.push('\n');
            fs::write(destination, contents)
                .with_context(|| format!("Failed to write {}", destination.display()))?;
        }
    }

    Ok(())
}

fn render(records: &[FileRecord], config: &RuntimeConfig) -> String {
    match (&config.destination, config.format) {
        (Some(_), FileFormat::Csv) => {
            OutputGenerator::generate_csv(records, config.verbose, config.unit, config.round)
        }
        _ if config.verbose => {
            OutputGenerator::generate_table(records, config.unit, config.round)
        }
        _ => OutputGenerator::generate_plain(records),
    }
}
