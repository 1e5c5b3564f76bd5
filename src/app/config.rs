use crate::app::cli::Cli;
use crate::app::models::{OutputTarget, RuntimeConfig};
use anyhow::{bail, Context, Result};
use std::env;

/// Turns parsed arguments into the resolved runtime configuration.
///
/// Path validation happens here, before any scanning: the scan path must
/// exist, and for file output the store directory must exist. The output
/// destination is pre-resolved to `store/<file_name>.<extension>`.
pub fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    let current_dir = env::current_dir().context("Failed to get current directory")?;

    let root = cli.path.unwrap_or_else(|| current_dir.clone());
    if !root.exists() {
        bail!("Provided path does not exist: {}", root.display());
    }

    let destination = match cli.output {
        OutputTarget::Console => None,
        OutputTarget::File => {
            let store = cli.store.unwrap_or(current_dir);
            if !store.exists() {
                bail!("Store path does not exist: {}", store.display());
            }
            if !store.is_dir() {
                bail!("Store path is not a directory: {}", store.display());
            }

            Some(store.join(format!("{}.{}", cli.file_name, cli.file_type.extension())))
        }
    };

    Ok(RuntimeConfig {
        threshold_bytes: cli.unit.threshold_bytes(cli.size),
        root,
        size: cli.size,
        unit: cli.unit,
        round: cli.round,
        verbose: cli.verbose,
        format: cli.file_type,
        destination,
    })
}
