use clap::Parser;
use std::path::PathBuf;

use crate::app::models::{FileFormat, OutputTarget, SizeUnit};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find files larger than a size threshold under a path"
)]
pub struct Cli {
    /// Threshold size, interpreted in --unit; files strictly larger are reported
    #[arg(
        short = 's',
        long,
        default_value = "1.0",
        value_parser = parse_size,
        allow_negative_numbers = true
    )]
    pub size: f64,

    /// Unit the threshold is expressed in (sizes are displayed in it too)
    #[arg(short = 'u', long, value_enum, default_value = "MB")]
    pub unit: SizeUnit,

    /// Where to deliver the results
    #[arg(short = 'o', long, value_enum, default_value = "console")]
    pub output: OutputTarget,

    /// Format of the output file
    #[arg(long, visible_alias = "ft", value_enum, default_value = "txt")]
    pub file_type: FileFormat,

    /// Name of the output file; the extension follows --file-type
    #[arg(long, visible_alias = "fn", default_value = "large_files")]
    pub file_name: String,

    /// Directory the output file is written into; must already exist
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Number of decimal digits shown for sizes; 0 gives an integer
    #[arg(short = 'r', long, default_value_t = 2)]
    pub round: usize,

    /// Also show each file's size, as a table
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Path to scan; defaults to the current directory
    pub path: Option<PathBuf>,
}

/// Rejects thresholds that are not finite, non-negative numbers.
fn parse_size(value: &str) -> Result<f64, String> {
    let size: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if !size.is_finite() || size < 0.0 {
        return Err(String::from("size must be a non-negative number"));
    }
    Ok(size)
}
