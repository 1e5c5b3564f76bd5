use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// Size units accepted on the command line. Decimal prefixes are powers of
/// 1000, binary prefixes powers of 1024.
// Reference: https://en.wikipedia.org/wiki/Byte
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    #[value(name = "KB")]
    KB,
    #[value(name = "KiB")]
    KiB,
    #[value(name = "MB")]
    MB,
    #[value(name = "GB")]
    GB,
    #[value(name = "MiB")]
    MiB,
    #[value(name = "GiB")]
    GiB,
    #[value(name = "TB")]
    TB,
    #[value(name = "TiB")]
    TiB,
}

impl SizeUnit {
    /// Bytes in one of this unit.
    pub fn multiplier(self) -> u64 {
        match self {
            SizeUnit::KB => 1_000,
            SizeUnit::KiB => 1_024,
            SizeUnit::MB => 1_000_u64.pow(2),
            SizeUnit::MiB => 1_024_u64.pow(2),
            SizeUnit::GB => 1_000_u64.pow(3),
            SizeUnit::GiB => 1_024_u64.pow(3),
            SizeUnit::TB => 1_000_u64.pow(4),
            SizeUnit::TiB => 1_024_u64.pow(4),
        }
    }

    /// Converts a threshold expressed in this unit to bytes. Fractional
    /// thresholds such as `0.5 KiB` stay fractional.
    pub fn threshold_bytes(self, size: f64) -> f64 {
        size * self.multiplier() as f64
    }

    /// Renders a byte count in this unit with the given number of decimal
    /// digits, e.g. `1.91 MiB`. Zero digits yields an integer string.
    pub fn display_size(self, bytes: u64, round: usize) -> String {
        let converted = bytes as f64 / self.multiplier() as f64;
        format!("{:.*} {}", round, converted, self)
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SizeUnit::KB => "KB",
            SizeUnit::KiB => "KiB",
            SizeUnit::MB => "MB",
            SizeUnit::GB => "GB",
            SizeUnit::MiB => "MiB",
            SizeUnit::GiB => "GiB",
            SizeUnit::TB => "TB",
            SizeUnit::TiB => "TiB",
        };
        f.write_str(name)
    }
}

/// Where results are delivered.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    Console,
    File,
}

/// On-disk format for file output.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Txt,
    Csv,
}

impl FileFormat {
    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Txt => "txt",
            FileFormat::Csv => "csv",
        }
    }
}

/// Represents the final configuration after defaults and path validation.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    pub size: f64,
    pub unit: SizeUnit,
    pub threshold_bytes: f64,
    pub round: usize,
    pub verbose: bool,
    pub format: FileFormat,
    /// `None` renders to stdout; `Some` is the fully resolved output file.
    pub destination: Option<PathBuf>,
}

/// Represents a single file found to exceed the threshold during the scan.
/// The display size is derived from `size_bytes` at render time.
#[derive(Debug)]
pub struct FileRecord {
    pub path: PathBuf,
    pub size_bytes: u64,
}
