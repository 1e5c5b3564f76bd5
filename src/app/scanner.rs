use crate::app::models::{FileRecord, RuntimeConfig};
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::path::PathBuf;

pub struct Scanner {
    root: PathBuf,
    threshold_bytes: f64,
}

impl Scanner {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            root: config.root.clone(),
            threshold_bytes: config.threshold_bytes,
        }
    }

    /// Walks every entry under the root, hidden and gitignored files
    /// included, and collects the files whose byte size strictly exceeds
    /// the threshold. Entries the walker cannot read are reported and
    /// skipped, never fatal.
    pub fn scan(&self) -> Vec<FileRecord> {
        let mut records = Vec::new();

        // Plain recursive enumeration: no ignore rules, no hidden-file
        // filtering, no descent through directory symlinks.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .build();

        for result in walker {
            match result {
                Ok(entry) => {
                    if let Some(record) = self.evaluate_entry(&entry) {
                        records.push(record);
                    }
                }
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }

        // No sorting: results keep walk-encounter order.
        records
    }

    fn evaluate_entry(&self, entry: &DirEntry) -> Option<FileRecord> {
        // Skip the root entry itself; scanning a file path yields nothing.
        if entry.depth() == 0 {
            return None;
        }

        let size_bytes = self.file_size(entry)?;
        if size_bytes as f64 <= self.threshold_bytes {
            return None;
        }

        Some(FileRecord {
            path: entry.path().to_path_buf(),
            size_bytes,
        })
    }

    /// Byte size for file entries. Directories are skipped. A symlink
    /// counts when its target is a regular file and is sized through to
    /// the target; dangling links are skipped with a warning.
    fn file_size(&self, entry: &DirEntry) -> Option<u64> {
        let file_type = entry.file_type()?;

        if file_type.is_file() {
            return match entry.metadata() {
                Ok(metadata) => Some(metadata.len()),
                Err(err) => {
                    log::warn!("Skipping {}: {}", entry.path().display(), err);
                    None
                }
            };
        }

        if file_type.is_symlink() {
            return match fs::metadata(entry.path()) {
                Ok(metadata) if metadata.is_file() => Some(metadata.len()),
                Ok(_) => None,
                Err(err) => {
                    log::warn!("Skipping {}: {}", entry.path().display(), err);
                    None
                }
            };
        }

        None
    }
}
