use crate::app::models::{FileRecord, SizeUnit};

pub struct OutputGenerator;

impl OutputGenerator {
    /// One path per line, the non-verbose shape for console and txt output.
    pub fn generate_plain(records: &[FileRecord]) -> String {
        records
            .iter()
            .map(|record| record.path.display().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// ASCII table with centered headers and left-aligned rows:
    ///
    /// ```text
    /// +------+------+
    /// | path | size |
    /// +------+------+
    /// | ...  | ...  |
    /// +------+------+
    /// ```
    pub fn generate_table(records: &[FileRecord], unit: SizeUnit, round: usize) -> String {
        let paths: Vec<String> = records
            .iter()
            .map(|record| record.path.display().to_string())
            .collect();
        let sizes: Vec<String> = records
            .iter()
            .map(|record| unit.display_size(record.size_bytes, round))
            .collect();

        // Column widths count characters, not bytes, so multibyte paths
        // line up with the borders.
        let path_width = paths
            .iter()
            .map(|path| path.chars().count())
            .max()
            .unwrap_or(0)
            .max("path".len());
        let size_width = sizes
            .iter()
            .map(|size| size.chars().count())
            .max()
            .unwrap_or(0)
            .max("size".len());

        let border = format!(
            "+{}+{}+",
            "-".repeat(path_width + 2),
            "-".repeat(size_width + 2)
        );

        let mut output = String::new();
        output.push_str(&border);
        output.push('\n');
        output.push_str(&format!(
            "| {:^pw$} | {:^sw$} |\n",
            "path",
            "size",
            pw = path_width,
            sw = size_width
        ));
        output.push_str(&border);
        output.push('\n');
        for (path, size) in paths.iter().zip(&sizes) {
            output.push_str(&format!(
                "| {:<pw$} | {:<sw$} |\n",
                path,
                size,
                pw = path_width,
                sw = size_width
            ));
        }
        output.push_str(&border);
        output
    }

    /// CSV text. Verbose output carries `path,size` columns, non-verbose a
    /// single `paths` column.
    pub fn generate_csv(
        records: &[FileRecord],
        verbose: bool,
        unit: SizeUnit,
        round: usize,
    ) -> String {
        let mut lines = Vec::with_capacity(records.len() + 1);

        if verbose {
            lines.push(String::from("path,size"));
            for record in records {
                lines.push(format!(
                    "{},{}",
                    csv_field(&record.path.display().to_string()),
                    csv_field(&unit.display_size(record.size_bytes, round))
                ));
            }
        } else {
            lines.push(String::from("paths"));
            for record in records {
                lines.push(csv_field(&record.path.display().to_string()));
            }
        }

        lines.join("\n")
    }
}

/// Quotes a field when it holds a comma, quote, or line break, doubling any
/// embedded quotes; the produced CSV parses back to the same values.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
