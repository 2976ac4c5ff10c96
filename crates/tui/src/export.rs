//! CSV export of the search results table.
//!
//! Responsibilities:
//! - Serialize the visible table cells (header first) to CSV text.
//! - Write that text to a file.
//!
//! Does NOT handle:
//! - Choosing the file name or directory (see `zayavki_config`).
//! - Reporting the outcome to the user (sent back as a toast action).
//!
//! Invariants:
//! - The output starts with a UTF-8 byte-order mark.
//! - Cells are trimmed; a cell containing a comma, quote or newline is quoted
//!   with embedded quotes doubled.
//! - Records are separated by `\n` with no trailing terminator.

use std::path::Path;

use anyhow::Context;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

pub const UTF8_BOM: char = '\u{feff}';

/// Render the table as CSV text, BOM included.
pub fn to_csv_string(header: &[String], rows: &[Vec<String>]) -> anyhow::Result<String> {
    // The csv crate has no async API, so we buffer in memory first
    let mut buffer = Vec::new();
    {
        let mut w = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .quote_style(QuoteStyle::Necessary)
            .flexible(true)
            .from_writer(&mut buffer);

        w.write_record(header.iter().map(|cell| cell.trim()))
            .context("Failed to write CSV headers")?;
        for row in rows {
            w.write_record(row.iter().map(|cell| cell.trim()))
                .context("Failed to write CSV record")?;
        }
        w.flush().context("Failed to flush CSV writer")?;
    }

    let mut text = String::from_utf8(buffer).context("CSV output is not valid UTF-8")?;
    if text.ends_with('\n') {
        text.pop();
    }
    text.insert(0, UTF8_BOM);
    Ok(text)
}

/// Write the table as CSV to `path`.
pub async fn export_table(header: &[String], rows: &[Vec<String>], path: &Path) -> anyhow::Result<()> {
    let text = to_csv_string(header, rows)?;

    let mut file = File::create(path)
        .await
        .with_context(|| format!("Failed to create CSV export file: {}", path.display()))?;

    file.write_all(text.as_bytes())
        .await
        .with_context(|| format!("Failed to write CSV export to: {}", path.display()))?;

    file.flush()
        .await
        .with_context(|| format!("Failed to flush CSV export to: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_bom_and_plain_cells() {
        let text = to_csv_string(&cells(&["Tenant", "Quota"]), &[cells(&["t1", "100"])]).unwrap();
        assert_eq!(text, "\u{feff}Tenant,Quota\nt1,100");
    }

    #[test]
    fn test_comma_and_quote_cells_are_quoted() {
        let text = to_csv_string(
            &cells(&["Applicant", "Comment"]),
            &[cells(&["Requester, Name", "quota raised \"twice\""])],
        )
        .unwrap();
        assert!(text.starts_with(UTF8_BOM));
        assert!(text.ends_with("\"Requester, Name\",\"quota raised \"\"twice\"\"\""));
    }

    #[test]
    fn test_cells_are_trimmed() {
        let text = to_csv_string(&cells(&["A"]), &[cells(&["  padded  "])]).unwrap();
        assert_eq!(text, "\u{feff}A\npadded");
    }

    #[tokio::test]
    async fn test_export_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("search_results.csv");

        export_table(&cells(&["Tenant"]), &[cells(&["t1"]), cells(&["t2"])], &path)
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "\u{feff}Tenant\nt1\nt2");
    }

    #[tokio::test]
    async fn test_export_to_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let err = export_table(&cells(&["A"]), &[], &path).await.unwrap_err();
        assert!(err.to_string().contains("Failed to create CSV export file"));
    }
}
