// src/file/export.rs
use anyhow::Result;
use csv::{QuoteStyle, WriterBuilder};
use std::fs;
use std::path::Path;

/// One export row: key/value pairs in enumeration order.
pub type ExportRecord = Vec<(String, String)>;

/// Serializes records to CSV text. The header row comes from the first
/// record's keys in that record's order; every row writes its own values
/// in its own order. Fields are never quoted, so embedded commas and a
/// record with a diverging key set will misalign columns.
pub fn csv_blob(records: &[ExportRecord]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());

    if let Some(first) = records.first() {
        writer.write_record(first.iter().map(|(key, _)| key.as_str()))?;
    }
    for record in records {
        writer.write_record(record.iter().map(|(_, value)| value.as_str()))?;
    }

    writer.flush()?;
    Ok(String::from_utf8(writer.into_inner()?)?)
}

pub fn export_to_csv(records: &[ExportRecord], path: &Path) -> Result<()> {
    fs::write(path, csv_blob(records)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> ExportRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_csv_blob_header_from_first_record() {
        let records = vec![record(&[("a", "1"), ("b", "2")]), record(&[("a", "3"), ("b", "4")])];
        assert_eq!(csv_blob(&records).unwrap(), "a,b\n1,2\n3,4\n");
    }

    #[test]
    fn test_csv_blob_empty_input() {
        assert_eq!(csv_blob(&[]).unwrap(), "");
    }

    #[test]
    fn test_csv_blob_does_not_escape() {
        // Embedded commas pass through raw and shift the columns.
        let records = vec![record(&[("name", "Sugar, brown"), ("total", "120")])];
        assert_eq!(csv_blob(&records).unwrap(), "name,total\nSugar, brown,120\n");
    }

    #[test]
    fn test_csv_blob_mismatched_records_misalign_silently() {
        let records = vec![
            record(&[("a", "1"), ("b", "2")]),
            record(&[("b", "4"), ("c", "5")]),
        ];
        assert_eq!(csv_blob(&records).unwrap(), "a,b\n1,2\n4,5\n");
    }

    #[test]
    fn test_export_to_csv_writes_file() {
        let path = std::env::temp_dir().join("duka-gui-export-test.csv");
        let records = vec![record(&[("a", "1")])];
        export_to_csv(&records, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\n1\n");
        let _ = fs::remove_file(&path);
    }
}
