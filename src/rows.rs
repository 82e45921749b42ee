// File: ./src/rows.rs
// Row source: CSV text -> raw records.
use crate::model::RawRecord;
use anyhow::Result;
use csv::ReaderBuilder;

/// Parse backup contents into raw records, one per CSV row.
///
/// Header auto-detection is deliberately off: the real header row sits
/// below a preamble and locating it is the pipeline's job
/// (`pipeline::find_header`). `flexible` keeps short or overlong rows from
/// failing the whole run; missing trailing cells degrade to empty strings.
pub fn parse(contents: &str) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(contents.as_bytes());

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let cells: Vec<&str> = record.iter().collect();
                rows.push(RawRecord::from_cells(&cells));
            }
            // A malformed row degrades gracefully instead of rejecting the
            // whole backup.
            Err(e) => log::warn!("skipping unreadable row {}: {}", idx + 1, e),
        }
    }
    Ok(rows)
}
