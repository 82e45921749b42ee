// File: ./src/pipeline.rs
// Drives the conversion: header detection, normalization, grouping and
// rendering. Pure and synchronous; the binary owns file/clipboard I/O.
use crate::model::{RawRecord, TaskRecord};
use crate::outline::{render_document, sort_and_group};

/// Structural anomalies the pipeline reports without aborting. The core
/// names the condition; user-facing wording and exit behavior belong to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    /// No row matched the header test; the full row set was processed as-is.
    HeaderNotFound,
    /// Input path does not carry the expected `.csv` extension.
    WrongExtension { path: String },
}

/// Result of a conversion run: the rendered outline plus any anomalies
/// collected along the way.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub text: String,
    pub anomalies: Vec<Anomaly>,
}

/// Camel-case transform of a human column label: lowercase the whole label,
/// then upper-case the first character of each subsequent space-delimited
/// word and concatenate. "Folder Name" -> "folderName".
pub fn camel_case(label: &str) -> String {
    let lowered = label.to_lowercase();
    let mut words = lowered.split(' ').filter(|w| !w.is_empty());
    let mut out = String::with_capacity(label.len());
    if let Some(first) = words.next() {
        out.push_str(first);
    }
    for word in words {
        let mut chars = word.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Locate the backup's header row: the row where every cell is the
/// human-readable label of its own column ("Folder Name" in the folderName
/// column, and so on). Returns its index, or None when the content carries
/// no header at all.
pub fn find_header(rows: &[RawRecord]) -> Option<usize> {
    rows.iter().position(|row| {
        row.fields()
            .iter()
            .all(|(name, value)| camel_case(value) == *name)
    })
}

/// Run the full transformation over a parsed row set.
///
/// The header row and everything above it (TickTick backups start with a
/// preamble) are discarded; if no header is found the whole row set is
/// processed best-effort and the anomaly is reported, which may yield
/// degraded output but never aborts the run.
pub fn convert(rows: &[RawRecord]) -> Conversion {
    let mut anomalies = Vec::new();

    let data = match find_header(rows) {
        Some(idx) => &rows[idx + 1..],
        None => {
            log::warn!("no header row found, processing all {} rows", rows.len());
            anomalies.push(Anomaly::HeaderNotFound);
            rows
        }
    };

    let records: Vec<TaskRecord> = data.iter().map(TaskRecord::from_raw).collect();
    log::debug!("converting {} task record(s)", records.len());

    let buckets = sort_and_group(records);
    let text = render_document(&buckets);

    Conversion { text, anomalies }
}
