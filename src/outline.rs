// File: ./src/outline.rs
// Deterministic ordering, per-project grouping, and final text assembly.
use crate::encode::{entry_line, note_text};
use crate::model::TaskRecord;

/// Ordered project buckets: (project key, rendered blocks). A plain vector
/// of pairs rather than a map, because bucket iteration order must be the
/// first-encounter order of the grouping pass and an unordered map gives no
/// such guarantee.
pub type ProjectBuckets = Vec<(String, Vec<String>)>;

/// One task rendered as an outline block: the dash entry line indented one
/// level, note lines (if any) indented one level deeper.
pub fn render_task_block(task: &TaskRecord) -> String {
    let mut block = format!("\t{}", entry_line(task));
    let note = note_text(task);
    if !note.is_empty() {
        for line in note.lines() {
            block.push_str("\n\t\t");
            block.push_str(line);
        }
    }
    block
}

/// Sort records by project key (lexicographic on the concatenated string,
/// ascending) then by creation time (ISO strings sort chronologically), and
/// partition them into project buckets.
///
/// The sort is stable, so records sharing both keys keep their input order.
/// Buckets are created lazily during a single left-to-right pass over the
/// sorted records, each seeded with its `<project>:` header line; since the
/// input is pre-sorted, first-encounter order equals ascending key order.
pub fn sort_and_group(mut records: Vec<TaskRecord>) -> ProjectBuckets {
    records.sort_by(|a, b| {
        a.project_key()
            .cmp(&b.project_key())
            .then_with(|| a.created_time.cmp(&b.created_time))
    });

    let mut buckets: ProjectBuckets = Vec::new();
    for task in &records {
        let key = task.project_key();
        let needs_bucket = buckets.last().map(|(k, _)| k != &key).unwrap_or(true);
        if needs_bucket {
            buckets.push((key.clone(), vec![format!("{}:", key)]));
        }
        if let Some((_, blocks)) = buckets.last_mut() {
            blocks.push(render_task_block(task));
        }
    }
    buckets
}

/// Join every block (project headers included) with a blank line, within
/// and across buckets. Whitespace-only blocks are dropped; trailing
/// whitespace inside a block is trimmed so separators stay clean.
pub fn render_document(buckets: &ProjectBuckets) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for (_, blocks) in buckets {
        for block in blocks {
            let trimmed = block.trim_end();
            if !trimmed.trim().is_empty() {
                parts.push(trimmed);
            }
        }
    }
    parts.join("\n\n")
}
