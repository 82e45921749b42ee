// File: ./src/encode.rs
// Per-field TaskPaper tag encoders.
//
// Every encoder returns either an empty string or a single fragment with one
// leading space, so fragments can be concatenated directly after the title.
// Concatenation order is fixed by `entry_line`; encoders are independent and
// stateless.
use crate::dates::format_date;
use crate::model::TaskRecord;

/// `@done(<completion date>)`, only for completed tasks whose completion
/// date actually formats. A completed task with an unparseable date emits
/// nothing rather than a malformed tag.
pub fn done_tag(task: &TaskRecord) -> String {
    if !task.is_completed() {
        return String::new();
    }
    match format_date(&task.completed_time, &task.timezone) {
        Some(date) => format!(" @done({})", date),
        None => String::new(),
    }
}

/// `@defer(<creation date>)`. Creation time doubles as the defer/start
/// marker in the outline.
pub fn defer_tag(task: &TaskRecord) -> String {
    match format_date(&task.created_time, &task.timezone) {
        Some(date) => format!(" @defer({})", date),
        None => String::new(),
    }
}

/// `@due(<due date>)`.
pub fn due_tag(task: &TaskRecord) -> String {
    match format_date(&task.due_date, &task.timezone) {
        Some(date) => format!(" @due({})", date),
        None => String::new(),
    }
}

/// `@flagged` for any prioritized task.
pub fn flagged_tag(task: &TaskRecord) -> String {
    if task.priority > 0 {
        " @flagged".to_string()
    } else {
        String::new()
    }
}

/// `@repeat-method(fixed) @repeat-rule(<rule>)` when a repeat rule is
/// present. `None` (no rule in the backup) emits nothing; this is distinct
/// from an empty rule string on purpose.
pub fn repeat_tag(task: &TaskRecord) -> String {
    match &task.repeat {
        Some(rule) => format!(" @repeat-method(fixed) @repeat-rule({})", rule),
        None => String::new(),
    }
}

/// `@tags(<tags>[, priority-N])`. The tag list is the backup's comma-joined
/// string verbatim; `priority-N` is appended for prioritized tasks so the
/// numeric priority survives the conversion. Emits nothing when both parts
/// are empty.
pub fn tags_tag(task: &TaskRecord) -> String {
    let mut inner = task.tags.clone();
    if task.priority > 0 {
        if !inner.is_empty() {
            inner.push_str(", ");
        }
        inner.push_str(&format!("priority-{}", task.priority));
    }
    if inner.is_empty() {
        String::new()
    } else {
        format!(" @tags({})", inner)
    }
}

/// Note text with TickTick's bullet markers removed: one leading `-` or `▪`
/// is stripped from each line (plus the single space that follows it), since
/// those are checklist markers in the source and must not leak into outline
/// notes.
pub fn note_text(task: &TaskRecord) -> String {
    if task.note.is_empty() {
        return String::new();
    }
    task.note
        .lines()
        .map(|line| {
            match line.strip_prefix('-').or_else(|| line.strip_prefix('▪')) {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
                None => line,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The full entry line body: title followed by every tag fragment in fixed
/// order. Indentation is the renderer's job.
pub fn entry_line(task: &TaskRecord) -> String {
    format!(
        "- {}{}{}{}{}{}{}",
        task.title,
        done_tag(task),
        defer_tag(task),
        due_tag(task),
        flagged_tag(task),
        repeat_tag(task),
        tags_tag(task),
    )
}
