// File: ./src/model.rs
// Raw backup rows and the normalized task record the converter works on.

/// Column order of a TickTick CSV backup. The backup carries no usable
/// header for parsing (the real header row is buried below a preamble, see
/// `pipeline::find_header`), so rows are mapped positionally onto these
/// names.
pub const FIELD_NAMES: [&str; 21] = [
    "folderName",
    "listName",
    "title",
    "tags",
    "content",
    "isCheckList",
    "startDate",
    "dueDate",
    "reminder",
    "repeat",
    "priority",
    "status",
    "createdTime",
    "completedTime",
    "order",
    "timezone",
    "isAllDay",
    "isFloating",
    "columnName",
    "columnOrder",
    "viewMode",
];

/// One row of the backup, exactly as parsed: 21 untyped string values.
/// Short rows fill the missing trailing fields with empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub folder_name: String,
    pub list_name: String,
    pub title: String,
    pub tags: String,
    pub content: String,
    pub is_check_list: String,
    pub start_date: String,
    pub due_date: String,
    pub reminder: String,
    pub repeat: String,
    pub priority: String,
    pub status: String,
    pub created_time: String,
    pub completed_time: String,
    pub order: String,
    pub timezone: String,
    pub is_all_day: String,
    pub is_floating: String,
    pub column_name: String,
    pub column_order: String,
    pub view_mode: String,
}

impl RawRecord {
    /// Build a record from positional cell values. Missing cells become
    /// empty strings; extra cells are ignored.
    pub fn from_cells(cells: &[&str]) -> Self {
        let cell = |i: usize| cells.get(i).copied().unwrap_or("").to_string();
        Self {
            folder_name: cell(0),
            list_name: cell(1),
            title: cell(2),
            tags: cell(3),
            content: cell(4),
            is_check_list: cell(5),
            start_date: cell(6),
            due_date: cell(7),
            reminder: cell(8),
            repeat: cell(9),
            priority: cell(10),
            status: cell(11),
            created_time: cell(12),
            completed_time: cell(13),
            order: cell(14),
            timezone: cell(15),
            is_all_day: cell(16),
            is_floating: cell(17),
            column_name: cell(18),
            column_order: cell(19),
            view_mode: cell(20),
        }
    }

    /// (field name, value) pairs in column order. Used by header detection,
    /// which must compare every cell against its own column name.
    pub fn fields(&self) -> [(&'static str, &str); 21] {
        [
            (FIELD_NAMES[0], self.folder_name.as_str()),
            (FIELD_NAMES[1], self.list_name.as_str()),
            (FIELD_NAMES[2], self.title.as_str()),
            (FIELD_NAMES[3], self.tags.as_str()),
            (FIELD_NAMES[4], self.content.as_str()),
            (FIELD_NAMES[5], self.is_check_list.as_str()),
            (FIELD_NAMES[6], self.start_date.as_str()),
            (FIELD_NAMES[7], self.due_date.as_str()),
            (FIELD_NAMES[8], self.reminder.as_str()),
            (FIELD_NAMES[9], self.repeat.as_str()),
            (FIELD_NAMES[10], self.priority.as_str()),
            (FIELD_NAMES[11], self.status.as_str()),
            (FIELD_NAMES[12], self.created_time.as_str()),
            (FIELD_NAMES[13], self.completed_time.as_str()),
            (FIELD_NAMES[14], self.order.as_str()),
            (FIELD_NAMES[15], self.timezone.as_str()),
            (FIELD_NAMES[16], self.is_all_day.as_str()),
            (FIELD_NAMES[17], self.is_floating.as_str()),
            (FIELD_NAMES[18], self.column_name.as_str()),
            (FIELD_NAMES[19], self.column_order.as_str()),
            (FIELD_NAMES[20], self.view_mode.as_str()),
        ]
    }
}

/// Normalized view of a row, consumed by the encoder and grouping stages.
///
/// All string fields are trimmed. `repeat` keeps the None/empty distinction
/// on purpose: `None` means "no repeat rule", which must not emit a tag,
/// while a present-but-blank rule in the backup would have been trimmed to
/// empty and also collapses to `None` here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub title: String,
    pub tags: String,
    pub note: String,
    pub priority: u32,
    pub status: u32,
    pub created_time: String,
    pub due_date: String,
    pub completed_time: String,
    pub timezone: String,
    pub repeat: Option<String>,
    pub folder_name: String,
    pub list_name: String,
}

fn trimmed(s: &str) -> String {
    s.trim().to_string()
}

fn lenient_u32(s: &str) -> u32 {
    s.trim().parse().unwrap_or(0)
}

impl TaskRecord {
    /// Normalize a raw row. Never fails: every malformed field degrades to
    /// its fallback (empty string, 0, or None) instead of erroring.
    pub fn from_raw(raw: &RawRecord) -> Self {
        let repeat = {
            let r = raw.repeat.trim();
            if r.is_empty() {
                None
            } else {
                Some(r.to_string())
            }
        };
        Self {
            title: trimmed(&raw.title),
            tags: trimmed(&raw.tags),
            note: trimmed(&raw.content),
            priority: lenient_u32(&raw.priority),
            status: lenient_u32(&raw.status),
            created_time: trimmed(&raw.created_time),
            due_date: trimmed(&raw.due_date),
            completed_time: trimmed(&raw.completed_time),
            timezone: trimmed(&raw.timezone),
            repeat,
            folder_name: trimmed(&raw.folder_name),
            list_name: trimmed(&raw.list_name),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status != 0
    }

    /// Grouping key: folder and list joined with a space, empty parts
    /// collapsed. Both empty yields "", which is a valid (unnamed) project.
    pub fn project_key(&self) -> String {
        let folder = self.folder_name.trim();
        let list = self.list_name.trim();
        match (folder.is_empty(), list.is_empty()) {
            (true, true) => String::new(),
            (true, false) => list.to_string(),
            (false, true) => folder.to_string(),
            (false, false) => format!("{} {}", folder, list),
        }
    }
}
