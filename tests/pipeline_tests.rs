// End-to-end tests: CSV parsing, header detection, conversion, sinks.
use tickpaper::model::FIELD_NAMES;
use tickpaper::pipeline::{self, Anomaly, camel_case, find_header};
use tickpaper::rows;
use tickpaper::sink::{FileSink, Sink};

const HEADER_ROW: &str = "Folder Name,List Name,Title,Tags,Content,Is Check List,\
Start Date,Due Date,Reminder,Repeat,Priority,Status,Created Time,Completed Time,\
Order,Timezone,Is All Day,Is Floating,Column Name,Column Order,View Mode";

fn data_row(
    folder: &str,
    list: &str,
    title: &str,
    tags: &str,
    content: &str,
    due: &str,
    priority: &str,
    status: &str,
    created: &str,
    completed: &str,
    timezone: &str,
) -> String {
    format!(
        "{},{},{},{},{},0,,{},,,{},{},{},{},0,{},0,0,,0,",
        folder, list, title, tags, content, due, priority, status, created, completed, timezone
    )
}

#[test]
fn test_camel_case_transform() {
    assert_eq!(camel_case("Folder Name"), "folderName");
    assert_eq!(camel_case("Title"), "title");
    assert_eq!(camel_case("Is Check List"), "isCheckList");
    assert_eq!(camel_case("View Mode"), "viewMode");
    assert_eq!(camel_case(""), "");
}

#[test]
fn test_every_column_label_camel_cases_to_its_field_name() {
    let labels: Vec<&str> = HEADER_ROW.split(',').collect();
    assert_eq!(labels.len(), FIELD_NAMES.len());
    for (label, name) in labels.iter().zip(FIELD_NAMES.iter()) {
        assert_eq!(camel_case(label), *name);
    }
}

#[test]
fn test_header_detection_discards_preamble() {
    let csv = format!(
        "\"Date: 2024-03-14+0000\"\n\"Version: 7.1\"\n{}\n{}\n",
        HEADER_ROW,
        data_row(
            "Work",
            "",
            "First data row",
            "",
            "",
            "",
            "0",
            "0",
            "2024-03-01T12:00:00.000+0000",
            "",
            "UTC"
        ),
    );
    let parsed = rows::parse(&csv).unwrap();
    assert_eq!(find_header(&parsed), Some(2));

    let conversion = pipeline::convert(&parsed);
    assert!(conversion.anomalies.is_empty());
    // Preamble and header rows are gone; only the data row remains
    assert!(conversion.text.contains("- First data row"));
    assert!(!conversion.text.contains("Date: 2024-03-14"));
    assert!(!conversion.text.contains("Folder Name"));
}

#[test]
fn test_missing_header_reports_and_continues() {
    let csv = data_row(
        "Work",
        "",
        "Orphan row",
        "",
        "",
        "",
        "0",
        "0",
        "2024-03-01T12:00:00.000+0000",
        "",
        "UTC",
    );
    let parsed = rows::parse(&csv).unwrap();
    assert_eq!(find_header(&parsed), None);

    // Best effort: the anomaly is reported but every row is still converted
    let conversion = pipeline::convert(&parsed);
    assert_eq!(conversion.anomalies, vec![Anomaly::HeaderNotFound]);
    assert!(conversion.text.contains("- Orphan row"));
}

#[test]
fn test_short_rows_fill_missing_fields_with_empty() {
    let parsed = rows::parse("OnlyFolder,OnlyList,Just a title\n").unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].folder_name, "OnlyFolder");
    assert_eq!(parsed[0].title, "Just a title");
    assert_eq!(parsed[0].timezone, "");
    assert_eq!(parsed[0].view_mode, "");
}

#[test]
fn test_full_scenario_pay_rent() {
    let csv = format!(
        "{}\n{}\n",
        HEADER_ROW,
        data_row(
            "Work",
            "Admin",
            "Pay rent",
            "bills",
            "- call landlord",
            "2024-03-15T00:00:00.000+0000",
            "1",
            "0",
            "2024-03-01T12:00:00.000+0000",
            "",
            "America/New_York"
        ),
    );
    let parsed = rows::parse(&csv).unwrap();
    let conversion = pipeline::convert(&parsed);

    assert_eq!(
        conversion.text,
        "Work Admin:\n\n\t- Pay rent @defer(03/01/2024 7:00:00 AM) \
         @due(03/14/2024 8:00:00 PM) @flagged @tags(bills, priority-1)\n\t\tcall landlord"
    );
}

#[test]
fn test_completed_without_date_emits_no_done_tag() {
    let csv = format!(
        "{}\n{}\n",
        HEADER_ROW,
        data_row(
            "Work",
            "",
            "Finished but dateless",
            "",
            "",
            "",
            "0",
            "2",
            "2024-03-01T12:00:00.000+0000",
            "",
            "UTC"
        ),
    );
    let parsed = rows::parse(&csv).unwrap();
    let conversion = pipeline::convert(&parsed);
    assert!(!conversion.text.contains("@done"));
    assert!(conversion.text.contains("- Finished but dateless"));
}

#[test]
fn test_pipeline_is_idempotent() {
    let csv = format!(
        "{}\n{}\n{}\n",
        HEADER_ROW,
        data_row(
            "Home",
            "Garden",
            "Plant tree",
            "outdoors",
            "",
            "",
            "3",
            "0",
            "2024-04-01T09:00:00.000+0000",
            "",
            "Europe/Brussels"
        ),
        data_row(
            "Work",
            "Admin",
            "Pay rent",
            "bills",
            "- call landlord",
            "2024-03-15T00:00:00.000+0000",
            "1",
            "0",
            "2024-03-01T12:00:00.000+0000",
            "",
            "America/New_York"
        ),
    );
    let first = pipeline::convert(&rows::parse(&csv).unwrap());
    let second = pipeline::convert(&rows::parse(&csv).unwrap());
    assert_eq!(first.text, second.text);
}

#[test]
fn test_file_sink_writes_the_outline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.taskpaper");
    let mut sink = FileSink { path: path.clone() };
    sink.deliver("Work Admin:\n\n\t- Pay rent").unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Work Admin:\n\n\t- Pay rent"
    );
}
