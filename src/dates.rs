// File: ./src/dates.rs
// UTC instant + IANA zone name -> the fixed display string TaskPaper tags use.
use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

/// Display format shared by every date tag. This exact shape (two-digit
/// month/day, 12-hour clock with seconds and AM/PM) is a compatibility
/// contract with the outline consumer and must not vary by locale.
/// Example: `03/14/2024 9:05:00 PM`.
const DISPLAY_FORMAT: &str = "%m/%d/%Y %-I:%M:%S %p";

/// Parse an ISO-8601 instant as emitted by the backup. TickTick writes
/// offsets without a colon (`2024-03-01T12:00:00.000+0000`), which RFC 3339
/// parsing rejects, so try both shapes.
fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc));
    }
    None
}

/// Re-express a UTC instant in the named zone and render it for display.
///
/// Returns None when the instant is empty or does not parse; a None here
/// means "emit no tag", never an error. An empty or unrecognized zone name
/// falls back to the system's local zone.
pub fn format_date(instant: &str, zone_name: &str) -> Option<String> {
    let instant = instant.trim();
    if instant.is_empty() {
        return None;
    }
    let utc = parse_instant(instant)?;

    let text = match zone_name.trim().parse::<Tz>() {
        Ok(tz) => utc.with_timezone(&tz).format(DISPLAY_FORMAT).to_string(),
        Err(_) => {
            if !zone_name.trim().is_empty() {
                log::debug!(
                    "unrecognized timezone '{}', falling back to local zone",
                    zone_name
                );
            }
            utc.with_timezone(&Local).format(DISPLAY_FORMAT).to_string()
        }
    };
    Some(text)
}
