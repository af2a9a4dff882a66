//! FILENAME: schedule/src/timeslot.rs
//! PURPOSE: Time-slot label parsing.
//! CONTEXT: Slot labels have the form "<start> - <end>" on a 12-hour clock
//! with meridiem (e.g. "1:00PM - 3:00PM"). Only the start matters for
//! ordering; labels that fail to parse sort after all parsed ones.

use chrono::NaiveTime;

/// Clock format of the start/end halves of a slot label.
const SLOT_TIME_FORMAT: &str = "%I:%M%p";

/// Parses the start time out of a slot label such as "1:00PM - 3:00PM".
///
/// Returns None when the label does not follow the expected format; callers
/// treat that as "latest possible" when ordering slots.
pub fn parse_slot_start(label: &str) -> Option<NaiveTime> {
    let start = label.split(" - ").next()?.trim();
    NaiveTime::parse_from_str(start, SLOT_TIME_FORMAT).ok()
}
