//! Typed message records parsed from a chat export.
//!
//! This module provides [`MessageRecord`], the normalized representation of
//! one exported chat line (including its continuation lines). The parser
//! produces an ordered `Vec<MessageRecord>` and every aggregation consumes
//! that collection read-only.
//!
//! # Overview
//!
//! A record consists of:
//! - `timestamp` — when the line was written, normalized to 24-hour time
//! - `sender` — the user name, or [`GROUP_NOTIFICATION`] for system lines
//! - `text` — the message body, possibly spanning multiple physical lines
//!
//! Calendar/time fields (year, month name, weekday, hour period bucket,
//! ...) are derived from `timestamp` on demand through accessor methods.
//!
//! # Examples
//!
//! ```
//! use chatscope::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(23, 5, 0)
//!     .unwrap();
//! let rec = MessageRecord::new(ts, "Alice", "Hello there");
//!
//! assert_eq!(rec.month_name(), "January");
//! assert_eq!(rec.day_name(), "Sunday");
//! assert_eq!(rec.period(), "23-00");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Sentinel sender for system-generated lines (member added/left, encryption
/// notices, ...) which carry no `Name: ` prefix in the export.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Placeholder text WhatsApp substitutes for media in a text-only export.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// One parsed chat line.
///
/// Records preserve the chronological order of the source text; the parser
/// never re-sorts them. All fields are plain data so the collection can be
/// shared read-only across aggregation calls.
///
/// # Serialization
///
/// Implements `Serialize`/`Deserialize`; the timestamp uses chrono's
/// `NaiveDateTime` serde representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the message was sent, in 24-hour local time.
    pub timestamp: NaiveDateTime,

    /// Display name of the author, or [`GROUP_NOTIFICATION`].
    pub sender: String,

    /// Text content of the message.
    ///
    /// May contain newlines: continuation lines without a timestamp header
    /// belong to the preceding record. Trailing whitespace is trimmed.
    pub text: String,
}

impl MessageRecord {
    /// Creates a new record.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// Creates a group-notification record (no named sender).
    pub fn notification(timestamp: NaiveDateTime, text: impl Into<String>) -> Self {
        Self::new(timestamp, GROUP_NOTIFICATION, text)
    }

    /// Returns `true` if this is a system line rather than a user message.
    pub fn is_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }

    /// Returns `true` if the text is the media-omitted placeholder.
    pub fn is_media(&self) -> bool {
        self.text == MEDIA_PLACEHOLDER
    }

    // =========================================================================
    // Derived calendar/time fields
    // =========================================================================

    /// Calendar date of the message.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Numeric month, 1–12.
    pub fn month_num(&self) -> u32 {
        self.timestamp.month()
    }

    /// English month name ("January" … "December").
    pub fn month_name(&self) -> &'static str {
        month_name(self.timestamp.month())
    }

    /// Day of month, 1–31.
    pub fn day(&self) -> u32 {
        self.timestamp.day()
    }

    /// English weekday name ("Monday" … "Sunday").
    pub fn day_name(&self) -> &'static str {
        match self.timestamp.weekday() {
            chrono::Weekday::Mon => "Monday",
            chrono::Weekday::Tue => "Tuesday",
            chrono::Weekday::Wed => "Wednesday",
            chrono::Weekday::Thu => "Thursday",
            chrono::Weekday::Fri => "Friday",
            chrono::Weekday::Sat => "Saturday",
            chrono::Weekday::Sun => "Sunday",
        }
    }

    /// Hour of day, 0–23.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Minute, 0–59.
    pub fn minute(&self) -> u32 {
        self.timestamp.minute()
    }

    /// Second, 0–59 (always 0 for this export format, which has minute
    /// resolution).
    pub fn second(&self) -> u32 {
        self.timestamp.second()
    }

    /// Period bucket label for heatmap aggregation, wrapping across midnight.
    ///
    /// Hour 23 maps to `"23-00"`, hour 0 to `"00-01"`.
    pub fn period(&self) -> String {
        let h = self.timestamp.hour();
        format!("{:02}-{:02}", h, (h + 1) % 24)
    }
}

/// English month name for a 1-based month number.
pub(crate) fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => unreachable!("chrono months are 1-12"),
    }
}
