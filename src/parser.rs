//! Chat export TXT parser.
//!
//! Converts the verbatim content of a chat export file into an ordered
//! `Vec<MessageRecord>`. The single supported locale is the 12-hour
//! `D/M/YY, H:MM AM|PM - ` header format; there is no locale auto-detection,
//! and any header that fails to parse aborts the whole run.
//!
//! # Algorithm
//!
//! 1. Split the raw text on the timestamp header pattern. The portion before
//!    the first header is discarded (it is never a valid message).
//! 2. Independently extract all header matches, in order.
//! 3. Enforce the count invariant: one header per message body, else the
//!    parse fails with [`ChatscopeError::MalformedInput`]. No partial
//!    recovery is attempted.
//! 4. Normalize each header to a 24-hour [`NaiveDateTime`].
//! 5. Split each body at its first `Name: ` boundary; bodies without one
//!    become [`GROUP_NOTIFICATION`](crate::record::GROUP_NOTIFICATION)
//!    records.
//!
//! # Known limitation
//!
//! A literal `": "` inside a real user's message is indistinguishable from
//! the sender separator, so the body is split at the first occurrence and
//! later occurrences in the remainder are rejoined with single spaces. This
//! is an ambiguity of the export format itself, preserved rather than
//! special-cased.
//!
//! # Example
//!
//! ```
//! use chatscope::parser::ExportParser;
//!
//! let raw = "1/1/23, 10:00 AM - Alice: Hello there\n";
//! let records = ExportParser::new().parse_str(raw)?;
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].sender, "Alice");
//! assert_eq!(records[0].text, "Hello there");
//! # Ok::<(), chatscope::ChatscopeError>(())
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::MessageRecord;
use crate::error::{ChatscopeError, Result};

/// Timestamp header: 1–2 digit day/month, 2–4 digit year, 12-hour clock with
/// a case-insensitive AM/PM marker, followed by the ` - ` separator.
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s?[APMapm]{2}\s-\s")
        .expect("valid header pattern")
});

/// Boundary between a sender name and the message text.
static SENDER_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s").expect("valid boundary pattern"));

/// Chrono format for the normalized header, after stripping the separator.
const TIMESTAMP_FORMAT: &str = "%d/%m/%y, %I:%M %p";

/// Parser for chat TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatscope::parser::ExportParser;
///
/// let parser = ExportParser::new();
/// let records = parser.parse("chat_export.txt".as_ref())?;
/// # Ok::<(), chatscope::ChatscopeError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportParser;

impl ExportParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Reads and parses an export file.
    pub fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let raw = fs::read_to_string(path)?;
        self.parse_str(&raw)
    }

    /// Parses export content from a string.
    ///
    /// Returns records in source order. An empty input yields an empty
    /// collection, not an error.
    pub fn parse_str(&self, raw: &str) -> Result<Vec<MessageRecord>> {
        // The text before the first header is a preamble, never a message.
        let bodies: Vec<&str> = HEADER.split(raw).skip(1).collect();
        let headers: Vec<&str> = HEADER.find_iter(raw).map(|m| m.as_str()).collect();

        if headers.len() != bodies.len() {
            return Err(ChatscopeError::malformed_input(headers.len(), bodies.len()));
        }

        let mut records = Vec::with_capacity(headers.len());
        for (header, body) in headers.iter().zip(&bodies) {
            let timestamp = parse_timestamp(header)?;
            let record = match split_sender(body) {
                Some((sender, text)) => MessageRecord::new(timestamp, sender, text.trim_end()),
                None => MessageRecord::notification(timestamp, body.trim_end()),
            };
            records.push(record);
        }

        Ok(records)
    }
}

/// Normalizes one raw header (`"1/1/23, 10:05 PM - "`) to a 24-hour
/// timestamp. Failure is fatal for the whole parse.
fn parse_timestamp(header: &str) -> Result<NaiveDateTime> {
    let cleaned = header.trim_end_matches(|c: char| c.is_whitespace() || c == '-');
    NaiveDateTime::parse_from_str(cleaned, TIMESTAMP_FORMAT)
        .map_err(|_| ChatscopeError::invalid_timestamp(cleaned))
}

/// Splits a body at its `Name: ` boundaries.
///
/// The segment before the first boundary is the sender; the remaining
/// segments are rejoined with single spaces. A boundary needs at least one
/// character since the previous one, otherwise its colon belongs to the
/// following segment. Returns `None` when no boundary exists (system line).
fn split_sender(body: &str) -> Option<(&str, String)> {
    let mut segments: Vec<&str> = Vec::new();
    let mut pos = 0;
    for m in SENDER_BOUNDARY.find_iter(body) {
        if m.start() <= pos {
            continue;
        }
        segments.push(&body[pos..m.start()]);
        pos = m.end();
    }

    let (&sender, tail) = segments.split_first()?;
    let mut parts: Vec<&str> = tail.to_vec();
    parts.push(&body[pos..]);
    Some((sender, parts.join(" ")))
}
