//! Headline counters for a chat.
//!
//! [`fetch_stats`] walks the (optionally user-filtered) records once and
//! returns message, word, media and link totals.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::analysis::{UserFilter, filtered};

/// URL-shaped substrings: an explicit scheme or a `www.` prefix.
static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("valid url pattern"));

/// Headline totals for one user selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatStats {
    /// Number of records (user messages and, under `Overall`, group
    /// notifications alike).
    pub messages: usize,
    /// Total whitespace-delimited tokens across message texts.
    pub words: usize,
    /// Records whose text is exactly the media-omitted placeholder.
    pub media: usize,
    /// URL-shaped substrings across all message texts.
    pub links: usize,
}

/// Computes [`ChatStats`] for the given user selection.
///
/// Empty input (or a filter matching nothing) yields all-zero stats.
///
/// # Example
///
/// ```
/// use chatscope::analysis::{UserFilter, fetch_stats};
/// use chatscope::parser::ExportParser;
///
/// let records = ExportParser::new()
///     .parse_str("1/1/23, 10:00 AM - Alice: see https://example.com\n")?;
/// let stats = fetch_stats(&UserFilter::Overall, &records);
///
/// assert_eq!(stats.messages, 1);
/// assert_eq!(stats.words, 2);
/// assert_eq!(stats.links, 1);
/// # Ok::<(), chatscope::ChatscopeError>(())
/// ```
pub fn fetch_stats(user: &UserFilter, records: &[MessageRecord]) -> ChatStats {
    let mut stats = ChatStats::default();

    for rec in filtered(records, user) {
        stats.messages += 1;
        stats.words += rec.text.split_whitespace().count();
        if rec.is_media() {
            stats.media += 1;
        }
        stats.links += URL.find_iter(&rec.text).count();
    }

    stats
}
