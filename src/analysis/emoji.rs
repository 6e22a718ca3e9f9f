//! Emoji frequency over message text.

use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::analysis::{UserFilter, filtered, ranked_counts};
use crate::context::AnalysisContext;

/// One emoji with its occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    /// The emoji scalar.
    pub emoji: char,
    /// Occurrences across the filtered records.
    pub count: usize,
}

/// Per-character emoji frequency for the given user selection.
///
/// Every character of every record's text is tested against the context's
/// [`EmojiSet`](crate::context::EmojiSet); repeated emoji count once per
/// occurrence. The full table is returned (no top-N cut), count descending.
///
/// # Example
///
/// ```
/// use chatscope::analysis::{UserFilter, emoji_frequency};
/// use chatscope::context::AnalysisContext;
/// use chatscope::parser::ExportParser;
///
/// let records = ExportParser::new()
///     .parse_str("1/1/23, 10:00 AM - Alice: good morning 😀😀☕\n")?;
/// let ctx = AnalysisContext::new();
/// let emoji = emoji_frequency(&UserFilter::Overall, &records, &ctx);
///
/// assert_eq!(emoji[0].emoji, '😀');
/// assert_eq!(emoji[0].count, 2);
/// # Ok::<(), chatscope::ChatscopeError>(())
/// ```
pub fn emoji_frequency(
    user: &UserFilter,
    records: &[MessageRecord],
    ctx: &AnalysisContext,
) -> Vec<EmojiCount> {
    let set = ctx.emoji();
    let found = filtered(records, user)
        .flat_map(|rec| rec.text.chars())
        .filter(|c| set.contains(*c));

    ranked_counts(found)
        .into_iter()
        .map(|(emoji, count)| EmojiCount { emoji, count })
        .collect()
}
