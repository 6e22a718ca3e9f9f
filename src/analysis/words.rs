//! Vocabulary aggregations: word frequency and the word-cloud corpus.
//!
//! Both exclude group notifications and media placeholders, lowercase the
//! text, and drop stop words and non-alphabetic tokens. Only the frequency
//! table additionally strips punctuation before tokenizing; the corpus keeps
//! punctuated tokens out by the alphabetic-only rule alone, matching the
//! behavior of the tooling this replaces.

use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::analysis::{UserFilter, filtered, ranked_counts};
use crate::context::AnalysisContext;

/// How many entries the word-frequency table keeps.
pub const TOP_WORDS: usize = 20;

/// Punctuation stripped before tokenizing the frequency table.
const PUNCTUATION: &str = r##"!()-[]{};:'"\,<>./?@#$%^&*_~"##;

/// One word with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// Lowercased word.
    pub word: String,
    /// Occurrences across the filtered records.
    pub count: usize,
}

/// Top-[`TOP_WORDS`] vocabulary for the given user selection.
///
/// # Example
///
/// ```
/// use chatscope::analysis::{UserFilter, most_common_words};
/// use chatscope::context::{AnalysisContext, StopWords};
/// use chatscope::parser::ExportParser;
///
/// let records = ExportParser::new().parse_str(
///     "1/1/23, 10:00 AM - Alice: the pizza was pizza!\n",
/// )?;
/// let ctx = AnalysisContext::new().with_stop_words(StopWords::from_lines(["the", "was"]));
/// let words = most_common_words(&UserFilter::Overall, &records, &ctx);
///
/// assert_eq!(words[0].word, "pizza");
/// assert_eq!(words[0].count, 2);
/// # Ok::<(), chatscope::ChatscopeError>(())
/// ```
pub fn most_common_words(
    user: &UserFilter,
    records: &[MessageRecord],
    ctx: &AnalysisContext,
) -> Vec<WordCount> {
    let stop_words = ctx.stop_words();
    let mut tokens: Vec<String> = Vec::new();

    for rec in filtered(records, user) {
        if rec.is_notification() || rec.is_media() {
            continue;
        }
        let stripped: String = rec
            .text
            .chars()
            .filter(|c| !PUNCTUATION.contains(*c))
            .collect();
        for token in stripped.to_lowercase().split_whitespace() {
            if !stop_words.contains(token) && is_alphabetic(token) {
                tokens.push(token.to_string());
            }
        }
    }

    ranked_counts(tokens)
        .into_iter()
        .take(TOP_WORDS)
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Normalized text blob for an external word-cloud renderer.
///
/// Tokens that survive the stop-word and alphabetic-only filters are joined
/// with single spaces, in source order.
pub fn word_cloud_corpus(
    user: &UserFilter,
    records: &[MessageRecord],
    ctx: &AnalysisContext,
) -> String {
    let stop_words = ctx.stop_words();
    let mut parts: Vec<String> = Vec::new();

    for rec in filtered(records, user) {
        if rec.is_notification() || rec.is_media() {
            continue;
        }
        let cleaned: Vec<String> = rec
            .text
            .to_lowercase()
            .split_whitespace()
            .filter(|w| !stop_words.contains(w) && is_alphabetic(w))
            .map(str::to_owned)
            .collect();
        if !cleaned.is_empty() {
            parts.push(cleaned.join(" "));
        }
    }

    parts.join(" ")
}

/// Alphabetic-only, non-empty token (Unicode alphabetic, like `str.isalpha`).
fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}
