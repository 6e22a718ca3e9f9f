//! Aggregations over a parsed record collection.
//!
//! Every function in this module tree is pure and read-only: it takes
//! `&[MessageRecord]` (plus an optional [`UserFilter`] and, where external
//! resources are involved, an [`AnalysisContext`](crate::context::AnalysisContext))
//! and returns a freshly built table or summary. The input collection is
//! never mutated, so one parsed export can back any number of aggregation
//! calls in any order with identical results.
//!
//! # Modules
//!
//! - [`stats`] — headline counters (messages, words, media, links)
//! - [`timeline`] — monthly and daily message timelines
//! - [`activity`] — weekday/month activity maps, heatmap, busiest users
//! - [`words`] — word frequency and word-cloud corpus
//! - [`emoji`] — emoji frequency
//! - [`sentiment`] — polarity scores and 3-way label distribution
//!
//! # Ordering guarantees
//!
//! Timelines are chronological. Frequency tables are sorted by count
//! descending; ties keep the order in which the item first appeared in the
//! record stream, so every aggregation is deterministic for identical input.

pub mod activity;
pub mod emoji;
pub mod sentiment;
pub mod stats;
pub mod timeline;
pub mod words;

pub use activity::{
    ActivityCount, Heatmap, HeatmapRow, UserActivity, UserCount, UserShare, activity_heatmap,
    month_activity_map, most_active_users, week_activity_map,
};
pub use emoji::{EmojiCount, emoji_frequency};
pub use sentiment::{SentimentLabel, SentimentReport, SentimentScore, sentiment_analysis};
pub use stats::{ChatStats, fetch_stats};
pub use timeline::{DailyCount, MonthlyCount, daily_timeline, monthly_timeline};
pub use words::{WordCount, most_common_words, word_cloud_corpus};

use std::collections::HashMap;
use std::hash::Hash;

use crate::MessageRecord;
use crate::record::GROUP_NOTIFICATION;

/// The filter value meaning "all users".
pub const OVERALL: &str = "Overall";

/// Restricts an aggregation to one sender, or keeps everything.
///
/// Mirrors the upstream user picker: the string `"Overall"` selects every
/// record, any other value selects records whose sender equals it exactly.
///
/// # Example
///
/// ```
/// use chatscope::analysis::UserFilter;
///
/// assert!(UserFilter::user("Overall").is_overall());
/// assert!(UserFilter::user("Alice").matches("Alice"));
/// assert!(!UserFilter::user("Alice").matches("Bob"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFilter {
    /// Every record passes.
    Overall,
    /// Only records from this sender pass.
    User(String),
}

impl UserFilter {
    /// Builds a filter from a selection string, mapping [`OVERALL`] to
    /// [`UserFilter::Overall`].
    pub fn user(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == OVERALL {
            UserFilter::Overall
        } else {
            UserFilter::User(name)
        }
    }

    /// Returns `true` when no restriction applies.
    pub fn is_overall(&self) -> bool {
        matches!(self, UserFilter::Overall)
    }

    /// Returns `true` if a record from `sender` passes the filter.
    pub fn matches(&self, sender: &str) -> bool {
        match self {
            UserFilter::Overall => true,
            UserFilter::User(name) => sender == name,
        }
    }
}

impl From<&str> for UserFilter {
    fn from(name: &str) -> Self {
        UserFilter::user(name)
    }
}

impl std::fmt::Display for UserFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserFilter::Overall => write!(f, "{OVERALL}"),
            UserFilter::User(name) => write!(f, "{name}"),
        }
    }
}

/// Distinct senders suitable for a user picker: sorted, with the
/// group-notification sentinel left out.
pub fn user_choices(records: &[MessageRecord]) -> Vec<String> {
    let mut names: Vec<String> = records
        .iter()
        .map(|r| r.sender.clone())
        .filter(|s| s != GROUP_NOTIFICATION)
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Read-only view of the records passing the filter.
pub(crate) fn filtered<'a>(
    records: &'a [MessageRecord],
    user: &'a UserFilter,
) -> impl Iterator<Item = &'a MessageRecord> {
    records.iter().filter(move |r| user.matches(&r.sender))
}

/// Counts items and ranks them by count descending.
///
/// Ties keep first-seen order (the sort is stable over the order of first
/// appearance), which makes every frequency table deterministic.
pub(crate) fn ranked_counts<I, T>(items: I) -> Vec<(T, usize)>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();

    for item in items {
        let entry = counts.entry(item.clone()).or_insert(0);
        if *entry == 0 {
            order.push(item);
        }
        *entry += 1;
    }

    let mut ranked: Vec<(T, usize)> = order
        .into_iter()
        .map(|t| {
            let count = counts[&t];
            (t, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}
