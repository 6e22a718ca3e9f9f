//! Activity maps, the weekday × period heatmap, and busiest-user rankings.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::analysis::{UserFilter, filtered, ranked_counts};

/// How many users the busiest-user table keeps.
pub const TOP_USERS: usize = 15;

/// Weekday order for heatmap rows.
const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One label → count entry of an activity map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCount {
    /// Weekday or month name.
    pub label: String,
    /// Messages under that label.
    pub count: usize,
}

/// Message counts per weekday name, most active first.
pub fn week_activity_map(user: &UserFilter, records: &[MessageRecord]) -> Vec<ActivityCount> {
    activity_counts(filtered(records, user).map(|r| r.day_name()))
}

/// Message counts per month name, most active first.
pub fn month_activity_map(user: &UserFilter, records: &[MessageRecord]) -> Vec<ActivityCount> {
    activity_counts(filtered(records, user).map(|r| r.month_name()))
}

fn activity_counts<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<ActivityCount> {
    ranked_counts(labels)
        .into_iter()
        .map(|(label, count)| ActivityCount {
            label: label.to_string(),
            count,
        })
        .collect()
}

/// Weekday × period cross-tabulation.
///
/// Rows are the weekdays present in the data, Monday first; columns are the
/// hour-bucket period labels present, ascending. Cells without any message
/// are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    /// Column labels (period buckets such as `"09-10"`), ascending.
    pub periods: Vec<String>,
    /// One row per weekday present in the data.
    pub rows: Vec<HeatmapRow>,
}

/// One weekday row of the heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapRow {
    /// Weekday name.
    pub day: String,
    /// Counts aligned with [`Heatmap::periods`].
    pub counts: Vec<usize>,
}

impl Heatmap {
    /// Returns `true` when no records contributed.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up one cell; `None` when the day or period has no row/column.
    pub fn get(&self, day: &str, period: &str) -> Option<usize> {
        let col = self.periods.iter().position(|p| p == period)?;
        let row = self.rows.iter().find(|r| r.day == day)?;
        row.counts.get(col).copied()
    }
}

/// Builds the weekday × period heatmap for the given user selection.
///
/// # Example
///
/// ```
/// use chatscope::analysis::{UserFilter, activity_heatmap};
/// use chatscope::parser::ExportParser;
///
/// // 1 Jan 2023 was a Sunday.
/// let records = ExportParser::new()
///     .parse_str("1/1/23, 11:30 PM - Alice: night owl\n")?;
/// let heatmap = activity_heatmap(&UserFilter::Overall, &records);
///
/// assert_eq!(heatmap.get("Sunday", "23-00"), Some(1));
/// # Ok::<(), chatscope::ChatscopeError>(())
/// ```
pub fn activity_heatmap(user: &UserFilter, records: &[MessageRecord]) -> Heatmap {
    let mut cells: HashMap<&'static str, HashMap<String, usize>> = HashMap::new();
    let mut periods: BTreeSet<String> = BTreeSet::new();

    for rec in filtered(records, user) {
        let period = rec.period();
        periods.insert(period.clone());
        *cells
            .entry(rec.day_name())
            .or_default()
            .entry(period)
            .or_insert(0) += 1;
    }

    let periods: Vec<String> = periods.into_iter().collect();
    let rows = WEEKDAYS
        .iter()
        .filter_map(|day| {
            let day_cells = cells.get(day)?;
            let counts = periods
                .iter()
                .map(|p| day_cells.get(p).copied().unwrap_or(0))
                .collect();
            Some(HeatmapRow {
                day: (*day).to_string(),
                counts,
            })
        })
        .collect();

    Heatmap { periods, rows }
}

/// One sender with a message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCount {
    /// Sender name.
    pub name: String,
    /// Messages from that sender.
    pub count: usize,
}

/// One sender with a percentage of total traffic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShare {
    /// Sender name.
    pub name: String,
    /// Share of all records, rounded to 2 decimals.
    pub percentage: f64,
}

/// Busiest-user ranking: the top senders plus every sender's share.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserActivity {
    /// Top senders by message count, at most [`TOP_USERS`] entries.
    pub top: Vec<UserCount>,
    /// Percentage-of-total per sender, all senders, count order.
    pub shares: Vec<UserShare>,
}

/// Ranks senders by message count over the whole collection.
///
/// Percentages are computed over every record passed in, including
/// group-notification rows; callers wanting user-only numbers exclude the
/// sentinel before calling, matching upstream usage.
pub fn most_active_users(records: &[MessageRecord]) -> UserActivity {
    let total = records.len();
    if total == 0 {
        return UserActivity::default();
    }

    let ranked = ranked_counts(records.iter().map(|r| r.sender.as_str()));

    let top = ranked
        .iter()
        .take(TOP_USERS)
        .map(|(name, count)| UserCount {
            name: (*name).to_string(),
            count: *count,
        })
        .collect();

    let shares = ranked
        .iter()
        .map(|(name, count)| UserShare {
            name: (*name).to_string(),
            percentage: round2(*count as f64 / total as f64 * 100.0),
        })
        .collect();

    UserActivity { top, shares }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
