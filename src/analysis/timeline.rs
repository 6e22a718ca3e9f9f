//! Monthly and daily message timelines.
//!
//! Both timelines are grouped chronologically (by calendar position, not by
//! label text) so they can be handed straight to a line-chart collaborator.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::analysis::{UserFilter, filtered};
use crate::record::month_name;

/// One month of activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    /// Calendar year.
    pub year: i32,
    /// Numeric month, 1–12.
    pub month_num: u32,
    /// English month name.
    pub month: String,
    /// Messages in that month.
    pub count: usize,
    /// Chart label, `"Month-Year"` (e.g. `"January-2023"`).
    pub label: String,
}

/// One calendar day of activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    /// The calendar date.
    pub date: NaiveDate,
    /// Messages on that date.
    pub count: usize,
}

/// Message counts per (year, month), in chronological order.
///
/// # Example
///
/// ```
/// use chatscope::analysis::{UserFilter, monthly_timeline};
/// use chatscope::parser::ExportParser;
///
/// let records = ExportParser::new().parse_str(
///     "31/12/22, 11:59 PM - Alice: old year\n\
///      1/1/23, 10:00 AM - Alice: new year\n",
/// )?;
/// let timeline = monthly_timeline(&UserFilter::Overall, &records);
///
/// assert_eq!(timeline[0].label, "December-2022");
/// assert_eq!(timeline[1].label, "January-2023");
/// # Ok::<(), chatscope::ChatscopeError>(())
/// ```
pub fn monthly_timeline(user: &UserFilter, records: &[MessageRecord]) -> Vec<MonthlyCount> {
    let mut buckets: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for rec in filtered(records, user) {
        *buckets.entry((rec.year(), rec.month_num())).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|((year, month_num), count)| {
            let month = month_name(month_num);
            MonthlyCount {
                year,
                month_num,
                month: month.to_string(),
                count,
                label: format!("{month}-{year}"),
            }
        })
        .collect()
}

/// Message counts per distinct calendar date, in chronological order.
pub fn daily_timeline(user: &UserFilter, records: &[MessageRecord]) -> Vec<DailyCount> {
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for rec in filtered(records, user) {
        *buckets.entry(rec.date()).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}
