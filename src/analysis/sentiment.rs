//! Per-message polarity scores and the 3-way label distribution.

use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::context::AnalysisContext;

/// 3-way sentiment classification derived from a polarity sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Polarity strictly above zero.
    Positive,
    /// Polarity strictly below zero.
    Negative,
    /// Polarity exactly zero.
    Neutral,
}

impl SentimentLabel {
    /// Maps a polarity value to its label. Exactly `0.0` is neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// The label as a display string.
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record's polarity and its label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Signed polarity in `[-1, 1]`.
    pub polarity: f64,
    /// Label derived from the polarity sign.
    pub label: SentimentLabel,
}

/// Per-record scores plus the label distribution.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentReport {
    /// One score per input record, in record order.
    pub scores: Vec<SentimentScore>,
    /// Records labelled positive.
    pub positive: usize,
    /// Records labelled negative.
    pub negative: usize,
    /// Records labelled neutral.
    pub neutral: usize,
}

impl SentimentReport {
    /// Count for one label.
    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }
}

/// Scores every record's text with the context's scorer.
///
/// The whole collection is scored regardless of sender, group-notification
/// and media rows included; an empty collection yields an empty report.
///
/// # Example
///
/// ```
/// use chatscope::analysis::{SentimentLabel, sentiment_analysis};
/// use chatscope::context::AnalysisContext;
/// use chatscope::parser::ExportParser;
///
/// let records = ExportParser::new()
///     .parse_str("1/1/23, 10:00 AM - Alice: what a great day\n")?;
/// let report = sentiment_analysis(&records, &AnalysisContext::new());
///
/// assert_eq!(report.scores[0].label, SentimentLabel::Positive);
/// assert_eq!(report.positive, 1);
/// # Ok::<(), chatscope::ChatscopeError>(())
/// ```
pub fn sentiment_analysis(records: &[MessageRecord], ctx: &AnalysisContext) -> SentimentReport {
    let scorer = ctx.sentiment();
    let mut report = SentimentReport::default();

    for rec in records {
        let polarity = scorer.score(&rec.text);
        let label = SentimentLabel::from_polarity(polarity);
        match label {
            SentimentLabel::Positive => report.positive += 1,
            SentimentLabel::Negative => report.negative += 1,
            SentimentLabel::Neutral => report.neutral += 1,
        }
        report.scores.push(SentimentScore { polarity, label });
    }

    report
}
