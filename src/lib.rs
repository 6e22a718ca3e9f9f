//! # Chatscope
//!
//! A Rust library for turning WhatsApp chat-log exports into typed records
//! and ready-to-plot statistics.
//!
//! ## Overview
//!
//! Chatscope covers the two halves of a chat-analysis session:
//!
//! - **Parsing** — the standard Android text export (`D/M/YY, H:MM AM - `
//!   headers) becomes a `Vec<MessageRecord>`, with multi-line messages,
//!   group notifications and the preamble handled for you.
//! - **Aggregation** — pure functions over the record collection: headline
//!   counters, monthly/daily timelines, weekday and month activity maps, a
//!   weekday × period heatmap, busiest-user rankings, word and emoji
//!   frequency tables, and a 3-way sentiment breakdown.
//!
//! Every aggregation is read-only, so one parsed export can back any number
//! of calls in any order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatscope::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = ExportParser::new().parse("chat.txt".as_ref())?;
//!
//!     let ctx = AnalysisContext::new()
//!         .with_stop_words_file("stop_hinglish.txt".as_ref())?;
//!
//!     let stats = fetch_stats(&UserFilter::Overall, &records);
//!     println!("{} messages, {} words", stats.messages, stats.words);
//!
//!     for entry in most_common_words(&UserFilter::user("Alice"), &records, &ctx) {
//!         println!("{:>5}  {}", entry.count, entry.word);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — export parsing
//!   - [`ExportParser`](parser::ExportParser) — file and string entry points
//! - [`record`] — the data model
//!   - [`MessageRecord`] plus its derived calendar accessors
//! - [`context`] — injected analysis resources
//!   - [`StopWords`](context::StopWords), [`EmojiSet`](context::EmojiSet),
//!     [`SentimentScorer`](context::SentimentScorer)
//! - [`analysis`] — the aggregation layer
//!   - [`analysis::stats`], [`analysis::timeline`], [`analysis::activity`],
//!     [`analysis::words`], [`analysis::emoji`], [`analysis::sentiment`]
//! - [`error`] — unified error types ([`ChatscopeError`], [`Result`])
//! - [`prelude`] — convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod context;
pub mod error;
pub mod parser;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{ChatscopeError, Result};
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatscope::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::MessageRecord;

    // Error types
    pub use crate::error::{ChatscopeError, Result};

    // Parsing
    pub use crate::parser::ExportParser;

    // Injected resources
    pub use crate::context::{AnalysisContext, EmojiSet, SentimentScorer, StopWords};

    // Aggregations
    pub use crate::analysis::{
        ChatStats, Heatmap, SentimentLabel, SentimentReport, UserActivity, UserFilter,
        activity_heatmap, daily_timeline, emoji_frequency, fetch_stats, month_activity_map,
        monthly_timeline, most_active_users, most_common_words, sentiment_analysis, user_choices,
        week_activity_map, word_cloud_corpus,
    };
}
