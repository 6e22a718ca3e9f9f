//! Injected analysis resources.
//!
//! The original tooling this crate replaces loaded its stop-word file and
//! emoji data ad hoc inside each analysis function. Here those resources are
//! bundled into one [`AnalysisContext`] built up front and passed to the
//! aggregations that need it:
//!
//! - [`StopWords`] — newline-delimited word list, used by the vocabulary
//!   aggregations
//! - [`EmojiSet`] — set-membership test for emoji characters
//! - [`SentimentScorer`] — black-box polarity scorer, `score(text)` in
//!   `[-1, 1]`
//!
//! # Example
//!
//! ```
//! use chatscope::context::{AnalysisContext, StopWords};
//!
//! let ctx = AnalysisContext::new()
//!     .with_stop_words(StopWords::from_lines(["the", "a", "is"]));
//!
//! assert!(ctx.stop_words().contains("the"));
//! assert!(!ctx.stop_words().contains("hello"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{ChatscopeError, Result};

/// Newline-delimited stop-word list.
///
/// Consumed by [`most_common_words`](crate::analysis::most_common_words) and
/// [`word_cloud_corpus`](crate::analysis::word_cloud_corpus). Matching is
/// exact; callers lowercase their tokens before the lookup, so lists are
/// expected to be lowercase (as the usual stop-word files are).
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Creates an empty list (nothing is filtered).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from an iterator of words.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads a newline-delimited word file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatscopeError::MissingResource`] when the file cannot be
    /// read; only the aggregations needing stop words are affected.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ChatscopeError::missing_resource("stop-word list", Some(path.to_path_buf()), e)
        })?;
        Ok(Self::from_lines(content.lines().map(str::to_owned)))
    }

    /// Returns `true` if `word` is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Set-membership test for emoji characters.
///
/// The default set is backed by the Unicode emoji data shipped with the
/// `emojis` crate; an explicit set can be injected instead when the caller
/// wants to track a fixed subset.
#[derive(Debug, Clone, Default)]
pub struct EmojiSet {
    custom: Option<HashSet<char>>,
}

impl EmojiSet {
    /// The full Unicode emoji set.
    pub fn unicode() -> Self {
        Self::default()
    }

    /// An explicit character set.
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            custom: Some(chars.into_iter().collect()),
        }
    }

    /// Returns `true` if `c` is a recognized emoji.
    pub fn contains(&self, c: char) -> bool {
        match &self.custom {
            Some(set) => set.contains(&c),
            None => {
                let mut buf = [0u8; 4];
                emojis::get(c.encode_utf8(&mut buf)).is_some()
            }
        }
    }
}

/// Black-box polarity scorer.
///
/// Implementations return a signed score in `[-1, 1]`; the sign determines
/// the 3-way Positive/Negative/Neutral label, with exactly zero mapping to
/// Neutral. Any `Fn(&str) -> f64` qualifies, which keeps test doubles and
/// external scoring services trivial to plug in.
pub trait SentimentScorer: Send + Sync {
    /// Scores one message text.
    fn score(&self, text: &str) -> f64;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn score(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Minimal built-in lexicon scorer, the default when no external scorer is
/// injected.
///
/// Counts hits against small positive/negative word lists and returns the
/// normalized difference, so the result is always in `[-1, 1]` and a text
/// without any lexicon hit scores exactly `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "happy", "love", "nice", "awesome", "amazing", "thanks", "thank", "best",
    "cool", "fun", "wonderful", "excellent", "perfect", "beautiful", "glad", "enjoy", "enjoyed",
    "like", "liked", "fantastic", "brilliant", "super", "congrats", "congratulations", "welcome",
    "haha", "yay", "win", "won",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "sad", "hate", "angry", "terrible", "awful", "worst", "problem", "wrong", "sorry",
    "sick", "hurt", "annoying", "horrible", "fail", "failed", "cry", "worried", "worry", "afraid",
    "lost", "pain", "boring", "tired", "ugh",
];

impl LexiconScorer {
    /// Creates the scorer.
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let mut positive = 0usize;
        let mut negative = 0usize;

        for token in text.split_whitespace() {
            let word: String = token
                .chars()
                .filter(|c| c.is_alphabetic())
                .collect::<String>()
                .to_lowercase();
            if POSITIVE_WORDS.contains(&word.as_str()) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&word.as_str()) {
                negative += 1;
            }
        }

        let hits = positive + negative;
        if hits == 0 {
            return 0.0;
        }
        (positive as f64 - negative as f64) / hits as f64
    }
}

/// Bundle of external resources passed into the aggregation layer.
///
/// Built once per session and shared by reference across aggregation calls;
/// nothing in it is mutated by the aggregations.
///
/// # Example
///
/// ```no_run
/// use chatscope::context::{AnalysisContext, StopWords};
///
/// let ctx = AnalysisContext::new()
///     .with_stop_words_file("hinglish.txt".as_ref())?;
/// # Ok::<(), chatscope::ChatscopeError>(())
/// ```
pub struct AnalysisContext {
    stop_words: StopWords,
    emoji: EmojiSet,
    sentiment: Box<dyn SentimentScorer>,
}

impl AnalysisContext {
    /// Creates a context with an empty stop-word list, the Unicode emoji set
    /// and the built-in [`LexiconScorer`].
    pub fn new() -> Self {
        Self {
            stop_words: StopWords::new(),
            emoji: EmojiSet::unicode(),
            sentiment: Box::new(LexiconScorer::new()),
        }
    }

    /// Sets the stop-word list.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Loads the stop-word list from a newline-delimited file.
    pub fn with_stop_words_file(self, path: &Path) -> Result<Self> {
        Ok(self.with_stop_words(StopWords::from_path(path)?))
    }

    /// Sets the emoji set.
    #[must_use]
    pub fn with_emoji_set(mut self, emoji: EmojiSet) -> Self {
        self.emoji = emoji;
        self
    }

    /// Injects an external sentiment scorer.
    #[must_use]
    pub fn with_sentiment_scorer(mut self, scorer: impl SentimentScorer + 'static) -> Self {
        self.sentiment = Box::new(scorer);
        self
    }

    /// The stop-word list.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// The emoji set.
    pub fn emoji(&self) -> &EmojiSet {
        &self.emoji
    }

    /// The sentiment scorer.
    pub fn sentiment(&self) -> &dyn SentimentScorer {
        self.sentiment.as_ref()
    }
}

impl Default for AnalysisContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AnalysisContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisContext")
            .field("stop_words", &self.stop_words.len())
            .field("emoji", &self.emoji)
            .finish_non_exhaustive()
    }
}
