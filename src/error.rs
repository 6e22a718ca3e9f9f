//! Unified error types for chatscope.
//!
//! This module provides a single [`ChatscopeError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular crates
//! like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **A failed parse never yields partial results** — the record collection
//!   is all-or-nothing
//! - **Aggregations never fail on empty input** — a missing resource is the
//!   only way an aggregation can error, and it only affects the functions
//!   that need that resource

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatscope operations.
///
/// # Example
///
/// ```rust
/// use chatscope::error::Result;
/// use chatscope::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatscopeError>;

/// The error type for all chatscope operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatscopeError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The export file doesn't exist
    /// - Permission denied
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The split on the timestamp header produced a different number of
    /// message bodies than timestamps.
    ///
    /// This is fatal: a mismatch means the export does not follow the
    /// supported format, and truncating to the shorter side would silently
    /// misattribute messages.
    #[error(
        "timestamp/message count mismatch: {timestamps} timestamps vs {bodies} message bodies"
    )]
    MalformedInput {
        /// Number of timestamp headers found.
        timestamps: usize,
        /// Number of message bodies produced by the split.
        bodies: usize,
    },

    /// A timestamp header did not parse against the supported format.
    ///
    /// The export locale `D/M/YY, H:MM AM|PM` is the only supported one;
    /// there is no locale auto-detection. Any single failing header aborts
    /// the whole parse.
    #[error("invalid timestamp '{input}'. Expected format: {expected}")]
    InvalidTimestamp {
        /// The timestamp string that failed to parse.
        input: String,
        /// Expected format description.
        expected: &'static str,
    },

    /// An external resource (stop-word list, emoji set) could not be loaded.
    ///
    /// Only the aggregations that need the resource are affected; the rest
    /// of the library remains usable.
    #[error("missing resource '{}'{}: {source}", resource, path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    MissingResource {
        /// Name of the resource (e.g. "stop-word list").
        resource: &'static str,
        /// The file path, if available.
        path: Option<PathBuf>,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatscopeError {
    /// Creates a count-mismatch error.
    pub fn malformed_input(timestamps: usize, bodies: usize) -> Self {
        ChatscopeError::MalformedInput { timestamps, bodies }
    }

    /// Creates an invalid timestamp error for the single supported locale.
    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        ChatscopeError::InvalidTimestamp {
            input: input.into(),
            expected: "D/M/YY, H:MM AM|PM",
        }
    }

    /// Creates a missing resource error.
    pub fn missing_resource(
        resource: &'static str,
        path: Option<PathBuf>,
        source: io::Error,
    ) -> Self {
        ChatscopeError::MissingResource {
            resource,
            path,
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatscopeError::Io(_))
    }

    /// Returns `true` if this is a malformed-input error (count mismatch or
    /// an unparseable timestamp).
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            ChatscopeError::MalformedInput { .. } | ChatscopeError::InvalidTimestamp { .. }
        )
    }

    /// Returns `true` if this is a missing-resource error.
    pub fn is_missing_resource(&self) -> bool {
        matches!(self, ChatscopeError::MissingResource { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
