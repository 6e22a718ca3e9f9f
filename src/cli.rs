//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the argument structure for the `chatscope`
//! binary. The binary parses one export and prints every report section to
//! stdout; the library stays CLI-free, so this module only exists behind the
//! `cli` feature.

use clap::Parser;

/// Analyze a WhatsApp chat export: message stats, timelines, activity
/// maps, word/emoji frequency and sentiment.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatscope")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatscope chat.txt
    chatscope chat.txt --user Alice
    chatscope chat.txt --stop-words stop_hinglish.txt")]
pub struct Args {
    /// Path to the exported chat text file
    pub input: String,

    /// Restrict the report to one sender ("Overall" for everyone)
    #[arg(short, long, default_value = "Overall", value_name = "NAME")]
    pub user: String,

    /// Path to a newline-delimited stop-word file
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<String>,
}
