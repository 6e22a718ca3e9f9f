//! # chatscope CLI
//!
//! Command-line interface for the chatscope library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatscope::ChatscopeError;
use chatscope::analysis::{
    UserFilter, activity_heatmap, emoji_frequency, fetch_stats, month_activity_map,
    monthly_timeline, most_active_users, most_common_words, sentiment_analysis, user_choices,
    week_activity_map,
};
use chatscope::cli::Args;
use chatscope::context::AnalysisContext;
use chatscope::parser::ExportParser;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatscopeError> {
    let args = <Args as ClapParser>::parse();

    println!("🔎 chatscope v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:  {}", args.input);
    println!("👤 User:   {}", args.user);
    println!();

    let mut ctx = AnalysisContext::new();
    if let Some(ref stop) = args.stop_words {
        ctx = ctx.with_stop_words_file(Path::new(stop))?;
    }

    println!("⏳ Parsing export...");
    let parse_start = Instant::now();
    let records = ExportParser::new().parse(Path::new(&args.input))?;
    println!(
        "   Found {} records ({:.2}s)",
        records.len(),
        parse_start.elapsed().as_secs_f64()
    );
    println!();

    let user = UserFilter::user(args.user.clone());

    // Headline stats
    let stats = fetch_stats(&user, &records);
    println!("📊 Top Statistics");
    println!("   Messages: {}", stats.messages);
    println!("   Words:    {}", stats.words);
    println!("   Media:    {}", stats.media);
    println!("   Links:    {}", stats.links);
    println!();

    // Busiest users only make sense group-wide
    if user.is_overall() {
        let activity = most_active_users(&records);
        println!("🏆 Most Active Users");
        for entry in &activity.top {
            println!("   {:>5}  {}", entry.count, entry.name);
        }
        println!("   ({} participants total)", user_choices(&records).len());
        println!();
    }

    println!("📅 Monthly Timeline");
    for month in monthly_timeline(&user, &records) {
        println!("   {:>5}  {}", month.count, month.label);
    }
    println!();

    println!("🗓️  Activity Map");
    println!("   Busiest days:");
    for day in week_activity_map(&user, &records) {
        println!("   {:>5}  {}", day.count, day.label);
    }
    println!("   Busiest months:");
    for month in month_activity_map(&user, &records) {
        println!("   {:>5}  {}", month.count, month.label);
    }
    println!();

    let heatmap = activity_heatmap(&user, &records);
    if !heatmap.is_empty() {
        println!("🕒 Weekly Heatmap (weekday × hour bucket)");
        print!("   {:<10}", "");
        for period in &heatmap.periods {
            print!(" {:>5}", period);
        }
        println!();
        for row in &heatmap.rows {
            print!("   {:<10}", row.day);
            for count in &row.counts {
                print!(" {:>5}", count);
            }
            println!();
        }
        println!();
    }

    let words = most_common_words(&user, &records, &ctx);
    if !words.is_empty() {
        println!("💬 Most Common Words");
        for entry in &words {
            println!("   {:>5}  {}", entry.count, entry.word);
        }
        println!();
    }

    let emoji = emoji_frequency(&user, &records, &ctx);
    if !emoji.is_empty() {
        println!("😀 Emoji");
        for entry in &emoji {
            println!("   {:>5}  {}", entry.count, entry.emoji);
        }
        println!();
    }

    let sentiment = sentiment_analysis(&records, &ctx);
    println!("❤️  Sentiment (whole chat)");
    println!("   Positive: {}", sentiment.positive);
    println!("   Negative: {}", sentiment.negative);
    println!("   Neutral:  {}", sentiment.neutral);

    Ok(())
}
