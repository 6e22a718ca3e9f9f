//! Property-based tests for chatscope.
//!
//! These tests generate random exports to find edge cases.

use proptest::prelude::*;

use chatscope::prelude::*;

/// Generate a sender name using fast strategies (no regex!)
fn arb_sender() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Alice".to_string(),
        "Bob".to_string(),
        "Charlie".to_string(),
        "User123".to_string(),
        "Иван".to_string(),
        "Anna Maria".to_string(),
    ])
}

/// Generate a single-line message body without header-shaped text.
fn arb_text() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Hello".to_string(),
        "Hi there!".to_string(),
        "How are you?".to_string(),
        "Good morning".to_string(),
        "Test message 123".to_string(),
        "Привет мир".to_string(),
        "🎉🔥💀 emoji".to_string(),
        "<Media omitted>".to_string(),
        "see https://example.com now".to_string(),
        "great stuff".to_string(),
        "terrible stuff".to_string(),
    ])
}

/// Generate a valid header timestamp within 2023.
fn arb_timestamp() -> impl Strategy<Value = String> {
    (1u32..=28, 1u32..=12, 1u32..=12, 0u32..=59, prop::bool::ANY).prop_map(
        |(day, month, hour12, minute, pm)| {
            let meridiem = if pm { "PM" } else { "AM" };
            format!("{day}/{month}/23, {hour12}:{minute:02} {meridiem}")
        },
    )
}

/// Generate a whole export: N well-formed lines, one message each.
fn arb_export(max_len: usize) -> impl Strategy<Value = (String, usize)> {
    prop::collection::vec((arb_timestamp(), arb_sender(), arb_text()), 0..max_len).prop_map(
        |lines| {
            let count = lines.len();
            let raw: String = lines
                .into_iter()
                .map(|(ts, sender, text)| format!("{ts} - {sender}: {text}\n"))
                .collect();
            (raw, count)
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// Every well-formed line becomes exactly one record.
    #[test]
    fn parse_yields_one_record_per_header((raw, count) in arb_export(20)) {
        let records = ExportParser::new().parse_str(&raw).unwrap();
        prop_assert_eq!(records.len(), count);
    }

    /// Single-line bodies survive the parse without truncation or padding.
    #[test]
    fn parse_keeps_single_line_bodies_intact((raw, _) in arb_export(20)) {
        let records = ExportParser::new().parse_str(&raw).unwrap();
        for rec in &records {
            prop_assert!(!rec.text.is_empty());
            prop_assert!(!rec.text.contains('\n'));
            prop_assert_eq!(rec.text.trim_end(), &rec.text);
        }
    }

    /// Parsing twice gives identical collections.
    #[test]
    fn parse_is_deterministic((raw, _) in arb_export(20)) {
        let a = ExportParser::new().parse_str(&raw).unwrap();
        let b = ExportParser::new().parse_str(&raw).unwrap();
        prop_assert_eq!(a, b);
    }

    // ============================================
    // AGGREGATION PROPERTIES
    // ============================================

    /// Daily timeline counts always sum to the overall message count.
    #[test]
    fn daily_counts_sum_to_total((raw, _) in arb_export(30)) {
        let records = ExportParser::new().parse_str(&raw).unwrap();
        let total: usize = daily_timeline(&UserFilter::Overall, &records)
            .iter()
            .map(|d| d.count)
            .sum();
        prop_assert_eq!(total, fetch_stats(&UserFilter::Overall, &records).messages);
    }

    /// Monthly timeline counts also sum to the overall message count.
    #[test]
    fn monthly_counts_sum_to_total((raw, _) in arb_export(30)) {
        let records = ExportParser::new().parse_str(&raw).unwrap();
        let total: usize = monthly_timeline(&UserFilter::Overall, &records)
            .iter()
            .map(|m| m.count)
            .sum();
        prop_assert_eq!(total, records.len());
    }

    /// Per-user message counts partition the overall count.
    #[test]
    fn per_user_stats_partition_overall((raw, _) in arb_export(30)) {
        let records = ExportParser::new().parse_str(&raw).unwrap();
        let overall = fetch_stats(&UserFilter::Overall, &records);
        let per_user: usize = user_choices(&records)
            .iter()
            .map(|u| fetch_stats(&UserFilter::user(u.clone()), &records).messages)
            .sum();
        // These generated exports never produce notification rows.
        prop_assert_eq!(per_user, overall.messages);
    }

    /// Percentages in the busiest-user table sum to ~100 on non-empty input.
    #[test]
    fn user_shares_sum_to_100((raw, count) in arb_export(30)) {
        let records = ExportParser::new().parse_str(&raw).unwrap();
        if count > 0 {
            let sum: f64 = most_active_users(&records)
                .shares
                .iter()
                .map(|s| s.percentage)
                .sum();
            prop_assert!((sum - 100.0).abs() < 0.5, "shares sum to {}", sum);
        }
    }

    /// Frequency tables never rank a smaller count above a larger one.
    #[test]
    fn word_table_is_sorted_desc((raw, _) in arb_export(30)) {
        let records = ExportParser::new().parse_str(&raw).unwrap();
        let ctx = AnalysisContext::new();
        let words = most_common_words(&UserFilter::Overall, &records, &ctx);
        for pair in words.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }

    /// Sentiment labels partition the record collection.
    #[test]
    fn sentiment_counts_partition_records((raw, count) in arb_export(30)) {
        let records = ExportParser::new().parse_str(&raw).unwrap();
        let report = sentiment_analysis(&records, &AnalysisContext::new());
        prop_assert_eq!(report.positive + report.negative + report.neutral, count);
        prop_assert_eq!(report.scores.len(), count);
    }

    /// Aggregations are pure: running one does not change later results.
    #[test]
    fn aggregations_are_order_independent((raw, _) in arb_export(20)) {
        let records = ExportParser::new().parse_str(&raw).unwrap();
        let ctx = AnalysisContext::new();
        let user = UserFilter::Overall;

        let stats_first = fetch_stats(&user, &records);
        let _ = emoji_frequency(&user, &records, &ctx);
        let _ = most_common_words(&user, &records, &ctx);
        let stats_again = fetch_stats(&user, &records);
        prop_assert_eq!(stats_first, stats_again);
    }
}
