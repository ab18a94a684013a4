//! Merging and filtering of per-language time records.
//!
//! A freshly scraped snapshot is merged over the previously persisted set:
//! the snapshot value wins for any language present in both (the card
//! reports a rolling window, so times replace rather than accumulate), and
//! languages only known from earlier cycles are kept as-is. The filtered
//! subset of the merge result is what gets persisted and compared between
//! cycles.

use std::collections::BTreeMap;

use crate::duration::Duration;
use crate::models::LanguageRecord;

/// Entries below this are treated as noise and dropped.
pub const MIN_SIGNIFICANT_MINUTES: u64 = 150;

/// The card's catch-all bucket, never tracked as a language of its own.
pub const OTHER_LANGUAGE: &str = "Other";

/// Merge a new snapshot into the existing records. Output is keyed uniquely
/// by language and sorted ascending by language name.
pub fn merge(existing: &[LanguageRecord], incoming: Vec<LanguageRecord>) -> Vec<LanguageRecord> {
    let mut by_language: BTreeMap<String, Duration> = existing
        .iter()
        .map(|record| (record.language.clone(), record.time))
        .collect();

    for record in incoming {
        by_language.insert(record.language, record.time);
    }

    by_language
        .into_iter()
        .map(|(language, time)| LanguageRecord { language, time })
        .collect()
}

/// Keep only records worth tracking: named languages with at least
/// [`MIN_SIGNIFICANT_MINUTES`] on the clock.
pub fn filter(records: Vec<LanguageRecord>) -> Vec<LanguageRecord> {
    records.into_iter().filter(is_significant).collect()
}

pub fn is_significant(record: &LanguageRecord) -> bool {
    record.language != OTHER_LANGUAGE && record.time.minutes() >= MIN_SIGNIFICANT_MINUTES
}

pub fn total_time(records: &[LanguageRecord]) -> Duration {
    records.iter().map(|record| record.time).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(language: &str, minutes: u64) -> LanguageRecord {
        LanguageRecord {
            language: language.to_string(),
            time: Duration::from_minutes(minutes),
        }
    }

    #[test]
    fn merge_replaces_instead_of_accumulating() {
        let existing = vec![record("Rust", 300)];
        let merged = merge(&existing, vec![record("Rust", 200)]);

        assert_eq!(merged, vec![record("Rust", 200)]);
    }

    #[test]
    fn merge_keeps_languages_missing_from_the_snapshot() {
        let existing = vec![record("Go", 180), record("Rust", 300)];
        let merged = merge(&existing, vec![record("Rust", 360)]);

        assert_eq!(merged, vec![record("Go", 180), record("Rust", 360)]);
    }

    #[test]
    fn merge_sorts_by_language_name() {
        let merged = merge(
            &[record("Zig", 200)],
            vec![record("C", 400), record("Python", 300)],
        );

        let names: Vec<&str> = merged.iter().map(|r| r.language.as_str()).collect();
        assert_eq!(names, vec!["C", "Python", "Zig"]);
    }

    #[test]
    fn merge_never_emits_duplicate_languages() {
        let merged = merge(
            &[record("Rust", 100), record("Go", 200)],
            vec![record("Rust", 150), record("Go", 250), record("C", 50)],
        );

        let mut names: Vec<&str> = merged.iter().map(|r| r.language.as_str()).collect();
        names.dedup();
        assert_eq!(names.len(), merged.len());
    }

    #[test]
    fn filter_drops_other_and_insignificant_entries() {
        let filtered = filter(vec![
            record("Other", 900),
            record("Rust", 149),
            record("Go", 150),
        ]);

        assert_eq!(filtered, vec![record("Go", 150)]);
    }

    #[test]
    fn filter_keeps_the_threshold_boundary() {
        // 149 mins is "2 hrs 29 mins", 150 is "2 hrs 30 mins"; only the
        // latter survives.
        assert!(!is_significant(&record("Rust", 149)));
        assert!(is_significant(&record("Rust", 150)));
    }

    #[test]
    fn a_language_dropping_below_threshold_leaves_the_filtered_set() {
        let previous_filtered = vec![record("Rust", 200)];
        let merged = merge(&previous_filtered, vec![record("Rust", 90)]);
        let filtered = filter(merged);

        assert!(filtered.is_empty());
    }

    #[test]
    fn totals_sum_every_record() {
        let records = vec![record("Go", 180), record("Rust", 150)];
        assert_eq!(total_time(&records).minutes(), 330);
        assert_eq!(total_time(&[]).minutes(), 0);
    }
}
