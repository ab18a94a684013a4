//! Aggregates the persisted user documents into published leaderboards.
//!
//! Three artifacts: the global ranking by total time, one ranking per
//! language, and the index of sanitized language names. Per-language
//! rankings merge into whatever was published before by username, so a user
//! missing from the current batch keeps their last published entry; the
//! other two artifacts are rebuilt from scratch every run. Re-running over
//! unchanged documents rewrites every file byte-identically.

use std::cmp::Reverse;
use std::fs;
use std::path::Path;

use tracing::{error, info, warn};

use crate::config;
use crate::error::Result;
use crate::models::{LanguageLeaderboardEntry, LeaderboardEntry};
use crate::records;
use crate::store::{read_json, write_json, UserStore};

/// Language names double as file names; spaces and slashes give way to
/// underscores ("HTML/CSS" -> "HTML_CSS").
pub fn sanitize_language(name: &str) -> String {
    name.replace(' ', "_").replace('/', "_")
}

/// Rebuild all three artifacts under the data root.
pub fn aggregate(data_dir: &Path) -> Result<()> {
    let store = UserStore::new(config::users_dir(data_dir));

    let global = build_global_leaderboard(&store)?;
    let global_path = config::global_leaderboard_file(data_dir);
    write_json(&global_path, &global)?;
    info!("Global leaderboard written to {}", global_path.display());

    let index = publish_language_leaderboards(&store, &config::languages_dir(data_dir))?;
    let index_path = config::language_index_file(data_dir);
    write_json(&index_path, &index)?;
    info!("Language list written to {}", index_path.display());

    Ok(())
}

/// Every user's total time, heaviest first. Users scan in sorted-name order
/// and the sort is stable, so equal totals keep that order.
pub fn build_global_leaderboard(store: &UserStore) -> Result<Vec<LeaderboardEntry>> {
    let mut entries = Vec::new();

    for username in store.usernames()? {
        let state = match store.load(&username) {
            Ok(state) => state,
            Err(err) => {
                warn!("Skipping unreadable document for {}: {}", username, err);
                continue;
            }
        };

        entries.push(LeaderboardEntry {
            username,
            total_time: state.total_time,
        });
    }

    entries.sort_by_key(|entry| Reverse(entry.total_time.minutes()));
    Ok(entries)
}

/// Write one ranking file per observed language and return the sanitized
/// index in first-seen order. A failed bucket is reported and skipped; the
/// rest still publish.
pub fn publish_language_leaderboards(store: &UserStore, languages_dir: &Path) -> Result<Vec<String>> {
    fs::create_dir_all(languages_dir)?;

    let mut index = Vec::new();
    for (language, bucket) in collect_language_buckets(store)? {
        index.push(sanitize_language(&language));

        let path = languages_dir.join(format!("{}.json", sanitize_language(&language)));
        match publish_language_ranking(&path, bucket) {
            Ok(()) => info!("Data for language '{}' written to {}", language, path.display()),
            Err(err) => error!("Failed to publish ranking for '{}': {}", language, err),
        }
    }

    Ok(index)
}

/// Bucket every user's significant entries by raw language name. Buckets
/// appear in first-seen order, users within a bucket in scan order.
fn collect_language_buckets(
    store: &UserStore,
) -> Result<Vec<(String, Vec<LanguageLeaderboardEntry>)>> {
    let mut buckets: Vec<(String, Vec<LanguageLeaderboardEntry>)> = Vec::new();

    for username in store.usernames()? {
        let state = match store.load(&username) {
            Ok(state) => state,
            Err(err) => {
                warn!("Skipping unreadable document for {}: {}", username, err);
                continue;
            }
        };

        for record in &state.languages {
            // Documents written before a threshold change may carry entries
            // the filter would reject today; they stay out of the boards.
            if !records::is_significant(record) {
                continue;
            }

            let entry = LanguageLeaderboardEntry {
                username: username.clone(),
                time: record.time,
            };

            match buckets
                .iter_mut()
                .find(|(language, _)| language == &record.language)
            {
                Some((_, bucket)) => bucket.push(entry),
                None => buckets.push((record.language.clone(), vec![entry])),
            }
        }
    }

    Ok(buckets)
}

fn publish_language_ranking(path: &Path, bucket: Vec<LanguageLeaderboardEntry>) -> Result<()> {
    let existing = read_json(path)?.unwrap_or_default();
    let merged = merge_language_ranking(existing, bucket);
    write_json(path, &merged)
}

/// Merge this run's bucket into the previously published ranking. Incoming
/// entries replace a user's old entry in place; users only present in the
/// published file are retained, since absence from one batch is not
/// evidence they dropped the language. Stable sort, heaviest first.
pub fn merge_language_ranking(
    existing: Vec<LanguageLeaderboardEntry>,
    incoming: Vec<LanguageLeaderboardEntry>,
) -> Vec<LanguageLeaderboardEntry> {
    let mut merged = existing;

    for entry in incoming {
        match merged.iter_mut().find(|slot| slot.username == entry.username) {
            Some(slot) => *slot = entry,
            None => merged.push(entry),
        }
    }

    merged.sort_by_key(|entry| Reverse(entry.time.minutes()));
    merged
}
