//! One handler per subcommand. Failures on a single user or language never
//! abort a batch; they are logged with the offending name and the run
//! carries on, finishing with exit code 0 as long as the batch itself ran.

use std::path::Path;

use anyhow::Result;
use futures::future;
use tracing::{error, info, warn};

use crate::config;
use crate::leaderboard;
use crate::members;
use crate::models::{LanguageRecord, UserState};
use crate::records;
use crate::score;
use crate::scraper;
use crate::store::UserStore;

/// Scrape every roster member and advance their persisted state.
pub async fn sync(data_dir: &Path) -> Result<()> {
    let store = UserStore::new(config::users_dir(data_dir));
    store.ensure_dir()?;

    let roster = members::load_members(&config::members_file(data_dir))?;
    if roster.is_empty() {
        warn!("Member roster is empty; run the members command first");
        return Ok(());
    }

    // Snapshot fetches go out together; the state transitions below stay
    // strictly one user at a time.
    let snapshots = future::join_all(roster.into_iter().map(|username| async move {
        let fetched = scraper::fetch_language_stats(&username).await;
        (username, fetched)
    }))
    .await;

    let mut processed = 0usize;
    let mut failed = 0usize;

    for (username, fetched) in snapshots {
        let outcome = fetched.and_then(|scraped| process_user(&store, &username, scraped));
        match outcome {
            Ok(state) => {
                processed += 1;
                info!(
                    "Data for {} written to {} (elo {})",
                    username,
                    store.path_for(&username).display(),
                    state.elo
                );
            }
            Err(err) => {
                failed += 1;
                error!("Failed to process {}: {}", username, err);
            }
        }
    }

    info!("Sync finished: {} updated, {} failed", processed, failed);
    Ok(())
}

/// Run one cycle for a single username, creating their document if this is
/// the first observation.
pub async fn add_user(data_dir: &Path, username: &str) -> Result<()> {
    let store = UserStore::new(config::users_dir(data_dir));
    store.ensure_dir()?;

    let scraped = scraper::fetch_language_stats(username).await?;
    let state = process_user(&store, username, scraped)?;

    info!(
        "Data for {} written to {} (elo {})",
        username,
        store.path_for(username).display(),
        state.elo
    );
    Ok(())
}

/// Rebuild the global leaderboard, the per-language boards and the language
/// index from the full document collection.
pub fn aggregate(data_dir: &Path) -> Result<()> {
    leaderboard::aggregate(data_dir)?;
    Ok(())
}

/// Pull the upstream leaders and widen the local roster with them.
pub async fn refresh_members(data_dir: &Path) -> Result<()> {
    let path = config::members_file(data_dir);

    let fetched = members::fetch_leader_usernames().await?;
    if fetched.is_empty() {
        warn!("Upstream returned no usernames; roster left untouched");
        return Ok(());
    }

    let merged = members::merge_usernames(members::load_members(&path)?, fetched);
    members::save_members(&path, &merged)?;

    info!("Roster updated: {} members in {}", merged.len(), path.display());
    Ok(())
}

/// Force `updated = true` on every persisted document, granting the whole
/// population a fresh decay grace period.
pub fn reset_updated(data_dir: &Path) -> Result<()> {
    let store = UserStore::new(config::users_dir(data_dir));

    let mut reset = 0usize;
    for username in store.usernames()? {
        match flag_as_updated(&store, &username) {
            Ok(()) => {
                reset += 1;
                info!("Reset updated flag for {}", username);
            }
            Err(err) => error!("Failed to reset {}: {}", username, err),
        }
    }

    info!("Reset {} documents", reset);
    Ok(())
}

fn flag_as_updated(store: &UserStore, username: &str) -> crate::Result<()> {
    let mut state = store.load(username)?;
    state.updated = true;
    store.save(username, &state)
}

/// One full per-user cycle: previous state in, next state persisted and
/// returned. The scraped snapshot replaces matching languages, the filter
/// trims the merge result, and the score rule produces the next document.
pub fn process_user(
    store: &UserStore,
    username: &str,
    scraped: Vec<LanguageRecord>,
) -> crate::Result<UserState> {
    let previous = store.load(username)?;

    let merged = records::merge(&previous.languages, scraped);
    let filtered = records::filter(merged);
    let next = score::advance(&previous, filtered);

    store.save(username, &next)?;
    Ok(next)
}
