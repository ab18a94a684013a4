//! The membership roster: which usernames the batch tracks.
//!
//! Candidates come from the upstream leaders endpoint and are merged into
//! the persisted roster file. Merging only ever widens the roster; pruning
//! a member is a manual edit of the file.

use std::collections::BTreeSet;
use std::path::Path;

use crate::config::LEADERS_URL;
use crate::error::Result;
use crate::models::LeadersPayload;
use crate::store;

pub async fn fetch_leader_usernames() -> Result<Vec<String>> {
    let payload: LeadersPayload = reqwest::Client::new()
        .get(LEADERS_URL.as_str())
        .header("Accept", "application/json")
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(extract_usernames(payload))
}

/// Rows without a user block or username are dropped, not errors.
pub fn extract_usernames(payload: LeadersPayload) -> Vec<String> {
    payload
        .data
        .into_iter()
        .filter_map(|row| row.user.and_then(|user| user.username))
        .collect()
}

/// Union of the current roster and newly seen names: empty strings dropped,
/// duplicates collapsed, sorted ascending.
pub fn merge_usernames(existing: Vec<String>, incoming: Vec<String>) -> Vec<String> {
    let mut merged: BTreeSet<String> = existing
        .into_iter()
        .filter(|name| !name.is_empty())
        .collect();
    merged.extend(incoming.into_iter().filter(|name| !name.is_empty()));

    merged.into_iter().collect()
}

/// The saved roster, or an empty one when the file does not exist yet.
pub fn load_members(path: &Path) -> Result<Vec<String>> {
    Ok(store::read_json(path)?.unwrap_or_default())
}

pub fn save_members(path: &Path, members: &[String]) -> Result<()> {
    store::write_json(path, &members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn rows_without_a_username_are_skipped() {
        let payload: LeadersPayload = serde_json::from_str(
            r#"{"data": [
                {"user": {"username": "alice"}},
                {"user": {}},
                {},
                {"user": {"username": "bob"}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(extract_usernames(payload), vec!["alice", "bob"]);
    }

    #[test]
    fn merge_dedupes_sorts_and_drops_empty_names() {
        let merged = merge_usernames(
            vec!["carol".to_string(), String::new(), "alice".to_string()],
            vec!["bob".to_string(), "alice".to_string(), String::new()],
        );

        assert_eq!(merged, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn merge_keeps_existing_members_not_seen_upstream() {
        let merged = merge_usernames(
            vec!["veteran".to_string()],
            vec!["newcomer".to_string()],
        );

        assert_eq!(merged, vec!["newcomer", "veteran"]);
    }

    #[test]
    fn missing_roster_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let members = load_members(&dir.path().join("users.json")).unwrap();
        assert!(members.is_empty());
    }

    #[test]
    fn roster_round_trips_through_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");

        let members = vec!["alice".to_string(), "bob".to_string()];
        save_members(&path, &members).unwrap();

        assert_eq!(load_members(&path).unwrap(), members);
    }
}
