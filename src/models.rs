use serde::{Deserialize, Serialize};

use crate::duration::Duration;

/// One language/time pair as scraped from a stats card. `language` is the
/// identity key; no collection in the pipeline holds it twice.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageRecord {
    pub language: String,
    pub time: Duration,
}

/// The persisted per-user document. Field defaults apply when a stored
/// document predates a field or when no document exists yet; a fresh user
/// starts with `updated = true` so their first cycle can never decay.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserState {
    pub total_time: Duration,
    pub updated: bool,
    pub elo: u64,
    pub languages: Vec<LanguageRecord>,
}

impl Default for UserState {
    fn default() -> Self {
        UserState {
            total_time: Duration::ZERO,
            updated: true,
            elo: 0,
            languages: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub username: String,
    pub total_time: Duration,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageLeaderboardEntry {
    pub username: String,
    pub time: Duration,
}

// Payload shapes for the upstream leaders endpoint. Rows occasionally omit
// the user block entirely, so everything below the top level is optional.

#[derive(Clone, Debug, Deserialize)]
pub struct LeadersPayload {
    pub data: Vec<LeaderRow>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LeaderRow {
    #[serde(default)]
    pub user: Option<LeaderUser>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LeaderUser {
    #[serde(default)]
    pub username: Option<String>,
}
