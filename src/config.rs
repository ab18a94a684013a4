use lazy_static::lazy_static;

use std::env;
use std::path::{Path, PathBuf};

/// Layout inside the data root: the roster of tracked usernames, one state
/// document per user, and the published leaderboard artifacts.
pub const MEMBERS_FILE: &str = "users.json";
pub const USERS_DIR: &str = "users";
pub const LANGUAGES_DIR: &str = "languages";
pub const LANGUAGE_INDEX_FILE: &str = "languages.json";
pub const GLOBAL_LEADERBOARD_FILE: &str = "global_leaderboard.json";

lazy_static! {
    /// Base URL of the rendered stats card; queried per user with
    /// `?username={u}&layout=compact`.
    pub static ref STATS_BASE_URL: String = env::var("WAKALEAD_STATS_URL")
        .unwrap_or_else(|_| "https://github-readme-stats.vercel.app/api/wakatime".to_string());

    /// Upstream leaders endpoint used to seed the membership roster.
    pub static ref LEADERS_URL: String = env::var("WAKALEAD_LEADERS_URL")
        .unwrap_or_else(|_| "https://wakatime.com/api/v1/leaders".to_string());
}

pub fn members_file(data_dir: &Path) -> PathBuf {
    data_dir.join(MEMBERS_FILE)
}

pub fn users_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(USERS_DIR)
}

pub fn languages_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(LANGUAGES_DIR)
}

pub fn language_index_file(data_dir: &Path) -> PathBuf {
    data_dir.join(LANGUAGE_INDEX_FILE)
}

pub fn global_leaderboard_file(data_dir: &Path) -> PathBuf {
    data_dir.join(GLOBAL_LEADERBOARD_FILE)
}
