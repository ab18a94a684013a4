//! Scrapes per-user WakaTime stats cards, keeps one JSON document per user
//! with a filtered language/time record and an engagement score, and
//! publishes global and per-language leaderboards from the collection.

pub mod commands;
pub mod config;
pub mod duration;
pub mod error;
pub mod leaderboard;
pub mod members;
pub mod models;
pub mod records;
pub mod score;
pub mod scraper;
pub mod store;

pub use error::{Error, Result};
