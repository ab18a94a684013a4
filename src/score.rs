//! The elo update rule, applied once per batch cycle and per user.
//!
//! Each cycle either grows the score by the number of newly started hours
//! or decays it. Decay needs two signals at once: the persisted `updated`
//! flag from the previous cycle must already be false, and the freshly
//! filtered language set must equal the previous one. Because the flag
//! always lags the comparison by one cycle, a user who stops coding keeps
//! their score untouched for one cycle before losing 2 points per cycle,
//! and forcing the flag back to true (the reset maintenance command) buys
//! the whole population one more untouched cycle.

use crate::models::{LanguageRecord, UserState};
use crate::records;

/// Points lost per stagnant cycle once the grace period is over.
pub const DECAY_STEP: u64 = 2;

/// Compute the next persisted state from the previous one and this cycle's
/// merged-and-filtered language set. Pure; callers persist the result.
pub fn advance(previous: &UserState, languages: Vec<LanguageRecord>) -> UserState {
    let total_time = records::total_time(&languages);
    let changed = languages != previous.languages;

    let elo = if !previous.updated && !changed {
        previous.elo.saturating_sub(DECAY_STEP)
    } else {
        // Set changed, or the previous cycle did: award any whole hours
        // gained since then. A reshuffled or shrunken set awards nothing
        // but still counts as a change for the next cycle's decay check.
        let gained = total_time
            .hours_ceil()
            .saturating_sub(previous.total_time.hours_ceil());
        previous.elo + gained
    };

    UserState {
        total_time,
        updated: changed,
        elo,
        languages,
    }
}
