use std::collections::HashMap;

use crate::errors::ChatError;

mod profile;
mod score;

pub use profile::{PopulationSnapshot, UserProfile, load_population};
pub use score::{MISSING_INTEREST_PENALTY, interest_distance};

/// Number of suggestions returned per request
pub const SUGGESTION_COUNT: usize = 5;

/// Compute the suggested friends for `target_id` over a population
/// snapshot, nearest first.
///
/// Every profile in the snapshot is scored against the target with
/// [`interest_distance`] and ranked ascending; ties keep population
/// order. The first-ranked entry is dropped as the target itself (it
/// scores 0 against its own interests) and the next
/// [`SUGGESTION_COUNT`] entries are returned.
pub fn recommend(
    target_id: u64,
    snapshot: &PopulationSnapshot,
) -> Result<Vec<UserProfile>, ChatError> {
    // 1. Index the population by id
    let mut by_id: HashMap<u64, &UserProfile> = HashMap::with_capacity(snapshot.users.len());
    for profile in &snapshot.users {
        by_id.insert(profile.id, profile);
    }

    let target = *by_id
        .get(&target_id)
        .ok_or(ChatError::ProfileNotFound(target_id))?;

    // 2. Score every profile, the target included
    let mut ranked: Vec<(f64, &UserProfile)> = snapshot
        .users
        .iter()
        .map(|candidate| (interest_distance(target, candidate), candidate))
        .collect();

    // 3. Stable sort keeps population order for equal scores
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    // 4. Drop rank 1 (the target) and keep ranks 2..=6
    Ok(ranked
        .into_iter()
        .skip(1)
        .take(SUGGESTION_COUNT)
        .map(|(_, profile)| profile.clone())
        .collect())
}
