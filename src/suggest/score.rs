use crate::suggest::profile::UserProfile;

/// Fixed cost for an interest the target has and the candidate lacks
pub const MISSING_INTEREST_PENALTY: f64 = 100.0;

/// Distance from `target` to `candidate`: the sum of absolute interest
/// level differences over the target's key set, with a fixed penalty for
/// each target interest the candidate lacks.
///
/// Interests only the candidate has contribute nothing, so the measure
/// is not symmetric.
pub fn interest_distance(target: &UserProfile, candidate: &UserProfile) -> f64 {
    let mut score = 0.0;

    for (interest, level) in &target.interests {
        match candidate.interests.get(interest) {
            Some(other) => score += (level - other).abs(),
            None => score += MISSING_INTEREST_PENALTY,
        }
    }

    score
}
