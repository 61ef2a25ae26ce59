use consts::{COMPLETION_RADIUS_METERS, MAX_GUESSES_PER_QUEST, MISS_PENALTY, SCORE_TIERS};

pub mod consts;
#[cfg(test)]
pub mod tests;

/// Points awarded for a single guess at the given distance from the target.
pub fn score_for_distance(distance_meters: f64) -> i64 {
    for (max_distance, points) in SCORE_TIERS {
        if distance_meters <= max_distance {
            return points;
        }
    }
    MISS_PENALTY
}

/// A quest ends when a guess lands within the completion radius or the
/// player runs out of guesses. `attempt_number` is 1-indexed.
pub fn is_quest_complete(distance_meters: f64, attempt_number: usize) -> bool {
    distance_meters <= COMPLETION_RADIUS_METERS || attempt_number >= MAX_GUESSES_PER_QUEST
}
