/// A guess within this distance of the target ends the quest.
pub const COMPLETION_RADIUS_METERS: f64 = 100.0;

pub const MAX_GUESSES_PER_QUEST: usize = 3;

/// Upper distance bound (inclusive) of each tier and the points it awards.
/// Tiers are contiguous; anything beyond the last bound costs `MISS_PENALTY`.
pub const SCORE_TIERS: [(f64, i64); 3] = [(100.0, 3), (200.0, 2), (300.0, 1)];

pub const MISS_PENALTY: i64 = -1;
