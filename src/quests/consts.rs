use std::time::Duration;

pub const DEFAULT_QUEST_RADIUS_METERS: f64 = 15_000.0;
pub const MIN_QUEST_RADIUS_METERS: f64 = 1_000.0;
pub const MAX_QUEST_RADIUS_METERS: f64 = 50_000.0;

/// Hints are drawn around the target, loose enough to not give it away.
pub const HINT_RADIUS_METERS: f64 = 500.0;

/// Wall-clock bound on target sampling, on top of the attempt cap. Each
/// candidate costs one imagery metadata round-trip.
pub const SAMPLING_TIMEOUT: Duration = Duration::from_secs(5);

pub const PLACE_TYPES: [&str; 7] = [
    "restaurant",
    "museum",
    "park",
    "library",
    "cafe",
    "landmark",
    "tourist attraction",
];
