use crate::map::models::LatLng;
use serde::Serialize;

/// One round of the game: a sampled target the player has to find.
/// The target never changes for the life of the quest.
#[derive(Clone, Debug)]
pub struct Quest {
    pub target: LatLng,
    pub radius_meters: f64,
    pub clue: String,
}

#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessAttempt {
    pub guess: LatLng,
    pub distance_meters: f64,
    pub points_awarded: i64,
}
