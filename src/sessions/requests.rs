use crate::map::models::LatLng;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub player_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartQuestRequest {
    /// The player's current position, as reported by the browser's
    /// geolocation API.
    pub origin: Option<LatLng>,
    pub radius_meters: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenamePlayerRequest {
    pub name: String,
}
