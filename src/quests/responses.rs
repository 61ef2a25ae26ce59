use crate::achievements::models::{Achievement, AchievementId};
use crate::map::models::LatLng;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartQuestResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<QuestStartError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagery_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_meters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guesses_left: Option<usize>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestStartError {
    SessionNotFound,
    PositionUnavailable,
    InvalidRadius,
    NoValidLocationFound,
    SessionAbandoned,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GuessSubmissionError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_awarded: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guesses_left: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quest_complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_points: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_achievements: Option<Vec<UnlockedAchievement>>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GuessSubmissionError {
    SessionNotFound,
    NoActiveQuest,
    InvalidGuess,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockedAchievement {
    pub id: AchievementId,
    pub name: String,
    pub description: String,
    pub bonus_points: u64,
}

impl From<&Achievement> for UnlockedAchievement {
    fn from(achievement: &Achievement) -> Self {
        UnlockedAchievement {
            id: achievement.id,
            name: achievement.name.to_string(),
            description: achievement.description.to_string(),
            bonus_points: achievement.bonus_points,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<HintError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<LatLng>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HintError {
    SessionNotFound,
    NoActiveQuest,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<RevealError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<LatLng>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RevealError {
    SessionNotFound,
    NoQuestToReveal,
}
