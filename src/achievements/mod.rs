use crate::achievements::consts::{ACHIEVEMENTS, EXPLORER_QUEST_COUNT, HOT_STREAK_LENGTH};
use crate::achievements::models::{Achievement, AchievementId};
use crate::players::models::PlayerProfile;

pub mod consts;
pub mod models;

/// Achievements the player has just earned and does not hold yet.
/// Call after the profile's quest counters were updated for the guess.
pub fn newly_unlocked(
    profile: &PlayerProfile,
    guess_was_accurate: bool,
) -> Vec<&'static Achievement> {
    ACHIEVEMENTS
        .iter()
        .filter(|achievement| !profile.has_achievement(achievement.id))
        .filter(|achievement| match achievement.id {
            AchievementId::PerfectAim => guess_was_accurate,
            AchievementId::HotStreak => profile.streak >= HOT_STREAK_LENGTH,
            AchievementId::Explorer => profile.completed_quests >= EXPLORER_QUEST_COUNT,
        })
        .collect()
}
