use crate::achievements::models::{Achievement, AchievementId};
use crate::players::consts::DEFAULT_PLAYER_NAME;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub name: String,
    pub points: u64,
    pub completed_quests: u64,
    /// Consecutive quests completed within the accuracy radius.
    pub streak: u64,
    pub achievements: Vec<AchievementId>,
}

impl PlayerProfile {
    pub fn new(name: Option<String>) -> Self {
        PlayerProfile {
            name: name.unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string()),
            points: 0,
            completed_quests: 0,
            streak: 0,
            achievements: Vec::new(),
        }
    }

    pub fn change_score(&mut self, amount: i64) {
        if amount >= 0 {
            self.points += amount as u64;
        } else {
            self.points = self.points.saturating_sub(-amount as u64);
        }
    }

    pub fn record_quest_completion(&mut self, accurate: bool) {
        self.completed_quests += 1;
        if accurate {
            self.streak += 1;
        } else {
            self.streak = 0;
        }
    }

    pub fn has_achievement(&self, id: AchievementId) -> bool {
        self.achievements.contains(&id)
    }

    pub fn unlock(&mut self, achievement: &Achievement) {
        self.achievements.push(achievement.id);
        self.change_score(achievement.bonus_points as i64);
    }
}
