use crate::achievements::models::{Achievement, AchievementId};

pub const HOT_STREAK_LENGTH: u64 = 3;
pub const EXPLORER_QUEST_COUNT: u64 = 10;

pub static ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        id: AchievementId::PerfectAim,
        name: "Perfect Aim!",
        description: "Get your first guess within 100 meters",
        bonus_points: 50,
    },
    Achievement {
        id: AchievementId::HotStreak,
        name: "Hot Streak!",
        description: "Get 3 correct guesses in a row",
        bonus_points: 100,
    },
    Achievement {
        id: AchievementId::Explorer,
        name: "Explorer",
        description: "Complete 10 quests",
        bonus_points: 200,
    },
];
