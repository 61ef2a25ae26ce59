use crate::achievements;
use crate::achievements::models::Achievement;
use crate::map;
use crate::map::models::LatLng;
use crate::players::models::PlayerProfile;
use crate::quests::models::{GuessAttempt, Quest};
use crate::scoring;
use crate::scoring::consts::{COMPLETION_RADIUS_METERS, MAX_GUESSES_PER_QUEST};

/// One player's game. The status is an explicit state machine instead of
/// a pile of independent flags, so impossible combinations (a revealed
/// target with no quest, a guess with no target) cannot be represented.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub player: PlayerProfile,
    pub status: SessionStatus,
    /// Bumped by every transition that invalidates in-flight target
    /// sampling; a sampling result carrying a stale epoch is discarded.
    pub epoch: u64,
}

#[derive(Clone, Debug)]
pub enum SessionStatus {
    Idle,
    QuestActive {
        quest: Quest,
        attempts: Vec<GuessAttempt>,
    },
    QuestComplete {
        quest: Quest,
        attempts: Vec<GuessAttempt>,
    },
}

pub struct GuessOutcome {
    pub distance_meters: f64,
    pub points_awarded: i64,
    pub attempt_number: usize,
    pub guesses_left: usize,
    pub quest_complete: bool,
    pub unlocked: Vec<&'static Achievement>,
    pub total_points: u64,
}

impl GameSession {
    pub fn new(player_name: Option<String>) -> Self {
        GameSession {
            player: PlayerProfile::new(player_name),
            status: SessionStatus::Idle,
            epoch: 0,
        }
    }

    /// Applies a freshly sampled quest, unless the session moved on while
    /// the sampling was in flight.
    pub fn install_quest(&mut self, expected_epoch: u64, quest: Quest) -> bool {
        if self.epoch != expected_epoch {
            return false;
        }
        self.epoch += 1;
        self.status = SessionStatus::QuestActive {
            quest,
            attempts: Vec::new(),
        };
        true
    }

    /// Records a guess against the active quest. Returns `None` when no
    /// quest is active; a completed quest never accepts another guess.
    pub fn record_guess(&mut self, guess: LatLng) -> Option<GuessOutcome> {
        let SessionStatus::QuestActive { quest, attempts } = &mut self.status else {
            return None;
        };
        let distance_meters = map::distance_meters(guess, quest.target);
        let points_awarded = scoring::score_for_distance(distance_meters);
        attempts.push(GuessAttempt {
            guess,
            distance_meters,
            points_awarded,
        });
        let attempt_number = attempts.len();
        let quest_complete = scoring::is_quest_complete(distance_meters, attempt_number);
        let accurate = distance_meters <= COMPLETION_RADIUS_METERS;
        self.player.change_score(points_awarded);
        let mut unlocked = Vec::new();
        if quest_complete {
            let quest = quest.clone();
            let attempts = std::mem::take(attempts);
            self.status = SessionStatus::QuestComplete { quest, attempts };
            self.epoch += 1;
            self.player.record_quest_completion(accurate);
            unlocked = achievements::newly_unlocked(&self.player, accurate);
            for achievement in &unlocked {
                self.player.unlock(achievement);
            }
        }
        Some(GuessOutcome {
            distance_meters,
            points_awarded,
            attempt_number,
            guesses_left: if quest_complete {
                0
            } else {
                MAX_GUESSES_PER_QUEST - attempt_number
            },
            quest_complete,
            unlocked,
            total_points: self.player.points,
        })
    }

    /// Shows the target. Revealing an active quest forfeits the remaining
    /// guesses and resets the streak; revealing a completed quest just
    /// returns the target again.
    pub fn reveal(&mut self) -> Option<LatLng> {
        match &mut self.status {
            SessionStatus::QuestActive { quest, attempts } => {
                let target = quest.target;
                let quest = quest.clone();
                let attempts = std::mem::take(attempts);
                self.status = SessionStatus::QuestComplete { quest, attempts };
                self.epoch += 1;
                self.player.streak = 0;
                Some(target)
            }
            SessionStatus::QuestComplete { quest, .. } => Some(quest.target),
            SessionStatus::Idle => None,
        }
    }

    /// Back to the menu: drops any quest and invalidates in-flight sampling.
    pub fn abandon(&mut self) {
        self.status = SessionStatus::Idle;
        self.epoch += 1;
    }

    pub fn active_quest_target(&self) -> Option<LatLng> {
        match &self.status {
            SessionStatus::QuestActive { quest, .. } => Some(quest.target),
            _ => None,
        }
    }
}
