use crate::map::models::LatLng;
use crate::players::models::PlayerProfile;
use crate::quests::models::Quest;
use crate::sessions::models::GuessOutcome;

pub trait ISessionStorage:
    SessionRepo + QuestFlowRepo + ProfileRepo + Clone + Send + Sync + 'static
{
}

pub trait SessionRepo {
    async fn create(&self, player_name: Option<String>) -> String;

    async fn exists(&self, session_id: &str) -> bool;

    async fn abandon(&self, session_id: &str) -> bool;
}

pub trait QuestFlowRepo {
    /// Epoch to capture before sampling a target for this session.
    async fn quest_epoch(&self, session_id: &str) -> Option<u64>;

    /// Installs a sampled quest, unless the session's epoch moved past
    /// `expected_epoch` while sampling was in flight.
    async fn install_quest(&self, session_id: &str, expected_epoch: u64, quest: Quest) -> bool;

    async fn record_guess(&self, session_id: &str, guess: LatLng) -> Option<GuessOutcome>;

    async fn reveal_target(&self, session_id: &str) -> Option<LatLng>;

    async fn active_quest_target(&self, session_id: &str) -> Option<LatLng>;
}

pub trait ProfileRepo {
    async fn profile(&self, session_id: &str) -> Option<PlayerProfile>;

    async fn rename_player(&self, session_id: &str, name: String) -> bool;
}
