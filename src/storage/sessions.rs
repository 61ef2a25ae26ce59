use crate::map::models::LatLng;
use crate::players::models::PlayerProfile;
use crate::quests::models::Quest;
use crate::sessions::models::{GameSession, GuessOutcome};
use crate::storage::interface::{ISessionStorage, ProfileRepo, QuestFlowRepo, SessionRepo};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct HashMapSessionsStorage {
    storage: Arc<RwLock<HashMap<String, GameSession>>>,
}

impl ISessionStorage for HashMapSessionsStorage {}

impl SessionRepo for HashMapSessionsStorage {
    async fn create(&self, player_name: Option<String>) -> String {
        let session_id = Uuid::new_v4().to_string();
        let session = GameSession::new(player_name);
        self.storage
            .write()
            .await
            .insert(session_id.clone(), session);
        session_id
    }

    async fn exists(&self, session_id: &str) -> bool {
        self.storage.read().await.contains_key(session_id)
    }

    async fn abandon(&self, session_id: &str) -> bool {
        match self.storage.write().await.get_mut(session_id) {
            Some(session) => {
                session.abandon();
                true
            }
            None => false,
        }
    }
}

impl QuestFlowRepo for HashMapSessionsStorage {
    async fn quest_epoch(&self, session_id: &str) -> Option<u64> {
        self.storage
            .read()
            .await
            .get(session_id)
            .map(|session| session.epoch)
    }

    async fn install_quest(&self, session_id: &str, expected_epoch: u64, quest: Quest) -> bool {
        match self.storage.write().await.get_mut(session_id) {
            Some(session) => session.install_quest(expected_epoch, quest),
            None => false,
        }
    }

    async fn record_guess(&self, session_id: &str, guess: LatLng) -> Option<GuessOutcome> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .and_then(|session| session.record_guess(guess))
    }

    async fn reveal_target(&self, session_id: &str) -> Option<LatLng> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .and_then(|session| session.reveal())
    }

    async fn active_quest_target(&self, session_id: &str) -> Option<LatLng> {
        self.storage
            .read()
            .await
            .get(session_id)
            .and_then(|session| session.active_quest_target())
    }
}

impl ProfileRepo for HashMapSessionsStorage {
    async fn profile(&self, session_id: &str) -> Option<PlayerProfile> {
        self.storage
            .read()
            .await
            .get(session_id)
            .map(|session| session.player.clone())
    }

    async fn rename_player(&self, session_id: &str, name: String) -> bool {
        match self.storage.write().await.get_mut(session_id) {
            Some(session) => {
                session.player.name = name;
                true
            }
            None => false,
        }
    }
}
