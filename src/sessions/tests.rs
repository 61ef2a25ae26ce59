use crate::achievements::models::AchievementId;
use crate::http::tests::{test_server, test_server_without_imagery};
use crate::map::distance_meters;
use crate::map::models::LatLng;
use crate::map::sampler::sample_within_radius;
use crate::players::responses::{PlayerRenamingError, ProfileResponse, RenamePlayerResponse};
use crate::quests::models::Quest;
use crate::quests::random_clue;
use crate::quests::responses::{
    GuessSubmissionError, HintResponse, QuestStartError, RevealResponse, StartQuestResponse,
    SubmitGuessResponse,
};
use crate::sessions::models::{GameSession, SessionStatus};
use crate::sessions::responses::CreateSessionResponse;
use crate::storage::interface::{QuestFlowRepo, SessionRepo};
use crate::storage::sessions::HashMapSessionsStorage;
use axum_test::TestServer;
use serde_json::json;

fn singapore() -> LatLng {
    LatLng {
        lat: 1.3521,
        lng: 103.8198,
    }
}

fn quest_at(target: LatLng) -> Quest {
    Quest {
        target,
        radius_meters: 15_000.0,
        clue: random_clue(),
    }
}

/// A point roughly `meters` north of `origin`.
fn point_north_of(origin: LatLng, meters: f64) -> LatLng {
    LatLng {
        lat: origin.lat + meters / 111_111.0,
        lng: origin.lng,
    }
}

#[test]
fn test_guessing_without_an_active_quest_is_rejected() {
    let mut session = GameSession::new(None);

    assert!(session.record_guess(singapore()).is_none());
}

#[test]
fn test_accurate_guess_completes_the_quest() {
    let mut session = GameSession::new(None);
    let target = singapore();
    assert!(session.install_quest(session.epoch, quest_at(target)));

    let outcome = session
        .record_guess(target)
        .expect("Guess against an active quest was rejected.");

    assert_eq!(outcome.distance_meters, 0.0);
    assert_eq!(outcome.points_awarded, 3);
    assert!(outcome.quest_complete);
    assert_eq!(outcome.guesses_left, 0);
    assert!(outcome
        .unlocked
        .iter()
        .any(|achievement| achievement.id == AchievementId::PerfectAim));
    // 3 points for the guess plus the Perfect Aim bonus.
    assert_eq!(outcome.total_points, 53);
    assert!(matches!(session.status, SessionStatus::QuestComplete { .. }));
}

#[test]
fn test_near_miss_keeps_the_quest_active() {
    let mut session = GameSession::new(None);
    let target = singapore();
    assert!(session.install_quest(session.epoch, quest_at(target)));

    let outcome = session
        .record_guess(point_north_of(target, 150.0))
        .expect("Guess against an active quest was rejected.");

    assert_eq!(outcome.points_awarded, 2);
    assert!(!outcome.quest_complete);
    assert_eq!(outcome.guesses_left, 2);
    assert!(matches!(session.status, SessionStatus::QuestActive { .. }));
}

#[test]
fn test_third_miss_completes_the_quest() {
    let mut session = GameSession::new(None);
    let target = singapore();
    assert!(session.install_quest(session.epoch, quest_at(target)));
    let far_away = point_north_of(target, 5_000.0);

    for attempt_number in 1..=3 {
        let outcome = session
            .record_guess(far_away)
            .expect("Guess against an active quest was rejected.");
        assert_eq!(outcome.points_awarded, -1);
        assert_eq!(outcome.attempt_number, attempt_number);
        assert_eq!(outcome.quest_complete, attempt_number == 3);
    }

    assert!(matches!(session.status, SessionStatus::QuestComplete { .. }));
    assert_eq!(session.player.completed_quests, 1);
    assert_eq!(session.player.streak, 0);
    // The cumulative score never goes below zero.
    assert_eq!(session.player.points, 0);
    // A completed quest accepts no further guesses.
    assert!(session.record_guess(far_away).is_none());
}

#[test]
fn test_reveal_forfeits_the_active_quest() {
    let mut session = GameSession::new(None);
    let target = singapore();
    assert!(session.install_quest(session.epoch, quest_at(target)));

    let revealed = session.reveal().expect("Reveal returned no target.");

    assert_eq!(revealed, target);
    assert!(matches!(session.status, SessionStatus::QuestComplete { .. }));
    assert_eq!(session.player.completed_quests, 0);
    assert!(session.record_guess(target).is_none());
    // Revealing again just repeats the target.
    assert_eq!(session.reveal(), Some(target));
}

#[test]
fn test_reveal_in_idle_state_returns_nothing() {
    let mut session = GameSession::new(None);

    assert!(session.reveal().is_none());
}

#[test]
fn test_installing_a_quest_with_a_stale_epoch_is_rejected() {
    let mut session = GameSession::new(None);
    let epoch = session.epoch;
    session.abandon();

    assert!(!session.install_quest(epoch, quest_at(singapore())));
    assert!(matches!(session.status, SessionStatus::Idle));
}

#[test]
fn test_streak_of_accurate_quests_unlocks_hot_streak() {
    let mut session = GameSession::new(None);
    let target = singapore();

    for round in 1..=3 {
        assert!(session.install_quest(session.epoch, quest_at(target)));
        let outcome = session
            .record_guess(target)
            .expect("Guess against an active quest was rejected.");
        assert_eq!(session.player.streak, round);
        let unlocked_hot_streak = outcome
            .unlocked
            .iter()
            .any(|achievement| achievement.id == AchievementId::HotStreak);
        assert_eq!(unlocked_hot_streak, round == 3);
    }
}

#[tokio::test]
async fn test_stale_sampling_result_is_discarded_after_abandonment() {
    let storage = HashMapSessionsStorage::default();
    let session_id = storage.create(None).await;
    let epoch = storage
        .quest_epoch(&session_id)
        .await
        .expect("Freshly created session has no epoch.");

    // The player goes back to the menu while sampling is in flight.
    assert!(storage.abandon(&session_id).await);

    assert!(!storage.install_quest(&session_id, epoch, quest_at(singapore())).await);
    assert!(storage.active_quest_target(&session_id).await.is_none());
}

#[tokio::test]
async fn test_quest_round_trip_near_singapore() {
    let origin = singapore();

    let target = sample_within_radius(origin, 15_000.0, |_| async { true })
        .await
        .expect("Sampling with an always-true validator failed.");
    assert!(distance_meters(origin, target) <= 15_150.0);

    let mut session = GameSession::new(None);
    assert!(session.install_quest(session.epoch, quest_at(target)));
    let outcome = session
        .record_guess(target)
        .expect("Guess against an active quest was rejected.");

    assert_eq!(outcome.distance_meters, 0.0);
    assert_eq!(outcome.points_awarded, 3);
    assert!(outcome.quest_complete);
}

async fn create_session(server: &TestServer) -> String {
    let response = server.post("/sessions").json(&json!({})).await;
    response.assert_status_ok();
    let body: CreateSessionResponse = response.json();
    body.session_id.expect("Session creation returned no id.")
}

#[tokio::test]
async fn test_full_quest_flow_over_http() {
    let server = test_server();
    let session_id = create_session(&server).await;

    let response = server
        .post(&format!("/sessions/{session_id}/quests"))
        .json(&json!({
            "origin": {"lat": 1.3521, "lng": 103.8198},
            "radiusMeters": 15000.0,
        }))
        .await;
    response.assert_status_ok();
    let quest: StartQuestResponse = response.json();
    assert!(!quest.error);
    assert!(quest.clue.is_some());
    assert!(quest.imagery_url.is_some());
    assert_eq!(quest.guesses_left, Some(3));

    let response = server.get(&format!("/sessions/{session_id}/hint")).await;
    response.assert_status_ok();
    let hint: HintResponse = response.json();
    assert!(hint.hint.is_some());

    for attempt_number in 1..=3_usize {
        let response = server
            .post(&format!("/sessions/{session_id}/guesses"))
            .json(&json!({"lat": 50.0, "lng": 10.0}))
            .await;
        response.assert_status_ok();
        let guess: SubmitGuessResponse = response.json();
        assert!(!guess.error);
        assert_eq!(guess.points_awarded, Some(-1));
        assert_eq!(guess.attempt_number, Some(attempt_number));
        assert_eq!(guess.quest_complete, Some(attempt_number == 3));
    }

    let response = server.post(&format!("/sessions/{session_id}/reveal")).await;
    response.assert_status_ok();
    let reveal: RevealResponse = response.json();
    let target = reveal.target.expect("Reveal returned no target.");
    assert!(distance_meters(singapore(), target) <= 15_150.0);

    let response = server.get(&format!("/sessions/{session_id}/profile")).await;
    response.assert_status_ok();
    let profile: ProfileResponse = response.json();
    let profile = profile.profile.expect("Profile response had no profile.");
    assert_eq!(profile.completed_quests, 1);
    assert_eq!(profile.points, 0);
}

#[tokio::test]
async fn test_starting_a_quest_requires_an_origin() {
    let server = test_server();
    let session_id = create_session(&server).await;

    let response = server
        .post(&format!("/sessions/{session_id}/quests"))
        .json(&json!({}))
        .await;

    response.assert_status_ok();
    let quest: StartQuestResponse = response.json();
    assert!(quest.error);
    assert_eq!(quest.error_code, Some(QuestStartError::PositionUnavailable));
}

#[tokio::test]
async fn test_starting_a_quest_rejects_an_out_of_range_radius() {
    let server = test_server();
    let session_id = create_session(&server).await;

    for radius_meters in [0.0, -5.0, 100.0, 200_000.0] {
        let response = server
            .post(&format!("/sessions/{session_id}/quests"))
            .json(&json!({
                "origin": {"lat": 1.3521, "lng": 103.8198},
                "radiusMeters": radius_meters,
            }))
            .await;
        response.assert_status_ok();
        let quest: StartQuestResponse = response.json();
        assert_eq!(quest.error_code, Some(QuestStartError::InvalidRadius));
    }
}

#[tokio::test]
async fn test_starting_a_quest_fails_without_imagery_coverage() {
    let server = test_server_without_imagery();
    let session_id = create_session(&server).await;

    let response = server
        .post(&format!("/sessions/{session_id}/quests"))
        .json(&json!({
            "origin": {"lat": 1.3521, "lng": 103.8198},
        }))
        .await;

    response.assert_status_ok();
    let quest: StartQuestResponse = response.json();
    assert_eq!(quest.error_code, Some(QuestStartError::NoValidLocationFound));
}

#[tokio::test]
async fn test_guessing_with_no_active_quest_over_http() {
    let server = test_server();
    let session_id = create_session(&server).await;

    let response = server
        .post(&format!("/sessions/{session_id}/guesses"))
        .json(&json!({"lat": 1.3521, "lng": 103.8198}))
        .await;

    response.assert_status_ok();
    let guess: SubmitGuessResponse = response.json();
    assert_eq!(guess.error_code, Some(GuessSubmissionError::NoActiveQuest));
}

#[tokio::test]
async fn test_guessing_in_an_unknown_session() {
    let server = test_server();

    let response = server
        .post("/sessions/no-such-session/guesses")
        .json(&json!({"lat": 1.3521, "lng": 103.8198}))
        .await;

    response.assert_status_ok();
    let guess: SubmitGuessResponse = response.json();
    assert_eq!(guess.error_code, Some(GuessSubmissionError::SessionNotFound));
}

#[tokio::test]
async fn test_abandoning_a_session_drops_the_active_quest() {
    let server = test_server();
    let session_id = create_session(&server).await;

    let response = server
        .post(&format!("/sessions/{session_id}/quests"))
        .json(&json!({
            "origin": {"lat": 1.3521, "lng": 103.8198},
        }))
        .await;
    response.assert_status_ok();

    let response = server
        .post(&format!("/sessions/{session_id}/abandon"))
        .await;
    response.assert_status_ok();

    let response = server
        .post(&format!("/sessions/{session_id}/guesses"))
        .json(&json!({"lat": 1.3521, "lng": 103.8198}))
        .await;
    response.assert_status_ok();
    let guess: SubmitGuessResponse = response.json();
    assert_eq!(guess.error_code, Some(GuessSubmissionError::NoActiveQuest));
}

#[tokio::test]
async fn test_renaming_the_player() {
    let server = test_server();
    let session_id = create_session(&server).await;

    let response = server
        .post(&format!("/sessions/{session_id}/profile"))
        .json(&json!({"name": "Magellan"}))
        .await;
    response.assert_status_ok();
    let renamed: RenamePlayerResponse = response.json();
    assert!(!renamed.error);

    let response = server.get(&format!("/sessions/{session_id}/profile")).await;
    let profile: ProfileResponse = response.json();
    assert_eq!(
        profile.profile.expect("Profile response had no profile.").name,
        "Magellan",
    );
}

#[tokio::test]
async fn test_renaming_the_player_rejects_an_overlong_name() {
    let server = test_server();
    let session_id = create_session(&server).await;

    let response = server
        .post(&format!("/sessions/{session_id}/profile"))
        .json(&json!({"name": "x".repeat(30)}))
        .await;

    response.assert_status_ok();
    let renamed: RenamePlayerResponse = response.json();
    assert_eq!(renamed.error_code, Some(PlayerRenamingError::NameTooLong));
}
