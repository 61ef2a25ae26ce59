use crate::app_context::{AppContext, RequestContext};
use crate::imagery::ImageryProvider;
use crate::map::models::LatLng;
use crate::map::sampler::{self, SampleError};
use crate::quests;
use crate::quests::consts::{
    DEFAULT_QUEST_RADIUS_METERS, HINT_RADIUS_METERS, MAX_QUEST_RADIUS_METERS,
    MIN_QUEST_RADIUS_METERS, SAMPLING_TIMEOUT,
};
use crate::quests::models::Quest;
use crate::quests::responses::{
    GuessSubmissionError, HintError, HintResponse, QuestStartError, RevealError, RevealResponse,
    StartQuestResponse, SubmitGuessResponse, UnlockedAchievement,
};
use crate::scoring::consts::MAX_GUESSES_PER_QUEST;
use crate::storage::interface::ISessionStorage;

pub struct QuestsHttpHandler<'a, SS: ISessionStorage, IM: ImageryProvider> {
    app_context: AppContext<SS, IM>,
    request_context: &'a RequestContext,
}

impl<'a, SS, IM> QuestsHttpHandler<'a, SS, IM>
where
    SS: ISessionStorage,
    IM: ImageryProvider,
{
    pub fn new(app_context: AppContext<SS, IM>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn start_quest(
        &self,
        origin: Option<LatLng>,
        radius_meters: Option<f64>,
    ) -> StartQuestResponse {
        let session_id = &self.request_context.session_id;
        let Some(epoch) = self.app_context.sessions.quest_epoch(session_id).await else {
            return Self::failed_start(QuestStartError::SessionNotFound);
        };
        let Some(origin) = origin else {
            return Self::failed_start(QuestStartError::PositionUnavailable);
        };
        let radius_meters = radius_meters.unwrap_or(DEFAULT_QUEST_RADIUS_METERS);
        if !radius_meters.is_finite()
            || radius_meters < MIN_QUEST_RADIUS_METERS
            || radius_meters > MAX_QUEST_RADIUS_METERS
        {
            return Self::failed_start(QuestStartError::InvalidRadius);
        }
        let sampled = tokio::time::timeout(
            SAMPLING_TIMEOUT,
            sampler::sample_within_radius(origin, radius_meters, |candidate| {
                self.app_context.imagery.has_imagery(candidate)
            }),
        )
        .await;
        let target = match sampled {
            Ok(Ok(target)) => target,
            Ok(Err(SampleError::InvalidOrigin)) => {
                return Self::failed_start(QuestStartError::PositionUnavailable);
            }
            Ok(Err(SampleError::InvalidRadius)) => {
                return Self::failed_start(QuestStartError::InvalidRadius);
            }
            Ok(Err(SampleError::NoValidLocationFound { attempts })) => {
                tracing::warn!("Gave up sampling a quest target after {attempts} attempts.");
                return Self::failed_start(QuestStartError::NoValidLocationFound);
            }
            Err(_elapsed) => {
                tracing::warn!("Quest target sampling timed out.");
                return Self::failed_start(QuestStartError::NoValidLocationFound);
            }
        };
        let quest = Quest {
            target,
            radius_meters,
            clue: quests::random_clue(),
        };
        let clue = quest.clue.clone();
        let radius_meters = quest.radius_meters;
        let installed = self
            .app_context
            .sessions
            .install_quest(session_id, epoch, quest)
            .await;
        if !installed {
            // The session moved on (or was dropped) while sampling was in
            // flight; the sampled target must not be applied to it.
            return Self::failed_start(QuestStartError::SessionAbandoned);
        }
        StartQuestResponse {
            error: false,
            error_code: None,
            clue: Some(clue),
            imagery_url: Some(self.app_context.imagery.imagery_url(target)),
            radius_meters: Some(radius_meters),
            guesses_left: Some(MAX_GUESSES_PER_QUEST),
        }
    }

    pub async fn submit_guess(&self, guess: LatLng) -> SubmitGuessResponse {
        let session_id = &self.request_context.session_id;
        if !guess.is_valid() {
            return Self::failed_guess(GuessSubmissionError::InvalidGuess);
        }
        if !self.app_context.sessions.exists(session_id).await {
            return Self::failed_guess(GuessSubmissionError::SessionNotFound);
        }
        let Some(outcome) = self.app_context.sessions.record_guess(session_id, guess).await else {
            return Self::failed_guess(GuessSubmissionError::NoActiveQuest);
        };
        SubmitGuessResponse {
            error: false,
            error_code: None,
            distance_meters: Some(outcome.distance_meters),
            points_awarded: Some(outcome.points_awarded),
            attempt_number: Some(outcome.attempt_number),
            guesses_left: Some(outcome.guesses_left),
            quest_complete: Some(outcome.quest_complete),
            total_points: Some(outcome.total_points),
            unlocked_achievements: Some(
                outcome
                    .unlocked
                    .iter()
                    .map(|achievement| UnlockedAchievement::from(*achievement))
                    .collect(),
            ),
        }
    }

    pub async fn hint(&self) -> HintResponse {
        let session_id = &self.request_context.session_id;
        if !self.app_context.sessions.exists(session_id).await {
            return HintResponse {
                error: true,
                error_code: Some(HintError::SessionNotFound),
                hint: None,
            };
        }
        match self
            .app_context
            .sessions
            .active_quest_target(session_id)
            .await
        {
            Some(target) => HintResponse {
                error: false,
                error_code: None,
                hint: Some(sampler::random_within_radius(target, HINT_RADIUS_METERS)),
            },
            None => HintResponse {
                error: true,
                error_code: Some(HintError::NoActiveQuest),
                hint: None,
            },
        }
    }

    pub async fn reveal(&self) -> RevealResponse {
        let session_id = &self.request_context.session_id;
        if !self.app_context.sessions.exists(session_id).await {
            return RevealResponse {
                error: true,
                error_code: Some(RevealError::SessionNotFound),
                target: None,
            };
        }
        match self.app_context.sessions.reveal_target(session_id).await {
            Some(target) => RevealResponse {
                error: false,
                error_code: None,
                target: Some(target),
            },
            None => RevealResponse {
                error: true,
                error_code: Some(RevealError::NoQuestToReveal),
                target: None,
            },
        }
    }

    fn failed_start(error_code: QuestStartError) -> StartQuestResponse {
        StartQuestResponse {
            error: true,
            error_code: Some(error_code),
            clue: None,
            imagery_url: None,
            radius_meters: None,
            guesses_left: None,
        }
    }

    fn failed_guess(error_code: GuessSubmissionError) -> SubmitGuessResponse {
        SubmitGuessResponse {
            error: true,
            error_code: Some(error_code),
            distance_meters: None,
            points_awarded: None,
            attempt_number: None,
            guesses_left: None,
            quest_complete: None,
            total_points: None,
            unlocked_achievements: None,
        }
    }
}
