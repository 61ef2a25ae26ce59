use crate::app_context::{AppContext, RequestContext};
use crate::imagery::ImageryProvider;
use crate::map::models::LatLng;
use crate::quests::handlers::QuestsHttpHandler;
use crate::quests::responses::{
    HintResponse, RevealResponse, StartQuestResponse, SubmitGuessResponse,
};
use crate::sessions::requests::StartQuestRequest;
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::{Path, State};
use axum::response::Json;

pub async fn start_quest<IM>(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage, IM>>,
    Json(request): Json<StartQuestRequest>,
) -> Json<StartQuestResponse>
where
    IM: ImageryProvider,
{
    let request_context = RequestContext { session_id };
    let response = QuestsHttpHandler::new(app_context, &request_context)
        .start_quest(request.origin, request.radius_meters)
        .await;
    Json(response)
}

pub async fn submit_guess<IM>(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage, IM>>,
    Json(guess): Json<LatLng>,
) -> Json<SubmitGuessResponse>
where
    IM: ImageryProvider,
{
    let request_context = RequestContext { session_id };
    let response = QuestsHttpHandler::new(app_context, &request_context)
        .submit_guess(guess)
        .await;
    Json(response)
}

pub async fn hint<IM>(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage, IM>>,
) -> Json<HintResponse>
where
    IM: ImageryProvider,
{
    let request_context = RequestContext { session_id };
    let response = QuestsHttpHandler::new(app_context, &request_context)
        .hint()
        .await;
    Json(response)
}

pub async fn reveal<IM>(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage, IM>>,
) -> Json<RevealResponse>
where
    IM: ImageryProvider,
{
    let request_context = RequestContext { session_id };
    let response = QuestsHttpHandler::new(app_context, &request_context)
        .reveal()
        .await;
    Json(response)
}
