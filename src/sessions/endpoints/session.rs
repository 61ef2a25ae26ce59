use crate::app_context::{AppContext, RequestContext};
use crate::imagery::ImageryProvider;
use crate::sessions::handlers::{CreateSessionHttpHandler, SessionsHttpHandler};
use crate::sessions::requests::CreateSessionRequest;
use crate::sessions::responses::{AbandonSessionResponse, CreateSessionResponse};
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::{Path, State};
use axum::response::Json;

pub async fn create<IM>(
    State(app_context): State<AppContext<HashMapSessionsStorage, IM>>,
    Json(request): Json<CreateSessionRequest>,
) -> Json<CreateSessionResponse>
where
    IM: ImageryProvider,
{
    let response = CreateSessionHttpHandler::new(app_context)
        .create(request.player_name)
        .await;
    Json(response)
}

pub async fn abandon<IM>(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage, IM>>,
) -> Json<AbandonSessionResponse>
where
    IM: ImageryProvider,
{
    let request_context = RequestContext { session_id };
    let response = SessionsHttpHandler::new(app_context, &request_context)
        .abandon()
        .await;
    Json(response)
}
