use crate::app_context::{AppContext, RequestContext};
use crate::imagery::ImageryProvider;
use crate::players::handlers::PlayersHttpHandler;
use crate::players::responses::{ProfileResponse, RenamePlayerResponse};
use crate::sessions::requests::RenamePlayerRequest;
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::{Path, State};
use axum::response::Json;

pub async fn profile<IM>(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage, IM>>,
) -> Json<ProfileResponse>
where
    IM: ImageryProvider,
{
    let request_context = RequestContext { session_id };
    let response = PlayersHttpHandler::new(app_context, &request_context)
        .profile()
        .await;
    Json(response)
}

pub async fn rename<IM>(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage, IM>>,
    Json(request): Json<RenamePlayerRequest>,
) -> Json<RenamePlayerResponse>
where
    IM: ImageryProvider,
{
    let request_context = RequestContext { session_id };
    let response = PlayersHttpHandler::new(app_context, &request_context)
        .rename(request.name)
        .await;
    Json(response)
}
