use crate::app_context::AppContext;
use crate::cli::Args;
use crate::imagery::ImageryProvider;
use crate::storage::sessions::HashMapSessionsStorage;
use crate::{health, http::cors, sessions};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new<IM>(args: &Args, app_context: AppContext<HashMapSessionsStorage, IM>) -> Router
where
    IM: ImageryProvider,
{
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let sessions_routes = Router::new()
        .route("/", post(sessions::endpoints::session::create))
        .route(
            "/:session-id/abandon",
            post(sessions::endpoints::session::abandon),
        )
        .route(
            "/:session-id/profile",
            get(sessions::endpoints::profile::profile).post(sessions::endpoints::profile::rename),
        )
        .route(
            "/:session-id/quests",
            post(sessions::endpoints::quest_actions::start_quest),
        )
        .route(
            "/:session-id/guesses",
            post(sessions::endpoints::quest_actions::submit_guess),
        )
        .route(
            "/:session-id/hint",
            get(sessions::endpoints::quest_actions::hint),
        )
        .route(
            "/:session-id/reveal",
            post(sessions::endpoints::quest_actions::reveal),
        );

    Router::new()
        .nest("/health", health_routes)
        .nest("/sessions", sessions_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
