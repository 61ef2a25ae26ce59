use crate::app_context::{AppContext, RequestContext};
use crate::imagery::ImageryProvider;
use crate::players::consts::MAX_PLAYER_NAME_LENGTH;
use crate::sessions::responses::{
    AbandonSessionResponse, CreateSessionResponse, SessionAbandonmentError, SessionCreationError,
};
use crate::storage::interface::ISessionStorage;
use unicode_segmentation::UnicodeSegmentation;

pub struct CreateSessionHttpHandler<SS: ISessionStorage, IM: ImageryProvider> {
    app_context: AppContext<SS, IM>,
}

impl<SS, IM> CreateSessionHttpHandler<SS, IM>
where
    SS: ISessionStorage,
    IM: ImageryProvider,
{
    pub fn new(app_context: AppContext<SS, IM>) -> Self {
        Self { app_context }
    }

    pub async fn create(&self, player_name: Option<String>) -> CreateSessionResponse {
        if let Some(name) = &player_name {
            if name.graphemes(true).count() > MAX_PLAYER_NAME_LENGTH {
                return CreateSessionResponse {
                    error: true,
                    error_code: Some(SessionCreationError::PlayerNameTooLong),
                    session_id: None,
                };
            }
        }
        let session_id = self.app_context.sessions.create(player_name).await;
        tracing::info!("Created game session {session_id}.");
        CreateSessionResponse {
            error: false,
            error_code: None,
            session_id: Some(session_id),
        }
    }
}

pub struct SessionsHttpHandler<'a, SS: ISessionStorage, IM: ImageryProvider> {
    app_context: AppContext<SS, IM>,
    request_context: &'a RequestContext,
}

impl<'a, SS, IM> SessionsHttpHandler<'a, SS, IM>
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

    pub async fn abandon(&self) -> AbandonSessionResponse {
        let abandoned = self
            .app_context
            .sessions
            .abandon(&self.request_context.session_id)
            .await;
        if !abandoned {
            return AbandonSessionResponse {
                error: true,
                error_code: Some(SessionAbandonmentError::SessionNotFound),
            };
        }
        AbandonSessionResponse {
            error: false,
            error_code: None,
        }
    }
}
