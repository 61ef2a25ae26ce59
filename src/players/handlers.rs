use crate::app_context::{AppContext, RequestContext};
use crate::imagery::ImageryProvider;
use crate::players::consts::MAX_PLAYER_NAME_LENGTH;
use crate::players::responses::{
    PlayerRenamingError, ProfileError, ProfileResponse, RenamePlayerResponse,
};
use crate::storage::interface::ISessionStorage;
use unicode_segmentation::UnicodeSegmentation;

pub struct PlayersHttpHandler<'a, SS: ISessionStorage, IM: ImageryProvider> {
    app_context: AppContext<SS, IM>,
    request_context: &'a RequestContext,
}

impl<'a, SS, IM> PlayersHttpHandler<'a, SS, IM>
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

    pub async fn profile(&self) -> ProfileResponse {
        match self
            .app_context
            .sessions
            .profile(&self.request_context.session_id)
            .await
        {
            Some(profile) => ProfileResponse {
                error: false,
                error_code: None,
                profile: Some(profile),
            },
            None => ProfileResponse {
                error: true,
                error_code: Some(ProfileError::SessionNotFound),
                profile: None,
            },
        }
    }

    pub async fn rename(&self, name: String) -> RenamePlayerResponse {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Self::failed_rename(PlayerRenamingError::NameEmpty);
        }
        if name.graphemes(true).count() > MAX_PLAYER_NAME_LENGTH {
            tracing::warn!(
                "Rejecting a player rename because the name is too long: \
                {} symbols when at most {} is allowed.",
                name.graphemes(true).count(),
                MAX_PLAYER_NAME_LENGTH,
            );
            return Self::failed_rename(PlayerRenamingError::NameTooLong);
        }
        let renamed = self
            .app_context
            .sessions
            .rename_player(&self.request_context.session_id, name)
            .await;
        if !renamed {
            return Self::failed_rename(PlayerRenamingError::SessionNotFound);
        }
        RenamePlayerResponse {
            error: false,
            error_code: None,
        }
    }

    fn failed_rename(error_code: PlayerRenamingError) -> RenamePlayerResponse {
        RenamePlayerResponse {
            error: true,
            error_code: Some(error_code),
        }
    }
}
