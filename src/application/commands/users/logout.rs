// src/application/commands/users/logout.rs
use super::UserCommandService;
use crate::application::error::ApplicationResult;

impl UserCommandService {
    /// Revoking an unknown token is a no-op; logout never fails for the
    /// caller's lack of a live session.
    pub async fn logout(&self, token: &str) -> ApplicationResult<()> {
        self.session_store.revoke(token).await
    }
}
