//! Team administration, delegated to the auth/organization engine.

use std::sync::Arc;

use crate::auth::{AuthApi, Invitation, SessionInfo, Team, TeamMember};
use crate::error::AppError;
use crate::services::engine_error;

#[derive(Clone)]
pub struct TeamService {
    auth: Arc<dyn AuthApi>,
}

impl TeamService {
    pub fn new(auth: Arc<dyn AuthApi>) -> Self {
        Self { auth }
    }

    /// Team creation requires an authenticated caller with an active
    /// organization; the engine scopes the new team to it.
    pub async fn create_team(&self, cookie: &str, name: &str) -> Result<Team, AppError> {
        let session = self.require_session(cookie).await?;
        if session.active_organization_id.is_none() {
            return Err(AppError::BadRequest(
                "No active organization found for user".into(),
            ));
        }

        self.auth
            .create_team(cookie, name)
            .await
            .map_err(|e| engine_error(e, "Failed to create team"))
    }

    pub async fn update_team(
        &self,
        cookie: &str,
        team_id: &str,
        name: &str,
    ) -> Result<Team, AppError> {
        self.auth
            .update_team(cookie, team_id, name)
            .await
            .map_err(|e| engine_error(e, "Failed to update team"))
    }

    pub async fn delete_team(&self, cookie: &str, team_id: &str) -> Result<(), AppError> {
        self.auth
            .remove_team(cookie, team_id)
            .await
            .map_err(|e| engine_error(e, "Failed to delete team"))
    }

    pub async fn members(&self, cookie: &str, team_id: &str) -> Result<Vec<TeamMember>, AppError> {
        self.auth
            .list_team_members(cookie, team_id)
            .await
            .map_err(|e| engine_error(e, "Failed to list team members"))
    }

    pub async fn invite_player(
        &self,
        cookie: &str,
        team_id: &str,
        email: &str,
    ) -> Result<Invitation, AppError> {
        let session = self.require_session(cookie).await?;
        let organization_id = session.active_organization_id.ok_or_else(|| {
            AppError::BadRequest("No active organization found for user".into())
        })?;

        self.auth
            .invite_member(cookie, &organization_id, email, "member", Some(team_id))
            .await
            .map_err(|e| engine_error(e, "Failed to invite player"))
    }

    pub async fn remove_member(
        &self,
        cookie: &str,
        team_id: &str,
        member_id: &str,
    ) -> Result<(), AppError> {
        self.auth
            .remove_team_member(cookie, team_id, member_id)
            .await
            .map_err(|e| engine_error(e, "Failed to remove team member"))
    }

    async fn require_session(&self, cookie: &str) -> Result<SessionInfo, AppError> {
        self.auth
            .get_session(cookie)
            .await
            .map_err(|e| engine_error(e, "Failed to get session"))?
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::client::MockAuthApi;
    use crate::auth::AuthUser;

    fn session(active_org: Option<&str>) -> SessionInfo {
        SessionInfo {
            user: AuthUser {
                id: "user_1".to_string(),
                email: "coach@laxdb.local".to_string(),
                name: Some("Coach".to_string()),
            },
            active_organization_id: active_org.map(str::to_owned),
        }
    }

    #[tokio::test]
    async fn create_team_requires_session() {
        let mut mock = MockAuthApi::new();
        mock.expect_get_session().returning(|_| Ok(None));

        let service = TeamService::new(Arc::new(mock));
        let result = service.create_team("cookie", "Varsity").await;

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn create_team_requires_active_organization() {
        let mut mock = MockAuthApi::new();
        mock.expect_get_session()
            .returning(|_| Ok(Some(session(None))));

        let service = TeamService::new(Arc::new(mock));
        let result = service.create_team("cookie", "Varsity").await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn create_team_passes_through_engine_result() {
        let mut mock = MockAuthApi::new();
        mock.expect_get_session()
            .returning(|_| Ok(Some(session(Some("org_1")))));
        mock.expect_create_team().returning(|_, name| {
            Ok(Team {
                id: "team_1".to_string(),
                organization_id: "org_1".to_string(),
                name: name.to_string(),
            })
        });

        let service = TeamService::new(Arc::new(mock));
        let team = service
            .create_team("cookie", "Varsity")
            .await
            .expect("team created");

        assert_eq!(team.name, "Varsity");
    }

    #[tokio::test]
    async fn invite_player_scopes_invitation_to_active_organization() {
        let mut mock = MockAuthApi::new();
        mock.expect_get_session()
            .returning(|_| Ok(Some(session(Some("org_1")))));
        mock.expect_invite_member()
            .returning(|_, organization_id, email, role, team_id| {
                assert_eq!(organization_id, "org_1");
                assert_eq!(email, "middie@laxdb.local");
                assert_eq!(role, "member");
                assert_eq!(team_id, Some("team_1"));
                Ok(Invitation {
                    id: "inv_1".to_string(),
                    organization_id: organization_id.to_string(),
                    email: email.to_string(),
                    status: "pending".to_string(),
                })
            });

        let service = TeamService::new(Arc::new(mock));
        let invitation = service
            .invite_player("cookie", "team_1", "middie@laxdb.local")
            .await
            .expect("invitation sent");

        assert_eq!(invitation.status, "pending");
    }
}
