//! Organization administration, delegated to the auth/organization engine.
//!
//! These are thin wrappers: the engine owns the data and enforces membership
//! rules; this service sequences its API calls and translates failures.

use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::{AuthApi, Organization};
use crate::error::AppError;
use crate::services::engine_error;
use crate::validation::rules::validate_slug;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedOrganization {
    pub organization: Organization,
    /// Every new organization starts with one default team.
    pub default_team_id: String,
}

#[derive(Clone)]
pub struct OrganizationService {
    auth: Arc<dyn AuthApi>,
}

impl OrganizationService {
    pub fn new(auth: Arc<dyn AuthApi>) -> Self {
        Self { auth }
    }

    /// Creates an organization, makes it the caller's active one, and
    /// resolves the default team the engine created alongside it.
    pub async fn create_organization(
        &self,
        cookie: &str,
        name: &str,
        slug: &str,
    ) -> Result<CreatedOrganization, AppError> {
        validate_slug(slug).map_err(|_| AppError::BadRequest("Invalid organization slug".into()))?;

        let available = self
            .auth
            .check_organization_slug(slug)
            .await
            .map_err(|e| engine_error(e, "Slug is not available"))?;
        if !available {
            return Err(AppError::Conflict("Slug is not available".into()));
        }

        let organization = self
            .auth
            .create_organization(cookie, name, slug)
            .await
            .map_err(|e| engine_error(e, "Failed to create organization"))?;

        self.auth
            .set_active_organization(cookie, &organization.id)
            .await
            .map_err(|e| engine_error(e, "Organization created but failed to set as active"))?;

        let teams = self
            .auth
            .list_organization_teams(cookie, &organization.id)
            .await
            .map_err(|e| engine_error(e, "Organization created but failed to get default team"))?;

        let team = teams
            .into_iter()
            .find(|t| t.organization_id == organization.id)
            .ok_or_else(|| {
                AppError::AuthEngine("Organization created but no default team found".into())
            })?;

        Ok(CreatedOrganization {
            organization,
            default_team_id: team.id,
        })
    }

    pub async fn accept_invitation(
        &self,
        cookie: &str,
        invitation_id: &str,
    ) -> Result<(), AppError> {
        self.auth
            .accept_invitation(cookie, invitation_id)
            .await
            .map_err(|e| engine_error(e, "Failed to accept invitation"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::client::{AuthClientError, MockAuthApi};
    use crate::auth::Team;

    fn org(id: &str) -> Organization {
        Organization {
            id: id.to_string(),
            name: "Lax Club".to_string(),
            slug: "lax-club".to_string(),
        }
    }

    #[tokio::test]
    async fn create_organization_resolves_default_team() {
        let mut mock = MockAuthApi::new();
        mock.expect_check_organization_slug()
            .returning(|_| Ok(true));
        mock.expect_create_organization()
            .returning(|_, _, _| Ok(org("org_1")));
        mock.expect_set_active_organization()
            .returning(|_, _| Ok(()));
        mock.expect_list_organization_teams().returning(|_, _| {
            Ok(vec![Team {
                id: "team_1".to_string(),
                organization_id: "org_1".to_string(),
                name: "Lax Club".to_string(),
            }])
        });

        let service = OrganizationService::new(Arc::new(mock));
        let created = service
            .create_organization("cookie", "Lax Club", "lax-club")
            .await
            .expect("organization created");

        assert_eq!(created.organization.id, "org_1");
        assert_eq!(created.default_team_id, "team_1");
    }

    #[tokio::test]
    async fn create_organization_rejects_taken_slug() {
        let mut mock = MockAuthApi::new();
        mock.expect_check_organization_slug()
            .returning(|_| Ok(false));

        let service = OrganizationService::new(Arc::new(mock));
        let result = service
            .create_organization("cookie", "Lax Club", "lax-club")
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn create_organization_rejects_bad_slug_without_engine_call() {
        let mock = MockAuthApi::new();
        let service = OrganizationService::new(Arc::new(mock));

        let result = service
            .create_organization("cookie", "Lax Club", "Bad Slug!")
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn create_organization_surfaces_missing_default_team() {
        let mut mock = MockAuthApi::new();
        mock.expect_check_organization_slug()
            .returning(|_| Ok(true));
        mock.expect_create_organization()
            .returning(|_, _, _| Ok(org("org_1")));
        mock.expect_set_active_organization()
            .returning(|_, _| Ok(()));
        mock.expect_list_organization_teams()
            .returning(|_, _| Ok(Vec::new()));

        let service = OrganizationService::new(Arc::new(mock));
        let result = service
            .create_organization("cookie", "Lax Club", "lax-club")
            .await;

        assert!(matches!(result, Err(AppError::AuthEngine(_))));
    }

    #[tokio::test]
    async fn accept_invitation_wraps_engine_failure() {
        let mut mock = MockAuthApi::new();
        mock.expect_accept_invitation().returning(|_, _| {
            Err(AuthClientError::Api {
                status: 404,
                message: "unknown invitation".to_string(),
            })
        });

        let service = OrganizationService::new(Arc::new(mock));
        let result = service.accept_invitation("cookie", "inv_1").await;

        assert!(matches!(result, Err(AppError::AuthEngine(_))));
    }
}
