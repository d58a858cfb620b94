//! HTTP client for the auth/organization engine.

use async_trait::async_trait;
use axum::http::header;
use serde::Deserialize;
use serde_json::json;

use super::{AuthUser, Invitation, Organization, SessionInfo, Team, TeamMember};

#[derive(Debug, thiserror::Error)]
pub enum AuthClientError {
    #[error("auth engine request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("auth engine returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Engine operations the backend depends on. Mocked in service tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn get_session(&self, cookie: &str) -> Result<Option<SessionInfo>, AuthClientError>;

    async fn check_organization_slug(&self, slug: &str) -> Result<bool, AuthClientError>;

    async fn create_organization(
        &self,
        cookie: &str,
        name: &str,
        slug: &str,
    ) -> Result<Organization, AuthClientError>;

    async fn set_active_organization(
        &self,
        cookie: &str,
        organization_id: &str,
    ) -> Result<(), AuthClientError>;

    async fn list_organization_teams(
        &self,
        cookie: &str,
        organization_id: &str,
    ) -> Result<Vec<Team>, AuthClientError>;

    async fn create_team(&self, cookie: &str, name: &str) -> Result<Team, AuthClientError>;

    async fn update_team(
        &self,
        cookie: &str,
        team_id: &str,
        name: &str,
    ) -> Result<Team, AuthClientError>;

    async fn remove_team(&self, cookie: &str, team_id: &str) -> Result<(), AuthClientError>;

    async fn list_team_members(
        &self,
        cookie: &str,
        team_id: &str,
    ) -> Result<Vec<TeamMember>, AuthClientError>;

    async fn remove_team_member(
        &self,
        cookie: &str,
        team_id: &str,
        member_id: &str,
    ) -> Result<(), AuthClientError>;

    async fn invite_member<'a>(
        &self,
        cookie: &str,
        organization_id: &str,
        email: &str,
        role: &str,
        team_id: Option<&'a str>,
    ) -> Result<Invitation, AuthClientError>;

    async fn accept_invitation(
        &self,
        cookie: &str,
        invitation_id: &str,
    ) -> Result<(), AuthClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("laxdb-backend/1.0")
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/auth{}", self.base_url, path)
    }

    async fn post(
        &self,
        cookie: &str,
        path: &str,
        body: serde_json::Value,
    ) -> Result<reqwest::Response, AuthClientError> {
        let response = self
            .http
            .post(self.url(path))
            .header(header::COOKIE.as_str(), cookie)
            .json(&body)
            .send()
            .await?;
        Self::check_status(response).await
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AuthClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(AuthClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetSessionResponse {
    user: AuthUser,
    session: SessionBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionBody {
    #[serde(default)]
    active_organization_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SlugCheckResponse {
    status: bool,
}

#[async_trait]
impl AuthApi for HttpAuthClient {
    async fn get_session(&self, cookie: &str) -> Result<Option<SessionInfo>, AuthClientError> {
        let response = self
            .http
            .get(self.url("/get-session"))
            .header(header::COOKIE.as_str(), cookie)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        // The engine answers `null` for anonymous callers.
        let body: Option<GetSessionResponse> = response.json().await?;
        Ok(body.map(|b| SessionInfo {
            user: b.user,
            active_organization_id: b.session.active_organization_id,
        }))
    }

    async fn check_organization_slug(&self, slug: &str) -> Result<bool, AuthClientError> {
        let response = self
            .post("", "/organization/check-slug", json!({ "slug": slug }))
            .await?;
        let body: SlugCheckResponse = response.json().await?;
        Ok(body.status)
    }

    async fn create_organization(
        &self,
        cookie: &str,
        name: &str,
        slug: &str,
    ) -> Result<Organization, AuthClientError> {
        let response = self
            .post(
                cookie,
                "/organization/create",
                json!({ "name": name, "slug": slug }),
            )
            .await?;
        Ok(response.json().await?)
    }

    async fn set_active_organization(
        &self,
        cookie: &str,
        organization_id: &str,
    ) -> Result<(), AuthClientError> {
        self.post(
            cookie,
            "/organization/set-active",
            json!({ "organizationId": organization_id }),
        )
        .await?;
        Ok(())
    }

    async fn list_organization_teams(
        &self,
        cookie: &str,
        organization_id: &str,
    ) -> Result<Vec<Team>, AuthClientError> {
        let response = self
            .http
            .get(self.url("/organization/list-teams"))
            .header(header::COOKIE.as_str(), cookie)
            .query(&[("organizationId", organization_id)])
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn create_team(&self, cookie: &str, name: &str) -> Result<Team, AuthClientError> {
        let response = self
            .post(cookie, "/organization/create-team", json!({ "name": name }))
            .await?;
        Ok(response.json().await?)
    }

    async fn update_team(
        &self,
        cookie: &str,
        team_id: &str,
        name: &str,
    ) -> Result<Team, AuthClientError> {
        let response = self
            .post(
                cookie,
                "/organization/update-team",
                json!({ "teamId": team_id, "data": { "name": name } }),
            )
            .await?;
        Ok(response.json().await?)
    }

    async fn remove_team(&self, cookie: &str, team_id: &str) -> Result<(), AuthClientError> {
        self.post(
            cookie,
            "/organization/remove-team",
            json!({ "teamId": team_id }),
        )
        .await?;
        Ok(())
    }

    async fn list_team_members(
        &self,
        cookie: &str,
        team_id: &str,
    ) -> Result<Vec<TeamMember>, AuthClientError> {
        let response = self
            .http
            .get(self.url("/organization/list-team-members"))
            .header(header::COOKIE.as_str(), cookie)
            .query(&[("teamId", team_id)])
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn remove_team_member(
        &self,
        cookie: &str,
        team_id: &str,
        member_id: &str,
    ) -> Result<(), AuthClientError> {
        self.post(
            cookie,
            "/organization/remove-team-member",
            json!({ "teamId": team_id, "memberId": member_id }),
        )
        .await?;
        Ok(())
    }

    async fn invite_member<'a>(
        &self,
        cookie: &str,
        organization_id: &str,
        email: &str,
        role: &str,
        team_id: Option<&'a str>,
    ) -> Result<Invitation, AuthClientError> {
        let mut body = json!({
            "organizationId": organization_id,
            "email": email,
            "role": role,
        });
        if let Some(team_id) = team_id {
            body["teamId"] = json!(team_id);
        }
        let response = self
            .post(cookie, "/organization/invite-member", body)
            .await?;
        Ok(response.json().await?)
    }

    async fn accept_invitation(
        &self,
        cookie: &str,
        invitation_id: &str,
    ) -> Result<(), AuthClientError> {
        self.post(
            cookie,
            "/organization/accept-invitation",
            json!({ "invitationId": invitation_id }),
        )
        .await?;
        Ok(())
    }
}
