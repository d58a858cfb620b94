//! Boundary to the external auth/organization engine.
//!
//! Accounts, organizations, teams, members, and invitations are owned by a
//! separate service; this module defines the subset of its HTTP API that the
//! backend consumes, plus the request-scoped identity extracted by the auth
//! middleware.

pub mod client;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use client::{AuthApi, AuthClientError, HttpAuthClient};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

/// Resolved session: who is calling and which organization is active.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub user: AuthUser,
    pub active_organization_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub organization_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub team_id: String,
    pub user_id: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: String,
    pub organization_id: String,
    pub email: String,
    pub status: String,
}

/// Identity attached to the request by the auth middleware. Carries the raw
/// cookie header so engine-backed operations can act on the caller's behalf.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub active_organization_id: Option<String>,
    pub cookie: String,
}

impl CurrentUser {
    pub fn from_session(session: SessionInfo, cookie: String) -> Self {
        Self {
            id: session.user.id,
            email: session.user.email,
            name: session.user.name,
            active_organization_id: session.active_organization_id,
            cookie,
        }
    }
}
