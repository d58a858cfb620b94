use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    auth::CurrentUser,
    error::AppError,
    services::organization::CreatedOrganization,
    services::OrganizationService,
    state::AppState,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrganizationPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AcceptInvitationPayload {
    #[validate(length(min = 1))]
    pub invitation_id: String,
}

pub async fn create_organization(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateOrganizationPayload>,
) -> Result<(StatusCode, Json<CreatedOrganization>), AppError> {
    payload.validate()?;
    let created = OrganizationService::new(Arc::clone(&state.auth))
        .create_organization(&user.cookie, &payload.name, &payload.slug)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn accept_invitation(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<AcceptInvitationPayload>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;
    OrganizationService::new(Arc::clone(&state.auth))
        .accept_invitation(&user.cookie, &payload.invitation_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
