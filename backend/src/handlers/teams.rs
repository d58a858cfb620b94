use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    auth::{CurrentUser, Invitation, Team, TeamMember},
    error::AppError,
    handlers::require_org,
    models::player::{
        AddPlayerToTeamPayload, BulkPlayerIdsPayload, RosterEntry, TeamPlayer,
        UpdateTeamPlayerPayload,
    },
    services::{PlayerService, TeamService},
    state::AppState,
    types::PlayerId,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTeamPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTeamPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct InvitePlayerPayload {
    #[validate(email)]
    pub email: String,
}

pub async fn create_team(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateTeamPayload>,
) -> Result<(StatusCode, Json<Team>), AppError> {
    payload.validate()?;
    let team = TeamService::new(Arc::clone(&state.auth))
        .create_team(&user.cookie, &payload.name)
        .await?;
    Ok((StatusCode::CREATED, Json(team)))
}

pub async fn update_team(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(team_id): Path<String>,
    Json(payload): Json<UpdateTeamPayload>,
) -> Result<Json<Team>, AppError> {
    payload.validate()?;
    let team = TeamService::new(Arc::clone(&state.auth))
        .update_team(&user.cookie, &team_id, &payload.name)
        .await?;
    Ok(Json(team))
}

pub async fn delete_team(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(team_id): Path<String>,
) -> Result<StatusCode, AppError> {
    TeamService::new(Arc::clone(&state.auth))
        .delete_team(&user.cookie, &team_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_team_members(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(team_id): Path<String>,
) -> Result<Json<Vec<TeamMember>>, AppError> {
    let members = TeamService::new(Arc::clone(&state.auth))
        .members(&user.cookie, &team_id)
        .await?;
    Ok(Json(members))
}

pub async fn invite_player(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(team_id): Path<String>,
    Json(payload): Json<InvitePlayerPayload>,
) -> Result<(StatusCode, Json<Invitation>), AppError> {
    payload.validate()?;
    let invitation = TeamService::new(Arc::clone(&state.auth))
        .invite_player(&user.cookie, &team_id, &payload.email)
        .await?;
    Ok((StatusCode::CREATED, Json(invitation)))
}

pub async fn remove_team_member(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((team_id, member_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    TeamService::new(Arc::clone(&state.auth))
        .remove_member(&user.cookie, &team_id, &member_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_roster(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(team_id): Path<String>,
) -> Result<Json<Vec<RosterEntry>>, AppError> {
    require_org(&user)?;
    let roster = PlayerService::new()
        .roster(&state.db.session(), &team_id)
        .await?;
    Ok(Json(roster))
}

pub async fn add_to_roster(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(team_id): Path<String>,
    Json(payload): Json<AddPlayerToTeamPayload>,
) -> Result<(StatusCode, Json<TeamPlayer>), AppError> {
    let organization_id = require_org(&user)?;
    let membership = PlayerService::new()
        .add_to_team(&state.db.session(), organization_id, &team_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(membership)))
}

pub async fn update_roster_member(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((team_id, player_id)): Path<(String, PlayerId)>,
    Json(payload): Json<UpdateTeamPlayerPayload>,
) -> Result<Json<TeamPlayer>, AppError> {
    let organization_id = require_org(&user)?;
    let membership = PlayerService::new()
        .update_membership(
            &state.db.session(),
            organization_id,
            &team_id,
            player_id,
            payload,
        )
        .await?;
    Ok(Json(membership))
}

pub async fn remove_from_roster(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((team_id, player_id)): Path<(String, PlayerId)>,
) -> Result<StatusCode, AppError> {
    let organization_id = require_org(&user)?;
    PlayerService::new()
        .remove_from_team(&state.db.session(), organization_id, &team_id, player_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn bulk_remove_from_roster(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(team_id): Path<String>,
    Json(payload): Json<BulkPlayerIdsPayload>,
) -> Result<Json<Value>, AppError> {
    require_org(&user)?;
    let removed = PlayerService::new()
        .bulk_remove_from_team(&state.db.session(), &team_id, &payload.player_ids)
        .await?;
    Ok(Json(json!({ "removed": removed })))
}
