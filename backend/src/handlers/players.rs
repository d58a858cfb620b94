use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::{
    auth::CurrentUser,
    error::AppError,
    handlers::require_org,
    models::contact_info::{PlayerContactInfo, PlayerWithContactInfo, UpsertContactInfoPayload},
    models::player::{
        BulkPlayerIdsPayload, CreatePlayerPayload, PlayerResponse, UpdatePlayerPayload,
    },
    services::PlayerService,
    state::AppState,
    types::PlayerId,
};

pub async fn list_players(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<PlayerResponse>>, AppError> {
    let organization_id = require_org(&user)?;
    let players = PlayerService::new()
        .list(&state.db.session(), organization_id)
        .await?;
    Ok(Json(players))
}

pub async fn create_player(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreatePlayerPayload>,
) -> Result<(StatusCode, Json<PlayerResponse>), AppError> {
    let organization_id = require_org(&user)?;
    let player = PlayerService::new()
        .create(&state.db.session(), organization_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(player)))
}

pub async fn update_player(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<PlayerId>,
    Json(payload): Json<UpdatePlayerPayload>,
) -> Result<Json<PlayerResponse>, AppError> {
    let organization_id = require_org(&user)?;
    let player = PlayerService::new()
        .update(&state.db.session(), organization_id, id, payload)
        .await?;
    Ok(Json(player))
}

pub async fn delete_player(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<PlayerId>,
) -> Result<StatusCode, AppError> {
    let organization_id = require_org(&user)?;
    PlayerService::new()
        .delete(&state.db.session(), organization_id, id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn bulk_delete_players(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<BulkPlayerIdsPayload>,
) -> Result<Json<Value>, AppError> {
    require_org(&user)?;
    let deleted = PlayerService::new()
        .bulk_delete(&state.db.session(), &payload.player_ids)
        .await?;
    Ok(Json(json!({ "deleted": deleted })))
}

pub async fn get_player_contact_info(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<PlayerId>,
) -> Result<Json<PlayerWithContactInfo>, AppError> {
    let organization_id = require_org(&user)?;
    let info = PlayerService::new()
        .contact_info(&state.db.session(), organization_id, id)
        .await?;
    Ok(Json(info))
}

pub async fn upsert_player_contact_info(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<PlayerId>,
    Json(payload): Json<UpsertContactInfoPayload>,
) -> Result<Json<PlayerContactInfo>, AppError> {
    let organization_id = require_org(&user)?;
    let info = PlayerService::new()
        .upsert_contact_info(&state.db.session(), organization_id, id, payload)
        .await?;
    Ok(Json(info))
}
