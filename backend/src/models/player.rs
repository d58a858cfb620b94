//! Player and roster membership models.
//!
//! A player belongs to an organization; roster membership (`TeamPlayer`) ties
//! a player to one of the organization's teams and carries the team-specific
//! attributes (jersey number, position).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::types::{PlayerId, TeamPlayerId};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Player {
    pub id: PlayerId,
    /// Owning organization in the auth engine.
    pub organization_id: String,
    /// Account id in the auth engine, once the player has claimed a login.
    pub user_id: Option<String>,
    pub name: String,
    /// Kept for future invitations.
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Player {
    pub fn new(organization_id: String, payload: CreatePlayerPayload) -> Self {
        let now = Utc::now();
        Self {
            id: PlayerId::new(),
            organization_id,
            user_id: payload.user_id,
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            date_of_birth: payload.date_of_birth,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePlayerPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub user_id: Option<String>,
    /// When set, the new player is rostered on this team in the same unit of
    /// work that creates the row.
    #[serde(default)]
    pub team_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePlayerPayload {
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerResponse {
    pub id: PlayerId,
    pub organization_id: String,
    pub user_id: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Player> for PlayerResponse {
    fn from(value: Player) -> Self {
        Self {
            id: value.id,
            organization_id: value.organization_id,
            user_id: value.user_id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            date_of_birth: value.date_of_birth,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Roster membership row tying a player to a team.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeamPlayer {
    pub id: TeamPlayerId,
    /// Team id in the auth engine.
    pub team_id: String,
    pub player_id: PlayerId,
    pub jersey_number: Option<i32>,
    pub position: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TeamPlayer {
    pub fn new(
        team_id: String,
        player_id: PlayerId,
        jersey_number: Option<i32>,
        position: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TeamPlayerId::new(),
            team_id,
            player_id,
            jersey_number,
            position,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddPlayerToTeamPayload {
    pub player_id: PlayerId,
    #[serde(default)]
    #[validate(range(min = 0, max = 99))]
    pub jersey_number: Option<i32>,
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTeamPlayerPayload {
    #[serde(default)]
    #[validate(range(min = 0, max = 99))]
    pub jersey_number: Option<i32>,
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BulkPlayerIdsPayload {
    pub player_ids: Vec<PlayerId>,
}

/// One entry of a team roster: player joined with the membership row.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct RosterEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub team_id: String,
    pub jersey_number: Option<i32>,
    pub position: Option<String>,
}
