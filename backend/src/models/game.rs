//! Game models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::types::{GameId, SeasonId};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Game {
    pub id: GameId,
    pub organization_id: String,
    pub team_id: String,
    pub season_id: Option<SeasonId>,
    pub opponent_name: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Game {
    pub fn new(organization_id: String, payload: CreateGamePayload) -> Self {
        let now = Utc::now();
        Self {
            id: GameId::new(),
            organization_id,
            team_id: payload.team_id,
            season_id: payload.season_id,
            opponent_name: payload.opponent_name,
            scheduled_at: payload.scheduled_at,
            home_score: None,
            away_score: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGamePayload {
    pub team_id: String,
    #[serde(default)]
    pub season_id: Option<SeasonId>,
    #[validate(length(min = 2, max = 100))]
    pub opponent_name: String,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateGamePayload {
    #[serde(default)]
    #[validate(length(min = 2, max = 100))]
    pub opponent_name: Option<String>,
    #[serde(default)]
    pub season_id: Option<SeasonId>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub home_score: Option<i32>,
    #[serde(default)]
    pub away_score: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GameResponse {
    pub id: GameId,
    pub organization_id: String,
    pub team_id: String,
    pub season_id: Option<SeasonId>,
    pub opponent_name: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Game> for GameResponse {
    fn from(value: Game) -> Self {
        Self {
            id: value.id,
            organization_id: value.organization_id,
            team_id: value.team_id,
            season_id: value.season_id,
            opponent_name: value.opponent_name,
            scheduled_at: value.scheduled_at,
            home_score: value.home_score,
            away_score: value.away_score,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
