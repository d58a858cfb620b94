//! Season models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::types::SeasonId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SeasonStatus {
    #[default]
    Upcoming,
    Active,
    Completed,
}

impl SeasonStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonStatus::Upcoming => "upcoming",
            SeasonStatus::Active => "active",
            SeasonStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Season {
    pub id: SeasonId,
    pub organization_id: String,
    pub team_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: SeasonStatus,
    pub division: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Season {
    pub fn new(organization_id: String, payload: CreateSeasonPayload) -> Self {
        let now = Utc::now();
        Self {
            id: SeasonId::new(),
            organization_id,
            team_id: payload.team_id,
            name: payload.name,
            start_date: payload.start_date,
            end_date: payload.end_date,
            status: payload.status.unwrap_or_default(),
            division: payload.division,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSeasonPayload {
    pub team_id: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<SeasonStatus>,
    #[serde(default)]
    pub division: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSeasonPayload {
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<SeasonStatus>,
    #[serde(default)]
    pub division: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeasonResponse {
    pub id: SeasonId,
    pub organization_id: String,
    pub team_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: SeasonStatus,
    pub division: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Season> for SeasonResponse {
    fn from(value: Season) -> Self {
        Self {
            id: value.id,
            organization_id: value.organization_id,
            team_id: value.team_id,
            name: value.name,
            start_date: value.start_date,
            end_date: value.end_date,
            status: value.status,
            division: value.division,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_status_defaults_to_upcoming() {
        assert_eq!(SeasonStatus::default().as_str(), "upcoming");
    }
}
