//! Season orchestration.

use chrono::Utc;
use validator::Validate;

use crate::db::session::DbSession;
use crate::error::AppError;
use crate::models::season::{CreateSeasonPayload, Season, SeasonResponse, UpdateSeasonPayload};
use crate::repositories::SeasonRepository;
use crate::types::SeasonId;

#[derive(Debug, Default, Clone, Copy)]
pub struct SeasonService {
    seasons: SeasonRepository,
}

impl SeasonService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(
        &self,
        session: &DbSession,
        organization_id: &str,
        team_id: Option<&str>,
    ) -> Result<Vec<SeasonResponse>, AppError> {
        let seasons = self
            .seasons
            .list_by_organization(session, organization_id, team_id)
            .await?;
        Ok(seasons.into_iter().map(SeasonResponse::from).collect())
    }

    pub async fn get(
        &self,
        session: &DbSession,
        organization_id: &str,
        id: SeasonId,
    ) -> Result<SeasonResponse, AppError> {
        self.seasons
            .find_live_by_id(session, id)
            .await?
            .filter(|s| s.organization_id == organization_id)
            .map(SeasonResponse::from)
            .ok_or_else(|| AppError::NotFound("Season not found".into()))
    }

    pub async fn create(
        &self,
        session: &DbSession,
        organization_id: &str,
        payload: CreateSeasonPayload,
    ) -> Result<SeasonResponse, AppError> {
        payload.validate()?;
        if let Some(end_date) = payload.end_date {
            if end_date < payload.start_date {
                return Err(AppError::BadRequest(
                    "end_date must not be before start_date".into(),
                ));
            }
        }
        let season = Season::new(organization_id.to_string(), payload);
        let created = self.seasons.create(session, &season).await?;
        Ok(SeasonResponse::from(created))
    }

    pub async fn update(
        &self,
        session: &DbSession,
        organization_id: &str,
        id: SeasonId,
        payload: UpdateSeasonPayload,
    ) -> Result<SeasonResponse, AppError> {
        payload.validate()?;
        let repo = self.seasons;
        let organization_id = organization_id.to_owned();

        let updated = session
            .create_transaction(move |tx| {
                Box::pin(async move {
                    let mut season = repo
                        .find_live_by_id(&tx, id)
                        .await?
                        .filter(|s| s.organization_id == organization_id)
                        .ok_or_else(|| AppError::NotFound("Season not found".into()))?;

                    if let Some(name) = payload.name {
                        season.name = name;
                    }
                    if let Some(start_date) = payload.start_date {
                        season.start_date = start_date;
                    }
                    if let Some(end_date) = payload.end_date {
                        season.end_date = Some(end_date);
                    }
                    if let Some(status) = payload.status {
                        season.status = status;
                    }
                    if let Some(division) = payload.division {
                        season.division = Some(division);
                    }
                    if let Some(end_date) = season.end_date {
                        if end_date < season.start_date {
                            return Err(AppError::BadRequest(
                                "end_date must not be before start_date".into(),
                            ));
                        }
                    }
                    season.updated_at = Utc::now();

                    repo.update(&tx, &season).await
                })
            })
            .await?;

        Ok(SeasonResponse::from(updated))
    }

    pub async fn delete(
        &self,
        session: &DbSession,
        organization_id: &str,
        id: SeasonId,
    ) -> Result<(), AppError> {
        let repo = self.seasons;
        let organization_id = organization_id.to_owned();

        session
            .create_transaction(move |tx| {
                Box::pin(async move {
                    repo.find_live_by_id(&tx, id)
                        .await?
                        .filter(|s| s.organization_id == organization_id)
                        .ok_or_else(|| AppError::NotFound("Season not found".into()))?;
                    repo.soft_delete(&tx, id).await?;
                    Ok(())
                })
            })
            .await
    }
}
