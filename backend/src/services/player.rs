//! Player and roster orchestration.

use chrono::Utc;
use validator::Validate;

use crate::db::session::DbSession;
use crate::error::AppError;
use crate::models::contact_info::{PlayerContactInfo, PlayerWithContactInfo, UpsertContactInfoPayload};
use crate::models::player::{
    AddPlayerToTeamPayload, CreatePlayerPayload, Player, PlayerResponse, RosterEntry, TeamPlayer,
    UpdatePlayerPayload, UpdateTeamPlayerPayload,
};
use crate::repositories::{ContactInfoRepository, PlayerRepository};
use crate::types::PlayerId;

#[derive(Debug, Default, Clone, Copy)]
pub struct PlayerService {
    players: PlayerRepository,
    contact_info: ContactInfoRepository,
}

impl PlayerService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(
        &self,
        session: &DbSession,
        organization_id: &str,
    ) -> Result<Vec<PlayerResponse>, AppError> {
        let players = self
            .players
            .list_by_organization(session, organization_id)
            .await?;
        Ok(players.into_iter().map(PlayerResponse::from).collect())
    }

    /// Creates the player row and, when the payload names a team, the roster
    /// membership in the same unit of work. A failed roster insert leaves no
    /// orphaned player behind.
    pub async fn create(
        &self,
        session: &DbSession,
        organization_id: &str,
        payload: CreatePlayerPayload,
    ) -> Result<PlayerResponse, AppError> {
        payload.validate()?;
        let team_id = payload.team_id.clone();
        let player = Player::new(organization_id.to_string(), payload);
        let repo = self.players;

        let created = match team_id {
            Some(team_id) => {
                session
                    .create_transaction(move |tx| {
                        Box::pin(async move {
                            let created = repo.create(&tx, &player).await?;
                            let membership = TeamPlayer::new(team_id, created.id, None, None);
                            repo.add_to_team(&tx, &membership).await?;
                            Ok(created)
                        })
                    })
                    .await?
            }
            None => repo.create(session, &player).await?,
        };

        Ok(PlayerResponse::from(created))
    }

    pub async fn update(
        &self,
        session: &DbSession,
        organization_id: &str,
        id: PlayerId,
        payload: UpdatePlayerPayload,
    ) -> Result<PlayerResponse, AppError> {
        payload.validate()?;
        let repo = self.players;
        let organization_id = organization_id.to_owned();

        let updated = session
            .create_transaction(move |tx| {
                Box::pin(async move {
                    let mut player = repo
                        .find_live_by_id(&tx, id)
                        .await?
                        .filter(|p| p.organization_id == organization_id)
                        .ok_or_else(|| AppError::NotFound("Player not found".into()))?;

                    if let Some(name) = payload.name {
                        player.name = name;
                    }
                    if let Some(email) = payload.email {
                        player.email = Some(email);
                    }
                    if let Some(phone) = payload.phone {
                        player.phone = Some(phone);
                    }
                    if let Some(date_of_birth) = payload.date_of_birth {
                        player.date_of_birth = Some(date_of_birth);
                    }
                    player.updated_at = Utc::now();

                    repo.update(&tx, &player).await
                })
            })
            .await?;

        Ok(PlayerResponse::from(updated))
    }

    pub async fn delete(
        &self,
        session: &DbSession,
        organization_id: &str,
        id: PlayerId,
    ) -> Result<(), AppError> {
        let repo = self.players;
        let organization_id = organization_id.to_owned();

        session
            .create_transaction(move |tx| {
                Box::pin(async move {
                    repo.find_live_by_id(&tx, id)
                        .await?
                        .filter(|p| p.organization_id == organization_id)
                        .ok_or_else(|| AppError::NotFound("Player not found".into()))?;
                    repo.soft_delete(&tx, id).await?;
                    Ok(())
                })
            })
            .await
    }

    pub async fn bulk_delete(
        &self,
        session: &DbSession,
        ids: &[PlayerId],
    ) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Ok(0);
        }
        self.players.bulk_soft_delete(session, ids).await
    }

    pub async fn roster(
        &self,
        session: &DbSession,
        team_id: &str,
    ) -> Result<Vec<RosterEntry>, AppError> {
        self.players.roster(session, team_id).await
    }

    pub async fn add_to_team(
        &self,
        session: &DbSession,
        organization_id: &str,
        team_id: &str,
        payload: AddPlayerToTeamPayload,
    ) -> Result<TeamPlayer, AppError> {
        payload.validate()?;
        let repo = self.players;
        let organization_id = organization_id.to_owned();
        let team_id = team_id.to_owned();

        session
            .create_transaction(move |tx| {
                Box::pin(async move {
                    let player = repo
                        .find_live_by_id(&tx, payload.player_id)
                        .await?
                        .filter(|p| p.organization_id == organization_id)
                        .ok_or_else(|| AppError::NotFound("Player not found".into()))?;

                    let membership = TeamPlayer::new(
                        team_id,
                        player.id,
                        payload.jersey_number,
                        payload.position,
                    );
                    repo.add_to_team(&tx, &membership).await
                })
            })
            .await
    }

    pub async fn update_membership(
        &self,
        session: &DbSession,
        organization_id: &str,
        team_id: &str,
        player_id: PlayerId,
        payload: UpdateTeamPlayerPayload,
    ) -> Result<TeamPlayer, AppError> {
        payload.validate()?;
        let repo = self.players;
        let organization_id = organization_id.to_owned();
        let team_id = team_id.to_owned();

        session
            .create_transaction(move |tx| {
                Box::pin(async move {
                    repo.find_live_by_id(&tx, player_id)
                        .await?
                        .filter(|p| p.organization_id == organization_id)
                        .ok_or_else(|| AppError::NotFound("Player not found".into()))?;

                    let mut membership = repo
                        .find_membership(&tx, &team_id, player_id)
                        .await?
                        .ok_or_else(|| {
                            AppError::NotFound("Player is not on this team".into())
                        })?;

                    if let Some(jersey_number) = payload.jersey_number {
                        membership.jersey_number = Some(jersey_number);
                    }
                    if let Some(position) = payload.position {
                        membership.position = Some(position);
                    }
                    membership.updated_at = Utc::now();

                    repo.update_membership(&tx, &membership).await
                })
            })
            .await
    }

    pub async fn remove_from_team(
        &self,
        session: &DbSession,
        organization_id: &str,
        team_id: &str,
        player_id: PlayerId,
    ) -> Result<(), AppError> {
        let repo = self.players;
        let organization_id = organization_id.to_owned();
        let team_id = team_id.to_owned();

        session
            .create_transaction(move |tx| {
                Box::pin(async move {
                    repo.find_live_by_id(&tx, player_id)
                        .await?
                        .filter(|p| p.organization_id == organization_id)
                        .ok_or_else(|| AppError::NotFound("Player not found".into()))?;
                    repo.remove_from_team(&tx, &team_id, player_id).await?;
                    Ok(())
                })
            })
            .await
    }

    pub async fn bulk_remove_from_team(
        &self,
        session: &DbSession,
        team_id: &str,
        player_ids: &[PlayerId],
    ) -> Result<u64, AppError> {
        if player_ids.is_empty() {
            return Ok(0);
        }
        self.players
            .bulk_remove_from_team(session, team_id, player_ids)
            .await
    }

    pub async fn contact_info(
        &self,
        session: &DbSession,
        organization_id: &str,
        player_id: PlayerId,
    ) -> Result<PlayerWithContactInfo, AppError> {
        let player = self
            .players
            .find_live_by_id(session, player_id)
            .await?
            .filter(|p| p.organization_id == organization_id)
            .ok_or_else(|| AppError::NotFound("Player not found".into()))?;

        self.contact_info
            .player_with_contact_info(session, player.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".into()))
    }

    pub async fn upsert_contact_info(
        &self,
        session: &DbSession,
        organization_id: &str,
        player_id: PlayerId,
        payload: UpsertContactInfoPayload,
    ) -> Result<PlayerContactInfo, AppError> {
        payload.validate()?;
        let players = self.players;
        let contacts = self.contact_info;
        let organization_id = organization_id.to_owned();

        session
            .create_transaction(move |tx| {
                Box::pin(async move {
                    let player = players
                        .find_live_by_id(&tx, player_id)
                        .await?
                        .filter(|p| p.organization_id == organization_id)
                        .ok_or_else(|| AppError::NotFound("Player not found".into()))?;

                    let info = PlayerContactInfo::new(player.id, payload);
                    contacts.upsert(&tx, &info).await
                })
            })
            .await
    }
}
