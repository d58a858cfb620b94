//! Player contact-info repository.

use crate::db::session::DbSession;
use crate::error::AppError;
use crate::models::contact_info::{PlayerContactInfo, PlayerWithContactInfo};
use crate::repositories::repository::SoftDeleteEntity;
use crate::types::{ContactInfoId, PlayerId};

const TABLE_NAME: &str = "player_contact_info";
const SELECT_COLUMNS: &str = "id, player_id, email, phone, facebook, instagram, whatsapp, \
     linkedin, groupme, emergency_contact_name, emergency_contact_phone, \
     created_at, updated_at, deleted_at";

impl SoftDeleteEntity for PlayerContactInfo {
    const TABLE: &'static str = TABLE_NAME;
    const SELECT_COLUMNS: &'static str = SELECT_COLUMNS;
    type Id = ContactInfoId;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ContactInfoRepository;

impl ContactInfoRepository {
    pub fn new() -> Self {
        Self
    }

    /// One contact-info row per player; a second write replaces the first.
    pub async fn upsert(
        &self,
        session: &DbSession,
        item: &PlayerContactInfo,
    ) -> Result<PlayerContactInfo, AppError> {
        let item = item.clone();
        let query = format!(
            "INSERT INTO {} (id, player_id, email, phone, facebook, instagram, whatsapp, \
             linkedin, groupme, emergency_contact_name, emergency_contact_phone, \
             created_at, updated_at, deleted_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             ON CONFLICT (player_id) DO UPDATE SET \
             email = EXCLUDED.email, phone = EXCLUDED.phone, \
             facebook = EXCLUDED.facebook, instagram = EXCLUDED.instagram, \
             whatsapp = EXCLUDED.whatsapp, linkedin = EXCLUDED.linkedin, \
             groupme = EXCLUDED.groupme, \
             emergency_contact_name = EXCLUDED.emergency_contact_name, \
             emergency_contact_phone = EXCLUDED.emergency_contact_phone, \
             updated_at = EXCLUDED.updated_at \
             RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    sqlx::query_as::<_, PlayerContactInfo>(&query)
                        .bind(item.id)
                        .bind(item.player_id)
                        .bind(&item.email)
                        .bind(&item.phone)
                        .bind(&item.facebook)
                        .bind(&item.instagram)
                        .bind(&item.whatsapp)
                        .bind(&item.linkedin)
                        .bind(&item.groupme)
                        .bind(&item.emergency_contact_name)
                        .bind(&item.emergency_contact_phone)
                        .bind(item.created_at)
                        .bind(item.updated_at)
                        .bind(item.deleted_at)
                        .fetch_one(&mut *conn)
                        .await
                })
            })
            .await?;
        Ok(row)
    }

    /// Player row left-joined with its contact info; `None` when the player
    /// does not exist or is deleted.
    pub async fn player_with_contact_info(
        &self,
        session: &DbSession,
        player_id: PlayerId,
    ) -> Result<Option<PlayerWithContactInfo>, AppError> {
        let query = format!(
            "SELECT p.id AS player_id, p.name, ci.email, ci.phone, ci.facebook, ci.instagram, \
             ci.whatsapp, ci.linkedin, ci.groupme, ci.emergency_contact_name, \
             ci.emergency_contact_phone \
             FROM players p \
             LEFT JOIN {TABLE_NAME} ci ON ci.player_id = p.id \
             WHERE p.id = $1 AND p.deleted_at IS NULL \
             LIMIT 1"
        );
        let row = session
            .use_transaction(move |conn| {
                Box::pin(async move {
                    sqlx::query_as::<_, PlayerWithContactInfo>(&query)
                        .bind(player_id)
                        .fetch_optional(&mut *conn)
                        .await
                })
            })
            .await?;
        Ok(row)
    }
}
