//! Player contact information, kept separate from the roster-facing fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::types::{ContactInfoId, PlayerId};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PlayerContactInfo {
    pub id: ContactInfoId,
    pub player_id: PlayerId,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub whatsapp: Option<String>,
    pub linkedin: Option<String>,
    pub groupme: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertContactInfoPayload {
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub groupme: Option<String>,
    #[serde(default)]
    pub emergency_contact_name: Option<String>,
    #[serde(default)]
    pub emergency_contact_phone: Option<String>,
}

impl PlayerContactInfo {
    pub fn new(player_id: PlayerId, payload: UpsertContactInfoPayload) -> Self {
        let now = Utc::now();
        Self {
            id: ContactInfoId::new(),
            player_id,
            email: payload.email,
            phone: payload.phone,
            facebook: payload.facebook,
            instagram: payload.instagram,
            whatsapp: payload.whatsapp,
            linkedin: payload.linkedin,
            groupme: payload.groupme,
            emergency_contact_name: payload.emergency_contact_name,
            emergency_contact_phone: payload.emergency_contact_phone,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

/// Player row left-joined with its contact-info row, if any.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct PlayerWithContactInfo {
    pub player_id: PlayerId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub whatsapp: Option<String>,
    pub linkedin: Option<String>,
    pub groupme: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}
