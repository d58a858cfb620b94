//! User feedback models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::types::FeedbackId;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Feedback {
    pub id: FeedbackId,
    pub topic: String,
    pub rating: String,
    pub feedback: String,
    pub user_id: Option<String>,
    pub user_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Feedback {
    pub fn new(payload: CreateFeedbackPayload, user_id: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: FeedbackId::new(),
            topic: payload.topic,
            rating: payload.rating,
            feedback: payload.feedback,
            user_id,
            user_email: payload.user_email,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFeedbackPayload {
    #[validate(length(min = 1, max = 100))]
    pub topic: String,
    #[validate(length(min = 1, max = 32))]
    pub rating: String,
    #[validate(length(min = 1, max = 4000))]
    pub feedback: String,
    #[serde(default)]
    #[validate(email)]
    pub user_email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedbackResponse {
    pub id: FeedbackId,
    pub topic: String,
    pub rating: String,
    pub feedback: String,
    pub user_id: Option<String>,
    pub user_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Feedback> for FeedbackResponse {
    fn from(value: Feedback) -> Self {
        Self {
            id: value.id,
            topic: value.topic,
            rating: value.rating,
            feedback: value.feedback,
            user_id: value.user_id,
            user_email: value.user_email,
            created_at: value.created_at,
        }
    }
}
