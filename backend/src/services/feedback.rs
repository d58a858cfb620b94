//! Feedback intake.
//!
//! Creating feedback is the canonical "write plus notify" flow: the row is
//! inserted inside a unit of work and the email notification is queued with
//! `after_commit`, so it is sent exactly once, only after the insert is
//! durably committed, and never when the transaction rolls back.

use std::sync::Arc;

use validator::Validate;

use crate::auth::CurrentUser;
use crate::db::session::DbSession;
use crate::error::AppError;
use crate::models::feedback::{CreateFeedbackPayload, Feedback, FeedbackResponse};
use crate::repositories::FeedbackRepository;
use crate::utils::email::EmailService;
use crate::validation::rules::validate_rating;

#[derive(Clone)]
pub struct FeedbackService {
    feedback: FeedbackRepository,
    email: Arc<EmailService>,
}

impl FeedbackService {
    pub fn new(email: Arc<EmailService>) -> Self {
        Self {
            feedback: FeedbackRepository::new(),
            email,
        }
    }

    pub async fn create(
        &self,
        session: &DbSession,
        mut payload: CreateFeedbackPayload,
        user: Option<&CurrentUser>,
    ) -> Result<FeedbackResponse, AppError> {
        payload.validate()?;
        validate_rating(&payload.rating)
            .map_err(|_| AppError::BadRequest("Unknown rating value".into()))?;

        if payload.user_email.is_none() {
            payload.user_email = user.map(|u| u.email.clone());
        }
        let entry = Feedback::new(payload, user.map(|u| u.id.clone()));

        let repo = self.feedback;
        let email = Arc::clone(&self.email);

        let created = session
            .create_transaction(move |tx| {
                Box::pin(async move {
                    let created = repo.create(&tx, &entry).await?;

                    let notification = created.clone();
                    tx.after_commit(move || async move {
                        email.send_feedback_notification(&notification)
                    })
                    .await?;

                    Ok(created)
                })
            })
            .await?;

        Ok(FeedbackResponse::from(created))
    }
}
