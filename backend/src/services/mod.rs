//! Domain services.
//!
//! Services validate input, orchestrate repository calls, and wrap engine
//! failures into [`AppError`]s. Anything touching more than one row runs
//! inside the caller's unit of work via `DbSession::create_transaction`.

pub mod feedback;
pub mod game;
pub mod organization;
pub mod player;
pub mod season;
pub mod team;

pub use feedback::FeedbackService;
pub use game::GameService;
pub use organization::OrganizationService;
pub use player::PlayerService;
pub use season::SeasonService;
pub use team::TeamService;

use crate::auth::AuthClientError;
use crate::error::AppError;

/// Logs the engine failure and surfaces an operator-readable message.
pub(crate) fn engine_error(err: AuthClientError, message: &str) -> AppError {
    tracing::error!(error = %err, "auth engine call failed");
    AppError::AuthEngine(message.to_string())
}
