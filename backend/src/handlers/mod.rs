pub mod feedback;
pub mod games;
pub mod health;
pub mod organizations;
pub mod players;
pub mod seasons;
pub mod teams;

use crate::auth::CurrentUser;
use crate::error::AppError;

/// Every tenant-scoped route needs the caller's active organization; members
/// who have not selected one get a 400 rather than an empty listing.
pub(crate) fn require_org(user: &CurrentUser) -> Result<&str, AppError> {
    user.active_organization_id
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("No active organization selected".into()))
}
