//! Session resolution against the auth/organization engine.
//!
//! The engine owns sessions; this middleware forwards the caller's cookie,
//! resolves the session, and attaches a [`CurrentUser`] to the request.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::{auth::CurrentUser, state::AppState};

fn cookie_header(request: &Request) -> String {
    request
        .headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_default()
}

/// Rejects requests without a valid engine session.
pub async fn auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let cookie = cookie_header(&request);
    if cookie.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let session = state.auth.get_session(&cookie).await.map_err(|err| {
        tracing::error!(error = %err, "session lookup failed");
        StatusCode::UNAUTHORIZED
    })?;
    let Some(session) = session else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    request
        .extensions_mut()
        .insert(CurrentUser::from_session(session, cookie));
    Ok(next.run(request).await)
}

/// Attaches `Option<CurrentUser>` without rejecting anonymous callers.
/// Used by public routes that record the caller when one is present.
pub async fn optional_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let cookie = cookie_header(&request);
    let user = if cookie.is_empty() {
        None
    } else {
        match state.auth.get_session(&cookie).await {
            Ok(Some(session)) => Some(CurrentUser::from_session(session, cookie)),
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "session lookup failed, continuing anonymously");
                None
            }
        }
    };

    request.extensions_mut().insert(user);
    next.run(request).await
}
