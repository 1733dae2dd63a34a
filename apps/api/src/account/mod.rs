//! Account deletion. Runs with the service-role key because the final step
//! (deleting the auth user) is an admin-only operation on the hosted backend.

pub mod email;
pub mod supabase;

use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DeleteAccountResponse {
    pub message: String,
}

/// DELETE /api/v1/account
///
/// Verifies the caller's session with the hosted backend, removes their
/// avatar and profile row (cascades to lists, people, and saved gifts), then
/// deletes the auth user. Avatar and profile cleanup are best-effort; the
/// auth-user deletion is the step that must succeed. A confirmation email is
/// sent when a mail key is configured and never fails the request.
pub async fn handle_delete_account(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DeleteAccountResponse>, AppError> {
    let token = bearer_token(&headers).ok_or(AppError::Unauthorized)?;

    let user = state.supabase.get_user(token).await?;
    info!("Deleting account for user {}", user.id);

    let profile = match state.supabase.fetch_profile(&user.id).await {
        Ok(profile) => profile,
        Err(e) => {
            warn!("Could not load profile before deletion: {e}");
            None
        }
    };

    if let Some(object_name) = profile
        .as_ref()
        .and_then(|p| p.avatar_url.as_deref())
        .and_then(|url| url.rsplit('/').next())
        .filter(|name| !name.is_empty())
    {
        if let Err(e) = state.supabase.remove_avatar(object_name).await {
            warn!("Avatar removal failed: {e}");
        }
    }

    if let Err(e) = state.supabase.delete_profile(&user.id).await {
        warn!("Profile deletion failed: {e}");
    }

    state.supabase.delete_user(&user.id).await?;
    info!("Auth user {} deleted", user.id);

    let recipient = profile
        .as_ref()
        .and_then(|p| p.email.clone())
        .or(user.email);
    match (&state.mailer, recipient) {
        (Some(mailer), Some(to)) => {
            if let Err(e) = mailer.send_deletion_confirmation(&to).await {
                warn!("Deletion confirmation email failed: {e}");
            }
        }
        _ => info!("Skipping deletion confirmation email"),
    }

    Ok(Json(DeleteAccountResponse {
        message: "Account deleted successfully".to_string(),
    }))
}

/// Pulls the bearer token out of the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc123"),
        );
        assert_eq!(bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes_and_empty_tokens() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwdw=="),
        );
        assert_eq!(bearer_token(&headers), None);

        headers.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_static("Bearer "),
        );
        assert_eq!(bearer_token(&headers), None);
    }
}
