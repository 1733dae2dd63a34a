//! Thin admin client for the hosted backend (auth, REST, storage endpoints).
//!
//! Only the account-deletion flow talks to these; normal reads and writes go
//! straight from the UI to the hosted backend under row-level security.

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileRow {
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Clone)]
pub struct SupabaseAdmin {
    client: Client,
    base_url: String,
    service_role_key: String,
}

impl SupabaseAdmin {
    pub fn new(base_url: String, service_role_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_role_key,
        }
    }

    /// Resolves the user behind a caller-supplied access token.
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser, AppError> {
        let response = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.service_role_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("auth lookup failed: {e}")))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AppError::Unauthorized),
            status if status.is_success() => response
                .json()
                .await
                .map_err(|e| AppError::Upstream(format!("auth lookup returned bad body: {e}"))),
            status => Err(AppError::Upstream(format!(
                "auth lookup returned {status}"
            ))),
        }
    }

    /// Fetches the user's profile row, if any.
    pub async fn fetch_profile(&self, user_id: &str) -> Result<Option<ProfileRow>, AppError> {
        let response = self
            .client
            .get(format!("{}/rest/v1/profiles", self.base_url))
            .query(&[
                ("id", format!("eq.{user_id}")),
                ("select", "email,avatar_url".to_string()),
            ])
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("profile fetch failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "profile fetch returned {}",
                response.status()
            )));
        }

        let mut rows: Vec<ProfileRow> = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("profile fetch returned bad body: {e}")))?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    /// Removes a stored avatar object.
    pub async fn remove_avatar(&self, object_name: &str) -> Result<(), AppError> {
        let response = self
            .client
            .delete(format!(
                "{}/storage/v1/object/avatars/avatars/{object_name}",
                self.base_url
            ))
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("avatar removal failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "avatar removal returned {}",
                response.status()
            )));
        }
        Ok(())
    }

    /// Deletes the user's profile row. The schema cascades this to their
    /// lists, people, and saved gifts.
    pub async fn delete_profile(&self, user_id: &str) -> Result<(), AppError> {
        let response = self
            .client
            .delete(format!("{}/rest/v1/profiles", self.base_url))
            .query(&[("id", format!("eq.{user_id}"))])
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("profile deletion failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "profile deletion returned {}",
                response.status()
            )));
        }
        Ok(())
    }

    /// Deletes the auth user through the admin endpoint.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), AppError> {
        let response = self
            .client
            .delete(format!("{}/auth/v1/admin/users/{user_id}", self.base_url))
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("user deletion failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "user deletion returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}
