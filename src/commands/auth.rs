//! Current-user lookup.
//!
//! The auth client persists its session JSON in localStorage; the access
//! token from it is validated against `/auth/v1/user`.

use serde::Deserialize;
use serde_json::Value;

use market_core::models::Viewer;
use market_core::{MarketError, MarketResult};

use super::{transport, SupabaseBackend};

#[derive(Deserialize)]
struct AuthUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// Access token from a stored session, in either the flat layout or the
/// older `currentSession` wrapper.
pub fn access_token_from_session(json: &str) -> Option<String> {
    let session: Value = serde_json::from_str(json).ok()?;
    let token = session
        .get("access_token")
        .or_else(|| session.get("currentSession")?.get("access_token"))?
        .as_str()?;
    (!token.is_empty()).then(|| token.to_string())
}

pub(super) fn stored_access_token(storage_key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let json = storage.get_item(storage_key).ok()??;
    access_token_from_session(&json)
}

impl SupabaseBackend {
    pub(super) async fn viewer(&self) -> MarketResult<Option<Viewer>> {
        self.config.validate()?;
        let Some(token) = stored_access_token(&self.config.auth_storage_key) else {
            return Ok(None);
        };

        let response = self
            .client
            .get(self.auth_url("user"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;

        // Expired or revoked session: treat as signed out
        if response.status().is_client_error() {
            log::info!("stored session rejected ({})", response.status());
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(MarketError::Http {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let user: AuthUser = response
            .json()
            .await
            .map_err(|e| MarketError::Decode(e.to_string()))?;
        Ok(Some(Viewer {
            id: user.id,
            email: user.email,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_session() {
        let json = r#"{"access_token":"abc","refresh_token":"r","user":{"id":"u"}}"#;
        assert_eq!(access_token_from_session(json).as_deref(), Some("abc"));
    }

    #[test]
    fn test_wrapped_session() {
        let json = r#"{"currentSession":{"access_token":"xyz"},"expiresAt":1}"#;
        assert_eq!(access_token_from_session(json).as_deref(), Some("xyz"));
    }

    #[test]
    fn test_invalid_session() {
        assert_eq!(access_token_from_session("not json"), None);
        assert_eq!(access_token_from_session(r#"{"access_token":""}"#), None);
        assert_eq!(access_token_from_session(r#"{"user":{}}"#), None);
    }
}
