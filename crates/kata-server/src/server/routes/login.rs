use crate::server::{
    error::{ApiError, Message},
    state::AppState,
};
use axum::{Json, body::Bytes, extract::State};
use serde::Deserialize;

/// Login request body. Absent fields decode as empty and are rejected.
///
/// Capitalized and upper-case keys are accepted as well.
#[derive(Debug, Default, Deserialize)]
pub struct LoginCredentials {
    #[serde(default, alias = "Login", alias = "LOGIN")]
    pub login: String,
    #[serde(default, alias = "Password", alias = "PASSWORD")]
    pub password: String,
}

/// Checks a JSON `{"login", "password"}` body against the configured
/// credentials.
///
/// POST /login
///
/// The body is decoded from raw bytes, so a missing `Content-Type` is not
/// an error. Unknown fields are ignored, and only the first JSON value is
/// read; anything after it is left alone.
#[tracing::instrument(skip_all)]
pub async fn post_login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Message>, ApiError> {
    let first = serde_json::Deserializer::from_slice(&body)
        .into_iter::<LoginCredentials>()
        .next();

    let creds = match first {
        Some(Ok(creds)) => creds,
        Some(Err(e)) => {
            tracing::debug!("Rejecting login body: {e}");
            return Err(ApiError::InvalidBody);
        }
        None => {
            tracing::debug!("Rejecting empty login body");
            return Err(ApiError::InvalidBody);
        }
    };

    if creds.login.is_empty() || creds.password.is_empty() {
        return Err(ApiError::InvalidBody);
    }

    if !state.credentials.matches(&creds.login, &creds.password) {
        tracing::warn!(login = %creds.login, "Invalid credentials");
        return Err(ApiError::InvalidCredentials);
    }

    tracing::info!(login = %creds.login, "Login succeeded");
    Ok(Json(Message::new("successful login!")))
}
