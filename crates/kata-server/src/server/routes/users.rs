use super::{QueryPairs, first_param};
use crate::server::error::ApiError;
use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};

const USER_ID: &str = "user_id";

/// Looks up a user by the `user_id` query parameter.
///
/// GET /users?user_id=N
///
/// Responds in plain text: the echoed id on success, otherwise `no user_id`
/// (400), `invalid user_id` (400) or `non-existent user_id` (404).
#[tracing::instrument(skip_all)]
pub async fn get_user_info(Query(pairs): Query<QueryPairs>) -> Response {
    match lookup(&pairs) {
        Ok(raw_id) => (StatusCode::OK, raw_id.to_owned()).into_response(),
        Err(e) => {
            tracing::debug!("User lookup refused: {e}");
            e.into_plain_response()
        }
    }
}

fn lookup(pairs: &[(String, String)]) -> Result<&str, ApiError> {
    let raw_id = first_param(pairs, USER_ID).ok_or(ApiError::MissingParam(USER_ID))?;
    let id: i64 = raw_id
        .parse()
        .map_err(|_| ApiError::InvalidParam(USER_ID))?;
    kata::get_record_by_id(id)?;
    Ok(raw_id)
}
