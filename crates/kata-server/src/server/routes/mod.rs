pub mod login;
pub mod news;
pub mod tickets;
pub mod users;

use crate::server::state::AppState;
use axum::{Router, routing::get, routing::post};
use tower_http::trace::TraceLayer;

/// Query string decoded as ordered key/value pairs, so repeated keys survive.
pub type QueryPairs = Vec<(String, String)>;

/// Returns the value of the first occurrence of `key`, if any.
pub fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Builds the application router.
///
/// `GET /` and `POST /` are aliases for `GET /users` and `POST /login`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(users::get_user_info).post(login::post_login))
        .route("/users", get(users::get_user_info))
        .route("/login", post(login::post_login))
        .route("/news/stats", get(news::get_news_stats))
        .route("/tickets", post(tickets::post_ticket))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
